use std::io::{self, Write};
use std::time::Duration;

use crate::error::CacheError;

/// Source of the remote UCD bytes.
///
/// [`HttpFetcher`] is what the binary uses; tests plug in fakes to observe
/// whether a fetch happens at all.
pub trait Fetcher {
    /// Streams the body at `url` into `sink`, returning the byte count.
    fn fetch(&self, url: &str, sink: &mut dyn Write) -> Result<u64, CacheError>;
}

/// Blocking HTTP(S) fetcher backed by a `ureq` agent.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    agent: ureq::Agent,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self { agent }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new(Duration::from_secs(30))
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str, sink: &mut dyn Write) -> Result<u64, CacheError> {
        let response = self
            .agent
            .get(url)
            .call()
            .map_err(|e| CacheError::Download(e.to_string()))?;
        if !(200..300).contains(&response.status()) {
            return Err(CacheError::Download(format!(
                "unexpected status {} while fetching {}",
                response.status(),
                url
            )));
        }

        let mut reader = response.into_reader();
        io::copy(&mut reader, sink).map_err(|e| CacheError::Download(e.to_string()))
    }
}
