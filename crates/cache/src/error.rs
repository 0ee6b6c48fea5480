use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced while locating or fetching the UCD file.
#[derive(Debug, Error)]
pub enum CacheError {
    /// The file exists (or its directory is unusable) but could not be opened.
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The remote fetch failed: transport error or non-success status.
    #[error("download failed: {0}")]
    Download(String),
    /// Low-level IO failures while writing the cache file.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
