use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::path::resolve_ucd_path;

/// Versionless URL of the latest UnicodeData.txt.
pub const DEFAULT_UCD_URL: &str = "https://www.unicode.org/Public/UNIDATA/UnicodeData.txt";

/// Where the UCD file lives and where to fetch it from when it is missing.
///
/// # Example
/// ```no_run
/// use cache::{open_ucd, CacheConfig};
///
/// let cfg = CacheConfig {
///     ucd_path: Some("./data/UnicodeData.txt".into()),
///     ..Default::default()
/// };
///
/// let _file = open_ucd(&cfg.resolve_path(), &cfg).expect("ucd available");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CacheConfig {
    /// Explicit file location. `None` or an empty path selects the default
    /// under the platform cache directory.
    pub ucd_path: Option<PathBuf>,
    /// Remote source fetched on a cache miss.
    pub ucd_url: String,
    /// Overall HTTP timeout for the fetch, in seconds.
    pub timeout_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ucd_path: None,
            ucd_url: DEFAULT_UCD_URL.into(),
            timeout_secs: 30,
        }
    }
}

impl CacheConfig {
    /// The UCD file path this configuration points at.
    pub fn resolve_path(&self) -> PathBuf {
        resolve_ucd_path(self.ucd_path.as_deref())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
