use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::config::CacheConfig;
use crate::error::CacheError;
use crate::fetch::{Fetcher, HttpFetcher};

/// Opens the UCD file at `path`, fetching it over HTTP first when it is missing.
pub fn open_ucd(path: &Path, cfg: &CacheConfig) -> Result<File, CacheError> {
    let fetcher = HttpFetcher::new(cfg.timeout());
    open_ucd_with(path, &cfg.ucd_url, &fetcher)
}

/// Opens the UCD file at `path`, using `fetcher` to fill the cache on a miss.
///
/// Only `NotFound` triggers a fetch; any other open error is returned as is.
/// An existing file is returned without touching the network.
pub fn open_ucd_with(
    path: &Path,
    url: &str,
    fetcher: &dyn Fetcher,
) -> Result<File, CacheError> {
    match File::open(path) {
        Ok(file) => {
            tracing::debug!(path = %path.display(), "ucd cache hit");
            return Ok(file);
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(source) => {
            return Err(CacheError::Open {
                path: path.to_path_buf(),
                source,
            });
        }
    }

    tracing::info!(path = %path.display(), url, "UnicodeData.txt not found, downloading");
    let bytes = download_to_path(path, url, fetcher)?;
    tracing::info!(path = %path.display(), bytes, "ucd download complete");

    File::open(path).map_err(|source| CacheError::Open {
        path: path.to_path_buf(),
        source,
    })
}

/// Downloads `url` into `target` through a sibling temp file renamed on success.
///
/// Parent directories are created as needed. When the fetch or any write
/// fails, the temp file is dropped (and deleted) and `target` is left as it
/// was.
fn download_to_path(target: &Path, url: &str, fetcher: &dyn Fetcher) -> Result<u64, CacheError> {
    let parent = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if !parent.exists() {
        fs::create_dir_all(parent)?;
    }

    let mut staging = NamedTempFile::new_in(parent)?;
    let bytes = fetcher.fetch(url, staging.as_file_mut())?;
    staging.as_file_mut().flush()?;
    staging.as_file().sync_all()?;
    staging.persist(target).map_err(|e| CacheError::Io(e.error))?;

    Ok(bytes)
}
