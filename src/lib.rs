//! Runefinder: look up Unicode characters by the words in their names.
//!
//! This crate stitches the cache layer (where `UnicodeData.txt` lives, and
//! fetching it once) to the UCD layer (parsing, tokenizing, matching) so
//! callers get a single entry point, [`find`].

pub mod config;

pub use crate::config::{ConfigLoadError, RunefinderConfig, UCD_PATH_ENV, UCD_URL_ENV};
pub use cache::{
    CacheConfig, CacheError, DEFAULT_UCD_URL, Fetcher, HttpFetcher, default_ucd_path, open_ucd,
    open_ucd_with, resolve_ucd_path,
};
pub use ucd::{
    CodePointEntry, Entries, Query, UcdError, all_match, contains, entries, format_hit, list,
    parse_line, split_words, tokenize_name,
};

use std::error::Error;
use std::fmt;
use std::io::{BufReader, Write};

/// Errors that can occur while running a lookup end-to-end.
#[derive(Debug)]
pub enum RunefinderError {
    Config(ConfigLoadError),
    Cache(CacheError),
    Ucd(UcdError),
}

impl fmt::Display for RunefinderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunefinderError::Config(err) => write!(f, "configuration failure: {err}"),
            RunefinderError::Cache(err) => write!(f, "ucd source unavailable: {err}"),
            RunefinderError::Ucd(err) => write!(f, "ucd scan failed: {err}"),
        }
    }
}

impl Error for RunefinderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RunefinderError::Config(err) => Some(err),
            RunefinderError::Cache(err) => Some(err),
            RunefinderError::Ucd(err) => Some(err),
        }
    }
}

impl From<ConfigLoadError> for RunefinderError {
    fn from(value: ConfigLoadError) -> Self {
        RunefinderError::Config(value)
    }
}

impl From<CacheError> for RunefinderError {
    fn from(value: CacheError) -> Self {
        RunefinderError::Cache(value)
    }
}

impl From<UcdError> for RunefinderError {
    fn from(value: UcdError) -> Self {
        RunefinderError::Ucd(value)
    }
}

/// Lists every character whose name contains all of `words`, one line each.
///
/// Resolves the UCD path from `cfg`, opens it (fetching it into the cache on
/// first use), and streams it through [`list`]. Returns the number of hits;
/// zero hits is not an error. The file is closed before returning.
pub fn find<S, W>(
    cfg: &RunefinderConfig,
    words: &[S],
    out: &mut W,
) -> Result<usize, RunefinderError>
where
    S: AsRef<str>,
    W: Write + ?Sized,
{
    let fetcher = HttpFetcher::new(cfg.cache.timeout());
    find_with(cfg, &fetcher, words, out)
}

/// Like [`find`], but fills a cache miss through `fetcher` instead of HTTP.
pub fn find_with<S, W>(
    cfg: &RunefinderConfig,
    fetcher: &dyn Fetcher,
    words: &[S],
    out: &mut W,
) -> Result<usize, RunefinderError>
where
    S: AsRef<str>,
    W: Write + ?Sized,
{
    let query = Query::new(words);
    let path = cfg.cache.resolve_path();
    tracing::debug!(path = %path.display(), query = ?query.words(), "resolved ucd path");

    let file = open_ucd_with(&path, &cfg.cache.ucd_url, fetcher)?;
    let hits = list(BufReader::new(file), &query, out)?;
    Ok(hits)
}
