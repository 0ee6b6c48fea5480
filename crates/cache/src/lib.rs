//! Runefinder cache layer.
//!
//! Decides where `UnicodeData.txt` lives on disk and guarantees it is there
//! before anything reads it.
//!
//! ## What we do
//!
//! - Resolve the file path: an explicit override, otherwise
//!   `<cache dir>/runefinder/UnicodeData.txt` ([`resolve_ucd_path`])
//! - Open the file, and on a cache miss fetch it once from unicode.org
//!   ([`open_ucd`])
//!
//! ## Cache semantics
//!
//! - A file that exists is never re-fetched, however old it is.
//! - Only "not found" counts as a miss. Permission errors and friends are
//!   returned to the caller untouched.
//! - Downloads are written to a temp file in the target directory and renamed
//!   over the target once complete, so an interrupted fetch never leaves a
//!   truncated file that would later pass for a cache hit.
//! - Two processes racing on a cold cache both download; the last rename wins.

mod acquire;
mod config;
mod error;
mod fetch;
mod path;

pub use crate::acquire::{open_ucd, open_ucd_with};
pub use crate::config::{CacheConfig, DEFAULT_UCD_URL};
pub use crate::error::CacheError;
pub use crate::fetch::{Fetcher, HttpFetcher};
pub use crate::path::{default_ucd_path, resolve_ucd_path, CACHE_DIR_NAME, UCD_FILE_NAME};
