//! Runefinder UCD layer.
//!
//! This crate turns the raw records of `UnicodeData.txt` into searchable
//! entries and filters them against a set of query words. It is the part of
//! runefinder that decides *what* matches; locating and caching the file lives
//! in the `cache` crate.
//!
//! ## What we do
//!
//! - Parse one semicolon-delimited record into a [`CodePointEntry`]
//!   (code point, primary name, optional 1.0 alias)
//! - Tokenize names on whitespace and hyphens, folding the alias in and
//!   dropping repeated words ([`tokenize_name`])
//! - Decide whether every query word is present in an entry ([`all_match`])
//! - Stream a whole file and write one line per hit ([`list`])
//!
//! ## Streaming
//!
//! Entries are produced lazily by [`entries`] and dropped as soon as they are
//! matched, so memory stays flat regardless of the file size. Output order is
//! the order of the input stream; `UnicodeData.txt` is sorted by code point,
//! so results come out ascending without any sorting here.
//!
//! ## Example
//!
//! ```rust
//! use ucd::{list, Query};
//!
//! let data = "003D;EQUALS SIGN;Sm;0;ON;;;;;N;;;;;\n\
//!             003F;QUESTION MARK;Po;0;ON;;;;;N;;;;;\n";
//! let mut out = Vec::new();
//! let hits = list(data.as_bytes(), &Query::new(["mark"]), &mut out).unwrap();
//!
//! assert_eq!(hits, 1);
//! assert_eq!(String::from_utf8(out).unwrap(), "U+003F\t?\tQUESTION MARK\n");
//! ```

mod error;
mod list;
mod matcher;
mod record;
mod token;

pub use crate::error::UcdError;
pub use crate::list::{entries, format_hit, list, Entries, Query};
pub use crate::matcher::{all_match, contains};
pub use crate::record::{parse_line, CodePointEntry, ALIAS_FIELD, CODE_POINT_FIELD, NAME_FIELD};
pub use crate::token::{split_words, tokenize_name};
