use std::io;
use thiserror::Error;

/// Errors surfaced while parsing or listing UCD records.
///
/// The UCD file is trusted to be well-formed, so every parse failure is fatal
/// for the current scan: [`list`](crate::list) stops at the first one instead
/// of skipping the record.
#[derive(Debug, Error)]
pub enum UcdError {
    /// Field 0 is empty or not a base-16 number.
    #[error("malformed code point field: {0:?}")]
    MalformedCodePoint(String),
    /// Field 0 decoded to a value above U+10FFFF.
    #[error("code point {0:#X} is beyond the Unicode range")]
    OutOfRange(u32),
    /// The record has no name field, or the name is empty.
    #[error("record has no name: {0:?}")]
    MissingName(String),
    /// A record failure tagged with its 1-based line number in the stream.
    #[error("line {number}: {source}")]
    Line {
        number: usize,
        #[source]
        source: Box<UcdError>,
    },
    /// Reading the stream or writing hits failed.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

impl UcdError {
    pub(crate) fn at_line(self, number: usize) -> Self {
        UcdError::Line {
            number,
            source: Box::new(self),
        }
    }
}
