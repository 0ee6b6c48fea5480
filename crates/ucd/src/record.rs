//! Parsing of single `UnicodeData.txt` records.
//!
//! A record is one line of semicolon-separated fields. Only three of them are
//! consumed here:
//!
//! | Index | Content | Example |
//! |-------|---------|---------|
//! | 0 | code point, hex, no prefix | `0027` |
//! | 1 | character name | `APOSTROPHE` |
//! | 10 | Unicode 1.0 name (alias) | `APOSTROPHE-QUOTE` |
//!
//! The alias field is read positionally. Records shorter than eleven fields
//! simply have no alias.

use crate::error::UcdError;
use crate::token::tokenize_name;

/// Index of the hexadecimal code point field.
pub const CODE_POINT_FIELD: usize = 0;
/// Index of the character name field.
pub const NAME_FIELD: usize = 1;
/// Index of the Unicode 1.0 name, used as an alias.
pub const ALIAS_FIELD: usize = 10;

const MAX_CODE_POINT: u32 = 0x10FFFF;

/// One parsed UCD record with its search tokens.
///
/// Entries are built by [`parse_line`] and never change afterwards; the
/// tokens are derived once from the name and alias at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodePointEntry {
    code_point: u32,
    name: String,
    alias: Option<String>,
    tokens: Vec<String>,
}

impl CodePointEntry {
    pub(crate) fn new(code_point: u32, name: String, alias: Option<String>) -> Self {
        let tokens = tokenize_name(&name, alias.as_deref());
        Self {
            code_point,
            name,
            alias,
            tokens,
        }
    }

    pub fn code_point(&self) -> u32 {
        self.code_point
    }

    /// Primary name exactly as recorded in field 1.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// Deduplicated, order-preserving uppercase words of name then alias.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// `NAME` or `NAME (ALIAS)` when an alias is recorded.
    pub fn display_name(&self) -> String {
        match &self.alias {
            Some(alias) => format!("{} ({})", self.name, alias),
            None => self.name.clone(),
        }
    }

    /// The character for this code point, `None` for surrogates.
    pub fn as_char(&self) -> Option<char> {
        char::from_u32(self.code_point)
    }
}

/// Parses one non-blank UCD line.
///
/// Fails when the code point field is empty, not hexadecimal or above
/// U+10FFFF, and when the name field is missing or empty. Blank lines must be
/// filtered out by the caller.
pub fn parse_line(line: &str) -> Result<CodePointEntry, UcdError> {
    let fields: Vec<&str> = line.split(';').collect();

    let raw_code_point = fields[CODE_POINT_FIELD];
    let code_point = u32::from_str_radix(raw_code_point, 16)
        .map_err(|_| UcdError::MalformedCodePoint(raw_code_point.to_string()))?;
    if code_point > MAX_CODE_POINT {
        return Err(UcdError::OutOfRange(code_point));
    }

    let name = match fields.get(NAME_FIELD) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => return Err(UcdError::MissingName(line.to_string())),
    };

    let alias = fields
        .get(ALIAS_FIELD)
        .filter(|alias| !alias.is_empty())
        .map(|alias| alias.to_string());

    Ok(CodePointEntry::new(code_point, name, alias))
}
