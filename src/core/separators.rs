//! Separator configuration.
//!
//! Reading and writing use independent separators so that a file written with
//! one delimiter can later be re-read with another.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Separator used when none is configured (horizontal tab).
pub const DEFAULT_SEPARATOR: char = '\t';

/// Read and write separator pair.
///
/// # Examples
///
/// ```
/// use linerec::core::Separators;
///
/// let seps = Separators::uniform(',');
/// assert_eq!(seps.read, ',');
/// assert_eq!(seps.write, ',');
///
/// let seps = Separators::default();
/// assert_eq!(seps.read, '\t');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Separators {
    /// Separator used to split lines on read.
    pub read: char,
    /// Separator used to join fields on write.
    pub write: char,
}

impl Default for Separators {
    fn default() -> Self {
        Self::uniform(DEFAULT_SEPARATOR)
    }
}

impl Separators {
    /// Creates a pair with independent read and write separators.
    #[must_use]
    pub const fn new(read: char, write: char) -> Self {
        Self { read, write }
    }

    /// Creates a pair using the same separator for both directions.
    #[must_use]
    pub const fn uniform(separator: char) -> Self {
        Self::new(separator, separator)
    }

    /// Resolves a pair from optional overrides.
    ///
    /// `both` seeds the two sides, then `read` and `write` override their own
    /// side. Anything left unset falls back to [`DEFAULT_SEPARATOR`].
    #[must_use]
    pub fn resolve(both: Option<char>, read: Option<char>, write: Option<char>) -> Self {
        let base = both.unwrap_or(DEFAULT_SEPARATOR);
        Self::new(read.unwrap_or(base), write.unwrap_or(base))
    }
}

/// Parses a separator from its textual form.
///
/// Accepts a single character, one of the escapes `\t`, `\n`, `\r`, `\\`,
/// `\0`, or the names `tab`, `comma`, `newline`, `pipe`, `semicolon` and
/// `space` (case-insensitive).
///
/// # Errors
///
/// Returns [`Error::InvalidSeparator`] for empty input, unknown escapes or
/// anything longer than one character that is not a known name.
///
/// # Examples
///
/// ```
/// use linerec::core::parse_separator;
///
/// assert_eq!(parse_separator("\\t").unwrap(), '\t');
/// assert_eq!(parse_separator("comma").unwrap(), ',');
/// assert_eq!(parse_separator(";").unwrap(), ';');
/// assert!(parse_separator("ab").is_err());
/// ```
pub fn parse_separator(value: &str) -> Result<char> {
    let invalid = |reason: &str| Error::InvalidSeparator {
        value: value.to_string(),
        reason: reason.to_string(),
    };

    let mut chars = value.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (None, _, _) => return Err(invalid("separator must not be empty")),
        (Some(c), None, _) => return Ok(c),
        (Some('\\'), Some(escape), None) => {
            return match escape {
                't' => Ok('\t'),
                'n' => Ok('\n'),
                'r' => Ok('\r'),
                '0' => Ok('\0'),
                '\\' => Ok('\\'),
                _ => Err(invalid("unknown escape sequence")),
            };
        }
        _ => {}
    }

    match value.to_ascii_lowercase().as_str() {
        "tab" => Ok('\t'),
        "comma" => Ok(','),
        "newline" => Ok('\n'),
        "pipe" => Ok('|'),
        "semicolon" => Ok(';'),
        "space" => Ok(' '),
        _ => Err(invalid("expected a single character, an escape or a separator name")),
    }
}
