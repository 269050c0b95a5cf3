//! Core domain models for linerec.
//!
//! The line format (how a record maps to one line of text) and the separator
//! configuration. These are pure models with no I/O dependencies.

pub mod record;
pub mod separators;

pub use record::{LINE_TERMINATOR, Record, join_record, split_record};
pub use separators::{DEFAULT_SEPARATOR, Separators, parse_separator};
