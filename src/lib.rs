//! # linerec
//!
//! Sequential line-record reader/writer.
//!
//! A record is one line of a text file, split into fields by a single
//! separator character. [`LineRecordStream`] opens a file for reading or
//! writing and moves one record at a time; read and write separators are
//! configured independently so a file can be written with one delimiter and
//! re-read with another.
//!
//! ## Features
//!
//! - **Configurable separators**: tab by default, any single character
//! - **End-of-stream signaling**: `Ok(None)`, distinct from an empty line
//! - **Legacy accessor**: two-field [`LineRecordStream::read_pair`]
//! - **Scoped release**: handles are flushed and closed on drop
//!
//! ```no_run
//! use linerec::{LineRecordStream, Mode};
//!
//! # fn main() -> linerec::Result<()> {
//! let mut stream = LineRecordStream::with_separator(',');
//! stream.open("people.csv", Mode::Read)?;
//! for record in stream.records() {
//!     let fields = record?;
//!     assert!(!fields.is_empty());
//! }
//! # Ok(())
//! # }
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod core;
pub mod error;
pub mod io;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

// Re-export core domain types
pub use crate::core::{
    DEFAULT_SEPARATOR, LINE_TERMINATOR, Record, Separators, join_record, parse_separator,
    split_record,
};

// Re-export stream types
pub use io::{LineRecordStream, Mode, Records};

// Re-export CLI types
pub use cli::{Cli, Commands, OutputFormat};
