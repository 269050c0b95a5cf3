//! I/O layer for linerec.
//!
//! Provides the file-backed record stream and its iterator.

pub mod stream;

pub use stream::{LineRecordStream, Mode, Records};
