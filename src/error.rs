//! Error types for linerec operations.
//!
//! Every failure a stream, the separator parser or the CLI can raise is a
//! variant of [`Error`]. Callers branch on the variant (for example on
//! [`Error::FileNotFound`]) instead of inspecting I/O error kinds.

use thiserror::Error;

/// Result type alias for linerec operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for linerec operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Read-mode open on a path that does not exist.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: String,
    },

    /// Open failed for a reason other than not-found.
    #[error("cannot open {path} for {mode}: {source}")]
    FileAccess {
        /// Path that could not be opened.
        path: String,
        /// Mode the open was attempted in.
        mode: String,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// Open called with a mode that is neither read nor write.
    #[error("unknown file mode {mode} for {path}")]
    InvalidMode {
        /// Path the open was attempted on.
        path: String,
        /// Offending mode, as given by the caller.
        mode: String,
    },

    /// Read called without a read handle attached.
    #[error("stream is not open for reading")]
    NotOpenForReading,

    /// Write called without a write handle attached.
    #[error("stream is not open for writing")]
    NotOpenForWriting,

    /// Failure while reading, writing or flushing an attached handle.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// Path of the attached file.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Separator value that is not a single character or known name.
    #[error("invalid separator {value:?}: {reason}")]
    InvalidSeparator {
        /// Value as supplied.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Record input that could not be decoded.
    #[error("invalid record on line {line}: {reason}")]
    InvalidRecord {
        /// 1-based input line number.
        line: usize,
        /// Why it was rejected.
        reason: String,
    },

    /// Command-line argument rejected before any file was touched.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Returns true for [`Error::FileNotFound`].
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::FileNotFound { .. })
    }
}
