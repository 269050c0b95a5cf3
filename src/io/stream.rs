//! Sequential record stream over a single text file.
//!
//! A [`LineRecordStream`] attaches to a file in [`Mode::Read`] or
//! [`Mode::Write`] and moves one record (one line) at a time. Handles are
//! released by [`LineRecordStream::close`] or, failing that, when the stream
//! is dropped; release happens exactly once either way.

use crate::core::record::trim_line_terminator;
use crate::core::{LINE_TERMINATOR, Record, Separators, join_record, split_record};
use crate::error::{Error, Result};
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::iter::FusedIterator;
use std::path::Path;
use tracing::{debug, trace, warn};

/// Byte order mark that may prefix the first line of a UTF-8 file.
const UTF8_BOM: char = '\u{feff}';

/// Mode a stream is opened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Read an existing file.
    Read,
    /// Create or truncate a file and write to it.
    Write,
}

impl Mode {
    /// Legacy flag value for [`Mode::Read`].
    pub const READ_FLAG: u8 = 1;
    /// Legacy flag value for [`Mode::Write`].
    pub const WRITE_FLAG: u8 = 2;

    /// Maps a legacy flag value to a mode. Combined or unknown flags map to
    /// `None`.
    #[must_use]
    pub const fn from_flags(flags: u8) -> Option<Self> {
        match flags {
            Self::READ_FLAG => Some(Self::Read),
            Self::WRITE_FLAG => Some(Self::Write),
            _ => None,
        }
    }

    /// Returns the legacy flag value of this mode.
    #[must_use]
    pub const fn flags(self) -> u8 {
        match self {
            Self::Read => Self::READ_FLAG,
            Self::Write => Self::WRITE_FLAG,
        }
    }

    /// Parses `read` or `write` (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "read" | "r" => Some(Self::Read),
            "write" | "w" => Some(Self::Write),
            _ => None,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read => f.write_str("reading"),
            Self::Write => f.write_str("writing"),
        }
    }
}

/// An attached OS handle together with the path it was opened from.
struct Handle<T> {
    inner: T,
    path: String,
}

impl<T> Handle<T> {
    fn io_error(&self, source: std::io::Error) -> Error {
        Error::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl Handle<BufWriter<File>> {
    /// Flushes buffered output and releases the file.
    fn finish(mut self) -> Result<()> {
        let flushed = self.inner.flush().map_err(|e| self.io_error(e));
        debug!(path = %self.path, "closed output handle");
        flushed
    }
}

/// Line-based record reader/writer over one file.
///
/// Fields are split on the read separator and joined with the write
/// separator; both default to tab and are configured independently.
///
/// # Examples
///
/// ```no_run
/// use linerec::{LineRecordStream, Mode};
///
/// let mut stream = LineRecordStream::new();
/// stream.open("contacts.tsv", Mode::Write).unwrap();
/// stream.write(&["my", "test", "is", "awesome"]).unwrap();
/// stream.close().unwrap();
///
/// stream.open("contacts.tsv", Mode::Read).unwrap();
/// while let Some(fields) = stream.read().unwrap() {
///     println!("{fields:?}");
/// }
/// ```
pub struct LineRecordStream {
    reader: Option<Handle<BufReader<File>>>,
    writer: Option<Handle<BufWriter<File>>>,
    /// Set until the first line of the current read handle is consumed.
    at_first_line: bool,
    separators: Separators,
}

impl Default for LineRecordStream {
    fn default() -> Self {
        Self::from_config(Separators::default())
    }
}

impl fmt::Debug for LineRecordStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineRecordStream")
            .field("reader", &self.reader.as_ref().map(|h| &h.path))
            .field("writer", &self.writer.as_ref().map(|h| &h.path))
            .field("separators", &self.separators)
            .finish()
    }
}

impl LineRecordStream {
    /// Creates an unattached stream with tab as both separators.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an unattached stream using `separator` for reading and
    /// writing.
    #[must_use]
    pub const fn with_separator(separator: char) -> Self {
        Self::from_config(Separators::uniform(separator))
    }

    /// Creates an unattached stream with independent separators.
    #[must_use]
    pub const fn with_separators(read: char, write: char) -> Self {
        Self::from_config(Separators::new(read, write))
    }

    /// Creates an unattached stream from a separator configuration.
    #[must_use]
    pub const fn from_config(separators: Separators) -> Self {
        Self {
            reader: None,
            writer: None,
            at_first_line: false,
            separators,
        }
    }

    /// Returns the configured separators.
    #[must_use]
    pub const fn separators(&self) -> Separators {
        self.separators
    }

    /// Returns true while a read handle is attached.
    #[must_use]
    pub const fn is_open_for_reading(&self) -> bool {
        self.reader.is_some()
    }

    /// Returns true while a write handle is attached.
    #[must_use]
    pub const fn is_open_for_writing(&self) -> bool {
        self.writer.is_some()
    }

    /// Attaches the stream to `path` in the given mode.
    ///
    /// Read mode requires the file to exist. Write mode creates the file or
    /// truncates existing content.
    ///
    /// If a handle of the same mode is already attached it is flushed and
    /// closed before being replaced. A handle of the other mode stays
    /// attached.
    ///
    /// # Errors
    ///
    /// - [`Error::FileNotFound`] when reading a path that does not exist.
    /// - [`Error::FileAccess`] for any other failure to open or create,
    ///   including a read-mode path that names a directory.
    pub fn open<P: AsRef<Path>>(&mut self, path: P, mode: Mode) -> Result<()> {
        let path_ref = path.as_ref();
        let path_str = path_ref.to_string_lossy().to_string();
        let access_error = |source: std::io::Error| Error::FileAccess {
            path: path_str.clone(),
            mode: mode.to_string(),
            source,
        };

        match mode {
            Mode::Read => {
                let file = File::open(path_ref).map_err(|e| {
                    if e.kind() == ErrorKind::NotFound {
                        Error::FileNotFound {
                            path: path_str.clone(),
                        }
                    } else {
                        access_error(e)
                    }
                })?;
                let is_dir = file.metadata().map_err(access_error)?.is_dir();
                if is_dir {
                    return Err(access_error(ErrorKind::IsADirectory.into()));
                }
                let handle = Handle {
                    inner: BufReader::new(file),
                    path: path_str.clone(),
                };
                if let Some(previous) = self.reader.replace(handle) {
                    debug!(path = %previous.path, "replaced input handle");
                }
                self.at_first_line = true;
            }
            Mode::Write => {
                let file = File::create(path_ref).map_err(access_error)?;
                let handle = Handle {
                    inner: BufWriter::new(file),
                    path: path_str.clone(),
                };
                if let Some(previous) = self.writer.replace(handle) {
                    debug!(path = %previous.path, "replacing output handle");
                    if let Err(e) = previous.finish() {
                        warn!(error = %e, "failed to flush replaced output handle");
                    }
                }
            }
        }

        debug!(path = %path_str, %mode, "opened record stream");
        Ok(())
    }

    /// Attaches the stream using a legacy numeric mode flag
    /// (`1` = read, `2` = write).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMode`] naming `path` when `flags` is neither
    /// flag, otherwise the errors of [`LineRecordStream::open`].
    pub fn open_flags<P: AsRef<Path>>(&mut self, path: P, flags: u8) -> Result<()> {
        let mode = Mode::from_flags(flags).ok_or_else(|| Error::InvalidMode {
            path: path.as_ref().to_string_lossy().to_string(),
            mode: flags.to_string(),
        })?;
        self.open(path, mode)
    }

    /// Reads the next record.
    ///
    /// Returns `Ok(None)` at end of stream. An empty line is a record with
    /// one empty field, so a returned record is never empty.
    ///
    /// # Errors
    ///
    /// [`Error::NotOpenForReading`] without a read handle, [`Error::Io`] if
    /// the underlying read fails or the line is not valid UTF-8.
    pub fn read(&mut self) -> Result<Option<Record>> {
        let separator = self.separators.read;
        Ok(self.read_line()?.map(|line| {
            let fields = split_record(&line, separator);
            trace!(fields = fields.len(), "read record");
            fields
        }))
    }

    /// Legacy two-field accessor.
    ///
    /// Both outputs are reset to `None`, then the next record is read:
    /// - end of stream: returns `false`;
    /// - one field: returns `true` with only `first` set;
    /// - two or more fields: returns `true` with `first` and `second` set.
    ///   Fields after the second are dropped.
    ///
    /// # Errors
    ///
    /// Same as [`LineRecordStream::read`].
    pub fn read_pair(
        &mut self,
        first: &mut Option<String>,
        second: &mut Option<String>,
    ) -> Result<bool> {
        *first = None;
        *second = None;

        let Some(fields) = self.read()? else {
            return Ok(false);
        };

        let mut fields = fields.into_iter();
        match fields.next() {
            // unreachable: split always yields at least one field
            None => Ok(false),
            Some(field) => {
                *first = Some(field);
                *second = fields.next();
                Ok(true)
            }
        }
    }

    /// Returns an iterator over the remaining records.
    ///
    /// The iterator ends at end of stream, or after yielding the first error.
    pub fn records(&mut self) -> Records<'_> {
        Records {
            stream: self,
            done: false,
        }
    }

    /// Writes one record: the fields joined by the write separator, then a
    /// line terminator.
    ///
    /// Fields are not escaped. A field containing the separator or a line
    /// terminator will read back as a different record shape.
    ///
    /// # Errors
    ///
    /// [`Error::NotOpenForWriting`] without a write handle, [`Error::Io`] if
    /// the underlying write fails.
    pub fn write<S: AsRef<str>>(&mut self, fields: &[S]) -> Result<()> {
        let separator = self.separators.write;
        let handle = self.writer.as_mut().ok_or(Error::NotOpenForWriting)?;

        let mut line = join_record(fields, separator);
        line.push_str(LINE_TERMINATOR);

        handle
            .inner
            .write_all(line.as_bytes())
            .map_err(|e| handle.io_error(e))?;
        trace!(fields = fields.len(), "wrote record");
        Ok(())
    }

    /// Flushes and releases whichever handles are attached.
    ///
    /// Closing an unattached or already closed stream is a no-op. The
    /// separators are kept, so the stream can be opened again.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if flushing buffered output fails. The handle
    /// is released regardless.
    pub fn close(&mut self) -> Result<()> {
        let flushed = self.writer.take().map_or(Ok(()), Handle::finish);

        if let Some(reader) = self.reader.take() {
            debug!(path = %reader.path, "closed input handle");
        }
        self.at_first_line = false;

        flushed
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let handle = self.reader.as_mut().ok_or(Error::NotOpenForReading)?;

        let mut line = String::new();
        let read = handle
            .inner
            .read_line(&mut line)
            .map_err(|e| handle.io_error(e))?;
        if read == 0 {
            return Ok(None);
        }

        if std::mem::take(&mut self.at_first_line) && line.starts_with(UTF8_BOM) {
            line.remove(0);
        }
        trim_line_terminator(&mut line);
        Ok(Some(line))
    }
}

impl Drop for LineRecordStream {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            warn!(error = %e, "failed to flush record stream on drop");
        }
    }
}

/// Iterator over the remaining records of a stream.
///
/// Created by [`LineRecordStream::records`].
#[derive(Debug)]
pub struct Records<'a> {
    stream: &'a mut LineRecordStream,
    done: bool,
}

impl Iterator for Records<'_> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.stream.read() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl FusedIterator for Records<'_> {}
