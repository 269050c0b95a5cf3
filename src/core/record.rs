//! Record line format.
//!
//! A record is one line of text. Fields inside the line are divided by a
//! single separator character; there is no quoting, so a field that contains
//! the separator or a line terminator changes the record boundaries when the
//! line is read back.

/// One record: the ordered fields of a single line.
pub type Record = Vec<String>;

/// Line terminator appended after every written record.
#[cfg(windows)]
pub const LINE_TERMINATOR: &str = "\r\n";

/// Line terminator appended after every written record.
#[cfg(not(windows))]
pub const LINE_TERMINATOR: &str = "\n";

/// Splits a line (without its terminator) into fields.
///
/// Always yields at least one field: an empty line is a record holding one
/// empty field.
///
/// # Examples
///
/// ```
/// use linerec::core::split_record;
///
/// assert_eq!(split_record("a\tb", '\t'), vec!["a", "b"]);
/// assert_eq!(split_record("", '\t'), vec![""]);
/// ```
#[must_use]
pub fn split_record(line: &str, separator: char) -> Record {
    line.split(separator).map(str::to_owned).collect()
}

/// Joins fields with the separator. No separator follows the last field and
/// no terminator is appended.
///
/// # Examples
///
/// ```
/// use linerec::core::join_record;
///
/// assert_eq!(join_record(&["my", "test"], ','), "my,test");
/// ```
#[must_use]
pub fn join_record<S: AsRef<str>>(fields: &[S], separator: char) -> String {
    let mut line = String::with_capacity(fields.iter().map(|f| f.as_ref().len() + 1).sum());
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            line.push(separator);
        }
        line.push_str(field.as_ref());
    }
    line
}

/// Removes one trailing `\n` or `\r\n` from a line read off the stream.
/// A lone `\r` is not a terminator and stays in the line.
pub(crate) fn trim_line_terminator(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}
