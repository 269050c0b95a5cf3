//! CLI command implementations.
//!
//! Each command opens its own [`LineRecordStream`] and relies on the stream's
//! close (or drop on the error path) to release the file.

use crate::cli::output::{
    FieldPair, OutputFormat, RecordStats, format_pairs, format_records, format_stats,
    format_write_result,
};
use crate::cli::parser::{Cli, Commands};
use crate::core::{Record, Separators};
use crate::error::{Error, Result};
use crate::io::{LineRecordStream, Mode};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// Label used in errors for records read from standard input.
const STDIN_LABEL: &str = "<stdin>";

/// Executes the CLI command.
///
/// # Arguments
///
/// * `cli` - Parsed CLI arguments.
///
/// # Returns
///
/// Result with output string on success.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn execute(cli: &Cli) -> Result<String> {
    let format = OutputFormat::parse(&cli.format);
    let separators = cli.separators();
    debug!(read = ?separators.read, write = ?separators.write, "resolved separators");

    match &cli.command {
        Commands::Read { file } => cmd_read(file, separators, format),
        Commands::Pairs { file } => cmd_pairs(file, separators, format),
        Commands::Write { file, input } => cmd_write(file, input.as_deref(), separators, format),
        Commands::Convert { input, output } => cmd_convert(input, output, separators, format),
        Commands::Count { file } => cmd_count(file, separators, format),
    }
}

fn cmd_read(file: &Path, separators: Separators, format: OutputFormat) -> Result<String> {
    let mut stream = LineRecordStream::from_config(separators);
    stream.open(file, Mode::Read)?;
    let records = stream.records().collect::<Result<Vec<Record>>>()?;
    stream.close()?;

    Ok(format_records(&records, format))
}

fn cmd_pairs(file: &Path, separators: Separators, format: OutputFormat) -> Result<String> {
    let mut stream = LineRecordStream::from_config(separators);
    stream.open(file, Mode::Read)?;

    let mut pairs = Vec::new();
    let mut first = None;
    let mut second = None;
    while stream.read_pair(&mut first, &mut second)? {
        pairs.push(FieldPair {
            first: first.take().unwrap_or_default(),
            second: second.take(),
        });
    }
    stream.close()?;

    Ok(format_pairs(&pairs, format))
}

fn cmd_write(
    file: &Path,
    input: Option<&Path>,
    separators: Separators,
    format: OutputFormat,
) -> Result<String> {
    if let Some(path) = input {
        ensure_distinct(path, file)?;
    }

    let (source, label): (Box<dyn BufRead>, String) = match input {
        Some(path) => (Box::new(open_input(path)?), path.display().to_string()),
        None => (Box::new(io::stdin().lock()), STDIN_LABEL.to_string()),
    };

    let mut stream = LineRecordStream::from_config(separators);
    stream.open(file, Mode::Write)?;

    let mut written = 0;
    for (index, line) in source.lines().enumerate() {
        let line = line.map_err(|source| Error::Io {
            path: label.clone(),
            source,
        })?;
        if line.trim().is_empty() {
            continue;
        }
        let fields: Record =
            serde_json::from_str(&line).map_err(|e| Error::InvalidRecord {
                line: index + 1,
                reason: e.to_string(),
            })?;
        stream.write(&fields)?;
        written += 1;
    }
    stream.close()?;

    info!(records = written, path = %file.display(), "wrote records");
    Ok(format_write_result(
        &file.display().to_string(),
        written,
        format,
    ))
}

fn cmd_convert(
    input: &Path,
    output: &Path,
    separators: Separators,
    format: OutputFormat,
) -> Result<String> {
    ensure_distinct(input, output)?;

    // One stream holds both handles: lines are split on the read separator
    // and joined again with the write separator.
    let mut stream = LineRecordStream::from_config(separators);
    stream.open(input, Mode::Read)?;
    stream.open(output, Mode::Write)?;

    let mut converted = 0;
    while let Some(record) = stream.read()? {
        stream.write(&record)?;
        converted += 1;
    }
    stream.close()?;

    info!(records = converted, "converted records");
    Ok(format_write_result(
        &output.display().to_string(),
        converted,
        format,
    ))
}

fn cmd_count(file: &Path, separators: Separators, format: OutputFormat) -> Result<String> {
    let mut stream = LineRecordStream::from_config(separators);
    stream.open(file, Mode::Read)?;

    let mut stats = RecordStats::default();
    for record in stream.records() {
        let record = record?;
        stats.records += 1;
        stats.max_fields = stats.max_fields.max(record.len());
    }
    stream.close()?;

    Ok(format_stats(&stats, format))
}

/// Opens a record input file with the same error kinds as a read stream.
fn open_input(path: &Path) -> Result<BufReader<File>> {
    File::open(path).map(BufReader::new).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            Error::FileAccess {
                path: path.display().to_string(),
                mode: Mode::Read.to_string(),
                source,
            }
        }
    })
}

/// Rejects an output path that would truncate the input before it is read.
fn ensure_distinct(input: &Path, output: &Path) -> Result<()> {
    if same_file(input, output) {
        return Err(Error::InvalidArgument(format!(
            "input and output are the same file: {}",
            input.display()
        )));
    }
    Ok(())
}

/// Returns true when both paths resolve to the same existing file.
fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
