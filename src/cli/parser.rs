//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use crate::core::{Separators, parse_separator};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// linerec: read, write and re-delimit line records.
///
/// Each line of a file is one record; fields are divided by a single
/// separator character (tab unless configured).
#[derive(Parser, Debug)]
#[command(name = "linerec")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Separator for both reading and writing (`,`, `\t`, `tab`, `pipe`, ...).
    #[arg(short, long, global = true, env = "LINEREC_SEPARATOR", value_parser = separator_arg)]
    pub separator: Option<char>,

    /// Separator used to split lines on read (overrides --separator).
    #[arg(long, global = true, env = "LINEREC_READ_SEPARATOR", value_parser = separator_arg)]
    pub read_separator: Option<char>,

    /// Separator used to join fields on write (overrides --separator).
    #[arg(long, global = true, env = "LINEREC_WRITE_SEPARATOR", value_parser = separator_arg)]
    pub write_separator: Option<char>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json).
    #[arg(long, default_value = "text", global = true)]
    pub format: String,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print every record of a file.
    Read {
        /// File to read.
        file: PathBuf,
    },

    /// Print the first two fields of every record.
    Pairs {
        /// File to read.
        file: PathBuf,
    },

    /// Write records given as JSON string arrays, one per input line.
    ///
    /// The target file is created or truncated.
    Write {
        /// File to write.
        file: PathBuf,

        /// Read records from this file instead of stdin.
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Re-delimit a file: read with the read separator, write with the
    /// write separator.
    Convert {
        /// Source file.
        input: PathBuf,

        /// Destination file (created or truncated).
        output: PathBuf,
    },

    /// Count records and report the widest one.
    Count {
        /// File to read.
        file: PathBuf,
    },
}

impl Cli {
    /// Returns the separators resolved from the command-line flags.
    #[must_use]
    pub fn separators(&self) -> Separators {
        Separators::resolve(self.separator, self.read_separator, self.write_separator)
    }
}

fn separator_arg(value: &str) -> std::result::Result<char, String> {
    parse_separator(value).map_err(|e| e.to_string())
}
