//! CLI layer for linerec.
//!
//! Provides the command-line interface using clap, with commands for reading,
//! writing and re-delimiting record files.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::execute;
pub use output::OutputFormat;
pub use parser::{Cli, Commands};
