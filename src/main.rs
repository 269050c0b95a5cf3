//! Binary entry point for linerec.

#![allow(clippy::print_stderr)]

use clap::Parser;
use linerec::cli::output::{OutputFormat, format_error};
use linerec::cli::{Cli, execute};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let format = OutputFormat::parse(&cli.format);

    let (output, status) = match execute(&cli) {
        Ok(output) => (output, ExitCode::SUCCESS),
        // JSON callers parse errors from stdout like any other result
        Err(e) if format == OutputFormat::Json => {
            (format!("{}\n", format_error(&e, format)), ExitCode::FAILURE)
        }
        Err(e) => {
            eprintln!("linerec: {}", format_error(&e, format));
            return ExitCode::FAILURE;
        }
    };

    match io::stdout().lock().write_all(output.as_bytes()) {
        // a closed pipe (`linerec read big.tsv | head`) is not a failure
        Err(e) if e.kind() != io::ErrorKind::BrokenPipe => {
            eprintln!("linerec: cannot write output: {e}");
            ExitCode::FAILURE
        }
        _ => status,
    }
}

/// Logs go to stderr; `RUST_LOG` overrides the level picked by `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
