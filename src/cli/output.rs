//! Output formatting for CLI commands.
//!
//! Supports text and JSON output formats.

use crate::core::Record;
use crate::error::Error;
use serde::Serialize;
use std::fmt::Write;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parses format from string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// First two fields of a record, as returned by the legacy accessor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldPair {
    /// First field.
    pub first: String,
    /// Second field, absent for one-field records.
    pub second: Option<String>,
}

/// Record count and widest record of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RecordStats {
    /// Number of records.
    pub records: usize,
    /// Largest field count seen.
    pub max_fields: usize,
}

/// Formats a list of records.
#[must_use]
pub fn format_records(records: &[Record], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let mut output = String::new();
            for record in records {
                let _ = writeln!(output, "{}", record.join(" | "));
            }
            output
        }
        OutputFormat::Json => format_json(&records),
    }
}

/// Formats field pairs.
#[must_use]
pub fn format_pairs(pairs: &[FieldPair], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let mut output = String::new();
            for pair in pairs {
                let _ = writeln!(
                    output,
                    "{}\t{}",
                    pair.first,
                    pair.second.as_deref().unwrap_or("-")
                );
            }
            output
        }
        OutputFormat::Json => format_json(&pairs),
    }
}

/// Formats the result of a write or convert command.
#[must_use]
pub fn format_write_result(path: &str, records: usize, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!("Wrote {records} record(s) to {path}\n"),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct WriteResult<'a> {
                path: &'a str,
                records: usize,
            }
            format_json(&WriteResult { path, records })
        }
    }
}

/// Formats record statistics.
#[must_use]
pub fn format_stats(stats: &RecordStats, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let mut output = String::new();
            let _ = writeln!(output, "Records:     {}", stats.records);
            let _ = writeln!(output, "Max fields:  {}", stats.max_fields);
            output
        }
        OutputFormat::Json => format_json(stats),
    }
}

/// Formats an error for output.
#[must_use]
pub fn format_error(error: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => error.to_string(),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct ErrorOutput {
                error: String,
                not_found: bool,
            }
            format_json(&ErrorOutput {
                error: error.to_string(),
                not_found: error.is_not_found(),
            })
        }
    }
}

fn format_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parse() {
        assert_eq!(OutputFormat::parse("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("JSON"), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("text"), OutputFormat::Text);
        assert_eq!(OutputFormat::parse("other"), OutputFormat::Text);
    }

    #[test]
    fn test_format_records_text() {
        let records = vec![
            vec!["my".to_string(), "test".to_string()],
            vec![String::new()],
        ];
        assert_eq!(
            format_records(&records, OutputFormat::Text),
            "my | test\n\n"
        );
    }

    #[test]
    fn test_format_records_json() {
        let records = vec![vec!["a".to_string(), "b".to_string()]];
        let output = format_records(&records, OutputFormat::Json);
        let parsed: Vec<Vec<String>> = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, records);
    }

    #[test]
    fn test_format_pairs_text() {
        let pairs = vec![
            FieldPair {
                first: "a".to_string(),
                second: Some("b".to_string()),
            },
            FieldPair {
                first: "solo".to_string(),
                second: None,
            },
        ];
        assert_eq!(format_pairs(&pairs, OutputFormat::Text), "a\tb\nsolo\t-\n");
    }

    #[test]
    fn test_format_pairs_json_null_second() {
        let pairs = vec![FieldPair {
            first: "solo".to_string(),
            second: None,
        }];
        let output = format_pairs(&pairs, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["first"], "solo");
        assert!(value[0]["second"].is_null());
    }

    #[test]
    fn test_format_write_result() {
        assert_eq!(
            format_write_result("out.tsv", 3, OutputFormat::Text),
            "Wrote 3 record(s) to out.tsv\n"
        );
        let value: serde_json::Value =
            serde_json::from_str(&format_write_result("out.tsv", 3, OutputFormat::Json)).unwrap();
        assert_eq!(value["records"], 3);
    }

    #[test]
    fn test_format_stats() {
        let stats = RecordStats {
            records: 10,
            max_fields: 4,
        };
        let text = format_stats(&stats, OutputFormat::Text);
        assert!(text.contains("10"));
        assert!(text.contains('4'));
    }

    #[test]
    fn test_format_error_json() {
        let err = Error::FileNotFound {
            path: "missing.tsv".to_string(),
        };
        let value: serde_json::Value =
            serde_json::from_str(&format_error(&err, OutputFormat::Json)).unwrap();
        assert_eq!(value["not_found"], true);
        assert_eq!(value["error"], "file not found: missing.tsv");
    }
}
