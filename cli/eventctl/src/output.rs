//! Output formatting for CLI commands.

use std::io::{self, Write};

use clap::ValueEnum;
use colored::Colorize;
use eventing_events::CleanError;
use serde::Serialize;

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One canonical event type per line.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Result of cleaning one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CleanRecord {
    pub input: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CleanRecord {
    pub fn from_result(input: &str, result: Result<String, CleanError>) -> Self {
        match result {
            Ok(output) => Self {
                input: input.to_string(),
                output: Some(output),
                error: None,
            },
            Err(err) => Self {
                input: input.to_string(),
                output: None,
                error: Some(err.to_string()),
            },
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Write records in the specified format.
pub fn write_records<W: Write>(
    out: &mut W,
    records: &[CleanRecord],
    format: OutputFormat,
) -> io::Result<()> {
    for record in records {
        match format {
            OutputFormat::Text => match (&record.output, &record.error) {
                (Some(output), _) => writeln!(out, "{output}")?,
                (None, Some(error)) => writeln!(out, "{} {}", "rejected:".red().bold(), error)?,
                (None, None) => {}
            },
            OutputFormat::Json => {
                let json = serde_json::to_string(record).map_err(io::Error::other)?;
                writeln!(out, "{json}")?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<CleanRecord> {
        vec![
            CleanRecord::from_result("a.b.c.v1", Ok("a.b.c.v1".to_string())),
            CleanRecord::from_result(
                "a.b.v1",
                Err(CleanError::IncompleteEventType {
                    event_type: "a.b.v1".to_string(),
                    segments: 1,
                }),
            ),
        ]
    }

    #[test]
    fn test_json_lines() {
        let mut out = Vec::new();
        write_records(&mut out, &records(), OutputFormat::Json).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["output"], "a.b.c.v1");
        assert!(lines[0].get("error").is_none());
        assert_eq!(lines[1]["input"], "a.b.v1");
        assert!(lines[1].get("output").is_none());
        assert!(lines[1]["error"]
            .as_str()
            .unwrap()
            .starts_with("incomplete event type"));
    }

    #[test]
    fn test_text_lines() {
        let mut out = Vec::new();
        write_records(&mut out, &records(), OutputFormat::Text).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "a.b.c.v1");
        assert!(lines[1].contains("incomplete event type 'a.b.v1'"));
    }
}
