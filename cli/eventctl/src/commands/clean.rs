//! `eventctl clean`.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use clap::Args;
use eventing_events::{CleanError, Cleaner};
use tracing::warn;

use crate::error::CliError;
use crate::output::{write_records, CleanRecord, OutputFormat};

#[derive(Debug, Args)]
pub struct CleanCommand {
    /// Event types to clean. Read from stdin, one per line, when omitted.
    event_types: Vec<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,
}

impl CleanCommand {
    pub fn run<R: BufRead, W: Write>(self, cleaner: &Cleaner, input: R, out: &mut W) -> Result<()> {
        let event_types = if self.event_types.is_empty() {
            read_event_types(input)?
        } else {
            self.event_types
        };
        if event_types.is_empty() {
            return Err(CliError::NoInput.into());
        }

        let mut prefix_mismatches = 0;
        let records: Vec<CleanRecord> = event_types
            .iter()
            .map(|event_type| {
                let result = cleaner.clean(event_type);
                if result.as_ref().is_err_and(CleanError::is_prefix_mismatch) {
                    prefix_mismatches += 1;
                }
                CleanRecord::from_result(event_type, result)
            })
            .collect();
        write_records(out, &records, self.output).context("failed to write output")?;

        let failed = records.iter().filter(|record| !record.is_ok()).count();
        if failed > 0 {
            warn!(failed, total = records.len(), "Some event types were rejected");
            return Err(CliError::Rejected {
                failed,
                total: records.len(),
                prefix_mismatches,
            }
            .into());
        }
        Ok(())
    }
}

/// Reads one event type per line, skipping blank lines and `#` comments.
fn read_event_types<R: BufRead>(input: R) -> Result<Vec<String>> {
    let mut event_types = Vec::new();
    for line in input.lines() {
        let line = line.context("failed to read stdin")?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        event_types.push(line.to_string());
    }
    Ok(event_types)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_event_types_skips_blank_and_comments() {
        let input = "# subscriptions\nprefix.app.a.b.v1\n\n  prefix.app.c.d.v2  \n";
        let event_types = read_event_types(input.as_bytes()).unwrap();
        assert_eq!(event_types, vec!["prefix.app.a.b.v1", "prefix.app.c.d.v2"]);
    }
}
