//! Error handling and display for the CLI.

use colored::Colorize;
use eventing_application::RegistryError;
use eventing_events::CleanError;
use thiserror::Error;

const PREFIX_HINT: &str = "Hint: check --prefix or EVENT_TYPE_PREFIX.";

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{failed} of {total} event types were rejected")]
    Rejected {
        failed: usize,
        total: usize,
        prefix_mismatches: usize,
    },

    #[error("no event types given")]
    NoInput,
}

/// Returns a hint for errors the user can usually fix from the command line.
pub fn hint(err: &anyhow::Error) -> Option<&'static str> {
    if let Some(clean_err) = err.downcast_ref::<CleanError>() {
        return clean_err.is_prefix_mismatch().then_some(PREFIX_HINT);
    }
    if let Some(registry_err) = err.downcast_ref::<RegistryError>() {
        return matches!(registry_err, RegistryError::Parse(_)).then_some(
            "Hint: the applications file must be a JSON array of {\"name\", \"labels\"} objects.",
        );
    }
    match err.downcast_ref::<CliError>()? {
        CliError::Rejected {
            prefix_mismatches, ..
        } => (*prefix_mismatches > 0).then_some(PREFIX_HINT),
        CliError::NoInput => Some("Hint: pass event types as arguments or pipe them on stdin."),
    }
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {:#}", "Error:".red().bold(), err);

    if let Some(hint) = hint(err) {
        eprintln!("\n{}", hint.yellow());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejected(prefix_mismatches: usize) -> anyhow::Error {
        CliError::Rejected {
            failed: 2,
            total: 3,
            prefix_mismatches,
        }
        .into()
    }

    #[test]
    fn test_rejected_with_prefix_mismatch_hints_prefix() {
        assert_eq!(hint(&rejected(1)), Some(PREFIX_HINT));
        assert_eq!(hint(&rejected(0)), None);
    }

    #[test]
    fn test_clean_error_hints() {
        let mismatch: anyhow::Error = CleanError::PrefixMismatch {
            event_type: "other.app.a.b.v1".to_string(),
            prefix: "prefix".to_string(),
        }
        .into();
        assert_eq!(hint(&mismatch), Some(PREFIX_HINT));

        let incomplete: anyhow::Error = CleanError::IncompleteEventType {
            event_type: "prefix.app.a.v1".to_string(),
            segments: 1,
        }
        .into();
        assert_eq!(hint(&incomplete), None);
    }

    #[test]
    fn test_registry_parse_error_hint_survives_context() {
        let err = anyhow::Error::from(RegistryError::Parse("expected array".to_string()))
            .context("failed to load applications");
        assert!(hint(&err).is_some_and(|h| h.contains("JSON array")));
    }

    #[test]
    fn test_no_input_hint() {
        let err: anyhow::Error = CliError::NoInput.into();
        assert!(hint(&err).is_some_and(|h| h.contains("stdin")));
    }
}
