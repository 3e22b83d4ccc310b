//! Error types for event-type cleaning.

use thiserror::Error;

/// Errors that can occur when cleaning an event type.
///
/// None of these are fatal to the [`Cleaner`](crate::Cleaner); it can be
/// reused after any failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CleanError {
    /// The event type cannot even hold an application and a version.
    #[error("malformed event type '{event_type}': {reason}")]
    MalformedEventType {
        event_type: String,
        reason: &'static str,
    },

    /// The leading segments do not equal the configured prefix.
    #[error("event type '{event_type}' does not start with prefix '{prefix}'")]
    PrefixMismatch { event_type: String, prefix: String },

    /// Too few segments between the application and the version.
    #[error(
        "incomplete event type '{event_type}': expected at least 2 segments \
         between application and version, got {segments}"
    )]
    IncompleteEventType { event_type: String, segments: usize },
}

impl CleanError {
    /// Returns true if the input was structurally malformed.
    pub fn is_malformed(&self) -> bool {
        matches!(self, CleanError::MalformedEventType { .. })
    }

    /// Returns true if the configured prefix was not matched.
    pub fn is_prefix_mismatch(&self) -> bool {
        matches!(self, CleanError::PrefixMismatch { .. })
    }

    /// Returns true if the event type had too few middle segments.
    pub fn is_incomplete(&self) -> bool {
        matches!(self, CleanError::IncompleteEventType { .. })
    }

    /// The event type that was rejected.
    pub fn event_type(&self) -> &str {
        match self {
            CleanError::MalformedEventType { event_type, .. }
            | CleanError::PrefixMismatch { event_type, .. }
            | CleanError::IncompleteEventType { event_type, .. } => event_type,
        }
    }
}
