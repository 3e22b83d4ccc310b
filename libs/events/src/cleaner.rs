//! Event-type cleaner.
//!
//! Rewrites `prefix.application.segment...segment.version` into the canonical
//! form consumed by subscription matching:
//!
//! - the configured prefix must match exactly and is kept verbatim
//! - the application segment is resolved through the registry and cleaned
//! - more than two middle segments are folded into two

use std::sync::Arc;

use eventing_application::{clean_name, ApplicationRegistry};
use tracing::{debug, trace, Span};

use crate::segments::{
    compress_segments, join_canonical, segment_count, MIN_MIDDLE_SEGMENTS, SEPARATOR,
};
use crate::CleanError;

/// Borrowed view of an event type with the prefix stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEventType<'a> {
    /// Raw application segment, before registry resolution.
    pub application: &'a str,

    /// Segments between the application and the version (at least two).
    pub middle: Vec<&'a str>,

    /// Trailing version segment.
    pub version: &'a str,
}

/// Normalizes event types against a prefix and an application registry.
///
/// The cleaner holds no mutable state and can be shared across threads.
#[derive(Clone)]
pub struct Cleaner {
    prefix: String,
    prefix_segments: usize,
    prefix_matchable: bool,
    registry: Arc<dyn ApplicationRegistry>,
    span: Span,
}

impl std::fmt::Debug for Cleaner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cleaner")
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}

impl Cleaner {
    /// Creates a cleaner that reports diagnostics inside `span`.
    pub fn new(
        prefix: impl Into<String>,
        registry: Arc<dyn ApplicationRegistry>,
        span: Span,
    ) -> Self {
        let prefix = prefix.into();
        Self {
            prefix_segments: segment_count(&prefix),
            prefix_matchable: prefix.is_empty() || !prefix.split(SEPARATOR).any(str::is_empty),
            prefix,
            registry,
            span,
        }
    }

    /// Creates a cleaner with an `event_type_cleaner` span carrying the prefix.
    pub fn with_default_span(
        prefix: impl Into<String>,
        registry: Arc<dyn ApplicationRegistry>,
    ) -> Self {
        let prefix = prefix.into();
        let span = tracing::debug_span!("event_type_cleaner", prefix = %prefix);
        Self::new(prefix, registry, span)
    }

    /// The configured prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the canonical form of `event_type`.
    pub fn clean(&self, event_type: &str) -> Result<String, CleanError> {
        let _entered = self.span.enter();

        let result = self.parse(event_type).map(|parsed| {
            let application = self.resolve_application(parsed.application);
            let middle = compress_segments(&parsed.middle);
            join_canonical(&self.prefix, &application, &middle, parsed.version)
        });

        match &result {
            Ok(cleaned) if cleaned != event_type => {
                trace!(event_type, cleaned = %cleaned, "rewrote event type");
            }
            Ok(_) => {}
            Err(err) => debug!(event_type, error = %err, "rejected event type"),
        }
        result
    }

    /// Validates the structure of `event_type` and strips the prefix.
    ///
    /// Performs no registry lookup and no cleaning.
    pub fn parse<'a>(&self, event_type: &'a str) -> Result<ParsedEventType<'a>, CleanError> {
        // A prefix with an empty segment can never equal a valid event type.
        if !self.prefix_matchable {
            return Err(self.prefix_mismatch(event_type));
        }

        let segments: Vec<&str> = event_type.split(SEPARATOR).collect();

        if segments.len() < 2 {
            return Err(malformed(event_type, "expected an application and a version"));
        }
        if segments.iter().any(|segment| segment.is_empty()) {
            return Err(malformed(event_type, "empty segment"));
        }

        let rest = if self.prefix_segments > 0 {
            if segments.len() < self.prefix_segments
                || segments[..self.prefix_segments].join(".") != self.prefix
            {
                return Err(self.prefix_mismatch(event_type));
            }
            &segments[self.prefix_segments..]
        } else {
            &segments[..]
        };

        let incomplete = |found: usize| CleanError::IncompleteEventType {
            event_type: event_type.to_string(),
            segments: found,
        };

        let Some((&application, tail)) = rest.split_first() else {
            return Err(incomplete(0));
        };
        let Some((&version, middle)) = tail.split_last() else {
            return Err(incomplete(0));
        };
        if middle.len() < MIN_MIDDLE_SEGMENTS {
            return Err(incomplete(middle.len()));
        }

        Ok(ParsedEventType {
            application,
            middle: middle.to_vec(),
            version,
        })
    }

    fn prefix_mismatch(&self, event_type: &str) -> CleanError {
        CleanError::PrefixMismatch {
            event_type: event_type.to_string(),
            prefix: self.prefix.clone(),
        }
    }

    /// Resolves the raw application segment to its clean name or type.
    fn resolve_application(&self, raw: &str) -> String {
        match self.registry.get(raw) {
            Some(app) => app.clean_type_or_name(),
            None => {
                debug!(application = raw, "application not found, cleaning raw segment");
                clean_name(raw)
            }
        }
    }
}

fn malformed(event_type: &str, reason: &'static str) -> CleanError {
    CleanError::MalformedEventType {
        event_type: event_type.to_string(),
        reason,
    }
}

// =============================================================================
// Tests
// =============================================================================
