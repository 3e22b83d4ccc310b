//! Application records and name cleaning.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Label key that overrides the application name in event types.
pub const TYPE_LABEL: &str = "application-type";

/// An application known to the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    /// Exact name the application is registered under.
    pub name: String,

    /// Free-form labels attached to the application.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
}

impl Application {
    /// Creates an application without labels.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            labels: BTreeMap::new(),
        }
    }

    /// Adds a label, replacing any previous value for the key.
    #[must_use]
    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }

    /// Adds the `application-type` label.
    #[must_use]
    pub fn with_type(self, application_type: impl Into<String>) -> Self {
        self.with_label(TYPE_LABEL, application_type)
    }

    /// Returns the type override, if the application carries one.
    pub fn type_label(&self) -> Option<&str> {
        self.labels.get(TYPE_LABEL).map(String::as_str)
    }

    /// Returns the type override, or the name when there is none.
    pub fn type_or_name(&self) -> &str {
        self.type_label().unwrap_or(&self.name)
    }

    /// Returns [`Self::type_or_name`] reduced to letters and digits.
    pub fn clean_type_or_name(&self) -> String {
        clean_name(self.type_or_name())
    }
}

/// Removes every character that is not an ASCII letter or digit.
///
/// Order and case of the remaining characters are preserved and nothing is
/// inserted, so the function is idempotent.
pub fn clean_name(name: &str) -> String {
    name.chars().filter(char::is_ascii_alphanumeric).collect()
}

// =============================================================================
// Tests
// =============================================================================
