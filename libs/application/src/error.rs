//! Error types for loading application registries.

use thiserror::Error;

/// Errors that can occur when building a registry snapshot.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The snapshot document could not be parsed.
    #[error("invalid application snapshot: {0}")]
    Parse(String),

    /// The snapshot could not be read.
    #[error("failed to read application snapshot: {0}")]
    Io(String),

    /// Two applications in the snapshot share a name.
    #[error("duplicate application name: {0}")]
    Duplicate(String),
}

impl From<serde_json::Error> for RegistryError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            RegistryError::Io(err.to_string())
        } else {
            RegistryError::Parse(err.to_string())
        }
    }
}
