//! Cleaner configuration from flags and environment.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use eventing_application::InMemoryRegistry;
use eventing_events::Cleaner;
use tracing::info;

/// Settings for building a [`Cleaner`].
#[derive(Debug, Clone, Args)]
pub struct CleanerConfig {
    /// Prefix every event type must start with. Empty disables the check.
    #[arg(long, global = true, env = "EVENT_TYPE_PREFIX", default_value = "")]
    pub prefix: String,

    /// JSON file listing registered applications.
    ///
    /// Without it every application segment is cleaned as-is.
    #[arg(long, global = true, env = "EVENTCTL_APPLICATIONS")]
    pub applications: Option<PathBuf>,
}

impl CleanerConfig {
    /// Loads the application snapshot, or an empty registry when none is set.
    pub fn load_registry(&self) -> Result<InMemoryRegistry> {
        let Some(path) = &self.applications else {
            return Ok(InMemoryRegistry::new());
        };

        let file = File::open(path)
            .with_context(|| format!("failed to open applications file {}", path.display()))?;
        let registry = InMemoryRegistry::from_json_reader(BufReader::new(file))
            .with_context(|| format!("failed to load applications from {}", path.display()))?;

        info!(
            path = %path.display(),
            applications = registry.len(),
            "Loaded application registry"
        );
        Ok(registry)
    }

    /// Builds a cleaner over the configured prefix and registry.
    pub fn build_cleaner(&self) -> Result<Cleaner> {
        let registry = Arc::new(self.load_registry()?);
        Ok(Cleaner::with_default_span(self.prefix.clone(), registry))
    }
}
