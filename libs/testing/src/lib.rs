//! Shared fixtures for eventing tests.

use std::sync::Arc;

use eventing_application::{Application, InMemoryRegistry};

/// Builds an application from a name and `(key, value)` label pairs.
pub fn application(name: &str, labels: &[(&str, &str)]) -> Application {
    labels
        .iter()
        .fold(Application::new(name), |app, (key, value)| {
            app.with_label(*key, *value)
        })
}

/// Builds a shared registry holding the given applications.
///
/// Applications with an empty name are skipped, so a table row can express
/// "nothing registered" with `""`.
///
/// # Panics
///
/// Panics if two applications share a name.
pub fn registry(applications: impl IntoIterator<Item = Application>) -> Arc<InMemoryRegistry> {
    let applications = applications.into_iter().filter(|app| !app.name.is_empty());
    Arc::new(InMemoryRegistry::from_applications(applications).expect("unique application names"))
}
