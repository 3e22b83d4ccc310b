//! Read-only application lookup and an in-memory snapshot implementation.

use std::collections::HashMap;
use std::io::Read;
use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::{Application, RegistryError};

/// Looks up applications by exact name.
///
/// Implementations answer from a point-in-time view and must allow
/// concurrent readers. Callers never write through this trait.
pub trait ApplicationRegistry: Send + Sync {
    /// Returns the application registered under `name`, if any.
    fn get(&self, name: &str) -> Option<Application>;
}

impl<R: ApplicationRegistry + ?Sized> ApplicationRegistry for Arc<R> {
    fn get(&self, name: &str) -> Option<Application> {
        (**self).get(name)
    }
}

impl<R: ApplicationRegistry + ?Sized> ApplicationRegistry for &R {
    fn get(&self, name: &str) -> Option<Application> {
        (**self).get(name)
    }
}

/// Registry backed by a map guarded by a read-write lock.
#[derive(Debug, Default)]
pub struct InMemoryRegistry {
    applications: RwLock<HashMap<String, Application>>,
}

impl InMemoryRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from a list of applications.
    ///
    /// Fails if two applications share a name.
    pub fn from_applications(
        applications: impl IntoIterator<Item = Application>,
    ) -> Result<Self, RegistryError> {
        let mut map = HashMap::new();
        for app in applications {
            if map.contains_key(&app.name) {
                return Err(RegistryError::Duplicate(app.name));
            }
            map.insert(app.name.clone(), app);
        }
        Ok(Self {
            applications: RwLock::new(map),
        })
    }

    /// Builds a registry from a JSON array of applications.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, RegistryError> {
        let applications: Vec<Application> = serde_json::from_reader(reader)?;
        Self::from_applications(applications)
    }

    /// Inserts or replaces an application, returning the previous entry.
    pub fn upsert(&self, application: Application) -> Option<Application> {
        let mut applications = self
            .applications
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let previous = applications.insert(application.name.clone(), application);
        if let Some(prev) = &previous {
            debug!(application = %prev.name, "replaced application");
        }
        previous
    }

    /// Removes an application by name.
    pub fn remove(&self, name: &str) -> Option<Application> {
        self.applications
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .remove(name)
    }

    /// Number of registered applications.
    pub fn len(&self) -> usize {
        self.applications
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    /// Returns true if no application is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ApplicationRegistry for InMemoryRegistry {
    fn get(&self, name: &str) -> Option<Application> {
        self.applications
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(name)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_is_exact_match() {
        let registry = InMemoryRegistry::from_applications([Application::new("testapp")]).unwrap();
        assert!(registry.get("testapp").is_some());
        assert!(registry.get("TestApp").is_none());
        assert!(registry.get("test-app").is_none());
        assert!(registry.get("").is_none());
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let result = InMemoryRegistry::from_applications([
            Application::new("testapp"),
            Application::new("testapp").with_type("other"),
        ]);
        assert_eq!(
            result.unwrap_err(),
            RegistryError::Duplicate("testapp".to_string())
        );
    }

    #[test]
    fn test_upsert_and_remove() {
        let registry = InMemoryRegistry::new();
        assert!(registry.is_empty());

        assert!(registry.upsert(Application::new("testapp")).is_none());
        let previous = registry.upsert(Application::new("testapp").with_type("commerce"));
        assert_eq!(previous, Some(Application::new("testapp")));
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.get("testapp").unwrap().type_label(),
            Some("commerce")
        );

        assert!(registry.remove("testapp").is_some());
        assert!(registry.get("testapp").is_none());
        assert!(registry.remove("testapp").is_none());
    }

    #[test]
    fn test_from_json_reader() {
        let json = r#"[
            {"name": "testapp"},
            {"name": "commerce-mock", "labels": {"application-type": "commerce"}}
        ]"#;
        let registry = InMemoryRegistry::from_json_reader(json.as_bytes()).unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.get("commerce-mock").unwrap().clean_type_or_name(),
            "commerce"
        );
    }

    #[test]
    fn test_from_json_reader_invalid() {
        let err = InMemoryRegistry::from_json_reader(r#"{"name": "x"}"#.as_bytes()).unwrap_err();
        assert!(matches!(err, RegistryError::Parse(_)));
    }

    #[test]
    fn test_trait_object_through_arc() {
        let registry: Arc<dyn ApplicationRegistry> =
            Arc::new(InMemoryRegistry::from_applications([Application::new("a")]).unwrap());
        let shared = Arc::clone(&registry);
        assert_eq!(shared.get("a").map(|app| app.name), Some("a".to_string()));
    }
}
