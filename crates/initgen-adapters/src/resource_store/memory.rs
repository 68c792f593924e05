//! In-memory resource store with built-in wrapper bundles.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use initgen_core::application::{GenerationError, ports::ResourceStore};

use crate::builtin_resources;

/// Thread-safe in-memory keyed resource store.
#[derive(Clone, Default)]
pub struct InMemoryResourceStore {
    inner: Arc<RwLock<Inner>>,
}

#[derive(Default)]
struct Inner {
    text: HashMap<String, String>,
    binary: HashMap<String, Vec<u8>>,
}

impl InMemoryResourceStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the built-in wrapper bundles (maven,
    /// gradle3, gradle4).
    pub fn with_builtin() -> Self {
        let store = Self::new();
        for (location, body) in builtin_resources::text_resources() {
            store.put_text(location, body);
        }
        for (location, body) in builtin_resources::binary_resources() {
            store.put_binary(location, body);
        }
        store
    }

    /// Insert or replace a text resource.
    pub fn put_text(&self, location: impl Into<String>, body: impl Into<String>) {
        let mut inner = self.inner.write().unwrap();
        inner.text.insert(location.into(), body.into());
    }

    /// Insert or replace a binary resource.
    pub fn put_binary(&self, location: impl Into<String>, body: impl Into<Vec<u8>>) {
        let mut inner = self.inner.write().unwrap();
        inner.binary.insert(location.into(), body.into());
    }

    /// Remove a resource from both namespaces (failure-injection helper).
    pub fn remove(&self, location: &str) {
        let mut inner = self.inner.write().unwrap();
        inner.text.remove(location);
        inner.binary.remove(location);
    }

    fn lock_err(location: &str) -> GenerationError {
        GenerationError::resource(location, "resource store lock poisoned")
    }
}

impl ResourceStore for InMemoryResourceStore {
    fn get_text_resource(&self, location: &str) -> Result<String, GenerationError> {
        let inner = self.inner.read().map_err(|_| Self::lock_err(location))?;
        inner
            .text
            .get(location)
            .cloned()
            .ok_or_else(|| GenerationError::resource(location, "no such text resource"))
    }

    fn get_binary_resource(&self, location: &str) -> Result<Vec<u8>, GenerationError> {
        let inner = self.inner.read().map_err(|_| Self::lock_err(location))?;
        inner
            .binary
            .get(location)
            .cloned()
            .ok_or_else(|| GenerationError::resource(location, "no such binary resource"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_store_serves_both_gradle_bundles() {
        let store = InMemoryResourceStore::with_builtin();

        for prefix in ["gradle3", "gradle4"] {
            store
                .get_text_resource(&format!("project/{prefix}/gradlew"))
                .unwrap();
            store
                .get_text_resource(&format!("project/{prefix}/gradlew.bat"))
                .unwrap();
            store
                .get_text_resource(&format!(
                    "project/{prefix}/gradle/wrapper/gradle-wrapper.properties"
                ))
                .unwrap();
            store
                .get_binary_resource(&format!(
                    "project/{prefix}/gradle/wrapper/gradle-wrapper.jar"
                ))
                .unwrap();
        }
    }

    #[test]
    fn builtin_store_serves_maven_wrapper() {
        let store = InMemoryResourceStore::with_builtin();
        store.get_text_resource("project/maven/mvnw").unwrap();
        store.get_text_resource("project/maven/mvnw.cmd").unwrap();
        store
            .get_text_resource("project/maven/wrapper/maven-wrapper.properties")
            .unwrap();
        store
            .get_binary_resource("project/maven/wrapper/maven-wrapper.jar")
            .unwrap();
    }

    #[test]
    fn missing_resource_is_an_error() {
        let store = InMemoryResourceStore::new();
        assert!(matches!(
            store.get_text_resource("project/nope"),
            Err(GenerationError::Resource { .. })
        ));
    }

    #[test]
    fn remove_injects_failures() {
        let store = InMemoryResourceStore::with_builtin();
        store.remove("project/gradle4/gradlew");
        assert!(store.get_text_resource("project/gradle4/gradlew").is_err());
    }
}
