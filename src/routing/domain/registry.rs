//! Immutable, insertion-ordered backend registry.

use super::RegistryError;
use crate::store::{domain::BackendName, ports::SharedDocumentStore};
use indexmap::IndexMap;
use std::fmt;

/// Named backend handles in registration order.
///
/// The registry is built once at process start and never changes afterwards,
/// which keeps routing deterministic for its whole lifetime. An empty registry
/// is valid and means no backend is available.
#[derive(Clone, Default)]
pub struct BackendRegistry {
    backends: IndexMap<BackendName, SharedDocumentStore>,
}

impl BackendRegistry {
    /// Starts building a registry.
    #[must_use]
    pub fn builder() -> BackendRegistryBuilder {
        BackendRegistryBuilder::default()
    }

    /// Returns a registry with no backends.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the backend names in registration order.
    #[must_use]
    pub fn names(&self) -> Vec<BackendName> {
        self.backends.keys().cloned().collect()
    }

    /// Returns the handle registered under `name`.
    #[must_use]
    pub fn get(&self, name: &BackendName) -> Option<&SharedDocumentStore> {
        self.backends.get(name)
    }

    /// Returns `true` when a backend is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &BackendName) -> bool {
        self.backends.contains_key(name)
    }

    /// Returns the number of registered backends.
    #[must_use]
    pub fn len(&self) -> usize {
        self.backends.len()
    }

    /// Returns `true` when no backend is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.backends.is_empty()
    }

    /// Iterates over backends in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&BackendName, &SharedDocumentStore)> {
        self.backends.iter()
    }
}

impl fmt::Debug for BackendRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendRegistry")
            .field("backends", &self.backends.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Collects backends before freezing them into a [`BackendRegistry`].
#[derive(Default)]
pub struct BackendRegistryBuilder {
    backends: IndexMap<BackendName, SharedDocumentStore>,
}

impl BackendRegistryBuilder {
    /// Appends a backend.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateBackendName`] when the name is
    /// already registered.
    pub fn register(
        mut self,
        name: BackendName,
        store: SharedDocumentStore,
    ) -> Result<Self, RegistryError> {
        self.insert(name, store)?;
        Ok(self)
    }

    /// Appends a backend in place.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateBackendName`] when the name is
    /// already registered.
    pub fn insert(
        &mut self,
        name: BackendName,
        store: SharedDocumentStore,
    ) -> Result<(), RegistryError> {
        if self.backends.contains_key(&name) {
            return Err(RegistryError::DuplicateBackendName(name));
        }
        self.backends.insert(name, store);
        Ok(())
    }

    /// Returns `true` when a backend is already registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &BackendName) -> bool {
        self.backends.contains_key(name)
    }

    /// Returns the number of backends collected so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.backends.len()
    }

    /// Returns `true` when no backend has been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.backends.is_empty()
    }

    /// Freezes the collected backends.
    #[must_use]
    pub fn build(self) -> BackendRegistry {
        BackendRegistry {
            backends: self.backends,
        }
    }
}

impl fmt::Debug for BackendRegistryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendRegistryBuilder")
            .field("backends", &self.backends.keys().collect::<Vec<_>>())
            .finish()
    }
}
