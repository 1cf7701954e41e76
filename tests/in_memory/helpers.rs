//! Shared helpers for in-memory integration tests.

use docshard::{
    routing::domain::BackendRegistry,
    store::{adapters::memory::InMemoryDocumentStore, domain::{BackendName, Document}},
};
use std::sync::Arc;

/// In-memory stores registered in a fixed order.
pub struct Backends {
    /// Registry over the stores, in registration order.
    pub registry: BackendRegistry,
    /// The stores, in registration order, for inspection and fault injection.
    pub stores: Vec<(BackendName, InMemoryDocumentStore)>,
}

impl Backends {
    /// Registers one fresh in-memory store per name.
    pub fn named(names: &[&str]) -> Self {
        let mut builder = BackendRegistry::builder();
        let mut stores = Vec::new();
        for raw in names {
            let name = backend(raw);
            let store = InMemoryDocumentStore::new();
            builder
                .insert(name.clone(), Arc::new(store.clone()))
                .expect("backend names are unique");
            stores.push((name, store));
        }
        Self {
            registry: builder.build(),
            stores,
        }
    }

    /// Returns the store registered under `name`.
    pub fn store(&self, name: &str) -> &InMemoryDocumentStore {
        self.stores
            .iter()
            .find(|(candidate, _)| candidate.as_str() == name)
            .map(|(_, store)| store)
            .expect("store is registered")
    }
}

/// Parses a backend name.
pub fn backend(raw: &str) -> BackendName {
    BackendName::new(raw).expect("valid backend name")
}

/// Builds a document from a JSON object literal.
pub fn document(value: serde_json::Value) -> Document {
    value.as_object().cloned().unwrap_or_default()
}
