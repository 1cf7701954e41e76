//! Shared world state for failover routing BDD scenarios.

use std::sync::Arc;

use docshard::{
    routing::domain::BackendRegistry,
    store::{adapters::memory::InMemoryDocumentStore, domain::BackendName},
    user_data::{domain::UserDataResult, services::UserDataService},
};
use rstest::fixture;

/// Scenario world for failover routing behaviour tests.
#[derive(Default)]
pub struct FailoverWorld {
    /// In-memory backends in registration order.
    pub backends: Vec<(BackendName, InMemoryDocumentStore)>,
    /// Result of the last save.
    pub last_save: Option<UserDataResult<()>>,
    /// Result of the last delete.
    pub last_delete: Option<UserDataResult<()>>,
}

impl FailoverWorld {
    /// Registers a fresh in-memory backend.
    pub fn add_backend(&mut self, raw_name: &str) -> Result<(), eyre::Report> {
        let name = BackendName::new(raw_name)
            .map_err(|err| eyre::eyre!("invalid backend name '{raw_name}': {err}"))?;
        self.backends.push((name, InMemoryDocumentStore::new()));
        Ok(())
    }

    /// Returns the store registered under `name`.
    pub fn store(&self, name: &str) -> Result<&InMemoryDocumentStore, eyre::Report> {
        self.backends
            .iter()
            .find(|(candidate, _)| candidate.as_str() == name)
            .map(|(_, store)| store)
            .ok_or_else(|| eyre::eyre!("backend '{name}' is not registered in scenario world"))
    }

    /// Builds a service over the current backends.
    ///
    /// Stores are shared with the world, so fault injection and inspection
    /// through [`FailoverWorld::store`] affect the service.
    pub fn service(&self) -> Result<UserDataService, eyre::Report> {
        let mut builder = BackendRegistry::builder();
        for (name, store) in &self.backends {
            builder
                .insert(name.clone(), Arc::new(store.clone()))
                .map_err(|err| eyre::eyre!("registry rejected backend: {err}"))?;
        }
        Ok(UserDataService::new(builder.build()))
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> FailoverWorld {
    FailoverWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
