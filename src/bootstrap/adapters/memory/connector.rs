//! Connector producing in-memory document stores.

use crate::bootstrap::{
    domain::ServiceAccountCredential,
    ports::{BackendConnector, ConnectError},
};
use crate::store::{
    adapters::memory::InMemoryDocumentStore, domain::BackendName, ports::SharedDocumentStore,
};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

/// Connects credentials to in-memory stores keyed by `project_id`.
///
/// Two connections for the same project share one store, mirroring two
/// clients of the same physical database. Credentials without a
/// `project_id` share a store keyed by the empty string.
#[derive(Debug, Clone, Default)]
pub struct InMemoryConnector {
    state: Arc<RwLock<InMemoryConnectorState>>,
}

#[derive(Debug, Default)]
struct InMemoryConnectorState {
    stores: HashMap<String, InMemoryDocumentStore>,
    refused: HashSet<BackendName>,
    connected: Vec<BackendName>,
}

impl InMemoryConnector {
    /// Creates a connector with no stores.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes connection attempts for `name` fail.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectError::Client`] when lock acquisition fails.
    pub fn refuse(&self, name: BackendName) -> Result<(), ConnectError> {
        let mut state = self
            .state
            .write()
            .map_err(|err| ConnectError::client(std::io::Error::other(err.to_string())))?;
        state.refused.insert(name);
        Ok(())
    }

    /// Returns the store backing `project_id`, if any connection created it.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectError::Client`] when lock acquisition fails.
    pub fn store_for_project(
        &self,
        project_id: &str,
    ) -> Result<Option<InMemoryDocumentStore>, ConnectError> {
        let state = self
            .state
            .read()
            .map_err(|err| ConnectError::client(std::io::Error::other(err.to_string())))?;
        Ok(state.stores.get(project_id).cloned())
    }

    /// Returns the backend names connected so far, in connection order.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectError::Client`] when lock acquisition fails.
    pub fn connected(&self) -> Result<Vec<BackendName>, ConnectError> {
        let state = self
            .state
            .read()
            .map_err(|err| ConnectError::client(std::io::Error::other(err.to_string())))?;
        Ok(state.connected.clone())
    }
}

#[async_trait]
impl BackendConnector for InMemoryConnector {
    async fn connect(
        &self,
        name: &BackendName,
        credential: &ServiceAccountCredential,
    ) -> Result<SharedDocumentStore, ConnectError> {
        let mut state = self
            .state
            .write()
            .map_err(|err| ConnectError::client(std::io::Error::other(err.to_string())))?;

        if state.refused.contains(name) {
            return Err(ConnectError::InvalidCredential(format!(
                "connection to {name} refused"
            )));
        }

        let project = credential.project_id().unwrap_or_default().to_owned();
        let store = state.stores.entry(project).or_default().clone();
        state.connected.push(name.clone());
        Ok(Arc::new(store))
    }
}
