//! Connector port: turns credentials into live backend handles.

use crate::bootstrap::domain::ServiceAccountCredential;
use crate::store::{domain::BackendName, ports::SharedDocumentStore};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Creates document-store connections for the bootstrap.
///
/// Implementations wrap the document-store client library. Connecting the
/// same credential twice must yield an independent connection to the same
/// physical store.
#[async_trait]
pub trait BackendConnector: Send + Sync {
    /// Opens a connection registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectError`] when the client cannot be initialised.
    async fn connect(
        &self,
        name: &BackendName,
        credential: &ServiceAccountCredential,
    ) -> Result<SharedDocumentStore, ConnectError>;
}

/// Errors returned by connector implementations.
#[derive(Debug, Clone, Error)]
pub enum ConnectError {
    /// The credential was rejected by the client library.
    #[error("credential rejected: {0}")]
    InvalidCredential(String),

    /// Client initialisation failed.
    #[error("connection failed: {0}")]
    Client(Arc<dyn std::error::Error + Send + Sync>),
}

impl ConnectError {
    /// Wraps a client library error.
    pub fn client(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Client(Arc::new(err))
    }
}
