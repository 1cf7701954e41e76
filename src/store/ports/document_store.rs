//! Document-store port: the capability set every backend handle offers.

use crate::store::domain::{CollectionName, Document, WriteMode};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Result type for document-store operations.
pub type DocumentStoreResult<T> = Result<T, DocumentStoreError>;

/// Shared handle to a live backend connection.
pub type SharedDocumentStore = Arc<dyn DocumentStore>;

/// Capability set of one document-store backend.
///
/// Documents are addressed by collection and document key. The router never
/// inspects document contents.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Writes a document, merging into or replacing any existing document.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentStoreError`] when the backend rejects the write.
    async fn set(
        &self,
        collection: &CollectionName,
        key: &str,
        document: &Document,
        mode: WriteMode,
    ) -> DocumentStoreResult<()>;

    /// Reads a document.
    ///
    /// Returns `None` when no document exists under the key.
    async fn get(
        &self,
        collection: &CollectionName,
        key: &str,
    ) -> DocumentStoreResult<Option<Document>>;

    /// Applies a partial update to an existing document.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentStoreError::NotFound`] when the document does not
    /// exist.
    async fn update(
        &self,
        collection: &CollectionName,
        key: &str,
        delta: &Document,
    ) -> DocumentStoreResult<()>;

    /// Deletes a document. Deleting a missing document succeeds.
    async fn delete(&self, collection: &CollectionName, key: &str) -> DocumentStoreResult<()>;
}

/// Retry classification of a backend failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    /// Retryable against a different backend (quota, rate limit, timeout).
    Transient,
    /// Any other failure.
    Permanent,
}

/// Errors returned by document-store adapters.
#[derive(Debug, Clone, Error)]
pub enum DocumentStoreError {
    /// The backend reported rate limiting or quota exhaustion.
    #[error("rate limited: {0}")]
    RateLimited(String),

    /// The attempt did not finish within its deadline.
    #[error("attempt timed out after {0:?}")]
    Timeout(Duration),

    /// The backend could not be reached.
    #[error("backend unavailable: {0}")]
    Unavailable(String),

    /// An update targeted a document that does not exist.
    #[error("document not found: {collection}/{key}")]
    NotFound {
        /// Collection that was addressed.
        collection: CollectionName,
        /// Document key that was addressed.
        key: String,
    },

    /// Generic backend failure.
    #[error("backend error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl DocumentStoreError {
    /// Wraps a client library error.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }

    /// Classifies the failure for failover decisions.
    ///
    /// Generic backend errors count as transient when their message carries a
    /// `429` status or mentions a quota.
    #[must_use]
    pub fn classify(&self) -> FailureClass {
        match self {
            Self::RateLimited(_) | Self::Timeout(_) | Self::Unavailable(_) => {
                FailureClass::Transient
            }
            Self::NotFound { .. } => FailureClass::Permanent,
            Self::Backend(err) => {
                let message = err.to_string();
                if message.contains("429") || message.to_lowercase().contains("quota") {
                    FailureClass::Transient
                } else {
                    FailureClass::Permanent
                }
            }
        }
    }

    /// Returns `true` when the failure is [`FailureClass::Transient`].
    #[must_use]
    pub fn is_transient(&self) -> bool {
        self.classify() == FailureClass::Transient
    }
}
