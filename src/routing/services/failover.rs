//! Sequential failover across the backends of a registry.
//!
//! [`FailoverExecutor`] runs a [`StoreOperation`] against the router's
//! ordering one backend at a time. Each attempt has its own deadline; the
//! first success wins and no further backend is touched. There is no health
//! probing and no fan-out.
//!
//! A write that committed on one backend but reported failure can be repeated
//! on the next one. Nothing here detects or reconciles such duplicates.

use crate::routing::{
    domain::{BackendRegistry, FailoverOrder, FailoverPolicy, KeyHasher, Md5KeyHasher, RoutingKey},
    ports::StoreOperation,
    services::Router,
};
use crate::store::{
    domain::BackendName,
    ports::{DocumentStoreError, DocumentStoreResult},
};
use std::sync::Arc;
use thiserror::Error;

/// Failures surfaced by the failover executor.
#[derive(Debug, Clone, Error)]
pub enum FailoverError {
    /// The registry holds no backend. Never retried.
    #[error("no backend available")]
    NoBackendAvailable,

    /// Every backend in the ordering failed.
    #[error("all {attempts} backends failed; last failure on {backend}: {source}")]
    AllBackendsFailed {
        /// Number of backends attempted.
        attempts: usize,
        /// Last backend attempted.
        backend: BackendName,
        /// Failure observed on the last backend.
        source: DocumentStoreError,
    },

    /// A permanent failure stopped failover before the ordering was exhausted.
    #[error("permanent failure on backend {backend}: {source}")]
    PermanentFailure {
        /// Backend that reported the failure.
        backend: BackendName,
        /// Failure reported by the backend.
        source: DocumentStoreError,
    },

    /// A primary-only operation failed.
    #[error("primary backend {backend} failed: {source}")]
    PrimaryFailed {
        /// Primary backend for the routing key.
        backend: BackendName,
        /// Failure reported by the backend.
        source: DocumentStoreError,
    },
}

impl FailoverError {
    /// Returns the last backend error retained for diagnostics.
    #[must_use]
    pub const fn last_error(&self) -> Option<&DocumentStoreError> {
        match self {
            Self::NoBackendAvailable => None,
            Self::AllBackendsFailed { source, .. }
            | Self::PermanentFailure { source, .. }
            | Self::PrimaryFailed { source, .. } => Some(source),
        }
    }

    /// Returns the backend that produced the retained error.
    #[must_use]
    pub const fn failed_backend(&self) -> Option<&BackendName> {
        match self {
            Self::NoBackendAvailable => None,
            Self::AllBackendsFailed { backend, .. }
            | Self::PermanentFailure { backend, .. }
            | Self::PrimaryFailed { backend, .. } => Some(backend),
        }
    }
}

/// Result type for failover executor operations.
pub type FailoverResult<T> = Result<T, FailoverError>;

/// Runs operations against backends in deterministic failover order.
#[derive(Debug, Clone)]
pub struct FailoverExecutor<H = Md5KeyHasher> {
    registry: Arc<BackendRegistry>,
    router: Router<H>,
    policy: FailoverPolicy,
}

impl FailoverExecutor {
    /// Creates an executor with the default router and policy.
    #[must_use]
    pub fn new(registry: Arc<BackendRegistry>) -> Self {
        Self::with_router(registry, Router::new(), FailoverPolicy::default())
    }
}

impl<H: KeyHasher> FailoverExecutor<H> {
    /// Creates an executor with an explicit router and policy.
    #[must_use]
    pub const fn with_router(
        registry: Arc<BackendRegistry>,
        router: Router<H>,
        policy: FailoverPolicy,
    ) -> Self {
        Self {
            registry,
            router,
            policy,
        }
    }

    /// Replaces the failover policy.
    #[must_use]
    pub const fn with_policy(mut self, policy: FailoverPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the registry snapshot.
    #[must_use]
    pub fn registry(&self) -> &BackendRegistry {
        &self.registry
    }

    /// Returns the router.
    #[must_use]
    pub const fn router(&self) -> &Router<H> {
        &self.router
    }

    /// Returns the failover policy.
    #[must_use]
    pub const fn policy(&self) -> FailoverPolicy {
        self.policy
    }

    /// Returns the failover ordering for `key`.
    #[must_use]
    pub fn route(&self, key: &RoutingKey) -> FailoverOrder {
        self.router.route(&self.registry, key)
    }

    /// Runs `operation` against the ordering for `key` until one backend
    /// succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`FailoverError::NoBackendAvailable`] without invoking the
    /// operation when the registry is empty,
    /// [`FailoverError::PermanentFailure`] when the policy forbids failing
    /// over a non-last failure, and [`FailoverError::AllBackendsFailed`] when
    /// every backend failed.
    pub async fn execute<O>(&self, key: &RoutingKey, operation: &O) -> FailoverResult<O::Output>
    where
        O: StoreOperation,
    {
        let order = self.route(key);
        if order.is_empty() {
            tracing::warn!(
                operation = operation.name(),
                "no backend available, rejecting call"
            );
            return Err(FailoverError::NoBackendAvailable);
        }

        let attempts = order.len();
        let mut last_failure: Option<(BackendName, DocumentStoreError)> = None;

        for (attempt, backend) in order.iter().enumerate() {
            tracing::debug!(
                operation = operation.name(),
                routing_key = %key,
                backend = %backend,
                attempt = attempt + 1,
                attempts,
                "attempting backend"
            );

            let error = match self.attempt(backend, operation).await {
                Ok(output) => return Ok(output),
                Err(error) => error,
            };

            let is_last = attempt + 1 == attempts;
            tracing::warn!(
                operation = operation.name(),
                backend = %backend,
                attempt = attempt + 1,
                attempts,
                transient = error.is_transient(),
                error = %error,
                "backend attempt failed"
            );

            if !is_last && !self.policy.permits_failover(&error) {
                return Err(FailoverError::PermanentFailure {
                    backend: backend.clone(),
                    source: error,
                });
            }
            last_failure = Some((backend.clone(), error));
        }

        let Some((backend, source)) = last_failure else {
            return Err(FailoverError::NoBackendAvailable);
        };
        tracing::error!(
            operation = operation.name(),
            attempts,
            last_backend = %backend,
            "all backends failed"
        );
        Err(FailoverError::AllBackendsFailed {
            attempts,
            backend,
            source,
        })
    }

    /// Runs `operation` against the primary backend for `key` only.
    ///
    /// # Errors
    ///
    /// Returns [`FailoverError::NoBackendAvailable`] when the registry is
    /// empty and [`FailoverError::PrimaryFailed`] when the primary fails.
    pub async fn execute_on_primary<O>(
        &self,
        key: &RoutingKey,
        operation: &O,
    ) -> FailoverResult<O::Output>
    where
        O: StoreOperation,
    {
        let Some(backend) = self.router.primary(&self.registry, key) else {
            tracing::warn!(
                operation = operation.name(),
                "no backend available, rejecting call"
            );
            return Err(FailoverError::NoBackendAvailable);
        };

        self.attempt(&backend, operation).await.map_err(|source| {
            tracing::warn!(
                operation = operation.name(),
                backend = %backend,
                error = %source,
                "primary backend failed"
            );
            FailoverError::PrimaryFailed { backend, source }
        })
    }

    async fn attempt<O>(&self, backend: &BackendName, operation: &O) -> DocumentStoreResult<O::Output>
    where
        O: StoreOperation,
    {
        let store = self.registry.get(backend).ok_or_else(|| {
            DocumentStoreError::Unavailable(format!("backend {backend} is not registered"))
        })?;
        let deadline = self.policy.attempt_timeout();
        tokio::time::timeout(deadline, operation.run(store.as_ref()))
            .await
            .unwrap_or_else(|_| Err(DocumentStoreError::Timeout(deadline)))
    }
}
