//! Single-backend operation contract.

use crate::store::ports::{DocumentStore, DocumentStoreResult};
use async_trait::async_trait;

/// Unit of work run against one backend at a time.
///
/// An operation captures its business payload up front and may be invoked
/// once per backend in the failover ordering, so `run` must not consume it.
#[async_trait]
pub trait StoreOperation: Send + Sync {
    /// Value produced by a successful attempt.
    type Output: Send;

    /// Short label used in log events (e.g. `save_user_data`).
    fn name(&self) -> &'static str;

    /// Runs the operation against a single backend.
    ///
    /// # Errors
    ///
    /// Returns the backend's [`crate::store::ports::DocumentStoreError`]
    /// unchanged so the executor can classify it.
    async fn run(&self, store: &dyn DocumentStore) -> DocumentStoreResult<Self::Output>;
}
