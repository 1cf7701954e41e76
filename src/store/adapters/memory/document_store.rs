//! Thread-safe in-memory document store with fault injection.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::store::{
    domain::{CollectionName, Document, WriteMode, update_fields},
    ports::{DocumentStore, DocumentStoreError, DocumentStoreResult},
};

type DocumentAddress = (CollectionName, String);

/// In-memory document-store backend.
///
/// Clones share the same underlying state, so one store can be registered
/// under several backend names the way the bootstrap duplicates a single
/// connection.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocumentStore {
    state: Arc<RwLock<InMemoryStoreState>>,
    calls: Arc<AtomicUsize>,
}

#[derive(Debug, Default)]
struct InMemoryStoreState {
    documents: HashMap<DocumentAddress, Document>,
    queued_failures: VecDeque<DocumentStoreError>,
    sticky_failure: Option<DocumentStoreError>,
    latency: Option<Duration>,
}

impl InMemoryDocumentStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a failure returned by the next operation only.
    ///
    /// Queued failures are consumed in FIFO order before the sticky failure is
    /// consulted.
    ///
    /// # Errors
    ///
    /// Returns a backend error when lock acquisition fails.
    pub fn fail_next(&self, error: DocumentStoreError) -> DocumentStoreResult<()> {
        self.write_state()?.queued_failures.push_back(error);
        Ok(())
    }

    /// Makes every operation fail with `error` until cleared.
    ///
    /// # Errors
    ///
    /// Returns a backend error when lock acquisition fails.
    pub fn fail_always(&self, error: DocumentStoreError) -> DocumentStoreResult<()> {
        self.write_state()?.sticky_failure = Some(error);
        Ok(())
    }

    /// Clears queued and sticky failures.
    ///
    /// # Errors
    ///
    /// Returns a backend error when lock acquisition fails.
    pub fn clear_failures(&self) -> DocumentStoreResult<()> {
        let mut state = self.write_state()?;
        state.queued_failures.clear();
        state.sticky_failure = None;
        Ok(())
    }

    /// Delays every operation by `latency` before it runs.
    ///
    /// # Errors
    ///
    /// Returns a backend error when lock acquisition fails.
    pub fn set_latency(&self, latency: Duration) -> DocumentStoreResult<()> {
        self.write_state()?.latency = Some(latency);
        Ok(())
    }

    /// Returns the number of operations invoked on this store (and its
    /// clones), including failed ones.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Returns a stored document without going through the port or counting
    /// a call.
    ///
    /// # Errors
    ///
    /// Returns a backend error when lock acquisition fails.
    pub fn peek(
        &self,
        collection: &CollectionName,
        key: &str,
    ) -> DocumentStoreResult<Option<Document>> {
        let state = self.read_state()?;
        Ok(state
            .documents
            .get(&(collection.clone(), key.to_owned()))
            .cloned())
    }

    /// Returns the number of stored documents across all collections.
    ///
    /// # Errors
    ///
    /// Returns a backend error when lock acquisition fails.
    pub fn document_count(&self) -> DocumentStoreResult<usize> {
        Ok(self.read_state()?.documents.len())
    }

    fn read_state(&self) -> DocumentStoreResult<std::sync::RwLockReadGuard<'_, InMemoryStoreState>> {
        self.state
            .read()
            .map_err(|err| DocumentStoreError::backend(std::io::Error::other(err.to_string())))
    }

    fn write_state(
        &self,
    ) -> DocumentStoreResult<std::sync::RwLockWriteGuard<'_, InMemoryStoreState>> {
        self.state
            .write()
            .map_err(|err| DocumentStoreError::backend(std::io::Error::other(err.to_string())))
    }

    /// Counts the call, waits out any configured latency and surfaces an
    /// injected failure.
    async fn begin_call(&self) -> DocumentStoreResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let latency = self.read_state()?.latency;
        if let Some(delay) = latency {
            tokio::time::sleep(delay).await;
        }

        let mut state = self.write_state()?;
        if let Some(error) = state.queued_failures.pop_front() {
            return Err(error);
        }
        state.sticky_failure.clone().map_or(Ok(()), Err)
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn set(
        &self,
        collection: &CollectionName,
        key: &str,
        document: &Document,
        mode: WriteMode,
    ) -> DocumentStoreResult<()> {
        self.begin_call().await?;
        let mut state = self.write_state()?;
        let existing = state
            .documents
            .entry((collection.clone(), key.to_owned()))
            .or_default();
        mode.apply(existing, document);
        Ok(())
    }

    async fn get(
        &self,
        collection: &CollectionName,
        key: &str,
    ) -> DocumentStoreResult<Option<Document>> {
        self.begin_call().await?;
        self.peek(collection, key)
    }

    async fn update(
        &self,
        collection: &CollectionName,
        key: &str,
        delta: &Document,
    ) -> DocumentStoreResult<()> {
        self.begin_call().await?;
        let mut state = self.write_state()?;
        let existing = state
            .documents
            .get_mut(&(collection.clone(), key.to_owned()))
            .ok_or_else(|| DocumentStoreError::NotFound {
                collection: collection.clone(),
                key: key.to_owned(),
            })?;
        update_fields(existing, delta);
        Ok(())
    }

    async fn delete(&self, collection: &CollectionName, key: &str) -> DocumentStoreResult<()> {
        self.begin_call().await?;
        let mut state = self.write_state()?;
        state.documents.remove(&(collection.clone(), key.to_owned()));
        Ok(())
    }
}
