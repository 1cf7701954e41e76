//! Single-backend document operations dispatched through failover.

use crate::routing::ports::StoreOperation;
use crate::store::{
    domain::{CollectionName, Document, WriteMode},
    ports::{DocumentStore, DocumentStoreResult},
};
use async_trait::async_trait;

/// Writes a document.
#[derive(Debug, Clone)]
pub struct SetDocument {
    name: &'static str,
    collection: CollectionName,
    key: String,
    document: Document,
    mode: WriteMode,
}

impl SetDocument {
    /// Creates a write of `document` under `collection`/`key`.
    #[must_use]
    pub fn new(
        name: &'static str,
        collection: CollectionName,
        key: impl Into<String>,
        document: Document,
        mode: WriteMode,
    ) -> Self {
        Self {
            name,
            collection,
            key: key.into(),
            document,
            mode,
        }
    }
}

#[async_trait]
impl StoreOperation for SetDocument {
    type Output = ();

    fn name(&self) -> &'static str {
        self.name
    }

    async fn run(&self, store: &dyn DocumentStore) -> DocumentStoreResult<()> {
        store
            .set(&self.collection, &self.key, &self.document, self.mode)
            .await
    }
}

/// Reads a document; a missing document is a successful `None`.
#[derive(Debug, Clone)]
pub struct GetDocument {
    name: &'static str,
    collection: CollectionName,
    key: String,
}

impl GetDocument {
    /// Creates a read of `collection`/`key`.
    #[must_use]
    pub fn new(name: &'static str, collection: CollectionName, key: impl Into<String>) -> Self {
        Self {
            name,
            collection,
            key: key.into(),
        }
    }
}

#[async_trait]
impl StoreOperation for GetDocument {
    type Output = Option<Document>;

    fn name(&self) -> &'static str {
        self.name
    }

    async fn run(&self, store: &dyn DocumentStore) -> DocumentStoreResult<Option<Document>> {
        store.get(&self.collection, &self.key).await
    }
}

/// Merges a partial update into an existing document.
#[derive(Debug, Clone)]
pub struct UpdateDocument {
    name: &'static str,
    collection: CollectionName,
    key: String,
    delta: Document,
}

impl UpdateDocument {
    /// Creates an update of `collection`/`key` with `delta`.
    #[must_use]
    pub fn new(
        name: &'static str,
        collection: CollectionName,
        key: impl Into<String>,
        delta: Document,
    ) -> Self {
        Self {
            name,
            collection,
            key: key.into(),
            delta,
        }
    }
}

#[async_trait]
impl StoreOperation for UpdateDocument {
    type Output = ();

    fn name(&self) -> &'static str {
        self.name
    }

    async fn run(&self, store: &dyn DocumentStore) -> DocumentStoreResult<()> {
        store.update(&self.collection, &self.key, &self.delta).await
    }
}

/// Deletes a document.
#[derive(Debug, Clone)]
pub struct DeleteDocument {
    name: &'static str,
    collection: CollectionName,
    key: String,
}

impl DeleteDocument {
    /// Creates a delete of `collection`/`key`.
    #[must_use]
    pub fn new(name: &'static str, collection: CollectionName, key: impl Into<String>) -> Self {
        Self {
            name,
            collection,
            key: key.into(),
        }
    }
}

#[async_trait]
impl StoreOperation for DeleteDocument {
    type Output = ();

    fn name(&self) -> &'static str {
        self.name
    }

    async fn run(&self, store: &dyn DocumentStore) -> DocumentStoreResult<()> {
        store.delete(&self.collection, &self.key).await
    }
}
