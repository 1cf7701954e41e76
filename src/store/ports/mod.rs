//! Port contracts for document-store backends.
//!
//! Ports define infrastructure-agnostic interfaces used by the router and the
//! user data services.

pub mod document_store;

pub use document_store::{
    DocumentStore, DocumentStoreError, DocumentStoreResult, FailureClass, SharedDocumentStore,
};

#[cfg(test)]
pub use document_store::MockDocumentStore;
