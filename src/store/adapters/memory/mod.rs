//! In-memory adapter implementations.
//!
//! These adapters keep documents in process memory. They back the test
//! suites and local runs, and can inject failures and latency to exercise
//! failover.

mod document_store;

pub use document_store::InMemoryDocumentStore;
