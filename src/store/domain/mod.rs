//! Domain model shared by every document-store backend.
//!
//! Backend names, collection names and documents are the only values the
//! router needs to understand; document contents stay opaque.

mod collection;
mod document;
mod error;
mod name;

pub use collection::CollectionName;
pub use document::{Document, WriteMode, update_fields};
pub use error::StoreDomainError;
pub use name::BackendName;
