//! Error types for registry construction.

use crate::store::domain::BackendName;
use thiserror::Error;

/// Errors returned while building a backend registry.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A backend with the same name was already registered.
    #[error("duplicate backend name: {0}")]
    DuplicateBackendName(BackendName),
}
