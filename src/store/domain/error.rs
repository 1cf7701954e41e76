//! Error types for document-store domain validation.

use thiserror::Error;

/// Errors returned while constructing document-store domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreDomainError {
    /// The backend name is empty after trimming.
    #[error("backend name must not be empty")]
    EmptyBackendName,

    /// The backend name contains characters outside `[a-z0-9_-]`.
    #[error(
        "backend name '{0}' contains invalid characters (only lowercase alphanumeric, underscores and hyphens allowed)"
    )]
    InvalidBackendName(String),

    /// The backend name exceeds the 100-character limit.
    #[error("backend name exceeds 100 character limit: {0}")]
    BackendNameTooLong(String),

    /// The collection name is empty after trimming.
    #[error("collection name must not be empty")]
    EmptyCollectionName,

    /// The collection name contains a path separator.
    #[error("collection name '{0}' must not contain '/'")]
    InvalidCollectionName(String),
}
