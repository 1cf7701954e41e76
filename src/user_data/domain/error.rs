//! Errors returned by the user data service.

use crate::routing::services::FailoverError;
use thiserror::Error;

/// Caller-facing failures. Backend error details stay in the logs.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum UserDataError {
    /// No backend is registered.
    #[error("no storage backend is available")]
    Unavailable,

    /// Every backend in the failover ordering failed.
    #[error("storage request failed on all {attempts} backends")]
    Exhausted {
        /// Number of backends attempted.
        attempts: usize,
    },

    /// A backend rejected the request with a non-retryable failure.
    #[error("storage request was rejected")]
    Rejected,

    /// The key's primary backend failed a primary-only request.
    #[error("primary storage backend failed")]
    PrimaryFailed,
}

impl From<FailoverError> for UserDataError {
    fn from(err: FailoverError) -> Self {
        match err {
            FailoverError::NoBackendAvailable => Self::Unavailable,
            FailoverError::AllBackendsFailed { attempts, .. } => Self::Exhausted { attempts },
            FailoverError::PermanentFailure { .. } => Self::Rejected,
            FailoverError::PrimaryFailed { .. } => Self::PrimaryFailed,
        }
    }
}

/// Result type for user data service operations.
pub type UserDataResult<T> = Result<T, UserDataError>;
