//! Domain model for backend bootstrap.

mod credential;

pub use credential::{CredentialError, CredentialSource, ServiceAccountCredential};
