//! Service-account credentials.

use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

/// Where a credential was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    /// An environment variable.
    Environment(String),
    /// A file relative to the bootstrap root.
    File(String),
}

impl fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Environment(name) => write!(f, "env:{name}"),
            Self::File(path) => write!(f, "file:{path}"),
        }
    }
}

/// Errors returned while parsing a credential.
#[derive(Debug, Error)]
pub enum CredentialError {
    /// The payload is not valid JSON.
    #[error("credential from {source_name} is not valid JSON: {error}")]
    InvalidJson {
        /// Where the payload came from.
        source_name: CredentialSource,
        /// Parser failure.
        error: serde_json::Error,
    },

    /// The payload is JSON but not an object.
    #[error("credential from {0} must be a JSON object")]
    NotAnObject(CredentialSource),
}

/// Parsed service-account key.
///
/// The document is kept opaque apart from `project_id`, which identifies the
/// physical store. Debug output never prints the key material.
#[derive(Clone, PartialEq)]
pub struct ServiceAccountCredential {
    source: CredentialSource,
    document: Map<String, Value>,
}

impl ServiceAccountCredential {
    /// Parses a credential from its JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::InvalidJson`] when the text is not JSON and
    /// [`CredentialError::NotAnObject`] when it is not a JSON object.
    pub fn parse(source: CredentialSource, json: &str) -> Result<Self, CredentialError> {
        let value: Value =
            serde_json::from_str(json).map_err(|error| CredentialError::InvalidJson {
                source_name: source.clone(),
                error,
            })?;
        match value {
            Value::Object(document) => Ok(Self { source, document }),
            _ => Err(CredentialError::NotAnObject(source)),
        }
    }

    /// Returns where the credential was found.
    #[must_use]
    pub const fn source(&self) -> &CredentialSource {
        &self.source
    }

    /// Returns the `project_id` field when present.
    #[must_use]
    pub fn project_id(&self) -> Option<&str> {
        self.document.get("project_id").and_then(Value::as_str)
    }

    /// Returns the raw credential document for the client library.
    #[must_use]
    pub const fn document(&self) -> &Map<String, Value> {
        &self.document
    }
}

impl fmt::Debug for ServiceAccountCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceAccountCredential")
            .field("source", &self.source)
            .field("project_id", &self.project_id())
            .finish_non_exhaustive()
    }
}
