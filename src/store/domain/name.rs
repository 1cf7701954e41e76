//! Backend connection names.

use super::StoreDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

const MAX_NAME_LENGTH: usize = 100;

/// Identifier of one backend connection inside a registry.
///
/// Registration order of these names fixes key placement, so they come from
/// deployment sources that are stable across restarts: `main`, `db1`..`db9`,
/// `main_2`, or the stem of a credential file such as `eu-west`.
/// Deserialising runs the same checks as [`BackendName::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BackendName(String);

impl BackendName {
    /// Normalises `value` (surrounding whitespace dropped, ASCII lowercased)
    /// and checks it.
    ///
    /// # Errors
    ///
    /// [`StoreDomainError::EmptyBackendName`] for blank input,
    /// [`StoreDomainError::BackendNameTooLong`] past 100 bytes and
    /// [`StoreDomainError::InvalidBackendName`] for anything outside
    /// `[a-z0-9_-]`.
    pub fn new(value: impl Into<String>) -> Result<Self, StoreDomainError> {
        let raw = value.into();
        let candidate = raw.trim().to_ascii_lowercase();

        match candidate.len() {
            0 => Err(StoreDomainError::EmptyBackendName),
            len if len > MAX_NAME_LENGTH => Err(StoreDomainError::BackendNameTooLong(raw)),
            _ if !candidate.chars().all(is_name_char) => {
                Err(StoreDomainError::InvalidBackendName(raw))
            }
            _ => Ok(Self(candidate)),
        }
    }

    /// Returns the backend name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for BackendName {
    type Error = StoreDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BackendName> for String {
    fn from(name: BackendName) -> Self {
        name.0
    }
}

impl AsRef<str> for BackendName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

const fn is_name_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '_' | '-')
}

impl fmt::Display for BackendName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
