//! Validated collection name type.

use super::StoreDomainError;
use std::borrow::Cow;
use std::fmt;

/// Name of a document collection inside a backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CollectionName(Cow<'static, str>);

impl CollectionName {
    /// Creates a validated collection name.
    ///
    /// # Errors
    ///
    /// Returns [`StoreDomainError::EmptyCollectionName`] when the value is
    /// empty after trimming, or [`StoreDomainError::InvalidCollectionName`]
    /// when it contains `/`.
    pub fn new(value: impl Into<String>) -> Result<Self, StoreDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(StoreDomainError::EmptyCollectionName);
        }

        if trimmed.contains('/') {
            return Err(StoreDomainError::InvalidCollectionName(raw));
        }

        Ok(Self(Cow::Owned(trimmed.to_owned())))
    }

    /// Wraps a compile-time collection name without validation.
    ///
    /// Reserved for well-known collections declared as constants.
    #[must_use]
    pub const fn from_static(value: &'static str) -> Self {
        Self(Cow::Borrowed(value))
    }

    /// Returns the collection name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CollectionName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for CollectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
