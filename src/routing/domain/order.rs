//! Failover ordering for one routing key.

use crate::store::domain::BackendName;

/// Permutation of registry backend names, primary first.
///
/// An empty ordering means no backend is available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailoverOrder {
    primary_index: Option<usize>,
    backends: Vec<BackendName>,
}

impl FailoverOrder {
    /// Returns the ordering used when no backend is registered.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            primary_index: None,
            backends: Vec::new(),
        }
    }

    /// Builds the ordering for a primary position within `names`.
    ///
    /// The primary comes first, then every other name in its original order.
    /// Returns an empty ordering when `primary_index` is out of range.
    #[must_use]
    pub fn from_primary(names: &[BackendName], primary_index: usize) -> Self {
        let Some(primary) = names.get(primary_index) else {
            return Self::empty();
        };

        let backends = std::iter::once(primary)
            .chain(
                names
                    .iter()
                    .enumerate()
                    .filter(|(index, _)| *index != primary_index)
                    .map(|(_, name)| name),
            )
            .cloned()
            .collect();

        Self {
            primary_index: Some(primary_index),
            backends,
        }
    }

    /// Returns the registry position of the primary backend.
    #[must_use]
    pub const fn primary_index(&self) -> Option<usize> {
        self.primary_index
    }

    /// Returns the primary backend name.
    #[must_use]
    pub fn primary(&self) -> Option<&BackendName> {
        self.backends.first()
    }

    /// Returns the backend names in attempt order.
    #[must_use]
    pub fn backends(&self) -> &[BackendName] {
        &self.backends
    }

    /// Returns the number of backends in the ordering.
    #[must_use]
    pub fn len(&self) -> usize {
        self.backends.len()
    }

    /// Returns `true` when no backend is available.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.backends.is_empty()
    }

    /// Iterates over backend names in attempt order.
    pub fn iter(&self) -> std::slice::Iter<'_, BackendName> {
        self.backends.iter()
    }
}

impl<'a> IntoIterator for &'a FailoverOrder {
    type Item = &'a BackendName;
    type IntoIter = std::slice::Iter<'a, BackendName>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
