//! Key-to-backend placement.
//!
//! [`Router`] turns a routing key and a registry snapshot into a
//! [`FailoverOrder`]: the primary is `hash(key) mod len`, the rest follow in
//! registration order. Placement depends on nothing but the key's hash and
//! the registry contents.

use crate::routing::domain::{BackendRegistry, FailoverOrder, KeyHasher, Md5KeyHasher, RoutingKey};
use crate::store::domain::BackendName;

/// Stateless router over a pluggable key hasher.
#[derive(Debug, Clone, Copy, Default)]
pub struct Router<H = Md5KeyHasher> {
    hasher: H,
}

impl Router {
    /// Creates a router using [`Md5KeyHasher`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hasher: Md5KeyHasher,
        }
    }
}

impl<H: KeyHasher> Router<H> {
    /// Creates a router using a custom hasher.
    #[must_use]
    pub const fn with_hasher(hasher: H) -> Self {
        Self { hasher }
    }

    /// Returns the primary position for `key` among `backend_count` backends.
    ///
    /// Returns `None` when there are no backends.
    #[must_use]
    pub fn primary_index_among(&self, backend_count: usize, key: &RoutingKey) -> Option<usize> {
        let modulus = u128::try_from(backend_count).ok()?;
        let position = self.hasher.hash(key).checked_rem(modulus)?;
        usize::try_from(position).ok()
    }

    /// Returns the primary position for `key` in the registry.
    #[must_use]
    pub fn primary_index(&self, registry: &BackendRegistry, key: &RoutingKey) -> Option<usize> {
        self.primary_index_among(registry.len(), key)
    }

    /// Returns the name of the primary backend for `key`.
    #[must_use]
    pub fn primary(&self, registry: &BackendRegistry, key: &RoutingKey) -> Option<BackendName> {
        self.route(registry, key).primary().cloned()
    }

    /// Computes the failover ordering for `key` over a list of names given in
    /// registration order.
    #[must_use]
    pub fn route_names(&self, names: &[BackendName], key: &RoutingKey) -> FailoverOrder {
        self.primary_index_among(names.len(), key)
            .map_or_else(FailoverOrder::empty, |index| {
                FailoverOrder::from_primary(names, index)
            })
    }

    /// Computes the failover ordering for `key` over the registry.
    ///
    /// An empty registry yields an empty ordering.
    #[must_use]
    pub fn route(&self, registry: &BackendRegistry, key: &RoutingKey) -> FailoverOrder {
        self.route_names(&registry.names(), key)
    }
}
