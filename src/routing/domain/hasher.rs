//! Stable routing-key digests.

use super::RoutingKey;

/// Maps a routing key onto an unsigned 128-bit integer.
///
/// Implementations must be pure: the same key always yields the same value,
/// across restarts and across implementations of the same digest.
pub trait KeyHasher: Send + Sync {
    /// Hashes the routing key.
    fn hash(&self, key: &RoutingKey) -> u128;
}

/// MD5 digest of the key's UTF-8 bytes read as a big-endian integer.
///
/// This matches `int(md5(key).hexdigest(), 16)`, so operators can reproduce a
/// placement with any MD5 tool. Uniformity is what matters here; the digest
/// is not used for authentication.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Md5KeyHasher;

impl KeyHasher for Md5KeyHasher {
    #[expect(
        clippy::big_endian_bytes,
        reason = "placement must equal the digest read as a hex integer"
    )]
    fn hash(&self, key: &RoutingKey) -> u128 {
        let digest = md5::compute(key.as_str().as_bytes());
        u128::from_be_bytes(digest.0)
    }
}
