//! Domain model for key placement and failover.
//!
//! Everything here is pure: hashing, registry snapshots, orderings and the
//! failover policy carry no I/O.

mod error;
mod hasher;
mod key;
mod order;
mod policy;
mod registry;

pub use error::RegistryError;
pub use hasher::{KeyHasher, Md5KeyHasher};
pub use key::RoutingKey;
pub use order::FailoverOrder;
pub use policy::{DEFAULT_ATTEMPT_TIMEOUT, FailoverPolicy, FailoverScope};
pub use registry::{BackendRegistry, BackendRegistryBuilder};
