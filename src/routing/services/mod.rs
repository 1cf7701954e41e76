//! Application services for routing and failover.

mod failover;
mod router;

pub use failover::{FailoverError, FailoverExecutor, FailoverResult};
pub use router::Router;
