//! Deterministic backend routing and sequential failover.
//!
//! A routing key is hashed onto a primary backend of an immutable registry;
//! the remaining backends follow in registration order to form the failover
//! ordering. Operations run against that ordering one backend at a time until
//! one succeeds. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Orchestration services in [`services`]

pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
