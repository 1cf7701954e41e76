//! Backend bootstrap for docshard.
//!
//! Discovers service-account credentials (environment, fallback file,
//! credentials directory), connects each one through a
//! [`ports::BackendConnector`] and freezes the survivors into a
//! [`crate::routing::domain::BackendRegistry`]. Every failure is logged and
//! skipped; the router only ever sees the backends that connected, possibly
//! none. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
