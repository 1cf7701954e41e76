//! User data access for docshard.
//!
//! This is the only surface other application layers should call: user
//! records and token blobs are saved, read, updated and deleted by user key,
//! and every call is routed through the failover executor. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Orchestration services in [`services`]

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
