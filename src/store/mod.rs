//! Document-store capability for docshard.
//!
//! Every backend the router can pick is an independently provisioned document
//! store reached through the [`ports::DocumentStore`] contract. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
