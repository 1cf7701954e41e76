//! Docshard: deterministic user-data routing across independent document
//! stores.
//!
//! Each user key is hashed onto a primary backend among N independently
//! provisioned document stores. When an operation fails there, the remaining
//! backends are tried one at a time in a fixed order until one succeeds or all
//! are exhausted. No coordinator, replication or cross-backend consistency is
//! involved: failover buys availability only.
//!
//! # Architecture
//!
//! Docshard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure placement and failover logic with no infrastructure
//!   dependencies
//! - **Ports**: Abstract trait interfaces for document stores, connectors and
//!   the environment
//! - **Adapters**: Concrete implementations of ports (in-memory stores, etc.)
//!
//! # Modules
//!
//! - [`store`]: Document-store capability and in-memory backend
//! - [`routing`]: Key hashing, registry, router and failover executor
//! - [`user_data`]: Public user record and token API
//! - [`bootstrap`]: Credential discovery and registry construction
//! - [`config`]: JSON configuration
//! - [`observability`]: Logging set-up

pub mod bootstrap;
pub mod config;
pub mod observability;
pub mod routing;
pub mod store;
pub mod user_data;
