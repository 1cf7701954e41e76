//! Step definitions for failover routing scenarios.

mod given;
mod then;
mod when;
pub mod world;
