//! Process configuration for docshard.
//!
//! Configuration is a JSON document read once at start-up. Every field has a
//! default, so an empty object (or no file at all) yields the deployment
//! layout the bootstrap expects. Semantic checks run after deserialisation.

mod loader;
mod schema;

pub use loader::{ConfigError, load_config, parse_config};
pub use schema::{BootstrapConfig, DocshardConfig, FailoverSettings};
