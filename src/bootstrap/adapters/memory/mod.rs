//! In-memory bootstrap adapters for tests and local runs.

mod connector;
mod environment;

pub use connector::InMemoryConnector;
pub use environment::InMemoryEnvironment;
