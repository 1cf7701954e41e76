//! Port contracts for backend bootstrap.

pub mod connector;
pub mod environment;

pub use connector::{BackendConnector, ConnectError};
pub use environment::{Environment, ProcessEnvironment};
