//! Port contracts for work dispatched through the failover executor.

pub mod operation;

pub use operation::StoreOperation;
