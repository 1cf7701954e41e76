//! Adapter implementations for bootstrap ports.

pub mod memory;
