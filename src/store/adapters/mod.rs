//! Adapter implementations for the document-store port.

pub mod memory;
