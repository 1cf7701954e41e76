//! Unit tests for routing and failover.
