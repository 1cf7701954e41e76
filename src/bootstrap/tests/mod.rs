//! Unit tests for the backend bootstrap.
