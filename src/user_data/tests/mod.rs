//! Unit tests for the user data service.
