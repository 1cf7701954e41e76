//! Fixed environment for tests.

use crate::bootstrap::ports::Environment;
use std::collections::HashMap;

/// Environment backed by a map instead of the process environment.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEnvironment {
    vars: HashMap<String, String>,
}

impl InMemoryEnvironment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy with `name` set to `value`.
    #[must_use]
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl Environment for InMemoryEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}
