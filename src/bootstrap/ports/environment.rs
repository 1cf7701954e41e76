//! Environment port.

/// Read access to environment variables.
pub trait Environment: Send + Sync {
    /// Returns the variable's value, or `None` when unset or not UTF-8.
    fn var(&self, name: &str) -> Option<String>;
}

/// The current process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}
