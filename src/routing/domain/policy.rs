//! Failover policy: per-attempt deadline and retry scope.

use crate::store::ports::DocumentStoreError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Deadline applied to each backend attempt unless configured otherwise.
pub const DEFAULT_ATTEMPT_TIMEOUT: Duration = Duration::from_secs(10);

/// Which failures on a non-last backend move the call to the next backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailoverScope {
    /// Every failure fails over.
    #[default]
    AnyFailure,
    /// Only transient failures fail over; a permanent failure ends the call.
    TransientOnly,
}

/// Policy consulted by the failover executor after each failed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FailoverPolicy {
    attempt_timeout: Duration,
    scope: FailoverScope,
}

impl FailoverPolicy {
    /// Creates a policy.
    #[must_use]
    pub const fn new(attempt_timeout: Duration, scope: FailoverScope) -> Self {
        Self {
            attempt_timeout,
            scope,
        }
    }

    /// Returns a copy with a different per-attempt deadline.
    #[must_use]
    pub const fn with_attempt_timeout(mut self, attempt_timeout: Duration) -> Self {
        self.attempt_timeout = attempt_timeout;
        self
    }

    /// Returns a copy with a different failover scope.
    #[must_use]
    pub const fn with_scope(mut self, scope: FailoverScope) -> Self {
        self.scope = scope;
        self
    }

    /// Returns the per-attempt deadline.
    #[must_use]
    pub const fn attempt_timeout(&self) -> Duration {
        self.attempt_timeout
    }

    /// Returns the failover scope.
    #[must_use]
    pub const fn scope(&self) -> FailoverScope {
        self.scope
    }

    /// Returns `true` when `error` allows trying the next backend.
    #[must_use]
    pub fn permits_failover(&self, error: &DocumentStoreError) -> bool {
        match self.scope {
            FailoverScope::AnyFailure => true,
            FailoverScope::TransientOnly => error.is_transient(),
        }
    }
}

impl Default for FailoverPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_ATTEMPT_TIMEOUT, FailoverScope::default())
    }
}
