//! Configuration schema.

use crate::routing::domain::{DEFAULT_ATTEMPT_TIMEOUT, FailoverPolicy, FailoverScope};
use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocshardConfig {
    /// Where the bootstrap looks for backend credentials.
    pub bootstrap: BootstrapConfig,
    /// Failover behaviour of the executor.
    pub failover: FailoverSettings,
}

/// Credential discovery settings for the bootstrap.
///
/// Relative paths resolve against the bootstrap root directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BootstrapConfig {
    /// Environment variable holding the main service-account JSON.
    pub main_credentials_env: String,
    /// File read when the main environment variable is absent or invalid.
    pub main_credentials_file: Utf8PathBuf,
    /// Prefix of numbered credential variables (`DB` in `DB1_CREDENTIALS`).
    pub additional_env_prefix: String,
    /// Suffix of numbered credential variables.
    pub additional_env_suffix: String,
    /// Highest slot number probed; slots start at 1.
    pub additional_slots: u8,
    /// Name prefix of backends created from numbered variables (`db1`).
    pub additional_name_prefix: String,
    /// Whether a lone main backend is connected again under extra names.
    pub duplicate_single_backend: bool,
    /// How many extra connections the duplication creates.
    pub duplicate_count: usize,
    /// Directory scanned for `*.json` credential files.
    pub credentials_dir: Utf8PathBuf,
    /// The directory is only scanned while at most this many backends exist.
    pub directory_scan_threshold: usize,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            main_credentials_env: "FIREBASE_SERVICE_ACCOUNT_JSON".to_owned(),
            main_credentials_file: Utf8PathBuf::from("firebase-service-account.json"),
            additional_env_prefix: "DB".to_owned(),
            additional_env_suffix: "_CREDENTIALS".to_owned(),
            additional_slots: 9,
            additional_name_prefix: "db".to_owned(),
            duplicate_single_backend: true,
            duplicate_count: 2,
            credentials_dir: Utf8PathBuf::from("firestore_credentials"),
            directory_scan_threshold: 3,
        }
    }
}

impl BootstrapConfig {
    /// Returns the environment variable name for a numbered slot.
    #[must_use]
    pub fn additional_env_var(&self, slot: u8) -> String {
        format!(
            "{}{slot}{}",
            self.additional_env_prefix, self.additional_env_suffix
        )
    }

    /// Returns the backend name for a numbered slot.
    #[must_use]
    pub fn additional_backend_name(&self, slot: u8) -> String {
        format!("{}{slot}", self.additional_name_prefix)
    }
}

/// Failover settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FailoverSettings {
    /// Per-attempt deadline in milliseconds. Must be positive.
    pub attempt_timeout_ms: u64,
    /// Which failures move a call to the next backend.
    pub scope: FailoverScope,
}

impl Default for FailoverSettings {
    fn default() -> Self {
        Self {
            attempt_timeout_ms: u64::try_from(DEFAULT_ATTEMPT_TIMEOUT.as_millis())
                .unwrap_or(u64::MAX),
            scope: FailoverScope::default(),
        }
    }
}

impl FailoverSettings {
    /// Returns the per-attempt deadline.
    #[must_use]
    pub const fn attempt_timeout(&self) -> Duration {
        Duration::from_millis(self.attempt_timeout_ms)
    }

    /// Converts the settings into an executor policy.
    #[must_use]
    pub const fn policy(&self) -> FailoverPolicy {
        FailoverPolicy::new(self.attempt_timeout(), self.scope)
    }
}
