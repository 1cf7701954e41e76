//! Configuration loading from disk.

use super::DocshardConfig;
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use thiserror::Error;

/// Errors returned while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    Read {
        /// Path that was read.
        path: String,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// The configuration is not valid JSON for the schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configuration parsed but violates a semantic rule.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Reads and validates the configuration file at `path`.
///
/// # Errors
///
/// Returns [`ConfigError::Read`] when the file cannot be read,
/// [`ConfigError::Parse`] when it is not valid JSON for the schema, and
/// [`ConfigError::Invalid`] when a value is out of range.
pub fn load_config(path: &Utf8Path) -> Result<DocshardConfig, ConfigError> {
    let read_error = |source| ConfigError::Read {
        path: path.to_string(),
        source,
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| read_error(std::io::Error::other("path must include a file name")))?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
    let contents = dir.read_to_string(file_name).map_err(read_error)?;
    parse_config(&contents)
}

/// Parses and validates configuration from a JSON string.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] or [`ConfigError::Invalid`].
pub fn parse_config(contents: &str) -> Result<DocshardConfig, ConfigError> {
    let config: DocshardConfig = serde_json::from_str(contents)?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &DocshardConfig) -> Result<(), ConfigError> {
    if config.failover.attempt_timeout_ms == 0 {
        return Err(ConfigError::Invalid(
            "failover.attempt_timeout_ms must be positive".to_owned(),
        ));
    }
    if config.bootstrap.main_credentials_env.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "bootstrap.main_credentials_env must not be empty".to_owned(),
        ));
    }
    Ok(())
}
