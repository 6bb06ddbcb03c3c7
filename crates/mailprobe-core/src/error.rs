//! Core error types for Mailprobe.
//!
//! This module defines the central error type used across all subsystems.
//! Each subsystem error is represented as a variant for clear error propagation.

use thiserror::Error;

/// Central error type for all Mailprobe operations.
#[derive(Error, Debug)]
pub enum MailprobeError {
    /// Configuration errors (file loading, parsing, validation)
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors (invalid input, constraints)
    #[error("validation error: {0}")]
    Validation(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to determine config directory path
    #[error("could not determine config directory (XDG base directories not available)")]
    NoConfigDir,

    /// Config file not found at an explicitly requested path
    #[error("config file not found at {path}")]
    NotFound {
        /// Path where config was expected
        path: String,
    },

    /// Failed to parse TOML
    #[error("failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Failed to serialize config
    #[error("failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    /// I/O error reading/writing config
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration value
    #[error("invalid config value for {field}: {reason}")]
    InvalidValue {
        /// Field name
        field: String,
        /// Reason for invalidity
        reason: String,
    },
}

/// Result type alias using `MailprobeError`.
pub type Result<T> = std::result::Result<T, MailprobeError>;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MailprobeError::Validation("stdin requested twice".to_string());
        assert_eq!(err.to_string(), "validation error: stdin requested twice");

        let err = ConfigError::InvalidValue {
            field: "analyzer.timeout_secs".to_string(),
            reason: "must be greater than zero".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid config value for analyzer.timeout_secs: must be greater than zero"
        );
    }

    #[test]
    fn test_error_from_config() {
        let config_err = ConfigError::NoConfigDir;
        let err: MailprobeError = config_err.into();
        assert!(matches!(err, MailprobeError::Config(_)));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let err: MailprobeError = io_err.into();
        assert!(matches!(err, MailprobeError::Io(_)));
    }
}
