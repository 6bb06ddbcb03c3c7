//! Configuration management for Mailprobe.
//!
//! Provides TOML-based configuration with XDG-compliant paths and
//! environment variable overrides.

use crate::error::{ConfigError, ConfigResult};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main application configuration.
///
/// This is loaded from `~/.config/mailprobe/config.toml` (or platform equivalent).
/// If the file doesn't exist, default values are used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// External content analyzer settings
    pub analyzer: AnalyzerConfig,
    /// Scan hand-off settings
    pub scan: ScanConfig,
    /// Fallback values for the reference template fixer
    pub reference: ReferenceConfig,
}

impl AppConfig {
    /// Load configuration from the default location, falling back to defaults if not found.
    ///
    /// # Errors
    /// Returns error if:
    /// - Config directory cannot be determined
    /// - File exists but cannot be read
    /// - File contents are not valid TOML
    pub fn load() -> ConfigResult<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration from an explicit path.
    ///
    /// Unlike [`AppConfig::load`], a missing file is an error here.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.display().to_string(),
            });
        }

        tracing::debug!("Loading config from {}", path.display());
        let contents = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply environment variable overrides on top of loaded values.
    ///
    /// Supports the following environment variables:
    /// - `MAILPROBE_ANALYZER_COMMAND`: Override the analyzer executable
    /// - `MAILPROBE_ANALYZER_TIMEOUT_SECS`: Override the analyzer timeout
    /// - `MAILPROBE_KEEP_MESSAGE`: Keep the hand-off file after a scan (true/false)
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(val) = std::env::var("MAILPROBE_ANALYZER_COMMAND") {
            if !val.trim().is_empty() {
                tracing::debug!("Override analyzer.command from env: {}", val);
                self.analyzer.command = val;
            }
        }

        if let Ok(val) = std::env::var("MAILPROBE_ANALYZER_TIMEOUT_SECS") {
            match val.parse::<u64>() {
                Ok(secs) if secs > 0 => {
                    self.analyzer.timeout_secs = secs;
                    tracing::debug!("Override analyzer.timeout_secs from env: {}", secs);
                }
                _ => tracing::debug!("Ignoring invalid MAILPROBE_ANALYZER_TIMEOUT_SECS={}", val),
            }
        }

        if let Ok(val) = std::env::var("MAILPROBE_KEEP_MESSAGE") {
            if let Ok(keep) = val.parse() {
                self.scan.keep_message = keep;
                tracing::debug!("Override scan.keep_message from env: {}", keep);
            }
        }

        self
    }

    /// Load configuration with environment variable overrides.
    pub fn load_with_env() -> ConfigResult<Self> {
        Ok(Self::load()?.with_env_overrides())
    }

    /// Save configuration to disk.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> ConfigResult<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to an explicit path.
    pub fn save_to(&self, config_path: &Path) -> ConfigResult<()> {
        let config_dir = config_path
            .parent()
            .ok_or_else(|| ConfigError::InvalidValue {
                field: "config_path".to_string(),
                reason: "no parent directory".to_string(),
            })?;

        fs::create_dir_all(config_dir)?;
        tracing::debug!("Saving config to {}", config_path.display());

        let contents = toml::to_string_pretty(self)?;
        fs::write(config_path, contents)?;
        Ok(())
    }

    /// Check values that deserialize fine but cannot drive a scan.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.analyzer.command.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "analyzer.command".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if self.analyzer.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "analyzer.timeout_secs".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// Get the path to the configuration file.
    ///
    /// Uses XDG base directories: `~/.config/mailprobe/config.toml`
    pub fn config_path() -> ConfigResult<PathBuf> {
        let dirs =
            ProjectDirs::from("com", "mailprobe", "mailprobe").ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.config_dir().join("config.toml"))
    }
}

/// External content analyzer settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Executable to run against the rendered message
    pub command: String,
    /// Arguments placed before the message path
    pub args: Vec<String>,
    /// Maximum time to wait for the analyzer, in seconds
    pub timeout_secs: u64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            command: "spamassassin".to_string(),
            args: vec!["-t".to_string()],
            timeout_secs: 60,
        }
    }
}

/// Scan hand-off settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Directory for the rendered message file (system temp dir when unset)
    pub work_dir: Option<PathBuf>,
    /// Keep the rendered message file after the scan instead of deleting it
    pub keep_message: bool,
}

/// Fallback values used when a raw header lacks the preserved fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceConfig {
    /// Subject used when the raw header has none
    pub default_subject: String,
    /// From display name used when the raw header has none
    pub default_from_name: String,
}

impl Default for ReferenceConfig {
    fn default() -> Self {
        Self {
            default_subject: "Welcome to the Community".to_string(),
            default_from_name: "Support Team".to_string(),
        }
    }
}
