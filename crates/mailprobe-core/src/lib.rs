//! Mailprobe Core - Foundation crate for the Mailprobe message checker.
//!
//! This crate provides the shared error type, configuration management and the
//! small enums that the template, report and scanner crates exchange.
//!
//! # Modules
//!
//! - [`error`] - Central error types using thiserror
//! - [`config`] - TOML-based configuration with XDG paths
//! - [`types`] - Shared enums (`Severity`, `Verdict`)
//!
//! # Example
//!
//! ```rust
//! use mailprobe_core::{AppConfig, Verdict};
//!
//! let config = AppConfig::default();
//! assert_eq!(config.analyzer.command, "spamassassin");
//! assert_eq!(Verdict::classify(7.3), Verdict::Blocked);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use config::{AnalyzerConfig, AppConfig, ReferenceConfig, ScanConfig};
pub use error::{ConfigError, ConfigResult, MailprobeError, Result};
pub use types::{Severity, Verdict, ATTENTION_THRESHOLD, BLOCKED_THRESHOLD};
