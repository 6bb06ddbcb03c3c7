//! Mailprobe Scanner - end-to-end message checks.
//!
//! This crate wires the template engine, an external content analyzer and the
//! report parser together:
//!
//! 1. Compose the header and body templates and expand them with a fresh tag engine
//! 2. Write the rendered message to a hand-off file
//! 3. Run the analyzer on that file
//! 4. Parse the report and classify the score
//!
//! # Example
//!
//! ```rust,ignore
//! use mailprobe_core::AppConfig;
//! use mailprobe_scanner::Scanner;
//!
//! let scanner = Scanner::from_config(&AppConfig::load_with_env()?)?;
//! let outcome = scanner.scan(&header, &body).await?;
//! println!("{} ({:.1} points)", outcome.verdict, outcome.score);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod analyzer;
#[allow(missing_docs)]
pub mod error;
pub mod orchestrator;

// Re-export commonly used types
pub use analyzer::{CommandAnalyzer, ContentAnalyzer};
pub use error::{Result, ScanError};
pub use orchestrator::{ScanOutcome, Scanner};
