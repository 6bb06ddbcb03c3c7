//! Mailprobe Template - placeholder expansion for synthetic test messages.
//!
//! Header and body templates carry a small placeholder language. A
//! [`TagEngine`] expands it for one render:
//!
//! - fixed session slots (`[sr]`, `[ip]`, `[domaine]`, `[Name]`, `[*to]`, `[*date]`)
//! - the legacy `[random]` token
//! - MIME boundaries keyed by number (`(EE1:...)`)
//! - random strings by character class and length (`[RandomA/12]`, `[Random(N)/5]`)
//!
//! [`fix_template`] rewrites an arbitrary header/body pair into the reference
//! multipart layout before expansion.
//!
//! # Example
//!
//! ```rust
//! use mailprobe_template::{compose_message, TagEngine};
//!
//! let message = compose_message("Subject: Hi [Name]\nTo: <[*to]>", "Hello [Name]");
//! let rendered = TagEngine::new().expand(&message);
//! assert!(!rendered.contains("[Name]"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod cache;
pub mod engine;
pub mod error;
pub mod message;
pub mod random;
pub mod reference;

// Re-export commonly used types
pub use cache::{SessionCache, Slot, DATE_FORMAT};
pub use engine::TagEngine;
pub use error::{Result, TemplateError};
pub use message::compose_message;
pub use random::{generate, generate_from_tag, CharClass, MAX_RANDOM_LENGTH};
pub use reference::{fix_template, ReferenceTemplate, REFERENCE_BOUNDARY};
