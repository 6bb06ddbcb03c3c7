//! Placeholder expansion.
//!
//! Placeholders are handled by an ordered rule list. Each rule runs over the
//! whole text once, in the order below:
//!
//! 1. Fixed slots: `[sr]`, `[ip]`, `[domaine]`, `[Name]`, `[*to]`, `[*date]`
//! 2. Legacy `[random]`: 18 alphanumeric characters, fresh per occurrence
//! 3. Boundaries: `(EE<digits>:<text>)`, cached per key, inner text ignored
//! 4. Random strings: `[Random(<mode>)/<n>]`, then `[Random<mode>/<n>]`
//!
//! Anything else, including malformed placeholders, passes through unchanged.

use crate::cache::{SessionCache, Slot};
use crate::random::{generate, generate_from_tag, CharClass};
use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Length of the legacy `[random]` value.
const LEGACY_RANDOM_LENGTH: usize = 18;

#[derive(Debug)]
enum TagRule {
    Fixed { token: &'static str, slot: Slot },
    LegacyRandom { token: &'static str },
    Boundary(Regex),
    RandomString(Regex),
}

static RULES: Lazy<Vec<TagRule>> = Lazy::new(|| {
    vec![
        TagRule::Fixed {
            token: "[sr]",
            slot: Slot::ServerId,
        },
        TagRule::Fixed {
            token: "[ip]",
            slot: Slot::Ip,
        },
        TagRule::Fixed {
            token: "[domaine]",
            slot: Slot::Domain,
        },
        TagRule::Fixed {
            token: "[Name]",
            slot: Slot::UserName,
        },
        TagRule::Fixed {
            token: "[*to]",
            slot: Slot::Recipient,
        },
        TagRule::Fixed {
            token: "[*date]",
            slot: Slot::Date,
        },
        TagRule::LegacyRandom { token: "[random]" },
        TagRule::Boundary(
            Regex::new(r"\(EE([0-9]*):([^\)]+)\)").expect("valid boundary regex"),
        ),
        TagRule::RandomString(
            Regex::new(r"\[Random\((A|C|L|LU|N|CL|CLU|CS)\)/(\d+)\]")
                .expect("valid parenthesized random regex"),
        ),
        TagRule::RandomString(
            Regex::new(r"\[Random(A|C|L|LU|N|CL|CLU|CS)/(\d+)\]").expect("valid random regex"),
        ),
    ]
});

impl TagRule {
    fn apply(&self, text: &str, cache: &mut SessionCache) -> String {
        match self {
            Self::Fixed { token, slot } => text.replace(*token, cache.slot(*slot)),
            Self::LegacyRandom { token } => {
                let mut out = String::with_capacity(text.len());
                for (idx, part) in text.split(*token).enumerate() {
                    if idx > 0 {
                        out.push_str(&generate(CharClass::Alphanumeric, LEGACY_RANDOM_LENGTH));
                    }
                    out.push_str(part);
                }
                out
            }
            Self::Boundary(regex) => regex
                .replace_all(text, |caps: &Captures<'_>| {
                    cache.boundary(&caps[1]).to_string()
                })
                .into_owned(),
            Self::RandomString(regex) => regex
                .replace_all(text, |caps: &Captures<'_>| {
                    match generate_from_tag(&caps[1], &caps[2]) {
                        Ok(value) => value,
                        Err(e) => {
                            tracing::warn!("Leaving random placeholder unexpanded: {}", e);
                            caps[0].to_string()
                        }
                    }
                })
                .into_owned(),
        }
    }
}

/// Expands placeholder templates for a single render.
///
/// Every reference to the same fixed slot or boundary key resolves to the same
/// value within one engine. Build a new engine per render; sharing one across
/// renders leaks cached values between messages.
///
/// # Example
///
/// ```rust
/// use mailprobe_template::TagEngine;
///
/// let mut engine = TagEngine::new();
/// let out = engine.expand("[sr]/[sr]");
/// let (first, second) = out.split_once('/').unwrap();
/// assert_eq!(first, second);
/// assert!(first.starts_with("sl"));
/// ```
#[derive(Debug)]
pub struct TagEngine {
    cache: SessionCache,
}

impl Default for TagEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TagEngine {
    /// Create an engine whose date slot is stamped with the local wall clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(chrono::Local::now().naive_local())
    }

    /// Create an engine whose date slot is stamped with `now`.
    #[must_use]
    pub fn with_clock(now: NaiveDateTime) -> Self {
        Self {
            cache: SessionCache::generate(now),
        }
    }

    /// Values frozen for this engine.
    #[must_use]
    pub fn cache(&self) -> &SessionCache {
        &self.cache
    }

    /// Expand every recognised placeholder in `text`.
    pub fn expand(&mut self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let expanded = RULES
            .iter()
            .fold(text.to_string(), |acc, rule| rule.apply(&acc, &mut self.cache));

        tracing::debug!(
            input_len = text.len(),
            output_len = expanded.len(),
            boundaries = self.cache.boundary_count(),
            "Expanded template"
        );
        expanded
    }
}
