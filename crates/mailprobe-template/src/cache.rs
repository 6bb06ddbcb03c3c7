//! Per-render session values.

use crate::random::{generate, CharClass};
use chrono::NaiveDateTime;
use rand::Rng;
use std::collections::HashMap;

/// Date layout for the `[*date]` slot. The offset is a fixed literal.
pub const DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S -0500";

/// Fixed slots addressable by a literal placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// `[sr]`
    ServerId,
    /// `[ip]`
    Ip,
    /// `[domaine]`
    Domain,
    /// `[Name]`
    UserName,
    /// `[*to]`
    Recipient,
    /// `[*date]`
    Date,
}

/// Values frozen for the lifetime of one [`TagEngine`](crate::TagEngine).
///
/// Fixed slots are generated eagerly; boundaries are created on first use of
/// their key and reused afterwards.
#[derive(Debug, Clone)]
pub struct SessionCache {
    server_id: String,
    ip: String,
    domain: String,
    user_name: String,
    recipient: String,
    date: String,
    boundaries: HashMap<String, String>,
}

impl SessionCache {
    /// Generate all fixed slots, stamping the date slot with `now`.
    #[must_use]
    pub fn generate(now: NaiveDateTime) -> Self {
        let mut rng = rand::thread_rng();
        Self {
            server_id: format!("sl{}", rng.gen_range(1000..=9999)),
            ip: format!(
                "{}.{}.{}.{}",
                rng.gen_range(1..=255),
                rng.gen_range(1..=255),
                rng.gen_range(1..=255),
                rng.gen_range(1..=255)
            ),
            domain: format!("server-update-{}.com", rng.gen_range(100..=999)),
            user_name: format!("user{}", rng.gen_range(100..=999)),
            recipient: format!("target.test.{}@gmail.com", rng.gen_range(1000..=9999)),
            date: now.format(DATE_FORMAT).to_string(),
            boundaries: HashMap::new(),
        }
    }

    /// Value held by a fixed slot.
    #[must_use]
    pub fn slot(&self, slot: Slot) -> &str {
        match slot {
            Slot::ServerId => &self.server_id,
            Slot::Ip => &self.ip,
            Slot::Domain => &self.domain,
            Slot::UserName => &self.user_name,
            Slot::Recipient => &self.recipient,
            Slot::Date => &self.date,
        }
    }

    /// Boundary for `key`, generated on first request. The empty key is valid.
    pub fn boundary(&mut self, key: &str) -> &str {
        self.boundaries
            .entry(key.to_string())
            .or_insert_with(new_boundary)
    }

    /// Number of distinct boundary keys seen so far.
    #[must_use]
    pub fn boundary_count(&self) -> usize {
        self.boundaries.len()
    }
}

fn new_boundary() -> String {
    format!(
        "----=_Part_{}_{}",
        generate(CharClass::Digits, 5),
        generate(CharClass::Alphanumeric, 10)
    )
}
