//! Message assembly.

/// Join a header and body template into one message: both trimmed, separated
/// by a single blank line.
#[must_use]
pub fn compose_message(header: &str, body: &str) -> String {
    format!("{}\n\n{}", header.trim(), body.trim())
}
