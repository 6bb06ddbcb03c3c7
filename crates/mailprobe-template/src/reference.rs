//! Reference template fixer.
//!
//! Rewrites an arbitrary header/body pair into the canonical multipart layout,
//! keeping only the subject and the sender display name from the raw header.
//! The output still contains placeholders and is meant to go through a
//! [`TagEngine`](crate::TagEngine) afterwards.

use mailprobe_core::ReferenceConfig;
use once_cell::sync::Lazy;
use regex::Regex;

/// Boundary placeholder shared by the header and every body delimiter.
pub const REFERENCE_BOUNDARY: &str = "(EE1:[RandomA/69])";

const FIX_NOTE: &str = "Applied reference template (efianalytics)";

static SUBJECT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?mi)^Subject:\s*(.+)$").expect("valid subject regex"));

static FROM_NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?mi)^From:[ \t]*"?([^"<\r\n]+)"?"#).expect("valid from regex"));

/// Header and body rewritten into the reference layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceTemplate {
    /// Canonical header with the preserved subject and sender name
    pub header: String,
    /// Raw body wrapped as the HTML part of a `multipart/alternative` message
    pub body: String,
    /// Short description of what was applied
    pub note: String,
}

/// Extract the subject and sender name from `raw_header` and rebuild the
/// message around them. Missing fields fall back to `defaults`.
#[must_use]
pub fn fix_template(
    raw_header: &str,
    raw_body: &str,
    defaults: &ReferenceConfig,
) -> ReferenceTemplate {
    let subject = capture_trimmed(&SUBJECT_REGEX, raw_header)
        .unwrap_or_else(|| defaults.default_subject.clone());
    let from_name = capture_trimmed(&FROM_NAME_REGEX, raw_header)
        .unwrap_or_else(|| defaults.default_from_name.clone());

    tracing::debug!(
        subject_found = SUBJECT_REGEX.is_match(raw_header),
        from_found = FROM_NAME_REGEX.is_match(raw_header),
        "Applying reference template"
    );

    ReferenceTemplate {
        header: reference_header(&subject, &from_name),
        body: reference_body(raw_body),
        note: FIX_NOTE.to_string(),
    }
}

fn capture_trimmed(regex: &Regex, text: &str) -> Option<String> {
    regex
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
}

fn reference_header(subject: &str, from_name: &str) -> String {
    format!(
        "Received: from efianalytics.com (efianalytics.com. 216.244.76.116)\n\
         Subject: {subject}\n\
         From: \"{from_name}\" <[RandomL/12]@[RandomCL/8].com>\n\
         Sender: <[RandomL/12]@[RandomL/6].pxwfashing.info>\n\
         Date: [*date]\n\
         To: <[*to]>\n\
         Message-Id: <[RandomA/23]-[RandomA/24]@[RandomA/15]>\n\
         List-Unsubscribe: <[RandomA/28]-[RandomA/27]@pxwfashing.info>\n\
         X-EMMAIL: [*to]@[domaine]\n\
         MIME-Version: 1.0\n\
         Content-Type: multipart/alternative; boundary=\"{REFERENCE_BOUNDARY}\""
    )
}

fn reference_body(raw_body: &str) -> String {
    format!(
        "--{REFERENCE_BOUNDARY}\n\
         Content-Type: text/plain; charset=UTF-8\n\
         Content-Transfer-Encoding: 7bit\n\
         \n\
         [Plain Text Version of Message]\n\
         \n\
         --{REFERENCE_BOUNDARY}\n\
         Content-Type: text/html; charset=UTF-8\n\
         Content-Transfer-Encoding: 7bit\n\
         \n\
         {raw_body}\n\
         \n\
         --{REFERENCE_BOUNDARY}--"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_subject_and_from_name() {
        let header = "From: \"Akram\" <akram@example.com>\nsubject:   Your invoice  \nTo: x@y.z";
        let fixed = fix_template(header, "<p>Hi</p>", &ReferenceConfig::default());

        assert!(fixed.header.contains("\nSubject: Your invoice\n"));
        assert!(fixed
            .header
            .contains("From: \"Akram\" <[RandomL/12]@[RandomCL/8].com>"));
        assert!(!fixed.header.contains("akram@example.com"));
    }

    #[test]
    fn test_unquoted_from_name() {
        let fixed = fix_template(
            "From: Billing Dept <billing@example.com>",
            "",
            &ReferenceConfig::default(),
        );
        assert!(fixed.header.contains("From: \"Billing Dept\" <"));
    }

    #[test]
    fn test_bare_from_address_stays_on_its_line() {
        let fixed = fix_template(
            "From: news@example.com\nSubject: Hi\nTo: <a@b.c>",
            "",
            &ReferenceConfig::default(),
        );

        assert!(fixed.header.contains("From: \"news@example.com\" <"));
        assert_eq!(fixed.header.matches("Subject:").count(), 1);
        assert!(fixed.header.contains("\nSubject: Hi\n"));
        assert!(fixed.header.lines().all(|line| !line.starts_with("To:\"")));
    }

    #[test]
    fn test_angle_only_from_uses_default_name() {
        let fixed = fix_template("From: <a@b.c>", "", &ReferenceConfig::default());
        let expected = format!(
            "From: \"{}\" <",
            ReferenceConfig::default().default_from_name
        );
        assert!(fixed.header.contains(&expected));
    }

    #[test]
    fn test_defaults_when_missing() {
        let defaults = ReferenceConfig {
            default_subject: "Hello there".to_string(),
            default_from_name: "Team".to_string(),
        };
        let fixed = fix_template("X-Other: 1", "body", &defaults);

        assert!(fixed.header.contains("Subject: Hello there\n"));
        assert!(fixed.header.contains("From: \"Team\" <"));
        assert_eq!(fixed.note, FIX_NOTE);
    }

    #[test]
    fn test_body_is_wrapped_with_shared_boundary() {
        let fixed = fix_template("", "<b>offer</b>", &ReferenceConfig::default());

        assert!(fixed.body.starts_with("--(EE1:[RandomA/69])\nContent-Type: text/plain"));
        assert!(fixed.body.contains(
            "text/html; charset=UTF-8\nContent-Transfer-Encoding: 7bit\n\n<b>offer</b>\n\n"
        ));
        assert!(fixed.body.ends_with("--(EE1:[RandomA/69])--"));
        assert_eq!(fixed.body.matches(REFERENCE_BOUNDARY).count(), 3);
        assert!(fixed.header.ends_with("boundary=\"(EE1:[RandomA/69])\""));
    }
}
