use mailprobe_core::ReferenceConfig;
use mailprobe_template::{compose_message, fix_template, TagEngine};

fn header_value<'a>(message: &'a str, name: &str) -> Option<&'a str> {
    message
        .lines()
        .find_map(|line| line.strip_prefix(name)?.strip_prefix(": "))
}

#[test]
fn test_fixed_template_renders_consistent_boundary() {
    let fixed = fix_template(
        "Subject: Monthly digest\nFrom: \"News Desk\" <news@example.com>",
        "<h1>Digest</h1>",
        &ReferenceConfig::default(),
    );
    let mut engine = TagEngine::new();
    let rendered = engine.expand(&compose_message(&fixed.header, &fixed.body));

    assert!(!rendered.contains("(EE1:"));
    assert!(!rendered.contains("[Random"));
    assert!(!rendered.contains("[*to]"));

    let content_type = header_value(&rendered, "Content-Type").expect("content type header");
    let boundary = content_type
        .split("boundary=\"")
        .nth(1)
        .and_then(|rest| rest.strip_suffix('"'))
        .expect("boundary parameter");

    assert!(boundary.starts_with("----=_Part_"));
    assert_eq!(rendered.matches(&format!("--{boundary}")).count(), 3);
    assert!(rendered.ends_with(&format!("--{boundary}--")));
}

#[test]
fn test_recipient_and_date_slots_agree_across_header_and_body() {
    let mut engine = TagEngine::new();
    let rendered = engine.expand(&compose_message(
        "To: <[*to]>\nDate: [*date]\nX-EMMAIL: [*to]@[domaine]",
        "Sent to [*to] on [*date] from [domaine]",
    ));

    let to = header_value(&rendered, "To")
        .and_then(|v| v.strip_prefix('<'))
        .and_then(|v| v.strip_suffix('>'))
        .expect("to header");
    let date = header_value(&rendered, "Date").expect("date header");
    let emmail = header_value(&rendered, "X-EMMAIL").expect("x-emmail header");
    let (_, domain) = emmail.rsplit_once('@').expect("domain suffix");

    assert!(emmail.starts_with(to));
    assert!(rendered.ends_with(&format!("Sent to {to} on {date} from {domain}")));
    assert!(date.ends_with(" -0500"));
}

#[test]
fn test_engines_do_not_share_boundaries() {
    let template = "(EE1:[RandomA/69])";
    let first = TagEngine::new().expand(template);
    let second = TagEngine::new().expand(template);
    assert_ne!(first, second);
}
