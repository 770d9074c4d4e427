// Unit tests for payload layout and purity

use crate::composer::{compose, compose_now, context_label, preformatted};
use crate::sender::wire::WebhookMessage;

use models::{AddressInfo, AddressScope, Section};

use chrono::{NaiveDate, NaiveDateTime};

fn fixed_timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 9)
        .unwrap()
        .and_hms_opt(7, 5, 3)
        .unwrap()
}

fn addresses() -> Vec<AddressInfo> {
    vec![
        AddressInfo::parse("192.168.1.1", AddressScope::Local).unwrap(),
        AddressInfo::parse("10.0.0.1", AddressScope::Local).unwrap(),
    ]
}

/// **VALUE**: Sections follow the fixed layout: context, addresses, divider, event text.
///
/// **WHY THIS MATTERS**: Receivers and downstream parsers rely on the event text being
/// the last section.
///
/// **BUG THIS CATCHES**: Would catch sections being reordered or the divider dropped.
#[test]
fn given_inputs_when_composing_then_layout_is_fixed() {
    // GIVEN: Known hostname, text, addresses and time
    let timestamp = fixed_timestamp();

    // WHEN: Composing
    let payload = compose("testHost", "Test message", &addresses(), timestamp).unwrap();

    // THEN: Exact layout
    assert_eq!(payload.summary_text(), "Test message");
    assert_eq!(
        payload.sections(),
        &[
            Section::context(":calendar: *2024-03-09 07:05:03*  |  :computer: testHost"),
            Section::body(":information_source: *IPv4* `192.168.1.1`, `10.0.0.1`"),
            Section::Divider,
            Section::body("```Test message```"),
        ]
    );
}

/// **VALUE**: Identical inputs give identical payloads and identical JSON.
///
/// **WHY THIS MATTERS**: Composition is the part of the pipeline that is tested offline.
/// Hidden state (clock reads, hash ordering) would make those tests flaky.
///
/// **BUG THIS CATCHES**: Would catch `compose` reading the clock itself.
#[test]
fn given_identical_inputs_when_composing_twice_then_output_is_byte_identical() {
    let first = compose("host1", "boom", &addresses(), fixed_timestamp()).unwrap();
    let second = compose("host1", "boom", &addresses(), fixed_timestamp()).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_vec(&WebhookMessage::from(&first)).unwrap(),
        serde_json::to_vec(&WebhookMessage::from(&second)).unwrap(),
    );
}

/// **VALUE**: Multi-line input is kept verbatim, both in the summary and the body.
///
/// **WHY THIS MATTERS**: Stack traces and log tails are the usual stdin; reflowing or
/// trimming them destroys the information the alert exists for.
///
/// **BUG THIS CATCHES**: Would catch a `trim()` or line-join on the input text.
#[test]
fn given_multiline_input_when_composing_then_text_is_verbatim() {
    let text = "\n[ERROR] disk full\n  at /var/lib\n";

    let payload = compose("db-1", text, &[], fixed_timestamp()).unwrap();

    assert_eq!(payload.summary_text(), text);
    assert_eq!(payload.last_body(), Some(preformatted(text).as_str()));
    assert_eq!(
        payload.sections()[1],
        Section::body(":information_source: *IP* `unknown`")
    );
}

#[test]
fn given_timestamp_when_building_context_label_then_uses_zero_padded_format() {
    let label = context_label("host1", fixed_timestamp());

    assert!(label.contains("*2024-03-09 07:05:03*"), "label: {label}");
    assert!(label.ends_with(":computer: host1"));
}

#[test]
fn given_current_time_when_composing_now_then_context_has_hostname() {
    let payload = compose_now("host1", "boom", &[]).unwrap();

    match &payload.sections()[0] {
        Section::Context { label } => assert!(label.ends_with(":computer: host1")),
        other => panic!("Expected context section, got {other:?}"),
    }
}
