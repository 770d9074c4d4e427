// Unit tests for the webhook JSON shape

use crate::sender::wire::{Block, TextObject, WebhookMessage};

use models::{NotificationPayloadBuilder, Section};

use serde_json::json;

/// **VALUE**: Pins the JSON wire format of every block kind.
///
/// **WHY THIS MATTERS**: Webhook receivers reject unknown shapes with a 400, which
/// would turn every alert into a delivery failure.
///
/// **BUG THIS CATCHES**: Would catch serde attribute changes (tag name, casing, a
/// divider gaining `elements: null`).
#[test]
fn given_payload_when_serialized_then_matches_webhook_schema() {
    // GIVEN: A payload with all section kinds
    let payload = NotificationPayloadBuilder::default()
        .with_summary_text("boom")
        .with_context("ctx")
        .with_body("addresses")
        .with_divider()
        .with_body("```boom```")
        .build()
        .unwrap();

    // WHEN: Serializing the wire message
    let value = serde_json::to_value(WebhookMessage::from(&payload)).unwrap();

    // THEN: Exact schema
    assert_eq!(
        value,
        json!({
            "text": "boom",
            "blocks": [
                {"type": "context", "elements": [{"type": "mrkdwn", "text": "ctx"}]},
                {"type": "section", "text": {"type": "mrkdwn", "text": "addresses"}},
                {"type": "divider"},
                {"type": "section", "text": {"type": "mrkdwn", "text": "```boom```"}}
            ]
        })
    );
}

#[test]
fn given_sections_when_converted_then_map_to_matching_blocks() {
    let context = Section::context("label");
    let body = Section::body("text");

    assert_eq!(
        Block::from(&context),
        Block::Context {
            elements: vec![TextObject::markdown("label")]
        }
    );
    assert_eq!(Block::from(&Section::Divider), Block::Divider);
    assert_eq!(
        Block::from(&body),
        Block::Section {
            text: TextObject::markdown("text")
        }
    );
}
