use crate::{ModelError, NotificationPayloadBuilder, Section};

/// **VALUE**: Sections come out in exactly the order they were added.
///
/// **WHY THIS MATTERS**: Receivers render blocks in array order; the layout (context,
/// addresses, divider, event text) is part of the message contract.
///
/// **BUG THIS CATCHES**: Would catch sections being stored in a set or sorted.
#[test]
fn given_sections_when_building_then_order_is_preserved() {
    // GIVEN: A builder with all section kinds
    let builder = NotificationPayloadBuilder::default()
        .with_summary_text("disk full")
        .with_context("ctx")
        .with_body("addresses")
        .with_divider()
        .with_body("```disk full```");

    // WHEN: Building
    let payload = builder.build().unwrap();

    // THEN: Same order, summary untouched
    assert_eq!(payload.summary_text(), "disk full");
    assert_eq!(
        payload.sections(),
        &[
            Section::context("ctx"),
            Section::body("addresses"),
            Section::Divider,
            Section::body("```disk full```"),
        ]
    );
    assert_eq!(payload.last_body(), Some("```disk full```"));
}

/// **VALUE**: A payload without a summary text is rejected.
///
/// **WHY THIS MATTERS**: The summary is the plain-text fallback shown in push
/// notifications; omitting it produces blank alerts on phones.
///
/// **BUG THIS CATCHES**: Would catch the summary becoming silently optional.
#[test]
fn given_missing_summary_when_building_then_returns_validation_error() {
    let result = NotificationPayloadBuilder::default()
        .with_body("text")
        .build();

    match result {
        Err(ModelError::Validation { message, .. }) => {
            assert_eq!(message, "Summary text is required");
        }
        Ok(_) => panic!("Expected validation error"),
    }
}

#[test]
fn given_empty_summary_when_building_then_succeeds() {
    let result = NotificationPayloadBuilder::default()
        .with_summary_text("")
        .with_body("``````")
        .build();

    assert!(result.is_ok(), "Empty stdin is still a valid alert");
}

#[test]
fn given_no_sections_when_building_then_returns_validation_error() {
    let result = NotificationPayloadBuilder::default()
        .with_summary_text("text")
        .build();

    assert!(matches!(result, Err(ModelError::Validation { .. })));
}

#[test]
fn given_leading_divider_when_building_then_returns_validation_error() {
    let result = NotificationPayloadBuilder::default()
        .with_summary_text("text")
        .with_divider()
        .with_body("text")
        .build();

    assert!(matches!(result, Err(ModelError::Validation { .. })));
}
