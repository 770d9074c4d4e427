use notify_core::error::{CoreError, DeliveryError};

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

/// **VALUE**: Status errors show the HTTP code and the receiver's explanation.
///
/// **WHY THIS MATTERS**: Webhook hosts explain rejections in the body
/// (`invalid_payload`, `channel_is_archived`). That text is the fix.
///
/// **BUG THIS CATCHES**: Would catch the body being dropped from the Display format.
#[test]
fn given_status_error_when_formatted_then_includes_code_and_body() {
    let err = DeliveryError::Status {
        status: HttpStatusCode(404),
        body: "no_service".to_string(),
        location: ErrorLocation::from(Location::caller()),
    };

    let text = err.to_string();

    assert!(text.contains("Webhook Status Error"));
    assert!(text.contains("HTTP 404"));
    assert!(text.contains("no_service"));
    assert!(text.contains("delivery.rs"));
    assert_eq!(err.status(), Some(HttpStatusCode(404)));
}

#[test]
fn given_url_parse_failure_when_converted_then_is_invalid_endpoint() {
    let parse_error = url::Url::parse("not a url").unwrap_err();

    let err = DeliveryError::from(parse_error);

    assert!(matches!(err, DeliveryError::InvalidEndpoint { .. }));
    assert!(matches!(CoreError::from(err), CoreError::Delivery(_)));
}
