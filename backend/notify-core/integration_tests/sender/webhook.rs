use notify_core::composer::compose;
use notify_core::error::DeliveryError;
use notify_core::sender::{WebhookSender, redact_endpoint};

use models::{AddressInfo, AddressScope, NotificationPayload};

use std::time::Duration;

use chrono::NaiveDate;
use serde_json::{Value, json};
use url::Url;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const HOOK_PATH: &str = "/services/T000/B000/XXXX";

fn payload() -> NotificationPayload {
    let timestamp = NaiveDate::from_ymd_opt(2024, 3, 9)
        .unwrap()
        .and_hms_opt(7, 5, 3)
        .unwrap();
    let addresses = vec![AddressInfo::parse("10.0.0.5", AddressScope::Local).unwrap()];

    compose("host1", "boom", &addresses, timestamp).unwrap()
}

fn endpoint(server: &MockServer) -> String {
    format!("{}{HOOK_PATH}", server.uri())
}

async fn mount_status(server: &MockServer, status: u16) {
    Mock::given(method("POST"))
        .and(path(HOOK_PATH))
        .respond_with(ResponseTemplate::new(status).set_body_string("invalid_payload"))
        .expect(1)
        .mount(server)
        .await;
}

// ============================================================================
// send() - delivery outcome tests
// ============================================================================

/// **VALUE**: A 200 response is a successful delivery, and the request is a JSON POST
/// with the documented body.
///
/// **WHY THIS MATTERS**: This is the whole point of the tool. If the content type or
/// body shape drifts, receivers reject the alert.
///
/// **BUG THIS CATCHES**: Would catch a missing `Content-Type: application/json` header
/// or a changed block layout.
#[tokio::test]
async fn given_200_endpoint_when_sending_then_succeeds_with_json_body() {
    // GIVEN: A webhook that only accepts the expected JSON document
    let server = MockServer::start().await;
    let expected: Value = json!({
        "text": "boom",
        "blocks": [
            {"type": "context", "elements": [{
                "type": "mrkdwn",
                "text": ":calendar: *2024-03-09 07:05:03*  |  :computer: host1"
            }]},
            {"type": "section", "text": {
                "type": "mrkdwn",
                "text": ":information_source: *IPv4* `10.0.0.5`"
            }},
            {"type": "divider"},
            {"type": "section", "text": {"type": "mrkdwn", "text": "```boom```"}}
        ]
    });
    Mock::given(method("POST"))
        .and(path(HOOK_PATH))
        .and(header("content-type", "application/json"))
        .and(body_json(&expected))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN: Sending
    let sender = WebhookSender::new().unwrap();
    let result = sender.send(&endpoint(&server), &payload()).await;

    // THEN: Delivered
    assert!(result.is_ok(), "Delivery should succeed: {result:?}");
}

/// **VALUE**: Every non-200 status is a `DeliveryError::Status`, including other 2xx.
///
/// **WHY THIS MATTERS**: A revoked webhook answers 403/404; an overloaded one 5xx.
/// All of these mean the channel never saw the alert.
///
/// **BUG THIS CATCHES**: Would catch success being checked with `is_success()`.
#[tokio::test]
async fn given_non_200_endpoint_when_sending_then_returns_status_error() {
    for status in [201_u16, 400, 403, 404, 500, 503] {
        // GIVEN: A webhook answering `status`
        let server = MockServer::start().await;
        mount_status(&server, status).await;

        // WHEN: Sending
        let sender = WebhookSender::new().unwrap();
        let result = sender.send(&endpoint(&server), &payload()).await;

        // THEN: Status error with code and body
        match result {
            Err(DeliveryError::Status {
                status: got, body, ..
            }) => {
                assert_eq!(got.0, status);
                assert_eq!(body, "invalid_payload");
            }
            other => panic!("HTTP {status} should fail, got {other:?}"),
        }
    }
}

/// **VALUE**: A webhook slower than the timeout yields `DeliveryError::Timeout`.
///
/// **WHY THIS MATTERS**: The notifier runs from cron and shell pipelines. A hung endpoint
/// must not pile up stuck processes.
///
/// **BUG THIS CATCHES**: Would catch the timeout being dropped from the client builder,
/// or timeouts being reported as generic transport errors.
#[tokio::test]
async fn given_slow_endpoint_when_sending_then_returns_timeout_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;

    let sender = WebhookSender::with_timeout(Duration::from_millis(200)).unwrap();
    let result = sender.send(&endpoint(&server), &payload()).await;

    assert!(matches!(result, Err(DeliveryError::Timeout { .. })), "got {result:?}");
}

/// **VALUE**: Connection failures are transport errors and never echo the webhook URL.
///
/// **WHY THIS MATTERS**: reqwest includes the URL in its messages by default, and the
/// URL is the credential.
///
/// **BUG THIS CATCHES**: Would catch `without_url()` being removed from the conversion.
#[tokio::test]
async fn given_unreachable_endpoint_when_sending_then_returns_transport_error() {
    // GIVEN: A port with nothing listening
    let unreachable = format!("http://127.0.0.1:65534{HOOK_PATH}");

    // WHEN: Sending
    let sender = WebhookSender::new().unwrap();
    let result = sender.send(&unreachable, &payload()).await;

    // THEN: Transport error without the secret path
    match result {
        Err(err @ DeliveryError::Transport { .. }) => {
            assert!(!err.to_string().contains("XXXX"), "leaked: {err}");
            assert_eq!(err.status(), None);
        }
        other => panic!("Expected transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn given_malformed_endpoint_when_sending_then_returns_invalid_endpoint() {
    let sender = WebhookSender::new().unwrap();

    let result = sender.send("hooks.slack.com/services/X", &payload()).await;

    assert!(matches!(result, Err(DeliveryError::InvalidEndpoint { .. })));
}

#[test]
fn given_webhook_url_when_redacting_then_path_is_hidden() {
    let url = Url::parse("https://hooks.slack.com/services/T000/B000/XXXX").unwrap();
    let local = Url::parse("http://127.0.0.1:8080/hook").unwrap();

    assert_eq!(redact_endpoint(&url), "https://hooks.slack.com/[REDACTED]");
    assert_eq!(redact_endpoint(&local), "http://127.0.0.1:8080/[REDACTED]");
}
