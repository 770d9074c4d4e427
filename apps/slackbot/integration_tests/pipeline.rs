use slackbot::cli::Args;
use slackbot::error::{SlackbotError, Stage};
use slackbot::pipeline::{Alert, deliver, exit_status, run};

use common::RedactedSecret;
use models::{AddressInfo, AddressScope, DeliveryResult};
use notify_core::sender::WebhookSender;

use std::io::Cursor;
use std::path::Path;
use std::time::Duration;

use chrono::NaiveDate;
use clap::Parser;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const HOOK_PATH: &str = "/services/T000/B000";
const HOOK_SECRET: &str = "/XXXX";
const LOOKUP_PATH: &str = "/ip";

fn alert() -> Alert {
    Alert {
        hostname: "host1".to_string(),
        text: "boom".to_string(),
        addresses: vec![AddressInfo::parse("10.0.0.5", AddressScope::Local).unwrap()],
    }
}

fn timestamp() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 9)
        .unwrap()
        .and_hms_opt(7, 5, 3)
        .unwrap()
}

fn sender() -> WebhookSender {
    WebhookSender::with_timeout(Duration::from_secs(2)).unwrap()
}

async fn mount_hook(server: &MockServer, status: u16, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path(format!("{HOOK_PATH}{HOOK_SECRET}")))
        .respond_with(ResponseTemplate::new(status).set_body_string("ok"))
        .expect(expected_calls)
        .mount(server)
        .await;
}

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let config_path = dir.path().join("config.toml");
    std::fs::write(&config_path, contents).unwrap();
    config_path
}

fn webhook_config(server: &MockServer) -> String {
    format!(
        "[webhook]\nurl = \"{}{HOOK_PATH}\"\nsecret = \"{HOOK_SECRET}\"\n",
        server.uri()
    )
}

fn args_for(config_path: &Path) -> Args {
    Args::try_parse_from(["slackbot", "--config", config_path.to_str().unwrap()]).unwrap()
}

// ============================================================================
// deliver() - compose and send
// ============================================================================

/// **VALUE**: An alert delivered to a 200 endpoint reports success and exit status 0,
/// with the input text as the last body section.
///
/// **WHY THIS MATTERS**: The preformatted block at the end is what readers scan first
/// in the channel. Exit status 0 tells the calling script the alert went out.
///
/// **BUG THIS CATCHES**: Would catch the event text being moved out of the last
/// section, or success being reported for the wrong outcome.
#[tokio::test]
async fn given_200_webhook_when_delivering_then_succeeds_with_text_last() {
    // GIVEN: A webhook that accepts exactly one post
    let server = MockServer::start().await;
    mount_hook(&server, 200, 1).await;
    let endpoint = RedactedSecret::new(format!("{}{HOOK_PATH}{HOOK_SECRET}", server.uri()));

    // WHEN: Delivering the alert
    let result = deliver(&alert(), timestamp(), &endpoint, &sender()).await;

    // THEN: Delivered, body is the preformatted input
    let payload = result.expect("delivery to 200 endpoint should succeed");
    assert_eq!(payload.summary_text(), "boom");
    assert_eq!(payload.last_body(), Some("```boom```"));

    let outcome: Result<(), SlackbotError> = Ok(());
    let delivery = DeliveryResult::from(&outcome);
    assert!(delivery.success);
    assert_eq!(exit_status(&delivery), 0);
}

/// **VALUE**: A 500 response fails the Delivery stage with a non-zero exit status.
///
/// **WHY THIS MATTERS**: Only HTTP 200 counts; anything else means the alert was lost
/// and the calling script must know.
///
/// **BUG THIS CATCHES**: Would catch `is_success()` style checks or swallowed errors.
#[tokio::test]
async fn given_500_webhook_when_delivering_then_delivery_stage_fails() {
    // GIVEN: A failing webhook
    let server = MockServer::start().await;
    mount_hook(&server, 500, 1).await;
    let endpoint = RedactedSecret::new(format!("{}{HOOK_PATH}{HOOK_SECRET}", server.uri()));

    // WHEN: Delivering
    let result = deliver(&alert(), timestamp(), &endpoint, &sender())
        .await
        .map(|_| ());

    // THEN: Delivery stage error, exit status 1, secret not in message
    let err = result.as_ref().unwrap_err();
    assert_eq!(err.failed_stage(), Some(Stage::Delivery));
    assert!(err.to_string().contains("HTTP 500"));
    assert!(!err.to_string().contains(HOOK_SECRET));

    let delivery = DeliveryResult::from(&result);
    assert!(!delivery.success);
    assert_eq!(exit_status(&delivery), 1);
}

// ============================================================================
// run() - full invocation
// ============================================================================

#[tokio::test]
async fn given_config_file_when_running_then_posts_input_to_webhook() {
    // GIVEN: A config pointing at the mock webhook
    let server = MockServer::start().await;
    mount_hook(&server, 200, 1).await;
    let dir = tempfile::tempdir().unwrap();
    let config_path = write_config(&dir, &webhook_config(&server));

    // WHEN: Running with piped input
    let result = run(&args_for(&config_path), Cursor::new("disk full\n")).await;

    // THEN: Delivered once, with the input in the posted JSON
    assert!(result.is_ok(), "run failed: {result:?}");
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body: serde_json::Value = requests[0].body_json().unwrap();
    assert_eq!(body["text"], "disk full\n");
}

/// **VALUE**: A failing public IP lookup does not stop the alert.
///
/// **WHY THIS MATTERS**: The public address is extra context. Losing an alert about a
/// failing host because a third-party echo service is down would be backwards.
///
/// **BUG THIS CATCHES**: Would catch lookup errors being propagated with `?`.
#[tokio::test]
async fn given_failing_public_lookup_when_running_then_still_delivers() {
    // GIVEN: Lookup endpoint returning 500, webhook returning 200
    let server = MockServer::start().await;
    mount_hook(&server, 200, 1).await;
    Mock::given(method("GET"))
        .and(path(LOOKUP_PATH))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config = format!(
        "{}\n[lookup]\npublic_ip = true\nendpoint = \"{}{LOOKUP_PATH}\"\n",
        webhook_config(&server),
        server.uri()
    );
    let config_path = write_config(&dir, &config);

    // WHEN: Running
    let result = run(&args_for(&config_path), Cursor::new("boom")).await;

    // THEN: Delivered without a public address
    assert!(result.is_ok(), "run failed: {result:?}");
    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = requests
        .iter()
        .find(|request| request.method.as_str() == "POST")
        .map(|request| request.body_json().unwrap())
        .expect("webhook should have been called");
    assert!(!body.to_string().contains("Public"));
}

/// **VALUE**: A missing config fails the Config stage, after stdin has been read to EOF.
///
/// **WHY THIS MATTERS**: In `cmd | slackbot` the writer gets EPIPE if slackbot exits
/// without draining its input, turning a config typo into a second failure upstream.
///
/// **BUG THIS CATCHES**: Would catch the config being loaded before the input is read.
#[tokio::test]
async fn given_missing_config_when_running_then_input_is_drained_and_config_stage_fails() {
    // GIVEN: No config file, some piped input
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.toml");
    let text = "disk full on /var\n";
    let mut input = Cursor::new(text);

    // WHEN: Running
    let result = run(&args_for(&missing), &mut input).await;

    // THEN: Config stage error, input fully consumed
    match result {
        Err(err) => assert_eq!(err.failed_stage(), Some(Stage::Config)),
        Ok(()) => panic!("Expected config stage error"),
    }
    assert_eq!(input.position(), text.len() as u64);
}

#[tokio::test]
async fn given_config_without_webhook_when_running_then_nothing_is_sent() {
    let server = MockServer::start().await;
    mount_hook(&server, 200, 0).await;
    let dir = tempfile::tempdir().unwrap();
    let config_path = write_config(&dir, "[lookup]\npublic_ip = false\n");

    let result = run(&args_for(&config_path), Cursor::new("boom")).await;

    assert!(matches!(
        result,
        Err(SlackbotError::Stage {
            stage: Stage::Config,
            ..
        })
    ));
}
