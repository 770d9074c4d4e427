use notify_core::error::LookupError;
use notify_core::scanner::{PublicAddressLookup, discover_public_address};

use models::{AddressScope, IpVersion};

use std::time::Duration;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Public-address lookup against a mock "what is my IP" service
// ============================================================================

/// **VALUE**: A plain-text body with a trailing newline is parsed as a Public address.
///
/// **WHY THIS MATTERS**: checkip-style services answer `"203.0.113.7\n"`. The newline
/// must not break parsing.
///
/// **BUG THIS CATCHES**: Would catch the body being parsed untrimmed.
#[tokio::test]
async fn given_ip_body_when_looking_up_then_returns_public_v4() {
    // GIVEN: A lookup service returning an address with a newline
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("203.0.113.7\n"))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN: Looking up
    let address = discover_public_address(&server.uri()).await.unwrap();

    // THEN: Public V4
    assert_eq!(address.address(), "203.0.113.7");
    assert_eq!(address.version(), IpVersion::V4);
    assert_eq!(address.scope(), AddressScope::Public);
}

#[tokio::test]
async fn given_ipv6_body_when_looking_up_then_returns_public_v6() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("  2001:db8::42  "))
        .mount(&server)
        .await;

    let lookup = PublicAddressLookup::new(&server.uri()).unwrap();
    let address = lookup.discover().await.unwrap();

    assert_eq!(address.address(), "2001:db8::42");
    assert_eq!(address.version(), IpVersion::V6);
}

/// **VALUE**: Non-IP bodies produce `LookupError::Parse`.
///
/// **WHY THIS MATTERS**: Captive portals and rate limiters answer with HTML. That must
/// degrade to "no public address", not become a garbage entry in the alert.
///
/// **BUG THIS CATCHES**: Would catch the body being passed through unvalidated.
#[tokio::test]
async fn given_html_body_when_looking_up_then_returns_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>blocked</html>"))
        .mount(&server)
        .await;

    let result = discover_public_address(&server.uri()).await;

    assert!(matches!(result, Err(LookupError::Parse { .. })), "got {result:?}");
}

#[tokio::test]
async fn given_server_error_when_looking_up_then_returns_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let result = discover_public_address(&server.uri()).await;

    match result {
        Err(LookupError::Status { status, .. }) => assert_eq!(status.0, 503),
        other => panic!("Expected status error, got {other:?}"),
    }
}

/// **VALUE**: A slow lookup service is cut off by the timeout.
///
/// **WHY THIS MATTERS**: The lookup is optional; it must never hold the alert hostage.
///
/// **BUG THIS CATCHES**: Would catch the client being built without a timeout.
#[tokio::test]
async fn given_slow_service_when_looking_up_then_returns_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("203.0.113.7")
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let lookup =
        PublicAddressLookup::with_timeout(&server.uri(), Duration::from_millis(200)).unwrap();
    let result = lookup.discover().await;

    assert!(matches!(result, Err(LookupError::Http { .. })), "got {result:?}");
}

#[test]
fn given_invalid_endpoint_when_creating_lookup_then_returns_endpoint_error() {
    let result = PublicAddressLookup::new("not a url");

    assert!(matches!(result, Err(LookupError::InvalidEndpoint { .. })));
}
