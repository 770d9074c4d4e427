// Unit tests for non-200 status classification

use crate::sender::describe_status;

use common::HttpStatusCode;

/// **VALUE**: Failed deliveries are logged with a reading that matches the status class.
///
/// **WHY THIS MATTERS**: A 4xx means the webhook or payload is wrong and retrying from
/// cron will not help; a 5xx is the receiver's problem.
///
/// **BUG THIS CATCHES**: Would catch the client/server ranges being swapped, or 2xx/3xx
/// codes other than 200 being reported as receiver failures.
#[test]
fn given_non_ok_statuses_when_describing_then_class_is_named() {
    let cases: Vec<(u16, &str)> = vec![
        (400, "rejected"),
        (404, "rejected"),
        (500, "failed"),
        (503, "failed"),
        (201, "other than 200"),
        (302, "other than 200"),
    ];

    for (code, want) in cases {
        let text = describe_status(HttpStatusCode(code));
        assert!(text.contains(want), "status {code}: {text}");
    }
}
