//! Webhook delivery.
//!
//! One POST per invocation, no retries. Only a `200 OK` counts as delivered.

pub mod wire;

use crate::error::delivery::DeliveryError;
use crate::{NETWORK_TIMEOUT, USER_AGENT};

use common::{ErrorLocation, HttpStatusCode};
use models::NotificationPayload;

use std::panic::Location;
use std::time::Duration;

use log::{debug, info, warn};
use reqwest::Client;
use url::Url;

use wire::WebhookMessage;

#[derive(Debug, Clone)]
pub struct WebhookSender {
    client: Client,
}

impl WebhookSender {
    /// Sender with the standard 10 second request timeout.
    pub fn new() -> Result<Self, DeliveryError> {
        Self::with_timeout(NETWORK_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, DeliveryError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { client })
    }

    /// POST `payload` as JSON to `endpoint`.
    ///
    /// # Errors
    ///
    /// - [`DeliveryError::InvalidEndpoint`] if `endpoint` is not a URL
    /// - [`DeliveryError::Timeout`] if no response arrives in time
    /// - [`DeliveryError::Transport`] on DNS, connection or protocol failures
    /// - [`DeliveryError::Status`] for any status other than 200
    pub async fn send(
        &self,
        endpoint: &str,
        payload: &NotificationPayload,
    ) -> Result<(), DeliveryError> {
        let url = Url::parse(endpoint)?;
        let message = WebhookMessage::from(payload);

        debug!(
            "Posting {} block(s) to {}",
            message.blocks.len(),
            redact_endpoint(&url)
        );

        let response = self.client.post(url).json(&message).send().await?;

        let status = HttpStatusCode::from(response.status().as_u16());
        if !status.is_ok() {
            warn!("{} (HTTP {status})", describe_status(status));
            return Err(DeliveryError::Status {
                status,
                body: response.text().await.unwrap_or_default(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        info!("Notification delivered (HTTP {status})");
        Ok(())
    }
}

/// Operator-facing reading of a non-200 webhook status.
pub(crate) fn describe_status(status: HttpStatusCode) -> &'static str {
    if status.is_client_error() {
        "Webhook rejected the notification; check the URL, secret and payload"
    } else if status.is_server_error() {
        "Webhook endpoint failed to process the notification"
    } else {
        "Webhook answered with a status other than 200 OK"
    }
}

/// Scheme and host of a webhook URL; the path (the secret part) is hidden.
pub fn redact_endpoint(url: &Url) -> String {
    match (url.host_str(), url.port()) {
        (Some(host), Some(port)) => format!("{}://{host}:{port}/[REDACTED]", url.scheme()),
        (Some(host), None) => format!("{}://{host}/[REDACTED]", url.scheme()),
        (None, _) => String::from("[REDACTED]"),
    }
}
