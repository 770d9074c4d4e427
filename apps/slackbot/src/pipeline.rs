//! One slackbot invocation: config, stdin, host identity, compose, deliver.

use crate::cli::Args;
use crate::error::{SlackbotError, Stage};

use common::{ErrorLocation, RedactedSecret};
use models::{AddressInfo, DeliveryResult, NotificationPayload};
use notify_core::composer::compose;
use notify_core::config::{NotifierConfig, default_user_config_dir, resolve_config_path};
use notify_core::scanner::{PublicAddressLookup, discover_local_addresses, local_hostname};
use notify_core::sender::WebhookSender;

use std::io::Read;
use std::panic::Location;

use chrono::{Local, NaiveDateTime};
use log::{debug, info, warn};

/// Everything an alert says about the host and the event.
#[derive(Debug, Clone)]
pub struct Alert {
    pub hostname: String,
    pub text: String,
    pub addresses: Vec<AddressInfo>,
}

/// Read the whole input stream as UTF-8 text.
#[track_caller]
pub fn read_input(mut input: impl Read) -> Result<String, SlackbotError> {
    let mut text = String::new();
    input
        .read_to_string(&mut text)
        .map_err(|e| SlackbotError::Input {
            message: format!("Failed to read standard input: {e}"),
            location: ErrorLocation::from(Location::caller()),
            source: e,
        })?;

    debug!("Read {} byte(s) from input", text.len());
    Ok(text)
}

/// Append the public address to `local`, if a lookup is configured and succeeds.
///
/// Lookup failures are logged and otherwise ignored.
pub async fn collect_addresses(
    mut local: Vec<AddressInfo>,
    lookup: Option<&PublicAddressLookup>,
) -> Vec<AddressInfo> {
    if let Some(lookup) = lookup {
        match lookup.discover().await {
            Ok(public) => local.push(public),
            Err(e) => warn!("Public address lookup failed, continuing without it: {e}"),
        }
    }

    local
}

/// Compose `alert` at `timestamp` and post it to `endpoint`.
///
/// Returns the payload that was delivered.
pub async fn deliver(
    alert: &Alert,
    timestamp: NaiveDateTime,
    endpoint: &RedactedSecret,
    sender: &WebhookSender,
) -> Result<NotificationPayload, SlackbotError> {
    let payload = compose(&alert.hostname, &alert.text, &alert.addresses, timestamp)
        .map_err(|e| SlackbotError::stage(Stage::Compose, e))?;

    sender
        .send(endpoint.expose(), &payload)
        .await
        .map_err(|e| SlackbotError::stage(Stage::Delivery, e))?;

    Ok(payload)
}

fn public_lookup(args: &Args, config: &NotifierConfig) -> Option<PublicAddressLookup> {
    if !(args.public_ip || config.lookup.public_ip) {
        return None;
    }

    match PublicAddressLookup::new(&config.lookup.endpoint) {
        Ok(lookup) => {
            debug!("Public address lookup enabled via {}", lookup.endpoint());
            Some(lookup)
        }
        Err(e) => {
            warn!("Public address lookup disabled: {e}");
            None
        }
    }
}

/// Run a full invocation with `input` as the event text.
///
/// `input` is read to EOF before the config is loaded.
pub async fn run(args: &Args, input: impl Read) -> Result<(), SlackbotError> {
    let text = read_input(input)?;

    let config_path = resolve_config_path(
        args.config.as_deref(),
        default_user_config_dir().as_deref(),
    );
    let config =
        NotifierConfig::load(&config_path).map_err(|e| SlackbotError::stage(Stage::Config, e))?;

    let hostname = local_hostname().map_err(|e| SlackbotError::stage(Stage::Scan, e))?;
    let local = discover_local_addresses().map_err(|e| SlackbotError::stage(Stage::Scan, e))?;
    let addresses = collect_addresses(local, public_lookup(args, &config).as_ref()).await;

    info!(
        "Reporting {} address(es) for host {hostname}",
        addresses.len()
    );

    let sender = WebhookSender::new().map_err(|e| SlackbotError::stage(Stage::Delivery, e))?;
    let alert = Alert {
        hostname,
        text,
        addresses,
    };

    deliver(
        &alert,
        Local::now().naive_local(),
        &config.webhook.endpoint(),
        &sender,
    )
    .await?;

    Ok(())
}

/// Process exit status for a delivery outcome.
pub fn exit_status(result: &DeliveryResult) -> u8 {
    if result.success { 0 } else { 1 }
}
