//! Turns host identity plus event text into a [`NotificationPayload`].
//!
//! Composition is pure: the timestamp is an argument, so identical inputs
//! always produce identical payloads. [`compose_now`] is the only entry point
//! that reads the clock.

pub mod address_list;

pub use address_list::{address_section_text, format_address_list};

use models::{AddressInfo, ModelError, NotificationPayload, NotificationPayloadBuilder};

use chrono::{Local, NaiveDateTime};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Fence around the event text so receivers show it verbatim.
pub const PREFORMATTED_FENCE: &str = "```";

pub fn context_label(hostname: &str, timestamp: NaiveDateTime) -> String {
    format!(
        ":calendar: *{}*  |  :computer: {hostname}",
        timestamp.format(TIMESTAMP_FORMAT)
    )
}

pub fn preformatted(text: &str) -> String {
    format!("{PREFORMATTED_FENCE}{text}{PREFORMATTED_FENCE}")
}

/// Lay out an alert: context line, addresses, divider, event text.
///
/// `body_text` is also used unmodified as the payload's summary text.
#[track_caller]
pub fn compose(
    hostname: &str,
    body_text: &str,
    addresses: &[AddressInfo],
    timestamp: NaiveDateTime,
) -> Result<NotificationPayload, ModelError> {
    NotificationPayloadBuilder::default()
        .with_summary_text(body_text)
        .with_context(context_label(hostname, timestamp))
        .with_body(address_section_text(addresses))
        .with_divider()
        .with_body(preformatted(body_text))
        .build()
}

/// [`compose`] stamped with the current local time.
#[track_caller]
pub fn compose_now(
    hostname: &str,
    body_text: &str,
    addresses: &[AddressInfo],
) -> Result<NotificationPayload, ModelError> {
    compose(hostname, body_text, addresses, Local::now().naive_local())
}
