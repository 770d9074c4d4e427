//! Domain models for slackbot.
//!
//! Pure data structures describing what the notifier discovers and sends.
//! Models carry validation at construction time but no I/O; discovery,
//! composition and delivery live in `notify-core`.

pub mod address;
pub mod delivery;
pub mod error;
pub mod payload;

pub use address::{AddressInfo, AddressScope, IpVersion};
pub use common::ErrorLocation;
pub use delivery::DeliveryResult;
pub use error::model_error::ModelError;
pub use payload::builder::NotificationPayloadBuilder;
pub use payload::{NotificationPayload, Section};

#[cfg(test)]
mod tests;
