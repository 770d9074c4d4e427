//! Shared building blocks for the slackbot workspace.
//!
//! Only types that every layer needs live here: location-tracked errors,
//! secret handling and HTTP status categorisation.
//!
//! ## Architecture
//!
//! - **common** (this crate): cross-cutting helpers
//! - **models**: pure data structures
//! - **notify-core**: discovery, composition and delivery
//! - **slackbot**: the binary wiring everything together

pub mod error;
pub mod http_status;
pub mod redacted_secret;

pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
pub use redacted_secret::RedactedSecret;
