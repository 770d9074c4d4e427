pub mod composer;
pub mod config;
pub mod error;
pub mod scanner;
pub mod sender;

#[cfg(test)]
mod tests;

use std::time::Duration;

pub const APP_NAME: &str = "slackbot";
pub const DEFAULT_PUBLIC_IP_ENDPOINT: &str = "https://checkip.amazonaws.com";

/// Upper bound for every outbound request.
pub const NETWORK_TIMEOUT: Duration = Duration::from_secs(10);

pub const USER_AGENT: &str = const_format::concatcp!(APP_NAME, "/", env!("CARGO_PKG_VERSION"));
