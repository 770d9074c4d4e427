use std::fmt::Display;

use serde::Serialize;

/// Outcome of one delivery attempt, as seen by the process shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryResult {
    pub success: bool,
    pub failure_reason: Option<String>,
}

impl DeliveryResult {
    pub fn delivered() -> Self {
        Self {
            success: true,
            failure_reason: None,
        }
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            success: false,
            failure_reason: Some(reason.into()),
        }
    }
}

impl<E: Display> From<&Result<(), E>> for DeliveryResult {
    fn from(result: &Result<(), E>) -> Self {
        match result {
            Ok(()) => Self::delivered(),
            Err(e) => Self::failed(e.to_string()),
        }
    }
}
