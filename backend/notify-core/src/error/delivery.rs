use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use thiserror::Error as ThisError;

/// Delivery failed. Messages never contain the webhook URL: it is a credential.
#[derive(Debug, ThisError)]
pub enum DeliveryError {
    #[error("Webhook Endpoint Error: {message} {location}")]
    InvalidEndpoint {
        message: String,
        location: ErrorLocation,
    },

    #[error("Webhook Timeout Error: {message} {location}")]
    Timeout {
        message: String,
        location: ErrorLocation,
    },

    #[error("Webhook Transport Error: {message} {location}")]
    Transport {
        message: String,
        location: ErrorLocation,
    },

    #[error("Webhook Status Error: HTTP {status} - {body} {location}")]
    Status {
        status: HttpStatusCode,
        body: String,
        location: ErrorLocation,
    },
}

impl DeliveryError {
    /// Status code of a rejected delivery, `None` for transport-level failures.
    pub fn status(&self) -> Option<HttpStatusCode> {
        match self {
            DeliveryError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<url::ParseError> for DeliveryError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        DeliveryError::InvalidEndpoint {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for DeliveryError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        let location = ErrorLocation::from(Location::caller());
        let timed_out = error.is_timeout();
        let message = error.without_url().to_string();

        if timed_out {
            DeliveryError::Timeout { message, location }
        } else {
            DeliveryError::Transport { message, location }
        }
    }
}
