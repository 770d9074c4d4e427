//! Errors from the public-address lookup.
//!
//! All of these are non-fatal for the notifier: the caller logs them and
//! carries on without a public address.

use common::{ErrorLocation, HttpStatusCode};
use models::ModelError;

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum LookupError {
    #[error("Lookup HTTP Error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
    },

    #[error("Lookup Status Error: HTTP {status} {location}")]
    Status {
        status: HttpStatusCode,
        location: ErrorLocation,
    },

    #[error("Lookup Parse Error: {message} {location}")]
    Parse {
        message: String,
        location: ErrorLocation,
    },

    #[error("Lookup Endpoint Error: {message} {location}")]
    InvalidEndpoint {
        message: String,
        location: ErrorLocation,
    },
}

impl From<reqwest::Error> for LookupError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        LookupError::Http {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<url::ParseError> for LookupError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        LookupError::InvalidEndpoint {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ModelError> for LookupError {
    #[track_caller]
    fn from(error: ModelError) -> Self {
        LookupError::Parse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
