use common::ErrorLocation;

use std::io::Error as IoError;
use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ScanError {
    #[error("Interface Enumeration Error: {message} {location}")]
    Enumeration {
        message: String,
        location: ErrorLocation,
        #[source]
        source: IoError,
    },

    #[error("Hostname Error: {message} {location}")]
    Hostname {
        message: String,
        location: ErrorLocation,
    },
}

impl ScanError {
    #[track_caller]
    pub fn hostname(message: impl Into<String>) -> Self {
        ScanError::Hostname {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
