use common::ErrorLocation;
use notify_core::error::CoreError;

use std::fmt;
use std::panic::Location;

use thiserror::Error;

/// Pipeline stage a fatal error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Config,
    Scan,
    Compose,
    Delivery,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Config => "Config",
            Stage::Scan => "Scan",
            Stage::Compose => "Compose",
            Stage::Delivery => "Delivery",
        };
        write!(f, "{name}")
    }
}

/// Errors that end a slackbot invocation with a non-zero exit code.
#[derive(Debug, Error)]
pub enum SlackbotError {
    /// A core operation failed; `stage` says which one
    #[error("{stage} Stage Error: {source} {location}")]
    Stage {
        stage: Stage,
        location: ErrorLocation,
        #[source]
        source: CoreError,
    },

    /// Standard input could not be read
    #[error("Input Error: {message} {location}")]
    Input {
        message: String,
        location: ErrorLocation,
        #[source]
        source: std::io::Error,
    },

    /// Logger could not be set up
    #[error("Logger Error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

impl SlackbotError {
    #[track_caller]
    pub fn stage(stage: Stage, source: impl Into<CoreError>) -> Self {
        SlackbotError::Stage {
            stage,
            location: ErrorLocation::from(Location::caller()),
            source: source.into(),
        }
    }

    /// Stage of a core failure, `None` for process-level errors.
    pub fn failed_stage(&self) -> Option<Stage> {
        match self {
            SlackbotError::Stage { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}
