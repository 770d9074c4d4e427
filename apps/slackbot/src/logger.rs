//! Logging for the slackbot CLI.
//!
//! stderr with colors, plus an optional plain-text log file. stdout is never
//! written to, so slackbot can sit in the middle of a shell pipeline.

use crate::error::SlackbotError;

use common::ErrorLocation;

use std::io::stderr;
use std::path::PathBuf;
use std::sync::Once;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::Color::{Blue, Green, Magenta, Red, Yellow};
use fern::colors::ColoredLevelConfig;
use humantime::format_rfc3339;
use log::{LevelFilter, debug, warn};

/// Thread-safe initialization guard.
static INIT_LOGGER_ONCE: Once = Once::new();

/// Tracks if logger initialization was already attempted.
static LOGGER_ALREADY_CALLED: AtomicBool = AtomicBool::new(false);

const LOGGER_INITIALIZED_MESSAGE_PREFIX: &str = "Logger initialized with level: ";
const LOGGER_ALREADY_INITIALIZED_MESSAGE: &str = "Logger already initialized";

#[derive(Debug, Clone)]
pub struct LoggerOptions {
    pub level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for LoggerOptions {
    fn default() -> Self {
        Self {
            level: LevelFilter::Info,
            log_file: None,
        }
    }
}

/// Initialize the global logger.
///
/// Safe to call more than once: later calls log a warning and return `Ok`.
///
/// # Errors
///
/// Returns [`SlackbotError::Logger`] if the log file cannot be opened or a
/// global logger was already installed by someone else.
pub fn initialize(options: &LoggerOptions) -> Result<(), SlackbotError> {
    if LOGGER_ALREADY_CALLED.swap(true, Ordering::SeqCst) {
        warn!("{LOGGER_ALREADY_INITIALIZED_MESSAGE}");
        return Ok(());
    }

    let mut result = Ok(());

    INIT_LOGGER_ONCE.call_once(|| {
        result = build_dispatch(options).and_then(apply);
        if result.is_ok() {
            debug!("{LOGGER_INITIALIZED_MESSAGE_PREFIX}{:?}", options.level);
        }
    });

    result
}

/// Build the stderr (+ file) dispatch without installing it.
#[track_caller]
pub fn build_dispatch(options: &LoggerOptions) -> Result<Dispatch, SlackbotError> {
    let color_configuration = ColoredLevelConfig::new()
        .debug(Blue)
        .info(Green)
        .warn(Yellow)
        .error(Red)
        .trace(Magenta);

    let stderr_dispatch = Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message} [{file}:{line}]",
                date = format_rfc3339(SystemTime::now()),
                level = color_configuration.color(record.level()),
                message = message,
                file = record.file().unwrap_or("unknown"),
                line = record.line().unwrap_or(0),
            ))
        })
        .chain(stderr());

    let mut dispatch = Dispatch::new().level(options.level).chain(stderr_dispatch);

    if let Some(log_file_path) = &options.log_file {
        let file = fern::log_file(log_file_path).map_err(|e| SlackbotError::Logger {
            message: format!(
                "Failed to open log file {}: {e}",
                log_file_path.display()
            ),
            location: ErrorLocation::from(std::panic::Location::caller()),
        })?;

        let file_dispatch = Dispatch::new()
            .format(move |out, message, record| {
                out.finish(format_args!(
                    "[{date} - {level}] {message} [{file}:{line}]",
                    date = format_rfc3339(SystemTime::now()),
                    level = record.level(),
                    message = message,
                    file = record.file().unwrap_or("unknown"),
                    line = record.line().unwrap_or(0)
                ))
            })
            .chain(file);

        dispatch = dispatch.chain(file_dispatch);
    }

    Ok(dispatch)
}

#[track_caller]
fn apply(dispatch: Dispatch) -> Result<(), SlackbotError> {
    dispatch.apply().map_err(|e| SlackbotError::Logger {
        message: format!("Failed to initialize logger: {e}"),
        location: ErrorLocation::from(std::panic::Location::caller()),
    })
}
