use crate::logger::LoggerOptions;

use notify_core::config::CONFIG_ENV_VAR;

use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

pub const HELP_EXAMPLES: &str = r#"slackbot sends piped-in text to a Slack channel

Examples:
  echo "[ERROR] Some error details" | slackbot

  cat file.txt | slackbot

  echo "Text message" | slackbot --config ./config.toml"#;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "slackbot",
    version,
    about = "Post stdin, hostname and host addresses to a webhook",
    after_help = HELP_EXAMPLES
)]
pub struct Args {
    /// Path to the TOML config file
    #[arg(short, long, value_name = "PATH", env = CONFIG_ENV_VAR)]
    pub config: Option<PathBuf>,

    /// Also look up and report the public IP address
    #[arg(long)]
    pub public_ip: bool,

    /// Debug logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Append logs to this file as well as stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else if self.quiet {
            LevelFilter::Warn
        } else {
            LevelFilter::Info
        }
    }

    pub fn logger_options(&self) -> LoggerOptions {
        LoggerOptions {
            level: self.log_level(),
            log_file: self.log_file.clone(),
        }
    }
}
