use slackbot::cli::Args;
use slackbot::logger::initialize as LoggerInitialize;
use slackbot::pipeline::{exit_status, run};

use models::DeliveryResult;

use std::io::stdin;
use std::process::ExitCode;

use clap::Parser;
use log::{debug, error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Load .env before parsing so SLACKBOT_CONFIG can come from it
    let dotenv = dotenvy::dotenv();

    let args = Args::parse();

    if let Err(e) = LoggerInitialize(&args.logger_options()) {
        eprintln!("slackbot: {e}");
        return ExitCode::FAILURE;
    }

    if let Ok(path) = dotenv {
        debug!("Loaded environment from {}", path.display());
    }

    let outcome = run(&args, stdin().lock()).await;
    let result = DeliveryResult::from(&outcome);

    match &outcome {
        Ok(()) => info!("Done"),
        Err(e) => error!("Failed to run: {e}"),
    }

    ExitCode::from(exit_status(&result))
}
