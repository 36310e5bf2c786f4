//! OPEX variance analysis
//!
//! Main entry point: synthesize (or read) a ledger, analyze it and render
//! the workbook.

mod args;
mod pipeline;

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use opex_shared::config::LoggingSettings;
use opex_shared::{AppConfig, AppError};

use crate::args::Args;

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = AppConfig::load();

    // Initialize tracing; RUST_LOG wins over the configured filter
    let filter = config
        .as_ref()
        .map_or_else(|_| LoggingSettings::default().filter, |c| c.logging.filter.clone());
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let result = config
        .map_err(AppError::from)
        .and_then(|config| pipeline::run(&args.plan(&config)));

    match result {
        Ok(_) => {
            info!("Done");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error_code = err.error_code(), "{err}");
            ExitCode::from(err.exit_code())
        }
    }
}
