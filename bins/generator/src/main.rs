//! Synthetic ledger generator for OPEX development and testing.
//!
//! Writes a reproducible ledger CSV with one planted overspend and one
//! planted duplicate payment, without running the analysis.
//!
//! Usage: cargo run --bin generator -- --records 1000 --seed 7

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use opex_shared::AppConfig;
use opex_source::{GeneratorConfig, generate, write_records};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Writes a synthetic OPEX ledger CSV.
#[derive(Debug, Parser)]
#[command(name = "generator", version, about)]
struct Args {
    /// Number of records.
    #[arg(long)]
    records: Option<usize>,

    /// Calendar year of the transactions.
    #[arg(long)]
    year: Option<i32>,

    /// RNG seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Destination CSV.
    #[arg(long, value_name = "PATH")]
    csv_path: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = AppConfig::load().context("Failed to load configuration")?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut generator = GeneratorConfig::from(&config.generator);
    generator.records = args.records.unwrap_or(generator.records);
    generator.year = args.year.unwrap_or(generator.year);
    generator.seed = args.seed.unwrap_or(generator.seed);
    let path = args
        .csv_path
        .unwrap_or_else(|| PathBuf::from(&config.input.csv_path));

    info!(
        records = generator.records,
        year = generator.year,
        seed = generator.seed,
        "Generating synthetic ledger"
    );
    let records = generate(&generator).context("Failed to generate ledger")?;

    write_records(&path, &records)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!(records = records.len(), path = %path.display(), "Synthetic ledger ready");

    Ok(())
}
