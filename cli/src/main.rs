//! Telescope Seeder CLI
//!
//! Sends a sample OTLP trace and its correlated logs to a collector and prints
//! the collector's responses as JSON.
//!
//! # Usage
//!
//! ```bash
//! telescope-seeder
//! telescope-seeder --endpoint http://localhost:4318
//! RUST_LOG=debug telescope-seeder
//! ```

#![deny(unsafe_code)]

use anyhow::Context;
use clap::Parser;
use seeder::config::DEFAULT_ENDPOINT;
use seeder::{ExportSummary, Exporter, ExporterConfig, TelemetryBuilder};

/// Seed a Telescope collector with sample OTLP traces and logs.
#[derive(Parser)]
#[command(name = "telescope-seeder")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Collector base URL (no trailing slash)
    #[arg(
        short,
        long,
        env = "TELESCOPE_ENDPOINT",
        default_value = DEFAULT_ENDPOINT
    )]
    endpoint: String,
}

async fn run(cli: Cli) -> anyhow::Result<ExportSummary> {
    let config = ExporterConfig::new(&cli.endpoint)?;
    let exporter = Exporter::new(config)?;
    let mut builder = TelemetryBuilder::system();

    let summary = seeder::seed(&exporter, &mut builder)
        .await
        .with_context(|| format!("Failed to seed collector at {}", cli.endpoint))?;

    tracing::info!(
        traces = summary.traces.status_code,
        logs = summary.logs.status_code,
        "Seeding finished"
    );

    Ok(summary)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout carries only the summary.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let summary = run(Cli::parse()).await?;
    println!("{}", summary.to_json_pretty()?);

    Ok(())
}
