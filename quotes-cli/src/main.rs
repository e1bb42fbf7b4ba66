//! Quotes CLI
//!
//! Fetches the current USD/BRL bid from a running quote server and records
//! it to a file. Any failure ends the process with a non-zero status.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use quotes_client::{
    ClientConfig, DEFAULT_OUTPUT_PATH, DEFAULT_SERVER_URL, QuotesClient, format_quote, write_quote,
};

#[derive(Parser)]
#[command(name = "quotes")]
#[command(author, version, about = "Records the current USD/BRL quote", long_about = None)]
struct Cli {
    /// Base URL of the quote server
    #[arg(long, env = "QUOTES_SERVER_URL", default_value = DEFAULT_SERVER_URL)]
    server_url: String,

    /// File the quote is written to (overwritten on every run)
    #[arg(long, env = "QUOTES_OUTPUT", default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Deadline for the whole request, in milliseconds
    #[arg(long, env = "QUOTES_TIMEOUT_MS", default_value_t = 300)]
    timeout_ms: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    run(Cli::parse()).await
}

/// Fetches one quote and records it. Nothing is written on failure.
async fn run(cli: Cli) -> Result<()> {
    let client = QuotesClient::new(ClientConfig {
        base_url: cli.server_url,
        timeout: Duration::from_millis(cli.timeout_ms),
    });

    // No caller to protect here, so the detail is printed too.
    let quote = client
        .quote()
        .await
        .map_err(|e| anyhow::anyhow!("{}: {}", e, e.detail()))?;

    write_quote(&cli.output, &quote)
        .await
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    print!("{}", format_quote(&quote));
    Ok(())
}
