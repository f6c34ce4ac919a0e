//! `olamaps` command-line client

mod cli;
mod commands;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use olamaps_domain::RequestOptions;
use olamaps_infra::{config, OlaMapsClient};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::commands::Outcome;

#[tokio::main]
async fn main() -> Result<()> {
    // Before tracing so a RUST_LOG in .env takes effect.
    let dotenv = dotenvy::dotenv();
    init_tracing();
    match dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env"),
        Err(e) => tracing::debug!(error = %e, "No .env file loaded"),
    }

    let cli = Cli::parse();
    let client = build_client(&cli)?;

    let options = RequestOptions {
        request_id: cli.correlation.request_id,
        correlation_id: cli.correlation.correlation_id,
    };

    match commands::run(&client, options, cli.command).await? {
        Outcome::Json(value) => {
            let rendered =
                serde_json::to_string_pretty(&value).context("failed to render response")?;
            println!("{rendered}");
        }
        Outcome::Written { path, bytes } => println!("Wrote {bytes} bytes to {path}"),
    }

    Ok(())
}

fn build_client(cli: &Cli) -> Result<OlaMapsClient> {
    let config = config::load(cli.config.clone()).context("failed to load configuration")?;

    let mut builder = OlaMapsClient::builder().config(config).without_env();
    if let Some(api_key) = &cli.api_key {
        builder = builder.api_key(api_key);
    }
    if let Some(base_url) = &cli.base_url {
        builder = builder.base_url(base_url);
    }
    if let Some(timeout) = cli.timeout {
        builder = builder.timeout(Duration::from_secs(timeout));
    }

    builder.build().context("failed to create Ola Maps client")
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
}
