//! Strictly Minimax - Unified CLI
//!
//! Serves O's best move over HTTP, or analyses a single board.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use strictly_minimax::{Board, ServerConfig, report, server};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Http { port, host, debug } => run_http_server(host, port, debug).await,
        Command::Play { board, json } => {
            initialize_tracing(false);
            run_play(&board, json)
        }
    }
}

/// Run the HTTP move server
async fn run_http_server(host: Option<String>, port: Option<u16>, debug: bool) -> Result<()> {
    let config = ServerConfig::from_env()?.with_overrides(host, port, debug);
    initialize_tracing(*config.debug());

    info!(?config, "Starting Strictly Minimax HTTP server");
    server::serve(config).await?;

    Ok(())
}

/// Evaluate one board and print the analysis
#[instrument]
fn run_play(spec: &str, json: bool) -> Result<()> {
    let board = Board::parse(spec).with_context(|| format!("cannot read board {:?}", spec))?;
    let evaluation = board.evaluate();

    if json {
        println!("{}", serde_json::to_string_pretty(&evaluation)?);
    } else {
        print!("{}", report::play_report(&evaluation));
    }

    Ok(())
}

/// Logs go to stderr so stdout carries only the move or the report.
fn initialize_tracing(debug_view: bool) {
    let default_filter = if debug_view {
        "info,strictly_minimax=debug"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
