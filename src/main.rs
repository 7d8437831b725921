//! Noughts - unified CLI
//!
//! Runs the move authority or the terminal client.

use anyhow::Result;
use clap::Parser;
use noughts::cli::{Cli, Command};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve { host, port } => run_serve(host, port).await,
        Command::Tui { server_url, port } => noughts::tui::run_tui(server_url, port).await,
    }
}

/// Run the move authority server
async fn run_serve(host: String, port: u16) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting noughts move authority");
    noughts::serve(&host, port).await
}
