//! Command-line interface for noughts.

use clap::{Parser, Subcommand};

/// Noughts, tic-tac-toe against a remote move authority.
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Tic-tac-toe terminal client and move authority", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the move authority server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind to
        #[arg(short, long, default_value = "3000")]
        port: u16,
    },

    /// Run the terminal client. Spawns its own authority unless given a URL.
    Tui {
        /// Move authority URL. If not provided, runs in standalone mode.
        #[arg(long)]
        server_url: Option<String>,

        /// Port for the standalone-mode authority
        #[arg(long, default_value = "3000")]
        port: u16,
    },
}
