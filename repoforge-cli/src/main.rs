//! Repoforge CLI
//!
//! Command-line interface for creating repositories through the Repoforge service.

mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;

#[derive(Parser)]
#[command(name = "repoforge")]
#[command(about = "Create repositories through the Repoforge service", long_about = None)]
struct Cli {
    /// Repoforge service URL
    #[arg(
        long,
        env = "REPOFORGE_SERVER_URL",
        default_value = "http://localhost:8080"
    )]
    server_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config {
        server_url: cli.server_url,
    };

    handle_command(cli.command, &config).await
}
