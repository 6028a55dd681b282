// file: src/main.rs
// version: 1.0.0
// guid: 26f7b1c9-e043-4d58-a6f2-90b3d8e5c714

//! Shell Executor - Main entry point

use clap::Parser;
use shellexecutor::{cli::Cli, cli::run_command, logging::logger, Result};
use tokio::signal;
use tracing::warn;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    logger::init_logger(cli.debug)?;

    // Set up signal handling for graceful shutdown
    let shutdown_signal = async {
        signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");
        warn!("Received Ctrl+C, aborting run...");
    };

    let command_future = async {
        run_command(&cli.rootdir, cli.dry_run).await?;
        Ok(())
    };

    // Run command with signal handling
    tokio::select! {
        result = command_future => result,
        _ = shutdown_signal => {
            warn!("Application interrupted by user");
            std::process::exit(130); // Standard exit code for Ctrl+C
        }
    }
}
