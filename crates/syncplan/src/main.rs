//! `syncplan` command-line entry point

mod cli;
mod commands;
mod logging;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands};
use syncplan_core::ConfigManager;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Set up Ctrl+C handler for graceful interruption
    ctrlc::set_handler(|| {
        eprintln!("\n\nInterrupted by user (Ctrl+C)");
        std::process::exit(130); // Standard exit code for SIGINT
    })
    .context("Failed to set Ctrl+C handler")?;

    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = ConfigManager::load(cli.config.as_deref(), cli.no_config)
        .context("Failed to load configuration")?;

    match &cli.command {
        Commands::Plan(args) => {
            commands::Plan::execute(args, &config)
                .await
                .context("Failed to execute plan command")?;
        }
        Commands::Config => {
            commands::Config::execute(&config).context("Failed to execute config command")?;
        }
    }

    Ok(())
}
