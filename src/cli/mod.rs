pub mod config;
pub mod pull;

use crate::errors::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "appsync",
    version,
    about = "Sync app configuration between local projects and the app directory"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve what a pull would download and where it would write it
    Pull(pull::PullArgs),
    /// Inspect resolved settings
    Config(config::ConfigArgs),
}

/// Dispatch to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Pull(args) => pull::run(&args),
        Commands::Config(args) => config::run(&args),
    }
}
