//! LayerCake CLI
//!
//! Command-line interface for gender presentation layer documents.

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::debug;

use layercake::cli::{commands, Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    debug!("LayerCake v{}", env!("CARGO_PKG_VERSION"));

    handle_command(cli.command)
}

fn handle_command(cmd: Commands) -> anyhow::Result<()> {
    match cmd {
        Commands::Validate { path } => commands::validate(&path)
            .with_context(|| format!("'{}' is not a valid cake", path.display())),
        Commands::Show { path, category } => commands::show(&path, category)
            .with_context(|| format!("failed to show '{}'", path.display())),
        Commands::Unused => commands::unused().context("failed to print sentinel"),
        Commands::Template { output } => {
            commands::template(output.as_deref()).context("failed to write template")
        }
    }
}
