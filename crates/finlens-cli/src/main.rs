//! Finlens CLI - Fuzzy spending and behavior insights
//!
//! Usage:
//!   finlens spending --ratio 1.15 --volatility 0.42 --budget 0.78
//!   finlens behavior --late-night 0.32 --repeats 6
//!   finlens advise --prompt "how can I save on food?"
//!   finlens config show

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::{Context, Result};
use clap::Parser;
use finlens_core::FinlensConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact().with_writer(std::io::stderr))
        .init();

    let config = FinlensConfig::load(cli.config.as_deref()).context("Failed to load config")?;

    match cli.command {
        Commands::Spending { signals } => commands::cmd_spending(&config, &signals, cli.json),
        Commands::Behavior { signals } => commands::cmd_behavior(&config, &signals, cli.json),
        Commands::Advise {
            prompt,
            month,
            spending,
            behavior,
        } => commands::cmd_advise(
            &config,
            &prompt,
            month.as_deref(),
            &spending,
            &behavior,
            cli.json,
        ),
        Commands::Config { action } => match action {
            None | Some(ConfigAction::Show) => commands::cmd_config_show(&config, cli.json),
            Some(ConfigAction::Path) => commands::cmd_config_path(),
        },
    }
}
