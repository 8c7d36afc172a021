//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Finlens - Fuzzy spending and behavior insights
#[derive(Parser)]
#[command(name = "finlens")]
#[command(about = "Fuzzy spending and behavior insights", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to ~/.local/share/finlens/config/finlens.toml,
    /// then built-in defaults)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print JSON instead of a table
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Overspending likelihood, month level and budget risk
    Spending {
        #[command(flatten)]
        signals: SpendingArgs,
    },

    /// Late-night orders, subscription creep, dining spikes, impulse buying
    Behavior {
        #[command(flatten)]
        signals: BehaviorArgs,
    },

    /// Both summaries plus suggestions
    Advise {
        /// Question or focus area (e.g., "how can I save on food?")
        #[arg(short, long, default_value = "")]
        prompt: String,

        /// Month label for the report (YYYY-MM, defaults to the current month)
        #[arg(long)]
        month: Option<String>,

        #[command(flatten)]
        spending: SpendingArgs,

        #[command(flatten)]
        behavior: BehaviorArgs,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

/// Spending context signals; omitted values come from the configured baseline
#[derive(Args, Debug, Clone, Default)]
pub struct SpendingArgs {
    /// Current month spend / typical month (0.0-3.0)
    #[arg(long, allow_negative_numbers = true)]
    pub ratio: Option<f64>,

    /// Normalized spending volatility (0.0-1.0)
    #[arg(long, allow_negative_numbers = true)]
    pub volatility: Option<f64>,

    /// Current spend / budget (0.0-1.8)
    #[arg(long, allow_negative_numbers = true)]
    pub budget: Option<f64>,
}

/// Raw behavior metrics; omitted values come from the configured baseline
#[derive(Args, Debug, Clone, Default)]
pub struct BehaviorArgs {
    /// Fraction of orders placed 22:00-03:00 (0.0-1.0)
    #[arg(long, allow_negative_numbers = true)]
    pub late_night: Option<f64>,

    /// Month-over-month subscription cost creep (0.0-1.0)
    #[arg(long, allow_negative_numbers = true)]
    pub subscription_change: Option<f64>,

    /// Last 7 days dining increase vs baseline (0.0-1.0)
    #[arg(long, allow_negative_numbers = true)]
    pub dining_increase: Option<f64>,

    /// Small discretionary repeat purchases in the last two weeks
    #[arg(long)]
    pub repeats: Option<u32>,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,
    /// Print the override file location
    Path,
}
