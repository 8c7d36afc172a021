//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `config` - Show the effective configuration and override location
//! - `insights` - Spending and behavior summaries, advice

pub mod config;
pub mod insights;

// Re-export command functions for main.rs
pub use config::*;
pub use insights::*;
