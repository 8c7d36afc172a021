//! Configuration commands

use anyhow::Result;
use finlens_core::config::default_config_path;
use finlens_core::FinlensConfig;

pub fn cmd_config_show(config: &FinlensConfig, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(config)?);
    } else {
        print!("{}", config.to_toml()?);
    }
    Ok(())
}

pub fn cmd_config_path() -> Result<()> {
    match default_config_path() {
        Some(path) => {
            let state = if path.exists() { "present" } else { "not created" };
            println!("{} ({})", path.display(), state);
        }
        None => println!("No data directory available; using built-in defaults"),
    }
    Ok(())
}
