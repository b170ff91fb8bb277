use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use toast_core::config::RootConfig;

/// Prints where the configuration lives and what is in effect.
pub fn show(path: &Path, config: &RootConfig) -> Result<()> {
    let exists = if path.exists() { "" } else { " (not found, using defaults)" };
    println!(
        "{} {}{}",
        "Config file:".bright_black(),
        path.display(),
        exists.yellow()
    );
    println!();
    print!("{}", toml::to_string_pretty(config)?);
    Ok(())
}
