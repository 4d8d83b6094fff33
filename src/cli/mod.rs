//! Command-line interface module.

mod args;
pub mod check;
pub mod init;
pub mod resolve;
pub mod sitemap;

pub use args::{CheckArgs, Cli, Commands, ResolveArgs};

use anyhow::{Context, Result, bail};
use std::path::PathBuf;

use crate::config::{SiteConfig, find_config_file};

/// Locate and load the config file named by `-C`.
///
/// `~` is expanded; relative names are searched upward from the current
/// directory.
pub fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let path = config_path(cli)?;
    let config = SiteConfig::load(&path)?;
    crate::debug!("config"; "loaded {}", path.display());
    Ok(config)
}

fn config_path(cli: &Cli) -> Result<PathBuf> {
    let raw = cli.config.to_string_lossy();
    let expanded = PathBuf::from(shellexpand::tilde(&raw).into_owned());
    let cwd = std::env::current_dir().context("Failed to get current working directory")?;

    match find_config_file(&expanded, &cwd) {
        Some(path) => Ok(path),
        None => bail!(
            "Config file '{}' not found. Run 'lingonav init' to create one.",
            cli.config.display()
        ),
    }
}
