//! Configuration management command

use anyhow::{bail, Context, Result};
use clap::Subcommand;
use friend_circle::{config::default_config_path, CircleConfig};
use std::path::PathBuf;

use super::helpers::GlobalOptions;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the resolved configuration and file locations
    Show,

    /// Write a default config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

/// Handle configuration management command
pub fn handle(action: ConfigAction, globals: &GlobalOptions) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = globals.load_config()?;
            let config_path = config_target(globals);
            match config_path {
                Some(path) if path.exists() => println!("Config file:   {}", path.display()),
                Some(path) => println!("Config file:   {} (not created)", path.display()),
                None => println!("Config file:   (no config directory available)"),
            }
            println!(
                "Data file:     {}",
                config.resolve_data_file(globals.data_file.clone()).display()
            );
            println!(
                "Criteria file: {}",
                config.resolve_criteria_file(globals.criteria_file.clone()).display()
            );
            println!("Encoding:      {}", config.encoding);
            Ok(())
        }
        ConfigAction::Init { force } => {
            let Some(path) = config_target(globals) else {
                bail!("No config directory available; pass --config <path>");
            };
            if path.exists() && !force {
                bail!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                );
            }
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let rendered = CircleConfig::default().to_toml()?;
            std::fs::write(&path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!(" Config written to {}", path.display());
            Ok(())
        }
    }
}

fn config_target(globals: &GlobalOptions) -> Option<PathBuf> {
    globals
        .config
        .clone()
        .or_else(|| {
            std::env::var(friend_circle::config::CONFIG_ENV)
                .ok()
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
        })
        .or_else(default_config_path)
}
