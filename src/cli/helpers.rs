//! Shared helper functions for CLI commands
//!
//! Path resolution, opening the collection, and the small parsing and
//! prompting routines several commands need.

use anyhow::{Context, Result};
use friend_circle::{
    load_criteria, Circle, CircleConfig, CircleError, CriteriaSource, Gender, LoadedCriteria,
    TextFileStore,
};
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

/// Options shared by every command
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    pub config: Option<PathBuf>,
    pub data_file: Option<PathBuf>,
    pub criteria_file: Option<PathBuf>,
}

impl GlobalOptions {
    pub fn load_config(&self) -> Result<CircleConfig> {
        CircleConfig::load(self.config.as_deref()).context("Failed to load configuration")
    }

    /// Resolve and load the active criteria, telling the user about a fallback
    pub fn load_criteria(&self, config: &CircleConfig) -> LoadedCriteria {
        let explicit = self.criteria_file.is_some() || config.criteria_file.is_some();
        let path = config.resolve_criteria_file(self.criteria_file.clone());
        debug!("Using criteria file: {}", path.display());

        let loaded = load_criteria(&path);
        if let CriteriaSource::Default { reason } = &loaded.source {
            // A missing file at the default location is the normal first-run case
            if explicit || path.exists() {
                eprintln!(" Using built-in criteria: {}", reason);
            }
        }
        loaded
    }

    /// Open the collection at the resolved data file
    pub fn open_circle(&self) -> Result<Circle<TextFileStore>> {
        let config = self.load_config()?;
        let criteria = self.load_criteria(&config);
        let data_file = config.resolve_data_file(self.data_file.clone());
        debug!("Using data file: {}", data_file.display());

        let store = TextFileStore::with_encoding(&data_file, config.encoding);
        let circle = Circle::open(store, criteria.criteria)
            .with_context(|| format!("Failed to open {}", data_file.display()))?;

        if !circle.skipped_lines().is_empty() {
            eprintln!(
                " Skipped {} unreadable line(s) in {}:",
                circle.skipped_lines().len(),
                data_file.display()
            );
            for skipped in circle.skipped_lines() {
                eprintln!("   line {}: {}", skipped.line_number, skipped.reason);
            }
        }

        Ok(circle)
    }
}

/// Convert a 1-based position typed by the user into a storage index
pub fn to_index(position: usize, len: usize) -> Result<usize> {
    position
        .checked_sub(1)
        .filter(|&i| i < len)
        .ok_or_else(|| {
            CircleError::IndexOutOfBounds {
                index: position,
                len,
            }
            .into()
        })
}

/// Parse a gender typed by the user into its file symbol
pub fn parse_gender(input: &str) -> Result<Gender> {
    Gender::parse_user_input(input).ok_or_else(|| {
        CircleError::Validation(format!("unknown gender '{}' (use M or F)", input)).into()
    })
}

/// Ask a yes/no question on stdin; anything but `y`/`yes` is a no
pub fn confirm(question: &str) -> Result<bool> {
    print!("{} [y/N] ", question);
    std::io::stdout().flush()?;

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    Ok(matches!(input.trim().to_lowercase().as_str(), "y" | "yes"))
}
