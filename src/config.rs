//! Configuration for the friend circle
//!
//! Settings live in a TOML file under the platform config directory. Paths
//! are resolved in order: command-line flag, environment variable, config
//! file, then a platform default.

use crate::error::{CircleError, Result};
use crate::storage::Encoding;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable naming the config file
pub const CONFIG_ENV: &str = "FRIEND_CIRCLE_CONFIG";

/// Environment variable naming the data file
pub const DATA_FILE_ENV: &str = "FRIEND_CIRCLE_DATA";

/// Environment variable naming the criteria file
pub const CRITERIA_FILE_ENV: &str = "FRIEND_CIRCLE_CRITERIA";

/// Data file picked up from the working directory when present
pub const LOCAL_DATA_FILE: &str = "friends.txt";

const CONFIG_FILE_NAME: &str = "config.toml";
const CRITERIA_FILE_NAME: &str = "criteria.txt";

/// User settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircleConfig {
    /// Data file holding one friend per line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,

    /// Newline-delimited criteria list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub criteria_file: Option<PathBuf>,

    /// Text encoding of the data file
    pub encoding: Encoding,
}

impl CircleConfig {
    /// Load configuration from TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: CircleConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from an explicit path, `FRIEND_CIRCLE_CONFIG`, or the default location
    ///
    /// A missing file at the default location yields defaults; a missing
    /// explicit file is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let explicit = explicit
            .map(Path::to_path_buf)
            .or_else(|| env::var(CONFIG_ENV).ok().filter(|v| !v.is_empty()).map(PathBuf::from));

        if let Some(path) = explicit {
            debug!("Using config file: {}", path.display());
            return Self::from_file(&path);
        }

        match default_config_path() {
            Some(path) if path.exists() => {
                debug!("Using config file: {}", path.display());
                Self::from_file(&path)
            }
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [("data_file", &self.data_file), ("criteria_file", &self.criteria_file)] {
            if let Some(path) = value {
                if path.as_os_str().is_empty() {
                    return Err(CircleError::Validation(format!("{} cannot be empty", field)));
                }
            }
        }
        Ok(())
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Resolve the data file path
    ///
    /// Order: flag, `FRIEND_CIRCLE_DATA`, config, `./friends.txt` if it exists,
    /// platform data directory.
    pub fn resolve_data_file(&self, cli_path: Option<PathBuf>) -> PathBuf {
        cli_path
            .or_else(|| env_path(DATA_FILE_ENV))
            .or_else(|| self.data_file.clone())
            .or_else(|| {
                let local = PathBuf::from(LOCAL_DATA_FILE);
                if local.exists() {
                    Some(local)
                } else {
                    None
                }
            })
            .unwrap_or_else(default_data_path)
    }

    /// Resolve the criteria file path
    ///
    /// Order: flag, `FRIEND_CIRCLE_CRITERIA`, config, platform config directory.
    pub fn resolve_criteria_file(&self, cli_path: Option<PathBuf>) -> PathBuf {
        cli_path
            .or_else(|| env_path(CRITERIA_FILE_ENV))
            .or_else(|| self.criteria_file.clone())
            .unwrap_or_else(default_criteria_path)
    }
}

fn env_path(var: &str) -> Option<PathBuf> {
    env::var(var).ok().filter(|v| !v.is_empty()).map(PathBuf::from)
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "friend-circle", "friend-circle")
}

/// Default location of `config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Default data file in the platform data directory
pub fn default_data_path() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.data_local_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
        .join(LOCAL_DATA_FILE)
}

/// Default criteria file in the platform config directory
pub fn default_criteria_path() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CRITERIA_FILE_NAME)
}
