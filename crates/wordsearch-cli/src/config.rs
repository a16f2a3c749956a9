//! Configuration file loading for the CLI
//!
//! Finds and loads a TOML configuration file from an explicit path, the
//! working directory, or the platform configuration directory.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use wordsearch_core::{IntersectBias, KEY_BLANK, SIZE_FACTOR_DEFAULT};

/// File name looked up in the working directory
pub const LOCAL_CONFIG: &str = "wordsearch.toml";

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Defaults for every generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub use_hard: bool,
    pub size_factor: usize,
    pub intersect_bias: IntersectBias,
    /// Fail instead of growing the grid past this edge length
    pub max_dimension: Option<usize>,
    pub answers: bool,
    pub decorate: bool,
    /// Placeholder for empty cells in the answer key
    pub key_blank: char,
    /// Lowercase everything but word starts in the answer key
    pub mark_starts: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            use_hard: false,
            size_factor: SIZE_FACTOR_DEFAULT,
            intersect_bias: IntersectBias::Random,
            max_dimension: None,
            answers: false,
            decorate: true,
            key_blank: KEY_BLANK,
            mark_starts: false,
        }
    }
}

impl AppConfig {
    fn validate(self) -> Result<Self, ConfigError> {
        if !(1..=99).contains(&self.size_factor) {
            return Err(ConfigError::Validation(format!(
                "size_factor must be between 1 and 99, got {}",
                self.size_factor
            )));
        }
        if self.max_dimension == Some(0) {
            return Err(ConfigError::Validation(
                "max_dimension must be at least 1".to_string(),
            ));
        }
        if self.key_blank.is_control() {
            return Err(ConfigError::Validation(
                "key_blank must be a printable character".to_string(),
            ));
        }
        Ok(self)
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. `wordsearch.toml` in the working directory
/// 3. `wordsearch/config.toml` in the platform config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be read, parsed or validated
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, ConfigError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new(LOCAL_CONFIG);
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let system_config = config_dir.join("wordsearch").join("config.toml");
        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }
        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Load and validate configuration from a TOML file
pub fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, ConfigError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config(&content)
}

/// Parse and validate configuration text
pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig =
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
    config.validate()
}
