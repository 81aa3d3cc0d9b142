//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system directory).

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use trellis::{TrellisError, config::AppConfig};

/// Per-project configuration file, relative to the working directory.
const LOCAL_CONFIG: &str = "trellis/config.toml";

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),
}

impl From<ConfigError> for TrellisError {
    fn from(err: ConfigError) -> Self {
        TrellisError::Config(err.to_string())
    }
}

/// Where an implicitly discovered configuration file lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigSource {
    /// `trellis/config.toml` under the working directory
    Local,
    /// The platform configuration directory
    System,
}

impl ConfigSource {
    fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::System => "system",
        }
    }
}

/// Implicit configuration locations, highest priority first.
fn search_paths() -> Vec<(ConfigSource, PathBuf)> {
    let mut paths = vec![(ConfigSource::Local, PathBuf::from(LOCAL_CONFIG))];

    match ProjectDirs::from("com", "trellis", "trellis") {
        Some(proj_dirs) => paths.push((
            ConfigSource::System,
            proj_dirs.config_dir().join("config.toml"),
        )),
        None => debug!("Could not determine platform-specific config directory"),
    }

    paths
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (trellis/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// An explicit path never falls back to the other locations.
///
/// # Arguments
///
/// * `explicit_path` - Optional path given with `--config`
///
/// # Errors
///
/// Returns [`TrellisError::Config`] if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed
///
/// Returns [`TrellisError::Io`] if an existing file cannot be read.
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, TrellisError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    for (source, path) in search_paths() {
        if path.exists() {
            info!(
                source = source.as_str(),
                path = path.display().to_string();
                "Loading configuration"
            );
            return load_config_file(&path);
        }

        debug!(
            source = source.as_str(),
            path = path.display().to_string();
            "Configuration file not found"
        );
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Load configuration from a TOML file
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Errors
///
/// Returns error if:
/// - File doesn't exist
/// - File cannot be read
/// - TOML parsing fails, including unknown `[style]` keys
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, TrellisError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;
    let config: AppConfig = toml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    debug!(path = path.display().to_string(); "Configuration parsed");
    Ok(config)
}
