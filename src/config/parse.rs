//! Configuration file parsing, discovery, and validation

use crate::config::types::Config;
use crate::error::{ConfigError, ConfigResult, Result};
use directories::ProjectDirs;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Default configuration file names to search for
const CONFIG_FILE_NAMES: &[&str] = &["bikeshare.yml", "bikeshare.yaml"];

/// Find the configuration file by searching the current directory, its
/// parents, and finally the user configuration directory
pub fn find_config_file() -> Option<PathBuf> {
    let start = env::current_dir().ok()?;
    find_config_file_from(start)
}

/// Find the configuration file starting from a specific directory
pub fn find_config_file_from(start_dir: PathBuf) -> Option<PathBuf> {
    let mut current_dir = start_dir;

    loop {
        for file_name in CONFIG_FILE_NAMES {
            let config_path = current_dir.join(file_name);
            if config_path.is_file() {
                return Some(config_path);
            }
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => break,
        }
    }

    // Fall back to the user configuration directory
    if let Some(dirs) = ProjectDirs::from("", "", "bikeshare") {
        for file_name in CONFIG_FILE_NAMES {
            let config_path = dirs.config_dir().join(file_name);
            if config_path.is_file() {
                return Some(config_path);
            }
        }
    }

    None
}

/// Parse a configuration file from a path
pub fn parse_config_file(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::Unreadable {
        path: path.to_path_buf(),
        error: e.to_string(),
    })?;

    parse_config(&contents)
}

/// Parse configuration from a string
pub fn parse_config(yaml: &str) -> Result<Config> {
    let config: Config = serde_yaml::from_str(yaml)?;
    Ok(config)
}

/// Load configuration with automatic file discovery
///
/// A missing file is not an error: the compiled-in default mapping applies.
pub fn load_config_auto() -> Result<(Config, Option<PathBuf>)> {
    match find_config_file() {
        Some(path) => {
            let config = parse_config_file(&path)?;
            Ok((config, Some(path)))
        }
        None => Ok((Config::default(), None)),
    }
}

/// Validate a complete configuration
pub fn validate_config(config: &Config) -> ConfigResult<()> {
    if config.cities.is_empty() {
        return Err(ConfigError::NoCities);
    }

    for (city, file) in &config.cities {
        if city.trim().is_empty() {
            return Err(ConfigError::Invalid("Empty city name".to_string()));
        }
        if *city != city.to_lowercase() {
            return Err(ConfigError::Invalid(format!(
                "City name '{}' must be lowercase",
                city
            )));
        }
        if file.trim().is_empty() {
            return Err(ConfigError::Invalid(format!(
                "City '{}' has an empty file name",
                city
            )));
        }
    }

    Ok(())
}
