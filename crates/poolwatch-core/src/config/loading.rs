//! Configuration loading and merging logic.
//!
//! This module handles loading configuration from files and merging
//! configurations from different sources (user config, project config).
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.poolwatch/config.toml` (global user preferences)
//! 3. **Project config** - `./.poolwatch/config.toml` (per-directory overrides)
//! 4. **CLI arguments** - Command-line flags (highest priority, applied by the CLI)

use crate::config::types::PoolwatchConfig;
use crate::config::validation::validate_config;
use std::fs;
use std::path::PathBuf;

/// Check if an error is a "file not found" error.
fn is_file_not_found(e: &(dyn std::error::Error + 'static)) -> bool {
    if let Some(io_err) = e.downcast_ref::<std::io::Error>() {
        return io_err.kind() == std::io::ErrorKind::NotFound;
    }

    let err_str = e.to_string();
    err_str.contains("No such file or directory") || err_str.contains("cannot find the path")
}

impl PoolwatchConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<PoolwatchConfig, Box<dyn std::error::Error>> {
        load_hierarchy()
    }
}

/// Load configuration from the hierarchy of config files.
///
/// Loads and merges configuration from:
/// 1. Default values
/// 2. User config (`~/.poolwatch/config.toml`)
/// 3. Project config (`./.poolwatch/config.toml`)
///
/// # Errors
///
/// Returns an error if validation fails. Missing config files are not errors.
pub fn load_hierarchy() -> Result<PoolwatchConfig, Box<dyn std::error::Error>> {
    let mut config = PoolwatchConfig::default();

    // Load user config (file not found is expected, parse errors fail)
    match load_user_config() {
        Ok(user_config) => config = merge_configs(config, user_config),
        Err(e) if !is_file_not_found(e.as_ref()) => return Err(e),
        Err(_) => {} // File not found - continue with defaults
    }

    // Load project config (file not found is expected, parse errors fail)
    match load_project_config() {
        Ok(project_config) => config = merge_configs(config, project_config),
        Err(e) if !is_file_not_found(e.as_ref()) => return Err(e),
        Err(_) => {} // File not found - continue with merged config
    }

    // Validate the final configuration
    validate_config(&config)?;

    Ok(config)
}

/// Load the user configuration from ~/.poolwatch/config.toml.
fn load_user_config() -> Result<PoolwatchConfig, Box<dyn std::error::Error>> {
    let home_dir = dirs::home_dir().ok_or("Could not find home directory")?;
    let config_path = home_dir.join(".poolwatch").join("config.toml");
    load_config_file(&config_path)
}

/// Load the project configuration from ./.poolwatch/config.toml.
fn load_project_config() -> Result<PoolwatchConfig, Box<dyn std::error::Error>> {
    let config_path = std::env::current_dir()?.join(".poolwatch").join("config.toml");
    load_config_file(&config_path)
}

/// Load a configuration file from the given path.
fn load_config_file(path: &PathBuf) -> Result<PoolwatchConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;
    let config: PoolwatchConfig = toml::from_str(&content)
        .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))?;
    Ok(config)
}

/// Merge two configurations, with override_config taking precedence.
///
/// All fields carry serde defaults, so a section omitted from the override
/// file arrives populated with default values. We can't distinguish an
/// explicit default from an omitted field here, so the override config's
/// values always win.
pub fn merge_configs(_base: PoolwatchConfig, override_config: PoolwatchConfig) -> PoolwatchConfig {
    override_config
}
