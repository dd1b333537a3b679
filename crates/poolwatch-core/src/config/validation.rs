//! Configuration validation logic.
//!
//! This module contains validation functions for configuration values,
//! ensuring they are valid before being used by the application.

use crate::config::types::PoolwatchConfig;
use crate::errors::ConfigError;

/// Validate a PoolwatchConfig, returning an error if any values are invalid.
///
/// # Validation Rules
///
/// - `base_url` must carry an http:// or https:// scheme
/// - `total_threads` and `poll_interval_ms` must be greater than zero
/// - Endpoint paths must be server-relative (leading `/`)
///
/// # Errors
///
/// Returns `ConfigError::InvalidConfiguration` naming the offending value.
pub fn validate_config(config: &PoolwatchConfig) -> Result<(), ConfigError> {
    let base_url = &config.server.base_url;
    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        return Err(ConfigError::InvalidConfiguration {
            message: format!("base_url '{}' must start with http:// or https://", base_url),
        });
    }

    if config.dashboard.total_threads == 0 {
        return Err(ConfigError::InvalidConfiguration {
            message: "total_threads must be greater than zero".to_string(),
        });
    }

    if config.dashboard.poll_interval_ms == 0 {
        return Err(ConfigError::InvalidConfiguration {
            message: "poll_interval_ms must be greater than zero".to_string(),
        });
    }

    for (name, path) in [
        ("status_endpoint", &config.dashboard.status_endpoint),
        ("files_endpoint", &config.media.files_endpoint),
        ("media_root", &config.media.media_root),
    ] {
        if !path.starts_with('/') {
            return Err(ConfigError::InvalidConfiguration {
                message: format!("{} '{}' must start with '/'", name, path),
            });
        }
    }

    Ok(())
}
