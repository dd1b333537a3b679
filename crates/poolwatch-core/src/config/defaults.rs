//! Default implementations for configuration types.
//!
//! This module contains all `Default` implementations and helper functions
//! for providing default values in serde deserialization.

use crate::config::types::{DashboardConfig, MediaConfig, ServerConfig};

/// Returns the default backend base URL.
///
/// Used by serde `#[serde(default = "...")]` attribute.
pub fn default_base_url() -> String {
    "http://127.0.0.1:8080".to_string()
}

/// Returns the default thread pool capacity (32).
///
/// One busy/idle indicator slot is allocated per thread, so this also
/// bounds the dashboard's indicator grid.
///
/// Used by serde `#[serde(default = "...")]` attribute.
pub fn default_total_threads() -> u32 {
    32
}

/// Returns the default poll interval in milliseconds (2000ms).
///
/// Used by serde `#[serde(default = "...")]` attribute.
pub fn default_poll_interval_ms() -> u64 {
    2000
}

/// Returns the default status endpoint path.
///
/// Used by serde `#[serde(default = "...")]` attribute.
pub fn default_status_endpoint() -> String {
    "/status".to_string()
}

/// Returns the default media listing endpoint path.
///
/// Used by serde `#[serde(default = "...")]` attribute.
pub fn default_files_endpoint() -> String {
    "/api/files".to_string()
}

/// Returns the default media root path.
///
/// Used by serde `#[serde(default = "...")]` attribute.
pub fn default_media_root() -> String {
    "/media".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            total_threads: default_total_threads(),
            poll_interval_ms: default_poll_interval_ms(),
            status_endpoint: default_status_endpoint(),
        }
    }
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            files_endpoint: default_files_endpoint(),
            media_root: default_media_root(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_defaults_match_serde_helpers() {
        let config = DashboardConfig::default();
        assert_eq!(config.total_threads, default_total_threads());
        assert_eq!(config.poll_interval_ms, default_poll_interval_ms());
        assert_eq!(config.status_endpoint, default_status_endpoint());
    }

    #[test]
    fn test_media_defaults_match_serde_helpers() {
        let config = MediaConfig::default();
        assert_eq!(config.files_endpoint, default_files_endpoint());
        assert_eq!(config.media_root, default_media_root());
    }
}
