//! Configuration type definitions for poolwatch.
//!
//! These types are serialized/deserialized from TOML config files.
//!
//! # Example Configuration
//!
//! ```toml
//! [server]
//! base_url = "http://192.168.1.20:8080"
//!
//! [dashboard]
//! total_threads = 64
//! poll_interval_ms = 1000
//! status_endpoint = "/status"
//!
//! [media]
//! files_endpoint = "/api/files"
//! media_root = "/media"
//! ```

use serde::{Deserialize, Serialize};

/// Main configuration loaded from TOML config files.
///
/// This is the primary configuration structure that gets loaded from:
/// 1. User config: `~/.poolwatch/config.toml`
/// 2. Project config: `./.poolwatch/config.toml`
///
/// Project config values override user config values; CLI flags override
/// both.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PoolwatchConfig {
    /// Where the backend server lives
    #[serde(default)]
    pub server: ServerConfig,

    /// Polling and rendering settings
    #[serde(default)]
    pub dashboard: DashboardConfig,

    /// Media catalog endpoints
    #[serde(default)]
    pub media: MediaConfig,
}

/// Location of the backend server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Base URL of the backend, including scheme and port.
    #[serde(default = "super::defaults::default_base_url")]
    pub base_url: String,
}

impl ServerConfig {
    /// Resolve an absolute endpoint URL from a server-relative path.
    ///
    /// `path` must start with `/` (enforced by config validation).
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

/// Polling cadence and display geometry for the status dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Maximum threads in the backend's pool. One busy/idle indicator is
    /// allocated per thread.
    #[serde(default = "super::defaults::default_total_threads")]
    pub total_threads: u32,

    /// Interval in milliseconds between status polls.
    #[serde(default = "super::defaults::default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// Server-relative path of the status endpoint.
    #[serde(default = "super::defaults::default_status_endpoint")]
    pub status_endpoint: String,
}

/// Endpoints for the media file requester.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaConfig {
    /// Server-relative path that returns the JSON array of media filenames.
    #[serde(default = "super::defaults::default_files_endpoint")]
    pub files_endpoint: String,

    /// Server-relative path prefix under which media files are served.
    #[serde(default = "super::defaults::default_media_root")]
    pub media_root: String,
}
