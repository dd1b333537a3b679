//! poolwatch-core: Core library for the thread pool server status dashboard
//!
//! This library provides the polling and rendering logic behind the
//! `poolwatch` CLI: fetch a metrics snapshot from a thread-pool media
//! server, project it onto a display slot set, and resolve the server's
//! media catalog.
//!
//! # Main Entry Points
//!
//! - [`poller`] - Timer-driven snapshot polling with explicit cancellation
//! - [`render`] - Pure projection of snapshots onto display slots
//! - [`status`] - HTTP client for the `/status` endpoint
//! - [`media`] - Media catalog listing and URL resolution
//! - [`config`] - Configuration management

pub mod config;
pub mod errors;
pub mod events;
pub mod logging;
pub mod media;
pub mod poller;
pub mod render;
pub mod status;

// Re-export commonly used types at crate root for convenience
pub use config::PoolwatchConfig;
pub use config::types::{DashboardConfig, MediaConfig, ServerConfig};
pub use errors::{ConfigError, PoolwatchError, PoolwatchResult};
pub use media::client::MediaClient;
pub use media::errors::MediaError;
pub use media::types::{MediaFile, MediaKind};
pub use poller::handler::{Poller, PollerHandle};
pub use render::types::{DisplaySlotSet, ThreadState, UtilizationSlot, UtilizationTier};
pub use status::client::StatusClient;
pub use status::errors::StatusError;
pub use status::types::MetricsSnapshot;

// Re-export the render operations as the primary rendering API
pub use render::operations as render_ops;

// Re-export logging initialization
pub use logging::init_logging;
