use crate::config::types::PoolwatchConfig;
use crate::status::{errors::StatusError, types::MetricsSnapshot};
use tracing::debug;

/// HTTP client for the backend's status endpoint.
///
/// Performs exactly one GET per call and reports failures through
/// [`StatusError`]; no timeout is imposed beyond the transport's defaults
/// and no retry happens here (the poll cadence is the retry policy).
#[derive(Debug, Clone)]
pub struct StatusClient {
    http: reqwest::Client,
    endpoint: String,
}

impl StatusClient {
    pub fn new(config: &PoolwatchConfig) -> Self {
        let endpoint = config
            .server
            .endpoint_url(&config.dashboard.status_endpoint);
        Self {
            http: reqwest::Client::new(),
            endpoint,
        }
    }

    /// The absolute URL this client polls.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch one metrics snapshot from the status endpoint.
    ///
    /// # Errors
    ///
    /// - `RequestFailed` when the transport fails (refused, reset, DNS)
    /// - `HttpStatus` on any non-2xx response
    /// - `MalformedPayload` when the body is not a valid snapshot
    pub async fn fetch_status(&self) -> Result<MetricsSnapshot, StatusError> {
        debug!(event = "core.status.fetch_started", endpoint = %self.endpoint);

        let response = self.http.get(&self.endpoint).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(StatusError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let snapshot: MetricsSnapshot =
            serde_json::from_str(&body).map_err(|e| StatusError::MalformedPayload {
                message: e.to_string(),
            })?;

        debug!(
            event = "core.status.fetch_completed",
            active_threads = snapshot.active_threads,
            total_requests = snapshot.total_requests
        );

        Ok(snapshot)
    }
}
