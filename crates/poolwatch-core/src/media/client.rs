use crate::config::types::PoolwatchConfig;
use crate::media::{errors::MediaError, types::MediaFile, types::MediaKind};
use tracing::info;

/// HTTP client for the backend's media catalog.
#[derive(Debug, Clone)]
pub struct MediaClient {
    http: reqwest::Client,
    files_endpoint: String,
    media_base: String,
}

impl MediaClient {
    pub fn new(config: &PoolwatchConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            files_endpoint: config.server.endpoint_url(&config.media.files_endpoint),
            media_base: config.server.endpoint_url(&config.media.media_root),
        }
    }

    /// List the media catalog.
    ///
    /// An empty catalog is not an error; the caller decides how to present
    /// it.
    ///
    /// # Errors
    ///
    /// - `RequestFailed` when the transport fails
    /// - `HttpStatus` on any non-2xx response
    /// - `MalformedListing` when the body is not a JSON array of strings
    pub async fn list_files(&self) -> Result<Vec<MediaFile>, MediaError> {
        info!(event = "core.media.list_started", endpoint = %self.files_endpoint);

        let response = self.http.get(&self.files_endpoint).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MediaError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let names: Vec<String> =
            serde_json::from_str(&body).map_err(|e| MediaError::MalformedListing {
                message: e.to_string(),
            })?;

        let files = names
            .into_iter()
            .map(|name| MediaFile {
                kind: MediaKind::from_filename(&name),
                url: self.media_url(&name),
                name,
            })
            .collect::<Vec<_>>();

        info!(event = "core.media.list_completed", count = files.len());

        Ok(files)
    }

    /// Absolute retrieval URL for one media file.
    pub fn media_url(&self, filename: &str) -> String {
        format!("{}/{}", self.media_base, filename)
    }
}
