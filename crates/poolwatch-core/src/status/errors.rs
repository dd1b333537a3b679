use crate::errors::PoolwatchError;

/// What went wrong with a single status fetch.
///
/// The three variants mirror the failure taxonomy the poller collapses:
/// transport failure, non-2xx response, malformed body.
#[derive(Debug, thiserror::Error)]
pub enum StatusError {
    #[error("Status request failed: {source}")]
    RequestFailed {
        #[from]
        source: reqwest::Error,
    },

    #[error("Status endpoint returned HTTP {status}")]
    HttpStatus { status: u16 },

    #[error("Malformed status payload: {message}")]
    MalformedPayload { message: String },
}

impl PoolwatchError for StatusError {
    fn error_code(&self) -> &'static str {
        match self {
            StatusError::RequestFailed { .. } => "STATUS_REQUEST_FAILED",
            StatusError::HttpStatus { .. } => "STATUS_HTTP_ERROR",
            StatusError::MalformedPayload { .. } => "STATUS_MALFORMED_PAYLOAD",
        }
    }

    fn is_user_error(&self) -> bool {
        false
    }
}
