use crate::errors::PoolwatchError;

#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    #[error("Media listing request failed: {source}")]
    RequestFailed {
        #[from]
        source: reqwest::Error,
    },

    #[error("Media listing returned HTTP {status}")]
    HttpStatus { status: u16 },

    #[error("Malformed media listing: {message}")]
    MalformedListing { message: String },
}

impl PoolwatchError for MediaError {
    fn error_code(&self) -> &'static str {
        match self {
            MediaError::RequestFailed { .. } => "MEDIA_REQUEST_FAILED",
            MediaError::HttpStatus { .. } => "MEDIA_HTTP_ERROR",
            MediaError::MalformedListing { .. } => "MEDIA_MALFORMED_LISTING",
        }
    }

    fn is_user_error(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_error_codes() {
        let error = MediaError::HttpStatus { status: 404 };
        assert_eq!(error.to_string(), "Media listing returned HTTP 404");
        assert_eq!(error.error_code(), "MEDIA_HTTP_ERROR");
        assert!(!error.is_user_error());
    }
}
