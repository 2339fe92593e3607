use crate::errors::ChuteError;

/// Any failure to obtain a usable document from the device.
///
/// The projection collapses all of these into a single failed state; the
/// variants exist for logs.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Invalid request URL for '{path}': {message}")]
    InvalidUrl { path: String, message: String },

    #[error("Request to '{url}' failed: {message}")]
    Transport { url: String, message: String },

    #[error("Request to '{url}' returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("Response from '{url}' could not be decoded: {message}")]
    Decode { url: String, message: String },
}

impl ChuteError for FetchError {
    fn error_code(&self) -> &'static str {
        match self {
            FetchError::InvalidUrl { .. } => "FETCH_INVALID_URL",
            FetchError::Transport { .. } => "FETCH_TRANSPORT_FAILED",
            FetchError::Status { .. } => "FETCH_BAD_STATUS",
            FetchError::Decode { .. } => "FETCH_DECODE_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, FetchError::InvalidUrl { .. })
    }
}
