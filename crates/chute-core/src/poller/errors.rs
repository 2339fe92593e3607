use crate::errors::ChuteError;

#[derive(Debug, thiserror::Error)]
pub enum PollerError {
    #[error("Poller '{name}' needs a positive interval")]
    ZeroInterval { name: &'static str },

    #[error("Poller '{name}' must be started from within a tokio runtime")]
    NoRuntime { name: &'static str },
}

impl ChuteError for PollerError {
    fn error_code(&self) -> &'static str {
        match self {
            PollerError::ZeroInterval { .. } => "POLLER_ZERO_INTERVAL",
            PollerError::NoRuntime { .. } => "POLLER_NO_RUNTIME",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, PollerError::ZeroInterval { .. })
    }
}
