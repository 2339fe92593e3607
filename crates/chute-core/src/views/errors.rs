use crate::errors::{ChuteError, ConfigError};
use crate::poller::PollerError;

#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    #[error("View '{view}' is already active")]
    AlreadyActive { view: &'static str },

    #[error("View '{view}' was deactivated and cannot be activated again")]
    Released { view: &'static str },

    #[error(transparent)]
    Poller(#[from] PollerError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ChuteError for ViewError {
    fn error_code(&self) -> &'static str {
        match self {
            ViewError::AlreadyActive { .. } => "VIEW_ALREADY_ACTIVE",
            ViewError::Released { .. } => "VIEW_RELEASED",
            ViewError::Poller(e) => e.error_code(),
            ViewError::Config(e) => e.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            ViewError::Poller(e) => e.is_user_error(),
            ViewError::Config(e) => e.is_user_error(),
            _ => false,
        }
    }
}
