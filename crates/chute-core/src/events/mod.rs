//! App-level lifecycle events shared by every front end.

use std::fmt;
use std::time::Duration;

use tracing::{error, info};

/// Why a watch session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    DurationElapsed,
    Interrupted,
    ViewClosed,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StopReason::DurationElapsed => "duration_elapsed",
            StopReason::Interrupted => "interrupted",
            StopReason::ViewClosed => "view_closed",
        })
    }
}

pub fn log_app_startup(command: &str) {
    info!(
        event = "core.app.startup_completed",
        version = env!("CARGO_PKG_VERSION"),
        command = command
    );
}

pub fn log_app_shutdown(reason: StopReason) {
    info!(event = "core.app.shutdown_started", reason = %reason);
}

/// One line per watched view: how long it was on screen and how many
/// state changes it published.
pub fn log_watch_summary(view: &str, updates: usize, failures: usize, elapsed: Duration) {
    info!(
        event = "core.app.watch_summarized",
        view = view,
        updates = updates,
        failures = failures,
        elapsed_ms = elapsed.as_millis() as u64
    );
}

pub fn log_app_error(error: &dyn std::error::Error) {
    error!(
        event = "core.app.error_occurred",
        error = %error,
        error_type = std::any::type_name_of_val(error)
    );
}
