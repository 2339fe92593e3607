//! Live camera stream view.
//!
//! The stream is a native media element whose source is set once; starting
//! it again is a no-op.

use tracing::{debug, info};

use crate::config::DeviceConfig;
use crate::config::defaults::{STREAM_PATH, STREAM_USER};
use crate::config::validate_base_url;
use crate::errors::ConfigError;
use crate::views::context::ViewContext;
use crate::views::errors::ViewError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamState {
    NotStarted,
    Started { source: String },
}

#[derive(Debug)]
pub struct LiveStreamView {
    source: String,
    state: StreamState,
}

impl LiveStreamView {
    pub const NAME: &'static str = "live-stream";

    pub fn new(ctx: &ViewContext) -> Result<Self, ViewError> {
        Ok(Self {
            source: stream_source(&ctx.config.device)?,
            state: StreamState::NotStarted,
        })
    }

    /// Point the player at the camera. Returns `false` if it already was.
    pub fn start_stream(&mut self) -> bool {
        match self.state {
            StreamState::NotStarted => {
                self.state = StreamState::Started {
                    source: self.source.clone(),
                };
                info!(event = "core.stream.started", view = Self::NAME);
                true
            }
            StreamState::Started { .. } => {
                debug!(event = "core.stream.start_ignored", reason = "already_started");
                false
            }
        }
    }

    pub fn state(&self) -> &StreamState {
        &self.state
    }

    /// The source the player would use once started.
    pub fn stream_url(&self) -> &str {
        &self.source
    }
}

/// MJPEG stream URL served by the camera on the device's host.
pub fn stream_source(device: &DeviceConfig) -> Result<String, ConfigError> {
    let base = validate_base_url(device.base_url())?;
    let host = base.host_str().ok_or_else(|| ConfigError::InvalidBaseUrl {
        url: device.base_url().to_string(),
        message: "missing host".to_string(),
    })?;

    Ok(format!(
        "http://{}@{}:{}{}",
        STREAM_USER,
        host,
        device.stream_port(),
        STREAM_PATH
    ))
}
