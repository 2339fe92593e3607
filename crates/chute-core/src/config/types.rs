//! Configuration type definitions for chute.
//!
//! These types are deserialized from TOML config files. Every field is
//! optional so that a partial file only overrides what it names; the
//! accessors in [`super::defaults`] fill in the built-in values.
//!
//! # Example Configuration
//!
//! ```toml
//! [device]
//! base_url = "http://192.168.1.20:5000"
//! stream_port = 81
//!
//! [security]
//! interval_ms = 1000
//!
//! [photos]
//! interval_ms = 60000
//! ```

use serde::{Deserialize, Serialize};

/// Main configuration loaded from TOML config files.
///
/// Loaded from:
/// 1. User config: `~/.chute/config.toml`
/// 2. Project config: `./.chute/config.toml`
///
/// Project config values override user config values.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ChuteConfig {
    /// Where the monitoring device lives
    #[serde(default)]
    pub device: DeviceConfig,

    /// Security status view polling
    #[serde(default)]
    pub security: SecurityConfig,

    /// Photo gallery polling
    #[serde(default)]
    pub photos: PhotosConfig,
}

/// Device location.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DeviceConfig {
    /// Base URL of the device web server, e.g. `http://camera.local:5000`.
    #[serde(default)]
    pub base_url: Option<String>,

    /// Port of the camera's MJPEG stream on the same host.
    #[serde(default)]
    pub stream_port: Option<u16>,
}

/// Security status view settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SecurityConfig {
    #[serde(default)]
    pub interval_ms: Option<u64>,

    /// Endpoint returning the latest status document.
    #[serde(default)]
    pub status_path: Option<String>,

    /// Image shown before the first successful fetch.
    #[serde(default)]
    pub placeholder_image: Option<String>,
}

/// Photo gallery view settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PhotosConfig {
    #[serde(default)]
    pub interval_ms: Option<u64>,

    /// Endpoint returning the photo list.
    #[serde(default)]
    pub path: Option<String>,
}
