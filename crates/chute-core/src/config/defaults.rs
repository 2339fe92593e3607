//! Built-in configuration values.
//!
//! The device contract fixes these; config files only exist to point the
//! client at a particular device or slow it down.

use crate::config::types::{DeviceConfig, PhotosConfig, SecurityConfig};
use std::time::Duration;

/// Flask's default listen address on the device.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

pub const DEFAULT_STREAM_PORT: u16 = 81;
pub const STREAM_USER: &str = "admin";
pub const STREAM_PATH: &str = "/video.cgi";

pub const SECURITY_INTERVAL_MS: u64 = 1000;
pub const STATUS_ENDPOINT: &str = "/status/latest.json";
pub const STATUS_PLACEHOLDER_IMAGE: &str = "/status/latest.jpg";

pub const PHOTOS_INTERVAL_MS: u64 = 60_000;
pub const PHOTOS_ENDPOINT: &str = "/photos";

/// Environment variable overriding `device.base_url`.
pub const BASE_URL_ENV: &str = "CHUTE_BASE_URL";

impl DeviceConfig {
    /// Returns the device base URL, defaulting to [`DEFAULT_BASE_URL`].
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// Returns the camera stream port, defaulting to 81.
    pub fn stream_port(&self) -> u16 {
        self.stream_port.unwrap_or(DEFAULT_STREAM_PORT)
    }
}

impl SecurityConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.unwrap_or(SECURITY_INTERVAL_MS))
    }

    pub fn status_path(&self) -> &str {
        self.status_path.as_deref().unwrap_or(STATUS_ENDPOINT)
    }

    pub fn placeholder_image(&self) -> &str {
        self.placeholder_image
            .as_deref()
            .unwrap_or(STATUS_PLACEHOLDER_IMAGE)
    }
}

impl PhotosConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.unwrap_or(PHOTOS_INTERVAL_MS))
    }

    pub fn path(&self) -> &str {
        self.path.as_deref().unwrap_or(PHOTOS_ENDPOINT)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::types::ChuteConfig;
    use std::time::Duration;

    #[test]
    fn test_chute_config_defaults() {
        let config = ChuteConfig::default();
        assert_eq!(config.device.base_url(), "http://localhost:5000");
        assert_eq!(config.device.stream_port(), 81);
        assert_eq!(config.security.interval(), Duration::from_millis(1000));
        assert_eq!(config.security.status_path(), "/status/latest.json");
        assert_eq!(config.security.placeholder_image(), "/status/latest.jpg");
        assert_eq!(config.photos.interval(), Duration::from_millis(60_000));
        assert_eq!(config.photos.path(), "/photos");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[device]
base_url = "http://camera.local:5000"
"#;
        let config: ChuteConfig = toml::from_str(toml_str).unwrap();

        assert_eq!(config.device.base_url(), "http://camera.local:5000");
        assert_eq!(
            config.security.interval(),
            Duration::from_millis(1000),
            "interval should default to 1000ms when security section is missing"
        );
        assert_eq!(config.photos.path(), "/photos");
    }

    #[test]
    fn test_explicit_values_preserved() {
        let toml_str = r#"
[security]
interval_ms = 250
placeholder_image = "/static/waiting.png"

[photos]
interval_ms = 5000
"#;
        let config: ChuteConfig = toml::from_str(toml_str).unwrap();

        assert_eq!(config.security.interval(), Duration::from_millis(250));
        assert_eq!(config.security.placeholder_image(), "/static/waiting.png");
        assert_eq!(config.photos.interval(), Duration::from_millis(5000));
    }
}
