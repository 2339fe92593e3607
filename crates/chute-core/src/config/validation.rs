//! Configuration validation.

use crate::config::types::ChuteConfig;
use crate::errors::ConfigError;
use reqwest::Url;

/// Validate the merged configuration.
///
/// Rejects zero polling intervals, empty endpoint paths and base URLs that
/// are not absolute http(s) URLs with a host.
pub fn validate_config(config: &ChuteConfig) -> Result<(), ConfigError> {
    validate_base_url(config.device.base_url())?;

    if config.security.interval_ms == Some(0) {
        return Err(ConfigError::InvalidConfiguration {
            message: "security.interval_ms must be positive".to_string(),
        });
    }
    if config.photos.interval_ms == Some(0) {
        return Err(ConfigError::InvalidConfiguration {
            message: "photos.interval_ms must be positive".to_string(),
        });
    }

    for (key, value) in [
        ("security.status_path", config.security.status_path()),
        ("photos.path", config.photos.path()),
    ] {
        if value.trim().is_empty() {
            return Err(ConfigError::InvalidConfiguration {
                message: format!("{} must not be empty", key),
            });
        }
    }

    Ok(())
}

/// Parse and check a device base URL.
pub fn validate_base_url(base_url: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(base_url).map_err(|e| ConfigError::InvalidBaseUrl {
        url: base_url.to_string(),
        message: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            message: "scheme must be http or https".to_string(),
        });
    }
    if url.host_str().is_none() {
        return Err(ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            message: "missing host".to_string(),
        });
    }

    Ok(url)
}
