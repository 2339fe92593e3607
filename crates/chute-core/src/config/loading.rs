//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - See [`super::defaults`]
//! 2. **User config** - `~/.chute/config.toml`
//! 3. **Project config** - `./.chute/config.toml`
//! 4. **Environment** - `CHUTE_BASE_URL`
//! 5. **CLI arguments** - Command-line flags (applied by the caller)

use crate::config::defaults::BASE_URL_ENV;
use crate::config::types::{ChuteConfig, DeviceConfig, PhotosConfig, SecurityConfig};
use crate::config::validation::validate_config;
use crate::errors::ConfigError;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load configuration from the hierarchy of config files.
///
/// # Errors
///
/// Returns an error if a present file cannot be read or parsed, or if the
/// merged result fails validation. Missing config files are not errors.
pub fn load_hierarchy() -> Result<ChuteConfig, ConfigError> {
    let mut config = ChuteConfig::default();

    if let Some(home) = dirs::home_dir()
        && let Some(user_config) = load_config_file(&home.join(".chute").join("config.toml"))?
    {
        config = merge_configs(config, user_config);
    }

    if let Ok(cwd) = std::env::current_dir()
        && let Some(project_config) = load_config_file(&cwd.join(".chute").join("config.toml"))?
    {
        config = merge_configs(config, project_config);
    }

    config = with_base_url_override(config, std::env::var(BASE_URL_ENV).ok());

    validate_config(&config)?;

    Ok(config)
}

/// Load a configuration file, returning `None` when it does not exist.
pub fn load_config_file(path: &Path) -> Result<Option<ChuteConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(event = "core.config.file_missing", path = %path.display());
            return Ok(None);
        }
        Err(source) => {
            return Err(ConfigError::ReadFailed {
                path: path.display().to_string(),
                source,
            });
        }
    };

    let config = toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    debug!(event = "core.config.file_loaded", path = %path.display());
    Ok(Some(config))
}

/// Merge two configurations, with `override_config` taking precedence
/// field by field.
pub fn merge_configs(base: ChuteConfig, override_config: ChuteConfig) -> ChuteConfig {
    ChuteConfig {
        device: DeviceConfig {
            base_url: override_config.device.base_url.or(base.device.base_url),
            stream_port: override_config.device.stream_port.or(base.device.stream_port),
        },
        security: SecurityConfig {
            interval_ms: override_config
                .security
                .interval_ms
                .or(base.security.interval_ms),
            status_path: override_config
                .security
                .status_path
                .or(base.security.status_path),
            placeholder_image: override_config
                .security
                .placeholder_image
                .or(base.security.placeholder_image),
        },
        photos: PhotosConfig {
            interval_ms: override_config.photos.interval_ms.or(base.photos.interval_ms),
            path: override_config.photos.path.or(base.photos.path),
        },
    }
}

/// Replace the device base URL when an override is given and non-empty.
pub fn with_base_url_override(mut config: ChuteConfig, base_url: Option<String>) -> ChuteConfig {
    if let Some(url) = base_url.filter(|url| !url.trim().is_empty()) {
        config.device.base_url = Some(url.trim().to_string());
    }
    config
}
