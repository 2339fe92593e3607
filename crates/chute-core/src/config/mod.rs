//! # Configuration System
//!
//! Hierarchical TOML configuration for chute. The built-in values match the
//! device firmware, so most installs only set `device.base_url`.
//!
//! ## Configuration Hierarchy
//!
//! 1. **Hardcoded defaults** - [`defaults`]
//! 2. **User config** - `~/.chute/config.toml`
//! 3. **Project config** - `./.chute/config.toml`
//! 4. **Environment** - `CHUTE_BASE_URL`
//! 5. **CLI arguments** - Command-line flags (highest priority)
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use chute_core::config::ChuteConfig;
//!
//! fn example() -> Result<(), chute_core::errors::ConfigError> {
//!     let config = ChuteConfig::load_hierarchy()?;
//!     println!("polling {}", config.device.base_url());
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

pub use types::{ChuteConfig, DeviceConfig, PhotosConfig, SecurityConfig};
pub use validation::{validate_base_url, validate_config};

impl ChuteConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, crate::errors::ConfigError> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), crate::errors::ConfigError> {
        validation::validate_config(self)
    }
}
