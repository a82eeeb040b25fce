//! Configuration management module
//!
//! Provides TOML-based configuration files with defaults and
//! validation. All file access is synchronous; nothing in the crate
//! suspends.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{ViewError, ViewResult};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
    /// UI configuration
    pub ui: UiConfig,
}

impl Config {
    /// Load configuration from default locations
    ///
    /// Search order:
    /// 1. ./modalview.toml
    /// 2. ~/.config/modalview/config.toml
    /// 3. Default configuration
    pub fn load() -> ViewResult<Self> {
        info!("Loading application configuration");

        // Try current directory first
        if let Ok(config) = Self::load_from_file("./modalview.toml") {
            info!("Loaded configuration from ./modalview.toml");
            return Ok(config);
        }

        // Try user config directory
        if let Some(config_path) = Self::get_user_config_path() {
            if let Ok(config) = Self::load_from_file(&config_path) {
                info!("Loaded configuration from {}", config_path.display());
                return Ok(config);
            }
        }

        // Use default configuration
        info!("Using default configuration");
        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> ViewResult<Self> {
        let path = path.as_ref();
        debug!("Loading configuration from: {}", path.display());

        let content = fs::read_to_string(path)?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| ViewError::config(format!("Failed to parse config file: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Save configuration to a file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> ViewResult<()> {
        let path = path.as_ref();
        debug!("Saving configuration to: {}", path.display());

        // Create parent directories if they don't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ViewError::config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, content)?;

        info!("Configuration saved to: {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ViewResult<()> {
        debug!("Validating configuration");

        if self.ui.width_percent < 10 || self.ui.width_percent > 100 {
            return Err(ViewError::config(
                "width_percent must be between 10 and 100",
            ));
        }

        if self.ui.height_percent < 10 || self.ui.height_percent > 100 {
            return Err(ViewError::config(
                "height_percent must be between 10 and 100",
            ));
        }

        debug!("Configuration validation passed");
        Ok(())
    }

    /// Get user configuration directory path
    fn get_user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut path| {
            path.push("modalview");
            path.push("config.toml");
            path
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app: AppConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application name
    pub name: String,
    /// Application version
    pub version: String,
    /// Log level
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: "modalview".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            log_level: if cfg!(debug_assertions) {
                "debug"
            } else {
                "info"
            }
            .to_string(),
        }
    }
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Theme name
    pub theme: String,
    /// Container width as a percentage of the frame
    pub width_percent: u16,
    /// Container height as a percentage of the frame
    pub height_percent: u16,
    /// Enable mouse support
    pub enable_mouse: bool,
    /// Hide a modal when its overlay is clicked
    pub dismiss_on_overlay_click: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "default".to_string(),
            width_percent: 60,
            height_percent: 40,
            enable_mouse: true,
            dismiss_on_overlay_click: true,
        }
    }
}
