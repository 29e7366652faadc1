//! Configuration management for Prospector
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{CONFIG_GENERATED, DEFAULT_BASE_URL, DEFAULT_LEAD_COUNT, MAX_LEAD_COUNT, MIN_LEAD_COUNT};
use crate::ui::core::Tab;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding `[backend] base_url`
pub const BASE_URL_ENV: &str = "PROSPECTOR_BASE_URL";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub backend: BackendConfig,
    pub ui: UiConfig,
    pub leads: LeadsConfig,
    pub logging: LoggingConfig,
}

/// Backend connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL of the lead agent API
    pub base_url: String,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Tab to open on startup
    /// Options: "product", "leads", "sequence", "settings"
    pub default_tab: String,
    /// Icon theme: "emoji", "unicode", or "ascii"
    pub icon_theme: String,
}

/// Lead roster configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LeadsConfig {
    /// Leads requested per search, used until the backend reports its own
    pub default_count: u32,
    /// Export format: "csv" or "json"
    pub export_format: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to a file
    pub enabled: bool,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_tab: "product".to_string(),
            icon_theme: "ascii".to_string(),
        }
    }
}

impl Default for LeadsConfig {
    fn default() -> Self {
        Self {
            default_count: DEFAULT_LEAD_COUNT,
            export_format: "csv".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file or return defaults
    ///
    /// `PROSPECTOR_BASE_URL` overrides the configured backend URL either way.
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        let mut config = if let Some(path) = config_path {
            Self::load_from_file(&path)?
        } else {
            Self::default()
        };

        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            if !base_url.trim().is_empty() {
                config.backend.base_url = base_url;
            }
        }
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("prospector.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("prospector").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let base_url = self.backend.base_url.trim();
        if base_url.is_empty() {
            anyhow::bail!("backend base_url cannot be empty");
        }
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            anyhow::bail!("backend base_url must start with http:// or https://, got '{}'", base_url);
        }

        if Tab::from_name(&self.ui.default_tab).is_none() {
            anyhow::bail!(
                "default_tab must be one of product, leads, sequence, settings, got '{}'",
                self.ui.default_tab
            );
        }

        let valid_themes = ["emoji", "unicode", "ascii"];
        if !valid_themes.contains(&self.ui.icon_theme.as_str()) {
            anyhow::bail!("icon_theme must be one of emoji, unicode, ascii, got '{}'", self.ui.icon_theme);
        }

        if self.leads.default_count < MIN_LEAD_COUNT || self.leads.default_count > MAX_LEAD_COUNT {
            anyhow::bail!(
                "default_count must be between {} and {}, got {}",
                MIN_LEAD_COUNT,
                MAX_LEAD_COUNT,
                self.leads.default_count
            );
        }

        let valid_formats = ["csv", "json"];
        if !valid_formats.contains(&self.leads.export_format.as_str()) {
            anyhow::bail!("export_format must be csv or json, got '{}'", self.leads.export_format);
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# Prospector Configuration File\n# Generated on {}\n\n",
            crate::utils::datetime::format_today()
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("prospector"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
