//! Configuration types, defaults, loading, and validation.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Deployment environment: "custom" or "local" selects self-hosted
    /// sync-engine mode; anything else (or absent) is standard cloud mode.
    #[serde(default)]
    pub env: Option<String>,

    /// Self-hosted sync engine configuration
    #[serde(default)]
    pub self_hosting: SelfHostingConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Self-hosted sync engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelfHostingConfig {
    /// Sync engine endpoint, pre-fills the self-hosting config step
    #[serde(default)]
    pub sync_engine_url: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (default: "info")
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Deployment environment mode, derived from the `env` config key.
///
/// `Custom` and `Local` both mean "self-hosted sync engine": the account
/// chooser step is replaced by the self-hosting configuration view. Every
/// other value, including a missing key or a config read failure, is
/// `Standard` cloud mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnvironmentMode {
    #[default]
    Standard,
    Custom,
    Local,
}

impl EnvironmentMode {
    /// Parse a raw config value. Unknown values fall back to `Standard`.
    pub fn from_value(value: &str) -> Self {
        match value.trim() {
            "custom" => Self::Custom,
            "local" => Self::Local,
            _ => Self::Standard,
        }
    }

    /// True when the account chooser should show self-hosting config instead
    pub fn is_self_hosted(&self) -> bool {
        matches!(self, Self::Custom | Self::Local)
    }
}

impl Config {
    /// Load configuration: defaults, then `~/.crabmail/config.toml` if present.
    pub fn load() -> Result<Self> {
        tracing::debug!("Loading configuration...");

        let path = Self::config_path();
        if path.exists() {
            return Self::load_from_path(&path);
        }
        Ok(Self::default())
    }

    /// Load configuration from a specific file path
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading config from: {:?}", path);

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        Ok(config)
    }

    /// Get the config path: ~/.crabmail/config.toml
    pub fn config_path() -> PathBuf {
        crabmail_home().join("config.toml")
    }

    /// Resolve the environment mode. `CRABMAIL_ENV` overrides the config
    /// file value, matching how other runtime overrides work.
    pub fn environment_mode(&self) -> EnvironmentMode {
        if let Ok(value) = std::env::var("CRABMAIL_ENV") {
            return EnvironmentMode::from_value(&value);
        }
        self.env
            .as_deref()
            .map(EnvironmentMode::from_value)
            .unwrap_or_default()
    }

    /// Serialize the effective configuration for `crabmail config`
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config to TOML")
    }
}

/// The crabmail home directory: ~/.crabmail
pub fn crabmail_home() -> PathBuf {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    home.join(".crabmail")
}
