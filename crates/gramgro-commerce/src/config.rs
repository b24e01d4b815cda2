//! Storefront configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CommerceError;
use crate::money::Currency;

/// Storefront configuration file.
///
/// Every section is optional; missing keys take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Branding and copy.
    #[serde(default)]
    pub store: StoreConfig,

    /// Startup loader.
    #[serde(default)]
    pub loader: LoaderConfig,

    /// Price display.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Session logging.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StorefrontConfig {
    /// Parse config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, CommerceError> {
        Ok(toml::from_str(content)?)
    }

    /// Load config from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CommerceError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| CommerceError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&content)
    }

    /// Serialize to TOML.
    pub fn to_toml_string(&self) -> Result<String, CommerceError> {
        toml::to_string_pretty(self).map_err(|e| CommerceError::Config(e.to_string()))
    }
}

/// Branding and copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_store_name")]
    pub name: String,

    #[serde(default = "default_tagline")]
    pub tagline: String,

    #[serde(default = "default_subtitle")]
    pub subtitle: String,

    #[serde(default = "default_about")]
    pub about: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: default_store_name(),
            tagline: default_tagline(),
            subtitle: default_subtitle(),
            about: default_about(),
        }
    }
}

fn default_store_name() -> String {
    "GramGro".to_string()
}

fn default_tagline() -> String {
    "Bold shopping for bold choices.".to_string()
}

fn default_subtitle() -> String {
    "Heavy visuals. Smooth motion. Fast checkout.".to_string()
}

fn default_about() -> String {
    "We craft immersive shopping experiences with bold design and fluid motion. \
     Built for speed, delight, and clarity."
        .to_string()
}

/// Startup loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Milliseconds before the loader hides.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
        }
    }
}

fn default_delay_ms() -> u64 {
    700
}

/// Price display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub currency: Currency,
}

/// Session logging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// "json" or "human".
    #[serde(default = "default_log_format")]
    pub format: String,

    /// "trace", "debug", "info", "warn" or "error".
    #[serde(default = "default_log_level")]
    pub min_level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: default_log_format(),
            min_level: default_log_level(),
        }
    }
}

fn default_log_format() -> String {
    "human".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}
