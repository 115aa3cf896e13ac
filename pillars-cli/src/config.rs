//! Persistent CLI configuration loader.
//!
//! Configuration is loaded from `~/.config/fivepillars/config.toml` on
//! Linux/macOS or `%APPDATA%\fivepillars\config.toml` on Windows. Values
//! here are fallback defaults; command-line flags win.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, warn};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CliConfig {
    /// Fallback gold rate per gram when no live rate is available.
    pub gold_rate: Option<Decimal>,
    /// Fallback silver rate per gram when no live rate is available.
    pub silver_rate: Option<Decimal>,
    /// Currency code for rate lookups (e.g. "USD", "PKR").
    pub currency: Option<String>,
    /// Skip the live rate lookup by default.
    pub offline: Option<bool>,
}

impl CliConfig {
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("fivepillars"))
    }

    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("config.toml"))
    }

    /// Returns `CliConfig::default()` if the file doesn't exist or fails to
    /// parse.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            debug!("could not determine config directory");
            return Self::default();
        };

        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str::<CliConfig>(&content) {
                Ok(config) => {
                    debug!("loaded configuration from {:?}", path);
                    config
                }
                Err(e) => {
                    warn!("failed to parse config file {:?}: {e}", path);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("failed to read config file {:?}: {e}", path);
                Self::default()
            }
        }
    }
}
