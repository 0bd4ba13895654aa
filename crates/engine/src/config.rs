//! Application configuration via `bigfive.toml`
//!
//! A config file lives in the data directory. On first open a default
//! `bigfive.toml` with comments is created; to change settings, edit the
//! file and restart.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Config file name placed in the data directory.
pub const CONFIG_FILE_NAME: &str = "bigfive.toml";

/// Configuration loaded from `bigfive.toml`.
///
/// # Example
///
/// ```toml
/// auto_save = true
/// min_password_length = 6
/// log_level = "warn"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Persist freshly scored results for the signed-in user.
    #[serde(default = "default_auto_save")]
    pub auto_save: bool,
    /// Minimum password length accepted at sign-up.
    #[serde(default = "default_min_password_length")]
    pub min_password_length: usize,
    /// Default tracing filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_auto_save() -> bool {
    true
}

fn default_min_password_length() -> usize {
    6
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            auto_save: default_auto_save(),
            min_password_length: default_min_password_length(),
            log_level: default_log_level(),
        }
    }
}

impl QuizConfig {
    /// Check field values that serde alone cannot.
    ///
    /// # Errors
    ///
    /// Returns an error if `min_password_length` is zero or `log_level` is
    /// not one of `off`, `error`, `warn`, `info`, `debug`, `trace`.
    pub fn validate(&self) -> Result<()> {
        if self.min_password_length == 0 {
            return Err(Error::InvalidConfig {
                reason: "min_password_length must be at least 1".to_string(),
            });
        }
        match self.log_level.to_ascii_lowercase().as_str() {
            "off" | "error" | "warn" | "info" | "debug" | "trace" => Ok(()),
            other => Err(Error::InvalidConfig {
                reason: format!(
                    "Invalid log_level '{}' in {}. Expected off, error, warn, info, debug or trace.",
                    other, CONFIG_FILE_NAME
                ),
            }),
        }
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Big Five inventory configuration
#
# Save each freshly scored result to the signed-in user's history (default: true).
# Results shown from history are never saved again.
auto_save = true

# Minimum password length for new accounts (default: 6).
min_password_length = 6

# Log filter used when RUST_LOG is not set: off, error, warn, info, debug, trace.
log_level = "warn"
"#
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
            reason: format!("Failed to read config file '{}': {}", path.display(), e),
        })?;
        let config: QuizConfig = toml::from_str(&content).map_err(|e| Error::InvalidConfig {
            reason: format!("Failed to parse config file '{}': {}", path.display(), e),
        })?;
        config.validate()?;
        debug!(target: "bigfive::config", path = %path.display(), "Config loaded");
        Ok(config)
    }

    /// Write the default config file if it does not already exist.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| Error::Io {
                reason: format!(
                    "Failed to write default config file '{}': {}",
                    path.display(),
                    e
                ),
            })?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| Error::Serialization {
            reason: format!("Failed to serialize config: {}", e),
        })?;
        std::fs::write(path, content).map_err(|e| Error::Io {
            reason: format!("Failed to write config file '{}': {}", path.display(), e),
        })
    }

    /// Ensure `dir/bigfive.toml` exists, then load it.
    pub fn load_or_init(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        Self::write_default_if_missing(&path)?;
        Self::from_file(&path)
    }
}
