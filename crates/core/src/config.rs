//! Lookup configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Failure to load a settings file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid settings in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// How Windows known folders are resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum KnownFolderStrategy {
    /// Call `SHGetKnownFolderPath` in-process
    #[default]
    Native,
    /// Ask a PowerShell subprocess to make the call
    PowerShell,
}

/// Settings for the live environment lookups
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupConfig {
    /// Upper bound on any helper subprocess, in milliseconds
    #[serde(default = "default_helper_timeout_ms")]
    pub helper_timeout_ms: u64,
    /// Program that prints one XDG user directory per invocation
    #[serde(default = "default_xdg_user_dir_program")]
    pub xdg_user_dir_program: String,
    #[serde(default)]
    pub known_folder_strategy: KnownFolderStrategy,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            helper_timeout_ms: default_helper_timeout_ms(),
            xdg_user_dir_program: default_xdg_user_dir_program(),
            known_folder_strategy: KnownFolderStrategy::default(),
        }
    }
}

fn default_helper_timeout_ms() -> u64 {
    5000
}

fn default_xdg_user_dir_program() -> String {
    "xdg-user-dir".to_string()
}

impl LookupConfig {
    /// Parse from JSON; missing keys take their defaults
    pub fn from_json_str(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    /// Load from a JSON file
    pub fn load_from(path: &Path) -> std::result::Result<Self, ConfigError> {
        debug!("◆ loading lookup settings from {:?}", path);
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn helper_timeout(&self) -> Duration {
        Duration::from_millis(self.helper_timeout_ms)
    }
}
