//! Configuration loading and management
//!
//! Handles parsing of the optional `ttt.toml` file in the data directory.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Team member id to fall back to when no selection has been persisted
    #[serde(default)]
    pub default_user: Option<String>,
}

impl Config {
    /// Load configuration from a file.
    ///
    /// A missing file yields defaults; an unparseable file is surfaced as
    /// `InvalidConfig` (unlike the task blob, config corruption is the
    /// user's to fix).
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|err| Error::InvalidConfig(format!("{}: {err}", path.display())))
    }
}
