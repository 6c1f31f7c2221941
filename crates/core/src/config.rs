//! Resolver configuration.

use crate::error::{Result, StacheError};
use serde::Deserialize;
use stache_api::ROOT_TYPE;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Name of the universal base type; supertype walks stop before it.
    pub root_type: String,
    pub log: LogConfig,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            root_type: ROOT_TYPE.to_string(),
            log: LogConfig::default(),
        }
    }
}

impl ResolverConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: ResolverConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    fn validate(&self) -> Result<()> {
        if self.root_type.trim().is_empty() {
            return Err(StacheError::Config("root_type must not be empty".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter used when `RUST_LOG` is not set
    pub level: String,
    /// Directory for daily-rolling log files; no file output when unset
    pub directory: Option<PathBuf>,
    pub to_stderr: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
            to_stderr: true,
        }
    }
}
