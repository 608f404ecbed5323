//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

use crate::output::Dialect;
use crate::wal::DEFAULT_WAL_CACHE;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub sources: SourcesConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Where external color inputs are read from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourcesConfig {
    /// Color-scheme cache consulted for missing base/background colors
    #[serde(default = "default_wal_cache")]
    pub wal_cache: String,
}

pub fn default_wal_cache() -> String {
    DEFAULT_WAL_CACHE.to_string()
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            wal_cache: default_wal_cache(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Dialect used when `--ghostty` is not given
    #[serde(default)]
    pub dialect: Dialect,
}
