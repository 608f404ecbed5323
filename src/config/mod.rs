//! Configuration management for dank16

mod io;
mod types;

pub use types::*;

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::wal::expand_home;

impl Config {
    /// Get the config file path (~/.config/dank16/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Get the config directory path (~/.config/dank16)
    pub fn config_dir() -> Result<PathBuf> {
        io::config_dir()
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load()
    }

    /// Load configuration from an explicit file, or return defaults if not found
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    /// Expand ~ in the color-scheme cache path
    pub fn wal_cache_path(&self) -> PathBuf {
        expand_home(&self.sources.wal_cache)
    }
}
