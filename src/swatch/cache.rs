//! Two-line text cache remembering the last resolved swatch.
//!
//! Line 1 holds the normalized hex, line 2 the swatch name. Reads and writes
//! are best effort, any I/O failure behaves like an empty cache.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::color::HexColor;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameCache {
    path: PathBuf,
}

impl NameCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Cached name for `color`, if the cache holds exactly this color.
    pub fn lookup(&self, color: HexColor) -> Option<String> {
        let contents = fs::read_to_string(&self.path).ok()?;
        let mut lines = contents.lines();
        let cached_hex = lines.next()?.trim().to_lowercase();
        let cached_name = lines.next()?.trim();

        if cached_hex == color.to_string() && !cached_name.is_empty() {
            Some(cached_name.to_string())
        } else {
            None
        }
    }

    /// Overwrite the cache with `color` → `name`, creating parent directories.
    pub fn store(&self, color: HexColor, name: &str) {
        let write = || -> std::io::Result<()> {
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&self.path, format!("{}\n{}\n", color, name))
        };

        if let Err(e) = write() {
            debug!(path = %self.path.display(), error = %e, "could not write swatch cache");
        }
    }
}
