//! Read-only adapters over an external color-scheme cache (pywal/matugen
//! style `colors.json`).
//!
//! The cache has no fixed schema, several generations of key names exist in
//! the wild. Every failure (missing file, unreadable file, bad JSON, values
//! of the wrong type) degrades to "not found".

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::color::HexColor;

/// Default cache location, relative to the home directory.
pub const DEFAULT_WAL_CACHE: &str = "~/.cache/wal/colors.json";

/// Ghostty keys emitted ahead of the palette, in output order.
pub const GHOSTTY_KEYS: [&str; 6] = [
    "background",
    "foreground",
    "cursor-color",
    "cursor-text",
    "selection-background",
    "selection-foreground",
];

/// A parsed cache document.
#[derive(Debug, Clone, PartialEq)]
pub struct WalCache {
    data: Value,
}

impl WalCache {
    /// Load and parse the cache, or `None` if it is missing or malformed.
    pub fn load(path: &Path) -> Option<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "color-scheme cache unavailable");
                return None;
            }
        };
        match Self::parse(&contents) {
            Some(cache) => Some(cache),
            None => {
                debug!(path = %path.display(), "color-scheme cache is not valid JSON");
                None
            }
        }
    }

    pub fn parse(contents: &str) -> Option<Self> {
        serde_json::from_str(contents).ok().map(|data| Self { data })
    }

    fn top(&self, key: &str) -> Option<&str> {
        self.data.get(key).and_then(Value::as_str)
    }

    fn nested(&self, section: &str, key: &str) -> Option<&str> {
        self.data
            .get(section)
            .and_then(|section| section.get(key))
            .and_then(Value::as_str)
    }

    /// Seed colors for the palette generator.
    pub fn colors(&self) -> WalColors {
        let primary = parse_color(self.top("primary"));
        let primary_container = parse_color(self.top("primary_container"));
        let background = parse_color(self.top("background"))
            .or_else(|| parse_color(self.nested("special", "background")));

        let primary = primary
            .or_else(|| parse_color(self.nested("colors", "color4")))
            .or_else(|| parse_color(self.nested("colors", "color12")));
        let primary_container = primary_container
            .or_else(|| parse_color(self.nested("colors", "color5")))
            .or_else(|| parse_color(self.nested("colors", "color13")));

        WalColors {
            primary,
            primary_container,
            background,
        }
    }

    /// Terminal extras for the ghostty dialect.
    pub fn ghostty_extras(&self) -> GhosttyExtras {
        let pick = |keys: &[&str]| {
            keys.iter()
                .filter_map(|key| self.top(key))
                .find(|value| !value.is_empty())
                .map(with_hash)
        };

        let background =
            pick(&["background"]).or_else(|| loose_hex(self.nested("special", "background")));
        let foreground =
            pick(&["foreground"]).or_else(|| loose_hex(self.nested("special", "foreground")));
        let cursor_color =
            pick(&["cursor-color", "cursor_color", "cursor"]).or_else(|| foreground.clone());
        let cursor_text = pick(&["cursor-text", "cursor_text"]).or_else(|| foreground.clone());
        let selection_background = pick(&["selection-background", "selection_background"])
            .or_else(|| background.clone());
        let selection_foreground = pick(&["selection-foreground", "selection_foreground"])
            .or_else(|| foreground.clone());

        let values = [
            background,
            foreground,
            cursor_color,
            cursor_text,
            selection_background,
            selection_foreground,
        ];
        let entries = GHOSTTY_KEYS
            .iter()
            .zip(values)
            .filter_map(|(key, value)| value.map(|value| (*key, value)))
            .collect();

        GhosttyExtras { entries }
    }
}

/// Colors that can seed a palette run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalColors {
    pub primary: Option<HexColor>,
    pub primary_container: Option<HexColor>,
    pub background: Option<HexColor>,
}

impl WalColors {
    /// Read seed colors from `path`; any failure yields all-`None`.
    pub fn read(path: &Path) -> Self {
        WalCache::load(path)
            .map(|cache| cache.colors())
            .unwrap_or_default()
    }
}

/// Ghostty `key = value` pairs, in [`GHOSTTY_KEYS`] order. Values are passed
/// through verbatim apart from a leading `#`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GhosttyExtras {
    pub entries: Vec<(&'static str, String)>,
}

impl GhosttyExtras {
    pub fn read(path: &Path) -> Self {
        WalCache::load(path)
            .map(|cache| cache.ghostty_extras())
            .unwrap_or_default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Expand a leading `~/` against the home directory.
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

fn parse_color(value: Option<&str>) -> Option<HexColor> {
    let value = value?;
    if value.trim().is_empty() {
        return None;
    }
    match HexColor::parse(value) {
        Ok(color) => Some(color),
        Err(e) => {
            debug!(value, error = %e, "ignoring malformed cached color");
            None
        }
    }
}

fn with_hash(value: &str) -> String {
    if value.starts_with('#') {
        value.to_string()
    } else {
        format!("#{value}")
    }
}

/// Trim, lowercase and `#`-prefix without validating digits.
fn loose_hex(value: Option<&str>) -> Option<String> {
    let trimmed = value?.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(with_hash(trimmed).to_lowercase())
}
