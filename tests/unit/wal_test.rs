//! Unit tests for color-scheme cache adapters

use dank16::{GhosttyExtras, WalCache, WalColors};
use tempfile::TempDir;

use crate::helpers::{hex, write_wal_cache};

const MATUGEN_CACHE: &str = r##"{
    "primary": "#8ab4f8",
    "primary_container": "#004a77",
    "background": "#101418",
    "foreground": "#e0e2e8",
    "cursor": "#8ab4f8"
}"##;

#[test]
fn read_seed_colors_from_file() {
    let dir = TempDir::new().unwrap();
    let path = write_wal_cache(&dir, MATUGEN_CACHE);

    let colors = WalColors::read(&path);
    assert_eq!(colors.primary, Some(hex("#8ab4f8")));
    assert_eq!(colors.primary_container, Some(hex("#004a77")));
    assert_eq!(colors.background, Some(hex("#101418")));
}

#[test]
fn read_extras_from_file() {
    let dir = TempDir::new().unwrap();
    let path = write_wal_cache(&dir, MATUGEN_CACHE);

    let extras = GhosttyExtras::read(&path);
    let keys: Vec<&str> = extras.entries.iter().map(|(key, _)| *key).collect();
    assert_eq!(
        keys,
        [
            "background",
            "foreground",
            "cursor-color",
            "cursor-text",
            "selection-background",
            "selection-foreground",
        ]
    );
    assert_eq!(extras.get("cursor-color"), Some("#8ab4f8"));
    assert_eq!(extras.get("cursor-text"), Some("#e0e2e8"));
    assert_eq!(extras.get("selection-background"), Some("#101418"));
}

#[test]
fn load_returns_none_for_garbage() {
    let dir = TempDir::new().unwrap();
    let path = write_wal_cache(&dir, "not json at all");
    assert!(WalCache::load(&path).is_none());
    assert!(WalCache::load(&dir.path().join("missing.json")).is_none());
}

#[test]
fn empty_strings_count_as_missing() {
    let cache =
        WalCache::parse(r##"{"primary": "", "primary_container": "  ", "background": ""}"##)
            .unwrap();
    assert_eq!(cache.colors(), WalColors::default());
    assert!(cache.ghostty_extras().get("background").is_none());
}
