//! Terminal config dialects for printing a palette.

use serde::{Deserialize, Serialize};

use crate::palette::Palette;
use crate::wal::GhosttyExtras;

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// `colorN   #rrggbb`, one line per slot.
    #[default]
    Kitty,
    /// Optional `key = value` extras followed by `palette = N=#rrggbb`.
    Ghostty,
}

/// Render `palette` in `dialect`. `extras` are only used by ghostty.
pub fn render(palette: &Palette, dialect: Dialect, extras: &GhosttyExtras) -> String {
    let mut out = String::new();
    match dialect {
        Dialect::Kitty => {
            for (slot, color) in palette.iter().enumerate() {
                out.push_str(&format!("color{}   {}\n", slot, color));
            }
        }
        Dialect::Ghostty => {
            for (key, value) in &extras.entries {
                out.push_str(&format!("{} = {}\n", key, value));
            }
            for (slot, color) in palette.iter().enumerate() {
                out.push_str(&format!("palette = {}={}\n", slot, color));
            }
        }
    }
    out
}
