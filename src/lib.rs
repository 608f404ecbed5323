//! dank16 Library
//!
//! Generates contrast-checked 16-color terminal palettes from a single base
//! color, and snaps colors to the nearest entry of a fixed swatch table.

pub mod cli;
pub mod color;
pub mod config;
pub mod contrast;
pub mod error;
pub mod logging;
pub mod output;
pub mod palette;
pub mod swatch;
pub mod wal;

pub use color::{normalize_hex, wrap_hue, HexColor};
pub use config::Config;
pub use contrast::{contrast_ratio, ensure_contrast, relative_luminance};
pub use error::{ColorError, PaletteError, SwatchError};
pub use output::Dialect;
pub use palette::{generate_palette, Appearance, Palette, PaletteInputs, PaletteRequest};
pub use swatch::{nearest_swatch, resolve_swatch};
pub use wal::{GhosttyExtras, WalCache, WalColors};
