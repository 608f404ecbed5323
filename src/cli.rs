//! CLI definitions for dank16
//!
//! This module contains the clap CLI structure definitions for both binaries,
//! separated from the entry points so they can be accessed by xtask for
//! documentation generation (man pages).

use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::Parser;

use crate::color::HexColor;
use crate::palette::{Appearance, PaletteInputs};

/// Build clap styles for consistent CLI appearance.
///
/// - Green: headers, usage, flag names
/// - White: placeholders and valid values (light gray on dark terminals)
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Debug, Parser)]
#[command(name = "dank16")]
#[command(about = "Generate 16-color terminal palettes from a base color")]
#[command(
    long_about = "Generate a contrast-checked 16-color terminal palette from a single base color.

When no base color is given, dank16 falls back to the color-scheme cache
(~/.cache/wal/colors.json by default), using its primary_container or primary
color. The cache also supplies the background and honor-primary colors when
they are not passed explicitly.

EXAMPLES:
    dank16 '#1f6feb'                      Dark palette for a blue base
    dank16 '#1f6feb' --light              Light palette
    dank16 --ghostty                      Ghostty config from the cached scheme
    dank16 '#808080' --honor-primary '#8ab4f8'"
)]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Base hex color (e.g. #1f6feb)
    #[arg(value_name = "BASE_HEX")]
    pub base: Option<HexColor>,

    /// Generate a light mode palette
    #[arg(long, conflicts_with = "dark")]
    pub light: bool,

    /// Generate a dark mode palette
    #[arg(long)]
    pub dark: bool,

    /// Output Ghostty configuration instead of Kitty
    #[arg(long)]
    pub ghostty: bool,

    /// Hex color to honor for magenta/cyan balance
    #[arg(long, value_name = "HEX")]
    pub honor_primary: Option<HexColor>,

    /// Override the background hex color
    #[arg(long, value_name = "HEX")]
    pub background: Option<HexColor>,

    /// Read the color-scheme cache from PATH instead of the configured location
    #[arg(long, value_name = "PATH")]
    pub wal_cache: Option<PathBuf>,
}

impl Cli {
    /// Appearance requested by `--light`/`--dark`, if any.
    pub fn appearance(&self) -> Option<Appearance> {
        if self.light {
            Some(Appearance::Light)
        } else if self.dark {
            Some(Appearance::Dark)
        } else {
            None
        }
    }

    pub fn inputs(&self) -> PaletteInputs {
        PaletteInputs {
            base: self.base,
            appearance: self.appearance(),
            honor_primary: self.honor_primary,
            background: self.background,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "nearest-swatch")]
#[command(about = "Print the name of the nearest Tela icon theme color")]
#[command(
    long_about = "Print the name of the Tela icon theme color closest to HEX.

The result is remembered in CACHE_PATH (hex on the first line, name on the
second) and reused when the same color is requested again.

EXAMPLE:
    nearest-swatch '#5677fc' ~/.cache/tela_color"
)]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct SwatchCli {
    /// Hex color to match (e.g. #5677fc)
    #[arg(value_name = "HEX_COLOR")]
    pub hex: String,

    /// Cache file remembering the last match
    #[arg(value_name = "CACHE_PATH")]
    pub cache_path: String,
}
