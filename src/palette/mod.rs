//! 16-color terminal palette generation.
//!
//! A [`PaletteRequest`] is resolved once per run and handed to
//! [`generate_palette`], which picks the chromatic or grayscale generator
//! and the light or dark tables. Slot order follows the ANSI convention:
//!
//! | Slots | Contents |
//! |-------|----------|
//! | 0 | background |
//! | 1-6 | red, green, yellow, blue, magenta, cyan |
//! | 7-8 | neutrals |
//! | 9-14 | bright red .. bright cyan |
//! | 15 | foreground contrast color |

mod chromatic;
pub mod config;
mod grayscale;
mod resolve;
mod transform;

pub use config::{
    Anchor, ChromaticConfig, GrayscaleConfig, TintSpec, DEFAULT_DARK_BACKGROUND,
    DEFAULT_LIGHT_BACKGROUND,
};
pub use resolve::{PaletteInputs, LIGHT_BACKGROUND_LUMINANCE};
pub use transform::ColorTransform;

use std::ops::Index;

use tracing::debug;

use crate::color::HexColor;

/// Light or dark terminal appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Appearance {
    Light,
    #[default]
    Dark,
}

impl Appearance {
    pub fn from_is_light(is_light: bool) -> Self {
        if is_light {
            Appearance::Light
        } else {
            Appearance::Dark
        }
    }

    pub fn is_light(self) -> bool {
        self == Appearance::Light
    }

    pub fn default_background(self) -> HexColor {
        match self {
            Appearance::Light => DEFAULT_LIGHT_BACKGROUND,
            Appearance::Dark => DEFAULT_DARK_BACKGROUND,
        }
    }
}

/// Exactly 16 colors in ANSI slot order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette([HexColor; 16]);

impl Palette {
    pub const SIZE: usize = 16;

    pub fn new(colors: [HexColor; Palette::SIZE]) -> Self {
        Self(colors)
    }

    pub fn colors(&self) -> &[HexColor; Palette::SIZE] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &HexColor> {
        self.0.iter()
    }

    pub fn background(&self) -> HexColor {
        self.0[0]
    }

    /// Canonical `#rrggbb` strings in slot order.
    pub fn to_hex_strings(&self) -> Vec<String> {
        self.0.iter().map(HexColor::to_string).collect()
    }
}

impl Index<usize> for Palette {
    type Output = HexColor;

    fn index(&self, slot: usize) -> &HexColor {
        &self.0[slot]
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a HexColor;
    type IntoIter = std::slice::Iter<'a, HexColor>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Fully resolved inputs for one palette.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteRequest {
    pub base: HexColor,
    pub appearance: Appearance,
    /// Accent that steers magenta, cyan and bright blue (or the gray level
    /// in grayscale mode).
    pub honor_primary: Option<HexColor>,
    /// Falls back to the appearance's default background.
    pub background: Option<HexColor>,
    pub grayscale: bool,
}

impl PaletteRequest {
    pub fn new(base: HexColor, appearance: Appearance) -> Self {
        Self {
            base,
            appearance,
            honor_primary: None,
            background: None,
            grayscale: false,
        }
    }

    pub fn resolved_background(&self) -> HexColor {
        self.background
            .unwrap_or_else(|| self.appearance.default_background())
    }
}

/// Generate a palette. Pure and deterministic.
pub fn generate_palette(request: &PaletteRequest) -> Palette {
    let background = request.resolved_background();
    debug!(
        base = %request.base,
        appearance = ?request.appearance,
        grayscale = request.grayscale,
        background = %background,
        "generating palette"
    );

    if request.grayscale {
        grayscale::generate(
            request.base,
            request.appearance,
            request.honor_primary,
            background,
        )
    } else {
        chromatic::generate(
            request.base,
            request.appearance,
            request.honor_primary,
            background,
        )
    }
}
