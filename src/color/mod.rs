//! Color primitives shared by the palette generator and the swatch matcher.
//!
//! [`HexColor`] is the unit every pipeline step consumes and produces, so
//! colors are quantized to whole bytes between steps. Floating point models
//! ([`Rgb`], [`Hsv`], [`Hsl`]) use normalized channels in `[0, 1]`, hue included.

mod convert;

pub use convert::{hsv_to_rgb, rgb_to_hsl, rgb_to_hsv};

use std::fmt;
use std::str::FromStr;

use crate::error::ColorError;

/// Maximum channel spread for a color to count as achromatic.
pub const GRAYSCALE_TOLERANCE: f64 = 0.01;

/// Normalized RGB triple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

/// Hue, saturation, value. Hue is a fraction of a full turn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }
}

/// Hue, saturation, lightness. Hue is a fraction of a full turn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// A 24-bit sRGB color, displayed in canonical `#rrggbb` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    pub const BLACK: HexColor = HexColor::new(0x00, 0x00, 0x00);
    pub const WHITE: HexColor = HexColor::new(0xff, 0xff, 0xff);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `rrggbb` or `#rrggbb`, case-insensitive, surrounding whitespace ignored.
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ColorError::Empty);
        }

        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.chars().count() != 6 {
            return Err(ColorError::InvalidLength {
                input: input.to_string(),
            });
        }
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidDigits {
                input: input.to_string(),
            });
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| ColorError::InvalidDigits {
                input: input.to_string(),
            })
        };

        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Encode normalized channels, clamping each into `[0, 1]` and rounding to
    /// the nearest byte.
    pub fn from_rgb(rgb: Rgb) -> Self {
        let encode = |c: f64| (clamp_unit(c) * 255.0).round() as u8;
        Self::new(encode(rgb.r), encode(rgb.g), encode(rgb.b))
    }

    pub fn from_hsv(hsv: Hsv) -> Self {
        Self::from_rgb(hsv_to_rgb(hsv))
    }

    pub fn to_rgb(self) -> Rgb {
        Rgb::new(
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    pub fn to_hsv(self) -> Hsv {
        rgb_to_hsv(self.to_rgb())
    }

    pub fn to_hsl(self) -> Hsl {
        rgb_to_hsl(self.to_rgb())
    }

    /// True when no pair of channels differs by more than `tolerance`.
    pub fn is_grayscale_within(self, tolerance: f64) -> bool {
        let Rgb { r, g, b } = self.to_rgb();
        let span = (r - g).abs().max((r - b).abs()).max((g - b).abs());
        span <= tolerance
    }

    pub fn is_grayscale(self) -> bool {
        self.is_grayscale_within(GRAYSCALE_TOLERANCE)
    }

    /// Collapse to a gray of equal weighted brightness (gamma-encoded weights).
    pub fn to_grayscale(self) -> Self {
        let Rgb { r, g, b } = self.to_rgb();
        let luma = 0.2126 * r + 0.7152 * g + 0.0722 * b;
        Self::from_rgb(Rgb::new(luma, luma, luma))
    }

    /// Linear per-channel interpolation in sRGB space.
    ///
    /// `ratio` of 1.0 yields `self`, 0.0 yields `other`.
    pub fn blend(self, other: HexColor, ratio: f64) -> Self {
        let a = self.to_rgb();
        let b = other.to_rgb();
        let mix = |x: f64, y: f64| x * ratio + y * (1.0 - ratio);
        Self::from_rgb(Rgb::new(mix(a.r, b.r), mix(a.g, b.g), mix(a.b, b.b)))
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Validate a hex string and return its canonical `#rrggbb` spelling.
pub fn normalize_hex(input: &str) -> Result<String, ColorError> {
    HexColor::parse(input).map(|color| color.to_string())
}

/// Clamp into `[0, 1]`.
pub fn clamp_unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// Bring a hue that stepped at most one turn outside `[0, 1]` back inside.
pub fn wrap_hue(hue: f64) -> f64 {
    if hue < 0.0 {
        hue + 1.0
    } else if hue > 1.0 {
        hue - 1.0
    } else {
        hue
    }
}
