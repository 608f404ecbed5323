//! Per-appearance constants and slot tables for both generators.

use super::transform::ColorTransform;
use super::Appearance;
use crate::color::HexColor;
use crate::contrast::{MIN_CONTRAST_LARGE, MIN_CONTRAST_TEXT};

pub const DEFAULT_LIGHT_BACKGROUND: HexColor = HexColor::new(0xf8, 0xf8, 0xf8);
pub const DEFAULT_DARK_BACKGROUND: HexColor = HexColor::new(0x1a, 0x1a, 0x1a);

/// Fixed reference colors blended into generated reds, greens and yellows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    RedLight,
    GreenLight,
    YellowLight,
    RedDark,
    GreenDark,
    YellowDark,
}

impl Anchor {
    pub const ALL: [Anchor; 6] = [
        Anchor::RedLight,
        Anchor::GreenLight,
        Anchor::YellowLight,
        Anchor::RedDark,
        Anchor::GreenDark,
        Anchor::YellowDark,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Anchor::RedLight => "red_light",
            Anchor::GreenLight => "green_light",
            Anchor::YellowLight => "yellow_light",
            Anchor::RedDark => "red_dark",
            Anchor::GreenDark => "green_dark",
            Anchor::YellowDark => "yellow_dark",
        }
    }

    pub fn color(self) -> HexColor {
        match self {
            Anchor::RedLight => HexColor::new(0xd2, 0x0f, 0x39),
            Anchor::GreenLight => HexColor::new(0x40, 0xa0, 0x2b),
            Anchor::YellowLight => HexColor::new(0xdf, 0x8e, 0x1d),
            Anchor::RedDark => HexColor::new(0xf3, 0x8b, 0xa8),
            Anchor::GreenDark => HexColor::new(0x8b, 0xd5, 0xa1),
            Anchor::YellowDark => HexColor::new(0xdb, 0xa6, 0x3a),
        }
    }

    /// Look an anchor up by its table name, e.g. `"red_light"`.
    pub fn from_name(name: &str) -> Option<Anchor> {
        Self::ALL.into_iter().find(|anchor| anchor.name() == name)
    }
}

/// A generated slot paired with the anchor it is pulled toward.
///
/// `ratio` is the anchor's share of the final color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorBlend {
    pub anchor: Anchor,
    pub ratio: f64,
}

// ---------------------------------------------------------------------------
// Chromatic
// ---------------------------------------------------------------------------

pub const RED_HUE: f64 = 0.0;
pub const GREEN_HUE: f64 = 0.33;
pub const YELLOW_HUE: f64 = 0.08;
pub const CYAN_HUE_SHIFT: f64 = 0.08;
pub const MAGENTA_HUE_SHIFT: f64 = 0.03;
pub const DARK_CYAN_ADDITIONAL_SHIFT: f64 = 0.02;

#[derive(Debug, Clone, PartialEq)]
pub struct ChromaticConfig {
    pub red_blend: AnchorBlend,
    pub green_blend: AnchorBlend,
    pub yellow_blend: AnchorBlend,
    /// Slots 7 and 8.
    pub neutrals: [HexColor; 2],
    /// Slot 15, emitted without contrast repair.
    pub final_contrast: HexColor,
    /// Hue offset from the base for bright cyan.
    pub bright_cyan_shift: f64,

    pub red: ColorTransform,
    pub bright_red: ColorTransform,
    pub green: ColorTransform,
    pub bright_green: ColorTransform,
    pub yellow: ColorTransform,
    pub bright_yellow: ColorTransform,
    pub blue: ColorTransform,
    pub bright_blue: ColorTransform,
    pub bright_blue_honor: ColorTransform,
    pub magenta: ColorTransform,
    pub magenta_honor: ColorTransform,
    pub bright_magenta: ColorTransform,
    pub cyan: ColorTransform,
    pub bright_cyan: ColorTransform,
}

impl ChromaticConfig {
    pub const MIN_CONTRAST_MAIN: f64 = MIN_CONTRAST_TEXT;
    pub const MIN_CONTRAST_BRIGHT: f64 = MIN_CONTRAST_LARGE;

    pub fn for_appearance(appearance: Appearance) -> &'static ChromaticConfig {
        match appearance {
            Appearance::Light => &CHROMATIC_LIGHT,
            Appearance::Dark => &CHROMATIC_DARK,
        }
    }
}

pub static CHROMATIC_LIGHT: ChromaticConfig = ChromaticConfig {
    red_blend: AnchorBlend {
        anchor: Anchor::RedLight,
        ratio: 0.6,
    },
    green_blend: AnchorBlend {
        anchor: Anchor::GreenLight,
        ratio: 0.6,
    },
    yellow_blend: AnchorBlend {
        anchor: Anchor::YellowLight,
        ratio: 0.6,
    },
    neutrals: [
        HexColor::new(0x2e, 0x2e, 0x2e),
        HexColor::new(0x4a, 0x4a, 0x4a),
    ],
    final_contrast: HexColor::new(0x1a, 0x1a, 0x1a),
    bright_cyan_shift: CYAN_HUE_SHIFT,

    red: ColorTransform::fixed(0.75, 0.85),
    bright_red: ColorTransform::fixed(0.6, 0.9),
    green: ColorTransform::scaled(0.9, 0.6).saturation_floor(0.75),
    bright_green: ColorTransform::scaled(0.8, 0.65).saturation_floor(0.7),
    yellow: ColorTransform::scaled(0.85, 0.7).saturation_floor(0.7),
    bright_yellow: ColorTransform::scaled(0.75, 0.75).saturation_floor(0.65),
    blue: ColorTransform::scaled(0.9, 1.1).saturation_floor(0.7),
    bright_blue: ColorTransform::scaled(0.8, 1.3)
        .saturation_floor(0.7)
        .value_ceiling(1.0),
    bright_blue_honor: ColorTransform::scaled(1.1, 1.2).value_ceiling(1.0),
    magenta: ColorTransform::scaled(0.75, 0.9).saturation_floor(0.6),
    magenta_honor: ColorTransform::scaled(0.9, 0.85).saturation_floor(0.7),
    bright_magenta: ColorTransform::scaled(0.9, 1.25)
        .saturation_floor(0.75)
        .value_ceiling(1.0),
    cyan: ColorTransform::scaled(0.8, 1.05).saturation_floor(0.65),
    bright_cyan: ColorTransform::scaled(0.75, 1.25)
        .saturation_floor(0.65)
        .value_ceiling(1.0),
};

pub static CHROMATIC_DARK: ChromaticConfig = ChromaticConfig {
    red_blend: AnchorBlend {
        anchor: Anchor::RedDark,
        ratio: 0.5,
    },
    green_blend: AnchorBlend {
        anchor: Anchor::GreenDark,
        ratio: 0.75,
    },
    yellow_blend: AnchorBlend {
        anchor: Anchor::YellowDark,
        ratio: 0.35,
    },
    neutrals: [
        HexColor::new(0xab, 0xb2, 0xbf),
        HexColor::new(0x5c, 0x63, 0x70),
    ],
    final_contrast: HexColor::new(0xff, 0xff, 0xff),
    bright_cyan_shift: DARK_CYAN_ADDITIONAL_SHIFT,

    red: ColorTransform::fixed(0.6, 0.8),
    bright_red: ColorTransform::fixed(0.45, 0.9),
    green: ColorTransform::scaled(0.65, 0.9).saturation_floor(0.5),
    bright_green: ColorTransform::scaled(0.5, 1.5)
        .saturation_floor(0.4)
        .value_ceiling(0.9),
    yellow: ColorTransform::scaled(0.5, 1.4).saturation_floor(0.45),
    bright_yellow: ColorTransform::scaled(0.4, 1.6)
        .saturation_floor(0.35)
        .value_ceiling(0.95),
    blue: ColorTransform::scaled(0.8, 1.6)
        .saturation_floor(0.6)
        .value_ceiling(1.0),
    bright_blue: ColorTransform::scaled(0.6, 1.5)
        .saturation_floor(0.5)
        .value_ceiling(0.9),
    bright_blue_honor: ColorTransform::scaled(1.2, 1.1).value_ceiling(1.0),
    magenta: ColorTransform::scaled(0.7, 0.85).saturation_floor(0.6),
    magenta_honor: ColorTransform::scaled(0.8, 0.75),
    bright_magenta: ColorTransform::scaled(0.7, 1.3)
        .saturation_floor(0.6)
        .value_ceiling(0.9),
    cyan: ColorTransform::scaled(0.6, 1.25)
        .saturation_floor(0.5)
        .value_ceiling(0.85),
    bright_cyan: ColorTransform::scaled(0.6, 1.2)
        .saturation_floor(0.5)
        .value_ceiling(0.85),
};

// ---------------------------------------------------------------------------
// Grayscale
// ---------------------------------------------------------------------------

/// Recipe for one hue-tinted slot of a grayscale palette.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TintSpec {
    pub hue: f64,
    /// Scales the mode's accent or bright saturation.
    pub saturation_factor: f64,
    /// Share of the tinted color in the blend with the base gray.
    pub blend_ratio: f64,
    pub min_contrast: f64,
}

const fn accent(hue: f64, saturation_factor: f64, blend_ratio: f64) -> TintSpec {
    TintSpec {
        hue,
        saturation_factor,
        blend_ratio,
        min_contrast: GrayscaleConfig::ACCENT_MIN_CONTRAST,
    }
}

const fn bright(hue: f64, saturation_factor: f64, blend_ratio: f64) -> TintSpec {
    TintSpec {
        hue,
        saturation_factor,
        blend_ratio,
        min_contrast: GrayscaleConfig::BRIGHT_MIN_CONTRAST,
    }
}

/// Lower bound for the bright value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BrightValueMin {
    Fixed(f64),
    AboveFloor(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct GrayscaleConfig {
    pub value_floor: f64,
    pub value_ceiling: f64,
    pub accent_saturation: f64,
    pub bright_saturation_delta: f64,
    pub accent_value_multiplier: f64,
    pub accent_value_min: f64,
    pub accent_value_max: f64,
    pub bright_value_offset: f64,
    pub bright_value_min: BrightValueMin,
    pub bright_value_max: f64,
    /// Black's share when building slot 7.
    pub neutral_darker_blend: f64,
    /// White's share when building slot 8.
    pub neutral_lighter_blend: f64,
    pub foreground: HexColor,
    pub accents: [TintSpec; 6],
    pub brights: [TintSpec; 6],
}

impl GrayscaleConfig {
    pub const ACCENT_MIN_CONTRAST: f64 = MIN_CONTRAST_TEXT;
    pub const BRIGHT_MIN_CONTRAST: f64 = MIN_CONTRAST_LARGE;
    pub const NEUTRAL_MIN_CONTRAST: f64 = MIN_CONTRAST_TEXT;
    pub const FOREGROUND_MIN_CONTRAST: f64 = 6.0;

    pub fn for_appearance(appearance: Appearance) -> &'static GrayscaleConfig {
        match appearance {
            Appearance::Light => &GRAYSCALE_LIGHT,
            Appearance::Dark => &GRAYSCALE_DARK,
        }
    }

    pub fn bright_value_min(&self) -> f64 {
        match self.bright_value_min {
            BrightValueMin::Fixed(min) => min,
            BrightValueMin::AboveFloor(offset) => self.value_floor + offset,
        }
    }
}

pub static GRAYSCALE_LIGHT: GrayscaleConfig = GrayscaleConfig {
    value_floor: 0.32,
    value_ceiling: 0.9,
    accent_saturation: 0.4,
    bright_saturation_delta: 0.16,
    accent_value_multiplier: 1.14,
    accent_value_min: 0.47,
    accent_value_max: 0.985,
    bright_value_offset: 0.28,
    bright_value_min: BrightValueMin::Fixed(0.6),
    bright_value_max: 0.995,
    neutral_darker_blend: 0.45,
    neutral_lighter_blend: 0.65,
    foreground: HexColor::new(0x10, 0x10, 0x10),
    accents: [
        accent(0.0, 1.0, 0.2),
        accent(0.33, 0.92, 0.18),
        accent(0.16, 0.97, 0.19),
        accent(0.58, 0.88, 0.26),
        accent(0.83, 0.95, 0.26),
        accent(0.5, 0.9, 0.26),
    ],
    brights: [
        bright(0.0, 0.94, 0.1),
        bright(0.33, 0.86, 0.08),
        bright(0.16, 0.91, 0.09),
        bright(0.58, 0.8, 0.18),
        bright(0.83, 0.88, 0.18),
        bright(0.5, 0.84, 0.18),
    ],
};

pub static GRAYSCALE_DARK: GrayscaleConfig = GrayscaleConfig {
    value_floor: 0.28,
    value_ceiling: 0.92,
    accent_saturation: 0.26,
    bright_saturation_delta: 0.1,
    accent_value_multiplier: 0.98,
    accent_value_min: 0.32,
    accent_value_max: 0.9,
    bright_value_offset: 0.18,
    bright_value_min: BrightValueMin::AboveFloor(0.06),
    bright_value_max: 0.96,
    neutral_darker_blend: 0.65,
    neutral_lighter_blend: 0.4,
    foreground: HexColor::new(0xf6, 0xf6, 0xf6),
    accents: [
        accent(0.0, 1.08, 0.42),
        accent(0.33, 0.98, 0.4),
        accent(0.16, 1.02, 0.41),
        accent(0.58, 0.88, 0.48),
        accent(0.83, 1.02, 0.48),
        accent(0.5, 0.92, 0.48),
    ],
    brights: [
        bright(0.0, 1.02, 0.32),
        bright(0.33, 0.92, 0.3),
        bright(0.16, 0.98, 0.3),
        bright(0.58, 0.86, 0.36),
        bright(0.83, 1.0, 0.36),
        bright(0.5, 0.9, 0.36),
    ],
};
