//! Palette generation for achromatic base colors.
//!
//! Every slot is derived from a single gray: accents and brights are faint
//! hue tints pulled back toward it, neutrals are black and white mixed into it.

use tracing::trace;

use super::config::{GrayscaleConfig, TintSpec};
use super::{Appearance, Palette};
use crate::color::{clamp_unit, HexColor, Hsv};
use crate::contrast::ensure_contrast;

/// Clamp without requiring `lower <= upper`; the lower bound wins on overlap.
fn bounded(value: f64, lower: f64, upper: f64) -> f64 {
    value.min(upper).max(lower)
}

pub(super) fn generate(
    base: HexColor,
    appearance: Appearance,
    honor_primary: Option<HexColor>,
    background: HexColor,
) -> Palette {
    let config = GrayscaleConfig::for_appearance(appearance);

    let gray = honor_primary.unwrap_or(base).to_grayscale();
    let base_value = bounded(gray.to_hsv().v, config.value_floor, config.value_ceiling);

    let accent_saturation = config.accent_saturation;
    let bright_saturation = accent_saturation + config.bright_saturation_delta;
    let accent_value = bounded(
        base_value * config.accent_value_multiplier,
        config.accent_value_min,
        config.accent_value_max,
    );
    let bright_value = bounded(
        accent_value + config.bright_value_offset,
        config.bright_value_min(),
        config.bright_value_max,
    );

    let tint = |spec: &TintSpec, saturation: f64, value: f64| {
        let tinted = HexColor::from_hsv(Hsv::new(
            spec.hue,
            saturation * spec.saturation_factor,
            value,
        ));
        let blended = gray.blend(tinted, clamp_unit(spec.blend_ratio));
        ensure_contrast(blended, background, spec.min_contrast, appearance)
    };
    let neutral = |extreme: HexColor, ratio: f64| {
        ensure_contrast(
            extreme.blend(gray, ratio),
            background,
            GrayscaleConfig::NEUTRAL_MIN_CONTRAST,
            appearance,
        )
    };

    let mut colors = [background; Palette::SIZE];
    for (slot, spec) in config.accents.iter().enumerate() {
        colors[1 + slot] = tint(spec, accent_saturation, accent_value);
    }
    colors[7] = neutral(HexColor::BLACK, config.neutral_darker_blend);
    colors[8] = neutral(HexColor::WHITE, config.neutral_lighter_blend);
    for (slot, spec) in config.brights.iter().enumerate() {
        colors[9 + slot] = tint(spec, bright_saturation, bright_value);
    }
    colors[15] = ensure_contrast(
        config.foreground,
        background,
        GrayscaleConfig::FOREGROUND_MIN_CONTRAST,
        appearance,
    );

    trace!(%gray, accent_value, bright_value, "grayscale palette generated");
    Palette::new(colors)
}
