//! WCAG luminance, contrast ratios and value-channel contrast repair.

use tracing::debug;

use crate::color::{clamp_unit, HexColor, Hsv, Rgb};
use crate::palette::Appearance;

/// WCAG AA floor for body text.
pub const MIN_CONTRAST_TEXT: f64 = 4.5;
/// WCAG AA floor for large text and UI elements.
pub const MIN_CONTRAST_LARGE: f64 = 3.0;

/// Relative luminance of an sRGB color per WCAG 2.x.
pub fn relative_luminance(color: HexColor) -> f64 {
    fn linearize(c: f64) -> f64 {
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }

    let Rgb { r, g, b } = color.to_rgb();
    0.2126 * linearize(r) + 0.7152 * linearize(g) + 0.0722 * linearize(b)
}

/// Contrast ratio between two colors, in `[1, 21]`. Order does not matter.
pub fn contrast_ratio(foreground: HexColor, background: HexColor) -> f64 {
    let fg = relative_luminance(foreground);
    let bg = relative_luminance(background);
    let (lighter, darker) = if fg > bg { (fg, bg) } else { (bg, fg) };
    (lighter + 0.05) / (darker + 0.05)
}

/// How a contrast repair ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepairOutcome {
    /// The input already met the floor.
    Unchanged,
    /// A value-shifted candidate met the floor.
    Adjusted,
    /// No candidate within the step budget met the floor; the input is returned.
    Exhausted,
}

/// Result of [`ContrastSearch::repair`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Repair {
    pub color: HexColor,
    pub outcome: RepairOutcome,
}

/// Step schedule for walking the HSV value channel.
///
/// Step `n` (1-based) moves the value by `n * step` in each direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastSearch {
    pub max_steps: u32,
    pub step: f64,
}

impl Default for ContrastSearch {
    fn default() -> Self {
        Self {
            max_steps: 29,
            step: 0.02,
        }
    }
}

impl ContrastSearch {
    /// Shift `color`'s value until it reaches `min_ratio` against `background`.
    ///
    /// Light appearances try darker candidates first, dark appearances try
    /// lighter ones first. Hue and saturation are kept.
    pub fn repair(
        &self,
        color: HexColor,
        background: HexColor,
        min_ratio: f64,
        appearance: Appearance,
    ) -> Repair {
        if contrast_ratio(color, background) >= min_ratio {
            return Repair {
                color,
                outcome: RepairOutcome::Unchanged,
            };
        }

        let Hsv { h, s, v } = color.to_hsv();
        let directions: [f64; 2] = match appearance {
            Appearance::Light => [-1.0, 1.0],
            Appearance::Dark => [1.0, -1.0],
        };

        for step in 1..=self.max_steps {
            let delta = f64::from(step) * self.step;
            for direction in directions {
                let shifted = clamp_unit(v + direction * delta);
                if shifted == v {
                    continue;
                }
                let candidate = HexColor::from_hsv(Hsv::new(h, s, shifted));
                if contrast_ratio(candidate, background) >= min_ratio {
                    return Repair {
                        color: candidate,
                        outcome: RepairOutcome::Adjusted,
                    };
                }
            }
        }

        debug!(
            color = %color,
            background = %background,
            min_ratio,
            "contrast target unreachable, keeping original color"
        );
        Repair {
            color,
            outcome: RepairOutcome::Exhausted,
        }
    }
}

/// Best-effort contrast repair with the default step schedule.
pub fn ensure_contrast(
    color: HexColor,
    background: HexColor,
    min_ratio: f64,
    appearance: Appearance,
) -> HexColor {
    ContrastSearch::default()
        .repair(color, background, min_ratio, appearance)
        .color
}
