//! Palette generation for colorful base colors.

use tracing::trace;

use super::config::{
    AnchorBlend, ChromaticConfig, CYAN_HUE_SHIFT, GREEN_HUE, MAGENTA_HUE_SHIFT, RED_HUE,
    YELLOW_HUE,
};
use super::transform::ColorTransform;
use super::{Appearance, Palette};
use crate::color::{wrap_hue, HexColor, Hsv};
use crate::contrast::ensure_contrast;

struct Chromatic {
    appearance: Appearance,
    background: HexColor,
    base: Hsv,
}

impl Chromatic {
    /// Transform the base saturation/value and place it at `hue`.
    fn shade(&self, hue: f64, transform: &ColorTransform) -> HexColor {
        shade_from(self.base, hue, transform)
    }

    fn anchored(&self, color: HexColor, blend: Option<&AnchorBlend>) -> HexColor {
        match blend {
            Some(blend) => blend.anchor.color().blend(color, blend.ratio),
            None => color,
        }
    }

    fn repair(&self, color: HexColor, min_ratio: f64) -> HexColor {
        ensure_contrast(color, self.background, min_ratio, self.appearance)
    }

    fn main(&self, hue: f64, transform: &ColorTransform, blend: Option<&AnchorBlend>) -> HexColor {
        let color = self.anchored(self.shade(hue, transform), blend);
        self.repair(color, ChromaticConfig::MIN_CONTRAST_MAIN)
    }

    fn bright(
        &self,
        hue: f64,
        transform: &ColorTransform,
        blend: Option<&AnchorBlend>,
    ) -> HexColor {
        let color = self.anchored(self.shade(hue, transform), blend);
        self.repair(color, ChromaticConfig::MIN_CONTRAST_BRIGHT)
    }
}

fn shade_from(source: Hsv, hue: f64, transform: &ColorTransform) -> HexColor {
    let (s, v) = transform.apply(source.s, source.v);
    HexColor::from_hsv(Hsv::new(hue, s, v))
}

pub(super) fn generate(
    base: HexColor,
    appearance: Appearance,
    honor_primary: Option<HexColor>,
    background: HexColor,
) -> Palette {
    let config = ChromaticConfig::for_appearance(appearance);
    let slots = Chromatic {
        appearance,
        background,
        base: base.to_hsv(),
    };
    let base_hue = slots.base.h;
    let honor = honor_primary.map(|color| (color, color.to_hsv()));

    let magenta_hue = wrap_hue(base_hue - MAGENTA_HUE_SHIFT);
    let cyan_hue = wrap_hue(base_hue + CYAN_HUE_SHIFT);

    let red = slots.main(RED_HUE, &config.red, Some(&config.red_blend));
    let green = slots.main(GREEN_HUE, &config.green, Some(&config.green_blend));
    let yellow = slots.main(YELLOW_HUE, &config.yellow, Some(&config.yellow_blend));
    let blue = slots.main(base_hue, &config.blue, None);

    let magenta = match honor {
        Some((_, hsv)) => shade_from(hsv, hsv.h, &config.magenta_honor),
        None => slots.shade(magenta_hue, &config.magenta),
    };
    let magenta = slots.repair(magenta, ChromaticConfig::MIN_CONTRAST_MAIN);

    let cyan = match honor {
        Some((color, _)) => color,
        None => slots.shade(cyan_hue, &config.cyan),
    };
    let cyan = slots.repair(cyan, ChromaticConfig::MIN_CONTRAST_MAIN);

    let bright_red = slots.bright(RED_HUE, &config.bright_red, Some(&config.red_blend));
    let bright_green = slots.bright(GREEN_HUE, &config.bright_green, Some(&config.green_blend));
    let bright_yellow = slots.bright(
        YELLOW_HUE,
        &config.bright_yellow,
        Some(&config.yellow_blend),
    );

    let bright_blue = match honor {
        Some((_, hsv)) => shade_from(hsv, hsv.h, &config.bright_blue_honor),
        None => slots.shade(base_hue, &config.bright_blue),
    };
    let bright_blue = slots.repair(bright_blue, ChromaticConfig::MIN_CONTRAST_BRIGHT);

    let bright_magenta = slots.bright(magenta_hue, &config.bright_magenta, None);
    let bright_cyan_hue = wrap_hue(base_hue + config.bright_cyan_shift);
    let bright_cyan = slots.bright(bright_cyan_hue, &config.bright_cyan, None);

    let [neutral_dark, neutral_light] = config.neutrals;
    let colors = [
        background,
        red,
        green,
        yellow,
        blue,
        magenta,
        cyan,
        neutral_dark,
        neutral_light,
        bright_red,
        bright_green,
        bright_yellow,
        bright_blue,
        bright_magenta,
        bright_cyan,
        config.final_contrast,
    ];
    trace!(?appearance, honor = honor.is_some(), "chromatic palette generated");
    Palette::new(colors)
}
