//! Conversions between normalized RGB and the cylindrical models.

use super::{Hsl, Hsv, Rgb};

/// Hue of an RGB triple as a fraction of a turn, given its max and range.
fn hue(rgb: Rgb, max: f64, range: f64) -> f64 {
    let rc = (max - rgb.r) / range;
    let gc = (max - rgb.g) / range;
    let bc = (max - rgb.b) / range;

    let sector = if rgb.r == max {
        bc - gc
    } else if rgb.g == max {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };

    (sector / 6.0).rem_euclid(1.0)
}

pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let max = rgb.r.max(rgb.g).max(rgb.b);
    let min = rgb.r.min(rgb.g).min(rgb.b);

    if max == min {
        return Hsv::new(0.0, 0.0, max);
    }

    let range = max - min;
    Hsv::new(hue(rgb, max, range), range / max, max)
}

pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    let Hsv { h, s, v } = hsv;
    if s == 0.0 {
        return Rgb::new(v, v, v);
    }

    let sector = (h * 6.0).trunc();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match (sector as i64).rem_euclid(6) {
        0 => Rgb::new(v, t, p),
        1 => Rgb::new(q, v, p),
        2 => Rgb::new(p, v, t),
        3 => Rgb::new(p, q, v),
        4 => Rgb::new(t, p, v),
        _ => Rgb::new(v, p, q),
    }
}

pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let max = rgb.r.max(rgb.g).max(rgb.b);
    let min = rgb.r.min(rgb.g).min(rgb.b);
    let sum = max + min;
    let l = sum / 2.0;

    if max == min {
        return Hsl { h: 0.0, s: 0.0, l };
    }

    let range = max - min;
    let s = if l <= 0.5 {
        range / sum
    } else {
        range / (2.0 - max - min)
    };

    Hsl {
        h: hue(rgb, max, range),
        s,
        l,
    }
}
