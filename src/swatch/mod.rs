//! Snap an arbitrary color to the nearest entry of the Tela icon theme's
//! fixed color table.

mod cache;

pub use cache::NameCache;

use std::path::Path;

use tracing::debug;

use crate::color::{HexColor, Hsl};
use crate::error::SwatchError;

/// A named reference color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch {
    pub name: &'static str,
    pub color: HexColor,
}

const fn swatch(name: &'static str, r: u8, g: u8, b: u8) -> Swatch {
    Swatch {
        name,
        color: HexColor::new(r, g, b),
    }
}

/// Table order is the tie-break order.
pub const SWATCHES: [Swatch; 15] = [
    swatch("nord", 0x4d, 0x57, 0x6a),
    swatch("grey", 0xbd, 0xbd, 0xbd),
    swatch("purple", 0x7e, 0x57, 0xc2),
    swatch("brown", 0x79, 0x55, 0x48),
    swatch("dark", 0x52, 0x94, 0xe2),
    swatch("red", 0xef, 0x53, 0x50),
    swatch("manjaro", 0x16, 0xa0, 0x85),
    swatch("orange", 0xe1, 0x89, 0x08),
    swatch("blue", 0x56, 0x77, 0xfc),
    swatch("pink", 0xf0, 0x62, 0x92),
    swatch("ubuntu", 0xfb, 0x84, 0x41),
    swatch("green", 0x66, 0xbb, 0x6a),
    swatch("dracula", 0x44, 0x47, 0x5a),
    swatch("yellow", 0xff, 0xca, 0x28),
    swatch("black", 0x4d, 0x4d, 0x4d),
];

pub const HUE_WEIGHT: f64 = 0.7;
pub const SATURATION_WEIGHT: f64 = 0.2;
pub const LIGHTNESS_WEIGHT: f64 = 0.1;

/// Weighted HSL distance. Hue wraps around the circle and is normalized so
/// opposite hues are 1.0 apart.
pub fn distance(a: Hsl, b: Hsl) -> f64 {
    let hue_delta = (a.h * 360.0 - b.h * 360.0).abs();
    let hue = hue_delta.min(360.0 - hue_delta) / 180.0;
    let saturation = (a.s - b.s).abs();
    let lightness = (a.l - b.l).abs();

    HUE_WEIGHT * hue + SATURATION_WEIGHT * saturation + LIGHTNESS_WEIGHT * lightness
}

/// Closest entry of `table`; the first one wins ties. `None` only for an
/// empty table.
pub fn nearest_in(color: HexColor, table: &[Swatch]) -> Option<&Swatch> {
    let target = color.to_hsl();
    let mut best: Option<(&Swatch, f64)> = None;

    for candidate in table {
        let d = distance(target, candidate.color.to_hsl());
        if best.map_or(true, |(_, best_d)| d < best_d) {
            best = Some((candidate, d));
        }
    }

    best.map(|(swatch, _)| swatch)
}

/// Name of the closest entry of [`SWATCHES`].
pub fn nearest_swatch(color: HexColor) -> &'static str {
    nearest_in(color, &SWATCHES)
        .map(|swatch| swatch.name)
        .unwrap_or(SWATCHES[0].name)
}

/// Resolve `input` against [`SWATCHES`], consulting and refreshing the name
/// cache at `cache_path`.
pub fn resolve_swatch(input: &str, cache_path: &Path) -> Result<String, SwatchError> {
    resolve_swatch_in(input, cache_path, &SWATCHES)
}

/// [`resolve_swatch`] against an arbitrary table.
pub fn resolve_swatch_in(
    input: &str,
    cache_path: &Path,
    table: &[Swatch],
) -> Result<String, SwatchError> {
    let color = HexColor::parse(input)?;
    let cache = NameCache::new(cache_path);

    if let Some(name) = cache.lookup(color) {
        debug!(%color, name = %name, "swatch cache hit");
        return Ok(name);
    }

    let name = nearest_in(color, table)
        .map(|swatch| swatch.name)
        .ok_or(SwatchError::Unresolved)?;
    cache.store(color, name);
    Ok(name.to_string())
}
