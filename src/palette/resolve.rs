//! Turning partial user input plus cached scheme colors into a request.

use tracing::debug;

use super::{Appearance, PaletteRequest};
use crate::color::HexColor;
use crate::contrast::relative_luminance;
use crate::error::PaletteError;
use crate::wal::WalColors;

/// Backgrounds brighter than this select the light appearance.
pub const LIGHT_BACKGROUND_LUMINANCE: f64 = 0.75;

/// What the caller supplied; everything is optional.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PaletteInputs {
    pub base: Option<HexColor>,
    /// Explicit `--light`/`--dark` choice.
    pub appearance: Option<Appearance>,
    pub honor_primary: Option<HexColor>,
    pub background: Option<HexColor>,
}

impl PaletteRequest {
    /// Fill gaps in `inputs` from the cache and decide mode flags.
    ///
    /// - honor-primary falls back to the cached primary, background to the
    ///   cached background
    /// - base falls back to the cached primary container, then honor-primary
    /// - grayscale is chosen only when the base and every accent candidate
    ///   (honor-primary, cached primary) are achromatic
    /// - without an explicit appearance, a known background brighter than
    ///   [`LIGHT_BACKGROUND_LUMINANCE`] selects light, anything else dark
    pub fn resolve(inputs: PaletteInputs, cached: &WalColors) -> Result<Self, PaletteError> {
        let honor_primary = inputs.honor_primary.or(cached.primary);
        let background = inputs.background.or(cached.background);

        let base = inputs
            .base
            .or(cached.primary_container)
            .or(honor_primary)
            .ok_or(PaletteError::MissingBaseColor)?;

        let grayscale = base.is_grayscale()
            && [honor_primary, cached.primary]
                .into_iter()
                .flatten()
                .all(HexColor::is_grayscale);

        let appearance = match (inputs.appearance, background) {
            (Some(appearance), _) => appearance,
            (None, Some(background)) => Appearance::from_is_light(
                relative_luminance(background) > LIGHT_BACKGROUND_LUMINANCE,
            ),
            (None, None) => Appearance::Dark,
        };

        debug!(
            base = %base,
            ?appearance,
            grayscale,
            honor = honor_primary.is_some(),
            "resolved palette request"
        );

        Ok(PaletteRequest {
            base,
            appearance,
            honor_primary,
            background,
            grayscale,
        })
    }
}
