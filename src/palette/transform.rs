//! Saturation/value adjustment rules applied to a base HSV color.

use crate::color::clamp_unit;

/// Optional saturation and value rules for one palette slot.
///
/// A static override wins over everything else on its channel. Otherwise the
/// multiplier is applied first, then the floor, then the ceiling. Both
/// results are clamped into `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ColorTransform {
    pub saturation_multiplier: Option<f64>,
    pub saturation_floor: Option<f64>,
    pub static_saturation: Option<f64>,
    pub value_multiplier: Option<f64>,
    pub value_floor: Option<f64>,
    pub value_ceiling: Option<f64>,
    pub static_value: Option<f64>,
}

impl ColorTransform {
    pub const IDENTITY: ColorTransform = ColorTransform {
        saturation_multiplier: None,
        saturation_floor: None,
        static_saturation: None,
        value_multiplier: None,
        value_floor: None,
        value_ceiling: None,
        static_value: None,
    };

    /// Ignore the base entirely and use fixed saturation and value.
    pub const fn fixed(saturation: f64, value: f64) -> Self {
        ColorTransform {
            static_saturation: Some(saturation),
            static_value: Some(value),
            ..Self::IDENTITY
        }
    }

    /// Scale saturation and value by the given factors.
    pub const fn scaled(saturation: f64, value: f64) -> Self {
        ColorTransform {
            saturation_multiplier: Some(saturation),
            value_multiplier: Some(value),
            ..Self::IDENTITY
        }
    }

    pub const fn saturation_floor(self, floor: f64) -> Self {
        ColorTransform {
            saturation_floor: Some(floor),
            ..self
        }
    }

    pub const fn value_floor(self, floor: f64) -> Self {
        ColorTransform {
            value_floor: Some(floor),
            ..self
        }
    }

    pub const fn value_ceiling(self, ceiling: f64) -> Self {
        ColorTransform {
            value_ceiling: Some(ceiling),
            ..self
        }
    }

    /// Apply to a base saturation/value pair.
    pub fn apply(&self, saturation: f64, value: f64) -> (f64, f64) {
        let s = match self.static_saturation {
            Some(fixed) => fixed,
            None => {
                let mut s = saturation;
                if let Some(multiplier) = self.saturation_multiplier {
                    s *= multiplier;
                }
                if let Some(floor) = self.saturation_floor {
                    s = s.max(floor);
                }
                s
            }
        };

        let v = match self.static_value {
            Some(fixed) => fixed,
            None => {
                let mut v = value;
                if let Some(multiplier) = self.value_multiplier {
                    v *= multiplier;
                }
                if let Some(floor) = self.value_floor {
                    v = v.max(floor);
                }
                if let Some(ceiling) = self.value_ceiling {
                    v = v.min(ceiling);
                }
                v
            }
        };

        (clamp_unit(s), clamp_unit(v))
    }
}
