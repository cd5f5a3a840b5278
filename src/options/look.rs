use std::f32::consts::FRAC_PI_2;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Hard pitch limit in radians. Pitch never leaves `[-PITCH_LIMIT,
/// PITCH_LIMIT]`, whatever the soft range says.
pub const PITCH_LIMIT: f32 = FRAC_PI_2;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Look", inline)]
#[serde(default)]
/// Mouse-look parameters.
pub struct LookOptions {
    /// Radians of rotation per pixel of pointer movement, before
    /// `look_scale`.
    #[schemars(title = "Sensitivity", range(min = 0.0005, max = 0.01), extend("step" = 0.0005))]
    pub sensitivity: f32,
    /// Constant multiplier applied on top of `sensitivity`.
    #[schemars(skip)]
    pub look_scale: f32,
    /// When false, vertical pointer movement is ignored.
    #[schemars(title = "Look Vertical")]
    pub look_vertical: bool,
    /// Apply the soft vertical range on top of the hard clamp.
    #[schemars(title = "Constrain Vertical")]
    pub constrain_vertical: bool,
    /// Soft range lower bound, as a polar angle from straight up (radians).
    #[schemars(title = "Vertical Min", range(min = 0.0, max = 3.1), extend("step" = 0.05))]
    pub vertical_min: f32,
    /// Soft range upper bound, as a polar angle from straight up (radians).
    #[schemars(title = "Vertical Max", range(min = 0.0, max = 3.1), extend("step" = 0.05))]
    pub vertical_max: f32,
}

impl Default for LookOptions {
    fn default() -> Self {
        Self {
            sensitivity: 0.002,
            look_scale: 8.0,
            look_vertical: true,
            constrain_vertical: false,
            vertical_min: 1.0,
            vertical_max: 2.0,
        }
    }
}

impl LookOptions {
    /// Combined radians-per-pixel factor used by mouse look.
    #[must_use]
    pub fn radians_per_pixel(&self) -> f32 {
        self.sensitivity * self.look_scale
    }

    /// Pitch range `(min, max)` enforced after every look step.
    ///
    /// Without `constrain_vertical` this is the hard `±π/2` clamp. With it,
    /// the polar range `[vertical_min, vertical_max]` is converted to pitch
    /// (`pitch = π/2 - polar`) and intersected with the hard clamp. Bounds
    /// given in the wrong order are swapped. A non-finite soft bound falls
    /// back to the hard clamp.
    #[must_use]
    pub fn pitch_bounds(&self) -> (f32, f32) {
        if !self.constrain_vertical
            || !self.vertical_min.is_finite()
            || !self.vertical_max.is_finite()
        {
            return (-PITCH_LIMIT, PITCH_LIMIT);
        }
        let a = (FRAC_PI_2 - self.vertical_max).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        let b = (FRAC_PI_2 - self.vertical_min).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        (a.min(b), a.max(b))
    }

    pub(super) fn fields(&self) -> [(&'static str, f32); 4] {
        [
            ("look.sensitivity", self.sensitivity),
            ("look.look_scale", self.look_scale),
            ("look.vertical_min", self.vertical_min),
            ("look.vertical_max", self.vertical_max),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bounds_are_hard_clamp() {
        let opts = LookOptions::default();
        assert_eq!(opts.pitch_bounds(), (-PITCH_LIMIT, PITCH_LIMIT));
        assert!((opts.radians_per_pixel() - 0.016).abs() < 1e-7);
    }

    #[test]
    fn soft_range_maps_polar_to_pitch() {
        let opts = LookOptions {
            constrain_vertical: true,
            ..LookOptions::default()
        };
        let (lo, hi) = opts.pitch_bounds();
        assert!((lo - (FRAC_PI_2 - 2.0)).abs() < 1e-6);
        assert!((hi - (FRAC_PI_2 - 1.0)).abs() < 1e-6);
    }

    #[test]
    fn soft_range_swapped_and_clipped() {
        let opts = LookOptions {
            constrain_vertical: true,
            vertical_min: 3.5,
            vertical_max: -1.0,
            ..LookOptions::default()
        };
        assert_eq!(opts.pitch_bounds(), (-PITCH_LIMIT, PITCH_LIMIT));
    }

    #[test]
    fn nan_soft_range_falls_back_to_hard_clamp() {
        let opts = LookOptions {
            constrain_vertical: true,
            vertical_min: f32::NAN,
            vertical_max: 2.0,
            ..LookOptions::default()
        };
        assert_eq!(opts.pitch_bounds(), (-PITCH_LIMIT, PITCH_LIMIT));
    }
}
