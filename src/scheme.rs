//! Harmony schemes derived from a base color.
//!
//! Every scheme returns four HSB-authored colors that keep the base color's
//! alpha. Hue offsets are in degrees and wrap around the wheel; saturation and
//! brightness are clamped to 0.0–1.0.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::color::ColorModel;
use crate::math::wrap_unit;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SchemeKind {
    Analogous,
    Monochromatic,
    Triadic,
    Complementary,
}

impl SchemeKind {
    pub const ALL: [SchemeKind; 4] = [
        Self::Analogous,
        Self::Monochromatic,
        Self::Triadic,
        Self::Complementary,
    ];
}

impl fmt::Display for SchemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Analogous => "Analogous",
            Self::Monochromatic => "Monochromatic",
            Self::Triadic => "Triadic",
            Self::Complementary => "Complementary",
        })
    }
}

/// (hue offset in degrees, saturation, brightness) → color sharing `base`'s alpha.
fn shifted(base: &ColorModel, degrees: f64, saturation: f64, brightness: f64) -> ColorModel {
    ColorModel::from_hsba(
        wrap_unit(base.hue() + degrees / 360.0),
        saturation.clamp(0.0, 1.0),
        brightness.clamp(0.0, 1.0),
        base.alpha(),
    )
}

impl ColorModel {
    /// Four colors that harmonize with `self` under `kind`.
    pub fn scheme(&self, kind: SchemeKind) -> [ColorModel; 4] {
        let (s, b) = (self.saturation(), self.brightness());
        match kind {
            SchemeKind::Analogous => [
                shifted(self, 30.0, s - 0.05, b - 0.1),
                shifted(self, 15.0, s - 0.05, b - 0.05),
                shifted(self, -15.0, s - 0.05, b - 0.05),
                shifted(self, -30.0, s - 0.05, b - 0.1),
            ],
            SchemeKind::Monochromatic => [
                shifted(self, 0.0, s / 2.0, b / 3.0),
                shifted(self, 0.0, s, b / 2.0),
                shifted(self, 0.0, s / 3.0, 2.0 * b / 3.0),
                shifted(self, 0.0, s, 4.0 * b / 5.0),
            ],
            SchemeKind::Triadic => [
                shifted(self, 120.0, 2.0 * s / 3.0, b - 0.05),
                shifted(self, 120.0, s, b),
                shifted(self, 240.0, s, b),
                shifted(self, 240.0, 2.0 * s / 3.0, b - 0.05),
            ],
            SchemeKind::Complementary => [
                shifted(self, 0.0, s, 4.0 * b / 5.0),
                shifted(self, 0.0, 5.0 * s / 7.0, b),
                shifted(self, 180.0, s, b),
                shifted(self, 180.0, 5.0 * s / 7.0, b),
            ],
        }
    }
}
