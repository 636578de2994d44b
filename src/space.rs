//! RGB color spaces and the transform that moves components between them.
//!
//! The color model never does gamma or primaries math itself; it asks a
//! [`SpaceTransform`] to re-express device-independent RGB in a target space
//! when formatting hex strings. [`StandardTransform`] covers the three spaces
//! using the `palette` crate's encodings.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use palette::encoding::p3::DisplayP3;
use palette::rgb::Rgb;
use palette::convert::FromColorUnclamped;
use palette::{LinSrgb, Srgb};

use crate::error::ConversionError;

/// RGB color space a color's components are expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RgbColorSpace {
    #[default]
    Srgb,
    SrgbLinear,
    DisplayP3,
}

impl RgbColorSpace {
    pub const ALL: [RgbColorSpace; 3] = [Self::Srgb, Self::SrgbLinear, Self::DisplayP3];
}

impl fmt::Display for RgbColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Srgb => "sRGB",
            Self::SrgbLinear => "sRGB Linear",
            Self::DisplayP3 => "Display P3",
        })
    }
}

/// Re-expresses normalized RGB components from one space in another.
pub trait SpaceTransform {
    fn convert(
        &self,
        rgb: [f64; 3],
        from: RgbColorSpace,
        to: RgbColorSpace,
    ) -> Result<[f64; 3], ConversionError>;
}

/// sRGB, linear sRGB and Display P3 conversions backed by `palette`.
///
/// Everything passes through linear sRGB. Out-of-gamut results are not
/// clipped here.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardTransform;

type DisplayP3Rgb = Rgb<DisplayP3, f64>;

impl StandardTransform {
    /// Components in `space` → linear sRGB.
    fn to_linear_srgb([r, g, b]: [f64; 3], space: RgbColorSpace) -> LinSrgb<f64> {
        match space {
            RgbColorSpace::Srgb => Srgb::new(r, g, b).into_linear(),
            RgbColorSpace::SrgbLinear => LinSrgb::new(r, g, b),
            RgbColorSpace::DisplayP3 => {
                LinSrgb::from_color_unclamped(DisplayP3Rgb::new(r, g, b))
            }
        }
    }

    /// Linear sRGB → components in `space`.
    fn from_linear_srgb(linear: LinSrgb<f64>, space: RgbColorSpace) -> [f64; 3] {
        let (r, g, b) = match space {
            RgbColorSpace::Srgb => Srgb::<f64>::from_linear(linear).into_components(),
            RgbColorSpace::SrgbLinear => linear.into_components(),
            RgbColorSpace::DisplayP3 => {
                DisplayP3Rgb::from_color_unclamped(linear).into_components()
            }
        };
        [r, g, b]
    }
}

impl SpaceTransform for StandardTransform {
    fn convert(
        &self,
        rgb: [f64; 3],
        from: RgbColorSpace,
        to: RgbColorSpace,
    ) -> Result<[f64; 3], ConversionError> {
        if rgb.iter().any(|c| !c.is_finite()) {
            return Err(ConversionError::NonFinite);
        }
        if from == to {
            return Ok(rgb);
        }
        let out = Self::from_linear_srgb(Self::to_linear_srgb(rgb, from), to);
        if out.iter().any(|c| !c.is_finite()) {
            return Err(ConversionError::NonFinite);
        }
        Ok(out)
    }
}
