//! # swatch
//!
//! The color model behind a color picker, without the picker.
//!
//! [`ColorModel`] holds one color in four formulations (RGB, HSB, CMYK and
//! gray) plus alpha. Whichever formulation a caller edits last becomes the
//! source of truth and the others are re-derived immediately, so sliders for
//! every formulation can read from the same value. Colors round-trip through
//! hex strings, and can be collected in a [`Palette`] or expanded into
//! harmony schemes.
//!
//! ## Usage
//!
//! ```rust
//! use swatch::{ColorModel, Formulation, RgbColorSpace};
//!
//! let color = ColorModel::from_hex("#3B82F6").unwrap();
//! let lighter = color.update_brightness(1.0);
//! assert_eq!(lighter.formulation(), Formulation::Hsb);
//!
//! let translucent = lighter.update_alpha(0.5);
//! assert_eq!(translucent.hex().len(), 9);
//! assert!(swatch::to_hex(&translucent, RgbColorSpace::DisplayP3).starts_with("P3-#"));
//! ```

mod color;
mod constants;
mod error;
mod hex;
mod math;
mod palette;
mod scheme;
mod space;

pub use color::{ColorModel, Formulation};
pub use error::{ConversionError, Error, HexError, Result};
pub use hex::{parse_hex, to_hex, to_hex_with, try_to_hex, try_to_hex_with};
pub use palette::Palette;
pub use scheme::SchemeKind;
pub use space::{RgbColorSpace, SpaceTransform, StandardTransform};

pub use constants::{DEFAULT_NAME, FALLBACK_HEX};
