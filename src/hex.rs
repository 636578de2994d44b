//! Hex codec for [`ColorModel`].
//!
//! Decoding accepts an optional `#` or `0x` prefix and five payload lengths:
//!
//! | digits | meaning                         |
//! |--------|---------------------------------|
//! | 2      | gray                            |
//! | 3      | RGB shorthand, each digit doubled |
//! | 4      | gray + alpha                    |
//! | 6      | RRGGBB                          |
//! | 8      | RRGGBBAA                        |
//!
//! Encoding produces uppercase `#RRGGBB`, or `#RRGGBBAA` when the color is not
//! fully opaque, after moving the color into the requested RGB space. Display
//! P3 output is prefixed with `P3-`.

use crate::color::ColorModel;
use crate::constants::{FALLBACK_HEX, MAX_HEX_DIGITS, OPAQUE, P3_PREFIX, SUPPORTED_HEX_LENGTHS};
use crate::error::{ConversionError, HexError};
use crate::math::to_byte;
use crate::space::{RgbColorSpace, SpaceTransform, StandardTransform};

/// Strip surrounding whitespace and an optional `#` or `0x`/`0X` prefix.
fn strip_prefixes(input: &str) -> &str {
    let s = input.trim();
    let s = s.strip_prefix('#').unwrap_or(s);
    let s = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    s.trim()
}

/// Parse a hex string into a synchronized [`ColorModel`].
///
/// Two- and four-digit input is authored as gray, everything else as RGB.
///
/// ```
/// use swatch::{parse_hex, Formulation, HexError};
///
/// let red = parse_hex("f00").unwrap();
/// assert_eq!(red.rgb(), (1.0, 0.0, 0.0));
///
/// let gray = parse_hex("#4f").unwrap();
/// assert_eq!(gray.formulation(), Formulation::Gray);
///
/// assert_eq!(parse_hex("0000F").unwrap_err(), HexError::UnsupportedLength(5));
/// ```
pub fn parse_hex(input: &str) -> Result<ColorModel, HexError> {
    let digits = strip_prefixes(input);
    let count = digits.chars().count();

    if count == 0 {
        return Err(HexError::Empty);
    }
    if count > MAX_HEX_DIGITS {
        return Err(HexError::TooManyCharacters(count));
    }
    let nibbles = digits
        .chars()
        .map(|c| {
            c.to_digit(16)
                .map(|d| d as u8)
                .ok_or(HexError::InvalidCharacters(c))
        })
        .collect::<Result<Vec<u8>, HexError>>()?;
    if !SUPPORTED_HEX_LENGTHS.contains(&count) {
        return Err(HexError::UnsupportedLength(count));
    }

    let nibbles = if count == 3 {
        nibbles.iter().flat_map(|&n| [n, n]).collect()
    } else {
        nibbles
    };
    let channels: Vec<f64> = nibbles
        .chunks_exact(2)
        .map(|pair| f64::from((pair[0] << 4) | pair[1]) / 255.0)
        .collect();

    let model = match channels.as_slice() {
        [w] => ColorModel::from_gray(*w),
        [w, a] => ColorModel::from_graya(*w, *a),
        [r, g, b] => ColorModel::from_rgb(*r, *g, *b),
        [r, g, b, a] => ColorModel::from_rgba(*r, *g, *b, *a),
        _ => return Err(HexError::UnsupportedLength(count)),
    };
    Ok(model)
}

/// Format the color as hex in `space`, or fail if the transform does.
pub fn try_to_hex(model: &ColorModel, space: RgbColorSpace) -> Result<String, ConversionError> {
    try_to_hex_with(model, space, &StandardTransform)
}

/// [`try_to_hex`] with a caller-provided color-space transform.
pub fn try_to_hex_with<T: SpaceTransform + ?Sized>(
    model: &ColorModel,
    space: RgbColorSpace,
    transform: &T,
) -> Result<String, ConversionError> {
    let (r, g, b) = model.rgb();
    let [r, g, b] = transform.convert([r, g, b], model.source_space(), space)?;

    let alpha = model.alpha();
    if !alpha.is_finite() {
        return Err(ConversionError::NonFinite);
    }
    let prefix = if space == RgbColorSpace::DisplayP3 { P3_PREFIX } else { "" };
    let (r, g, b) = (to_byte(r), to_byte(g), to_byte(b));
    Ok(if alpha != OPAQUE {
        format!("{prefix}#{r:02X}{g:02X}{b:02X}{:02X}", to_byte(alpha))
    } else {
        format!("{prefix}#{r:02X}{g:02X}{b:02X}")
    })
}

/// Format the color as hex in `space` for display.
///
/// Never fails: a transform error is logged and `"#000000"` is returned.
/// Use [`try_to_hex`] when the failure matters.
pub fn to_hex(model: &ColorModel, space: RgbColorSpace) -> String {
    to_hex_with(model, space, &StandardTransform)
}

/// [`to_hex`] with a caller-provided color-space transform.
pub fn to_hex_with<T: SpaceTransform + ?Sized>(
    model: &ColorModel,
    space: RgbColorSpace,
    transform: &T,
) -> String {
    match try_to_hex_with(model, space, transform) {
        Ok(hex) => hex,
        Err(err) => {
            tracing::warn!(id = %model.id(), %space, error = %err, "hex encoding failed, using fallback");
            FALLBACK_HEX.to_string()
        }
    }
}
