use thiserror::Error;

use crate::space::RgbColorSpace;

/// Why a hex string could not be decoded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HexError {
    #[error("hex string is empty")]
    Empty,

    #[error("hex string has {0} digits, at most 8 are allowed")]
    TooManyCharacters(usize),

    #[error("hex string contains non-hex character {0:?}")]
    InvalidCharacters(char),

    #[error("hex string has {0} digits, expected 2, 3, 4, 6 or 8")]
    UnsupportedLength(usize),
}

/// Why RGB components could not be moved into another color space.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("color components are not finite")]
    NonFinite,

    #[error("no transform from {from} to {to}")]
    Unsupported {
        from: RgbColorSpace,
        to: RgbColorSpace,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Hex error: {0}")]
    Hex(#[from] HexError),

    #[error("Color space conversion error: {0}")]
    Conversion(#[from] ConversionError),
}

pub type Result<T> = std::result::Result<T, Error>;
