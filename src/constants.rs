//! Defaults and fixed values shared by the color model and the hex codec.

/// Display name given to a color that was not explicitly named
pub const DEFAULT_NAME: &str = "New Color";

/// Value of every channel a constructor does not set
pub const DEFAULT_CHANNEL: f64 = 0.5;

/// Alpha of a color built without an explicit opacity
pub const OPAQUE: f64 = 1.0;

/// Rec. 601 luma weights for red, green and blue
pub const LUMA_RED: f64 = 0.299;
pub const LUMA_GREEN: f64 = 0.587;
pub const LUMA_BLUE: f64 = 0.114;

/// Hex string returned by [`crate::to_hex`] when the color-space transform fails
pub const FALLBACK_HEX: &str = "#000000";

/// Prefix marking a hex string whose components are Display P3
pub const P3_PREFIX: &str = "P3-";

/// Longest accepted hex payload (RRGGBBAA)
pub const MAX_HEX_DIGITS: usize = 8;

/// Hex payload lengths the decoder understands
pub const SUPPORTED_HEX_LENGTHS: [usize; 5] = [2, 3, 4, 6, 8];
