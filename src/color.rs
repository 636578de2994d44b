//! ColorModel — the public color record for swatch.
//!
//! A color is stored in all four formulations (RGB, HSB, CMYK, gray) at once.
//! One of them is active: it was written last and is the source of truth.
//! Every constructor and update re-derives the other three from it, so the
//! record is consistent whenever a caller can observe it. Alpha belongs to no
//! formulation and is never touched by synchronization.

use std::fmt;

use chrono::{DateTime, Utc};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{DEFAULT_CHANNEL, DEFAULT_NAME, OPAQUE};
use crate::error::HexError;
use crate::hex;
use crate::math;
use crate::space::RgbColorSpace;

/// The color model a caller last authored a color in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Formulation {
    Rgb,
    Hsb,
    Cmyk,
    Gray,
}

impl fmt::Display for Formulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Rgb => "RGB",
            Self::Hsb => "HSB",
            Self::Cmyk => "CMYK",
            Self::Gray => "Gray",
        })
    }
}

/// A named color with identity, held in four synchronized formulations.
///
/// Values are replaced, not mutated in place: every `update_*` method returns
/// a new, re-synchronized model and leaves `self` untouched.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ColorModel {
    id: Uuid,
    date_created: DateTime<Utc>,
    name: String,
    formulation: Formulation,
    rgb_color_space: RgbColorSpace,

    red: f64,
    green: f64,
    blue: f64,

    hue: f64,
    saturation: f64,
    brightness: f64,

    cyan: f64,
    magenta: f64,
    yellow: f64,
    key_black: f64,

    white: f64,

    alpha: f64,
}

impl Default for ColorModel {
    fn default() -> Self {
        Self::blank(Formulation::Rgb).synchronized()
    }
}

// ── Construction ────────────────────────────────────────────────────────

impl ColorModel {
    /// Fresh identity with every channel at its default, not yet synchronized.
    fn blank(formulation: Formulation) -> Self {
        Self {
            id: Uuid::new_v4(),
            date_created: Utc::now(),
            name: DEFAULT_NAME.to_string(),
            formulation,
            rgb_color_space: RgbColorSpace::default(),
            red: DEFAULT_CHANNEL,
            green: DEFAULT_CHANNEL,
            blue: DEFAULT_CHANNEL,
            hue: DEFAULT_CHANNEL,
            saturation: DEFAULT_CHANNEL,
            brightness: DEFAULT_CHANNEL,
            cyan: DEFAULT_CHANNEL,
            magenta: DEFAULT_CHANNEL,
            yellow: DEFAULT_CHANNEL,
            key_black: DEFAULT_CHANNEL,
            white: DEFAULT_CHANNEL,
            alpha: OPAQUE,
        }
    }

    /// Create from RGB (0.0–1.0) with full opacity.
    pub fn from_rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::from_rgba(red, green, blue, OPAQUE)
    }

    /// Create from RGBA (all 0.0–1.0).
    pub fn from_rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        let mut model = Self::blank(Formulation::Rgb);
        model.red = red;
        model.green = green;
        model.blue = blue;
        model.alpha = alpha;
        model.synchronized()
    }

    /// Create from HSB/HSV (0.0–1.0) with full opacity.
    pub fn from_hsb(hue: f64, saturation: f64, brightness: f64) -> Self {
        Self::from_hsba(hue, saturation, brightness, OPAQUE)
    }

    /// Create from HSB/HSV plus alpha (all 0.0–1.0).
    pub fn from_hsba(hue: f64, saturation: f64, brightness: f64, alpha: f64) -> Self {
        let mut model = Self::blank(Formulation::Hsb);
        model.hue = hue;
        model.saturation = saturation;
        model.brightness = brightness;
        model.alpha = alpha;
        model.synchronized()
    }

    /// Create from CMYK (0.0–1.0) with full opacity.
    pub fn from_cmyk(cyan: f64, magenta: f64, yellow: f64, key_black: f64) -> Self {
        let mut model = Self::blank(Formulation::Cmyk);
        model.cyan = cyan;
        model.magenta = magenta;
        model.yellow = yellow;
        model.key_black = key_black;
        model.synchronized()
    }

    /// Create a gray (0.0 black – 1.0 white) with full opacity.
    pub fn from_gray(white: f64) -> Self {
        Self::from_graya(white, OPAQUE)
    }

    /// Create a gray with alpha.
    pub fn from_graya(white: f64, alpha: f64) -> Self {
        let mut model = Self::blank(Formulation::Gray);
        model.white = white;
        model.alpha = alpha;
        model.synchronized()
    }

    /// Parse a hex string. See [`crate::parse_hex`] for the accepted grammar.
    pub fn from_hex(hex: &str) -> Result<Self, HexError> {
        hex::parse_hex(hex)
    }

    /// Copy every channel, name and tag of `other` under a fresh identity.
    pub fn copy_of(other: &ColorModel) -> Self {
        Self {
            id: Uuid::new_v4(),
            date_created: Utc::now(),
            ..other.clone()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Tag the RGB components with a color space. The stored numbers do not
    /// change; only hex formatting reads the tag.
    pub fn with_color_space(mut self, space: RgbColorSpace) -> Self {
        self.rgb_color_space = space;
        self
    }
}

// ── Accessors ───────────────────────────────────────────────────────────

impl ColorModel {
    pub fn id(&self) -> Uuid {
        self.id
    }
    pub fn date_created(&self) -> DateTime<Utc> {
        self.date_created
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    /// Formulation the color was last authored in.
    pub fn formulation(&self) -> Formulation {
        self.formulation
    }
    pub fn rgb_color_space(&self) -> RgbColorSpace {
        self.rgb_color_space
    }

    pub fn red(&self) -> f64 {
        self.red
    }
    pub fn green(&self) -> f64 {
        self.green
    }
    pub fn blue(&self) -> f64 {
        self.blue
    }
    pub fn hue(&self) -> f64 {
        self.hue
    }
    pub fn saturation(&self) -> f64 {
        self.saturation
    }
    pub fn brightness(&self) -> f64 {
        self.brightness
    }
    pub fn cyan(&self) -> f64 {
        self.cyan
    }
    pub fn magenta(&self) -> f64 {
        self.magenta
    }
    pub fn yellow(&self) -> f64 {
        self.yellow
    }
    pub fn key_black(&self) -> f64 {
        self.key_black
    }
    /// Gray level (luma when authored in another formulation).
    pub fn white(&self) -> f64 {
        self.white
    }
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// (red, green, blue)
    pub fn rgb(&self) -> (f64, f64, f64) {
        (self.red, self.green, self.blue)
    }
    /// (hue, saturation, brightness)
    pub fn hsb(&self) -> (f64, f64, f64) {
        (self.hue, self.saturation, self.brightness)
    }
    /// (cyan, magenta, yellow, key black)
    pub fn cmyk(&self) -> (f64, f64, f64, f64) {
        (self.cyan, self.magenta, self.yellow, self.key_black)
    }

    /// Convert to 0–255 RGB tuple, clamping out-of-range channels.
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        (
            math::to_byte(self.red),
            math::to_byte(self.green),
            math::to_byte(self.blue),
        )
    }

    /// Hex string in the model's own RGB color space.
    pub fn hex(&self) -> String {
        hex::to_hex(self, self.rgb_color_space)
    }

    /// Space the stored RGB numbers are expressed in. HSB and CMYK are
    /// always authored against sRGB.
    pub(crate) fn source_space(&self) -> RgbColorSpace {
        match self.formulation {
            Formulation::Rgb | Formulation::Gray => self.rgb_color_space,
            Formulation::Hsb | Formulation::Cmyk => RgbColorSpace::Srgb,
        }
    }
}

// ── Synchronization ─────────────────────────────────────────────────────

impl ColorModel {
    /// Re-derive the inactive formulations from the active one.
    ///
    /// Reads only the active formulation's channels, so stale values in the
    /// others never leak into the result. Alpha is left alone.
    pub fn synchronize(&mut self) {
        tracing::trace!(formulation = %self.formulation, id = %self.id, "synchronizing color");
        match self.formulation {
            Formulation::Rgb => self.sync_from_rgb(),
            Formulation::Hsb => self.sync_from_hsb(),
            Formulation::Cmyk => self.sync_from_cmyk(),
            Formulation::Gray => self.sync_from_gray(),
        }
    }

    /// Synchronized copy of `self`.
    pub fn synchronized(&self) -> Self {
        let mut model = self.clone();
        model.synchronize();
        model
    }

    fn sync_from_rgb(&mut self) {
        let (r, g, b) = self.rgb();
        (self.hue, self.saturation, self.brightness) = math::rgb_to_hsb(r, g, b);
        (self.cyan, self.magenta, self.yellow, self.key_black) = math::rgb_to_cmyk(r, g, b);
        self.white = math::luma(r, g, b);
    }

    fn sync_from_hsb(&mut self) {
        self.hue = math::wrap_unit(self.hue);
        let (r, g, b) = math::hsb_to_rgb(self.hue, self.saturation, self.brightness);
        (self.red, self.green, self.blue) = (r, g, b);
        (self.cyan, self.magenta, self.yellow, self.key_black) = math::rgb_to_cmyk(r, g, b);
        self.white = math::luma(r, g, b);
    }

    fn sync_from_cmyk(&mut self) {
        let (r, g, b) = math::cmyk_to_rgb(self.cyan, self.magenta, self.yellow, self.key_black);
        (self.red, self.green, self.blue) = (r, g, b);
        (self.hue, self.saturation, self.brightness) = math::rgb_to_hsb(r, g, b);
        self.white = math::luma(r, g, b);
    }

    fn sync_from_gray(&mut self) {
        let w = self.white;
        (self.red, self.green, self.blue) = (w, w, w);
        (self.hue, self.saturation, self.brightness) = (0.0, 0.0, w);
        (self.cyan, self.magenta, self.yellow, self.key_black) = (0.0, 0.0, 0.0, 1.0 - w);
    }
}

// ── Per-channel updates ─────────────────────────────────────────────────

impl ColorModel {
    /// Apply `edit` to a copy, switch it to `formulation` when given, and
    /// synchronize.
    fn edited(&self, formulation: Option<Formulation>, edit: impl FnOnce(&mut Self)) -> Self {
        let mut model = self.clone();
        edit(&mut model);
        if let Some(formulation) = formulation {
            model.formulation = formulation;
        }
        model.synchronize();
        model
    }

    pub fn update_red(&self, red: f64) -> Self {
        self.edited(Some(Formulation::Rgb), |m| m.red = red)
    }
    pub fn update_green(&self, green: f64) -> Self {
        self.edited(Some(Formulation::Rgb), |m| m.green = green)
    }
    pub fn update_blue(&self, blue: f64) -> Self {
        self.edited(Some(Formulation::Rgb), |m| m.blue = blue)
    }

    pub fn update_hue(&self, hue: f64) -> Self {
        self.edited(Some(Formulation::Hsb), |m| m.hue = hue)
    }
    pub fn update_saturation(&self, saturation: f64) -> Self {
        self.edited(Some(Formulation::Hsb), |m| m.saturation = saturation)
    }
    pub fn update_brightness(&self, brightness: f64) -> Self {
        self.edited(Some(Formulation::Hsb), |m| m.brightness = brightness)
    }

    pub fn update_cyan(&self, cyan: f64) -> Self {
        self.edited(Some(Formulation::Cmyk), |m| m.cyan = cyan)
    }
    pub fn update_magenta(&self, magenta: f64) -> Self {
        self.edited(Some(Formulation::Cmyk), |m| m.magenta = magenta)
    }
    pub fn update_yellow(&self, yellow: f64) -> Self {
        self.edited(Some(Formulation::Cmyk), |m| m.yellow = yellow)
    }
    pub fn update_key_black(&self, key_black: f64) -> Self {
        self.edited(Some(Formulation::Cmyk), |m| m.key_black = key_black)
    }

    pub fn update_white(&self, white: f64) -> Self {
        self.edited(Some(Formulation::Gray), |m| m.white = white)
    }

    /// Alpha does not belong to a formulation; the active one is kept.
    pub fn update_alpha(&self, alpha: f64) -> Self {
        self.edited(None, |m| m.alpha = alpha)
    }

    /// Take over the visible color and alpha of `other`, expressed in this
    /// model's active formulation. Identity, name and color space stay.
    pub fn update_from(&self, other: &ColorModel) -> Self {
        self.edited(None, |m| {
            match m.formulation {
                Formulation::Rgb => (m.red, m.green, m.blue) = other.rgb(),
                Formulation::Hsb => (m.hue, m.saturation, m.brightness) = other.hsb(),
                Formulation::Cmyk => {
                    (m.cyan, m.magenta, m.yellow, m.key_black) = other.cmyk();
                }
                Formulation::Gray => m.white = other.white,
            }
            m.alpha = other.alpha;
        })
    }

    /// Decode `hex` and take over its color like [`ColorModel::update_from`].
    pub fn update_hex(&self, hex: &str) -> Result<Self, HexError> {
        let decoded = hex::parse_hex(hex)?;
        Ok(self.update_from(&decoded))
    }
}

#[cfg(test)]
impl ColorModel {
    pub(crate) fn created_at(mut self, date: DateTime<Utc>) -> Self {
        self.date_created = date;
        self
    }
}
