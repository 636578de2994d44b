//! Color math — direct conversions without external dependencies.
//! All functions use normalized f64 in 0.0–1.0.

use crate::constants::{LUMA_BLUE, LUMA_GREEN, LUMA_RED};

/// HSB/HSV → RGB. All values 0.0–1.0.
///
/// Sector-based: chroma `c = v·s`, intermediate `x`, match value `m = v − c`.
/// Hue is wrapped into [0, 1) first, so 1.0 and -0.25 name the same colors
/// as 0.0 and 0.75.
pub(crate) fn hsb_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    let c = v * s;
    let h6 = wrap_unit(h) * 6.0;
    let x = c * (1.0 - ((h6 % 2.0) - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match h6.trunc() as i64 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    (r + m, g + m, b + m)
}

/// RGB → HSB/HSV. All values 0.0–1.0, hue normalized into [0, 1).
pub(crate) fn rgb_to_hsb(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let v = max;
    if delta == 0.0 || max == 0.0 {
        return (0.0, 0.0, v);
    }
    let s = delta / max;

    let h = if max == r {
        ((g - b) / delta) % 6.0
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    (wrap_unit(h / 6.0), s, v)
}

/// RGB → CMYK. Returns (c, m, y, k).
///
/// Pure black (`k == 1`) has no defined ink mix; c, m and y degenerate to 0.
pub(crate) fn rgb_to_cmyk(r: f64, g: f64, b: f64) -> (f64, f64, f64, f64) {
    let k = 1.0 - r.max(g).max(b);
    if k < 1.0 {
        let d = 1.0 - k;
        ((1.0 - r - k) / d, (1.0 - g - k) / d, (1.0 - b - k) / d, k)
    } else {
        (0.0, 0.0, 0.0, k)
    }
}

/// CMYK → RGB.
pub(crate) fn cmyk_to_rgb(c: f64, m: f64, y: f64, k: f64) -> (f64, f64, f64) {
    ((1.0 - c) * (1.0 - k), (1.0 - m) * (1.0 - k), (1.0 - y) * (1.0 - k))
}

/// Rec. 601 luma of an RGB triple.
pub(crate) fn luma(r: f64, g: f64, b: f64) -> f64 {
    LUMA_RED * r + LUMA_GREEN * g + LUMA_BLUE * b
}

/// Wrap a hue into [0, 1). Handles negative offsets and values ≥ 1.
pub(crate) fn wrap_unit(h: f64) -> f64 {
    let wrapped = h.rem_euclid(1.0);
    // rem_euclid can round up to exactly 1.0 for tiny negative inputs
    if wrapped >= 1.0 {
        0.0
    } else {
        wrapped
    }
}

/// Round a normalized component to a byte, clamping out-of-range values.
pub(crate) fn to_byte(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}
