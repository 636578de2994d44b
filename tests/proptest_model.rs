//! Property-based tests for formulation synchronization
//!
//! Round trips between formulations, fixed points of synchronization and the
//! hue range.

use proptest::prelude::*;
use swatch::{ColorModel, RgbColorSpace};

const EPS: f64 = 1e-9;

fn component() -> impl Strategy<Value = f64> {
    prop_oneof![0.0..=1.0f64, Just(0.0), Just(1.0), Just(0.5)]
}

/// Hues as callers may write them: whole turns, negatives and beyond one.
fn hue() -> impl Strategy<Value = f64> {
    prop_oneof![component(), Just(-0.25), -2.0..3.0f64]
}

prop_compose! {
    fn any_model()(
        kind in 0..4usize,
        h in hue(),
        a in component(),
        b in component(),
        c in component(),
        d in component(),
        alpha in component(),
    ) -> ColorModel {
        match kind {
            0 => ColorModel::from_rgba(a, b, c, alpha),
            1 => ColorModel::from_hsba(h, b, c, alpha),
            2 => ColorModel::from_cmyk(a, b, c, d).update_alpha(alpha),
            _ => ColorModel::from_graya(a, alpha),
        }
    }
}

fn assert_close(a: f64, b: f64, what: &str) -> Result<(), TestCaseError> {
    prop_assert!((a - b).abs() < EPS, "{what}: {a} vs {b}");
    Ok(())
}

proptest! {
    #[test]
    fn rgb_hsb_rgb_round_trip(r in component(), g in component(), b in component()) {
        let rgb = ColorModel::from_rgb(r, g, b);
        let (h, s, v) = rgb.hsb();
        let back = ColorModel::from_hsb(h, s, v);
        assert_close(back.red(), r, "red")?;
        assert_close(back.green(), g, "green")?;
        assert_close(back.blue(), b, "blue")?;
    }

    #[test]
    fn rgb_cmyk_rgb_round_trip(r in component(), g in component(), b in component()) {
        let rgb = ColorModel::from_rgb(r, g, b);
        let (c, m, y, k) = rgb.cmyk();
        let back = ColorModel::from_cmyk(c, m, y, k);
        assert_close(back.red(), r, "red")?;
        assert_close(back.green(), g, "green")?;
        assert_close(back.blue(), b, "blue")?;
    }

    #[test]
    fn synchronize_is_a_fixed_point(model in any_model()) {
        let again = model.synchronized();
        prop_assert_eq!(again, model);
    }

    #[test]
    fn hue_stays_in_unit_range(model in any_model()) {
        prop_assert!((0.0..1.0).contains(&model.hue()), "hue {}", model.hue());
        let rgb = ColorModel::from_rgb(model.red(), model.green(), model.blue());
        prop_assert!((0.0..1.0).contains(&rgb.hue()), "hue {}", rgb.hue());
    }

    #[test]
    fn formulations_agree_on_rgb(model in any_model()) {
        let (r, g, b) = model.rgb();
        let (h, s, v) = model.hsb();
        let from_hsb = ColorModel::from_hsb(h, s, v);
        assert_close(from_hsb.red(), r, "hsb red")?;
        assert_close(from_hsb.green(), g, "hsb green")?;
        assert_close(from_hsb.blue(), b, "hsb blue")?;

        if model.key_black() < 1.0 {
            let (c, m, y, k) = model.cmyk();
            let from_cmyk = ColorModel::from_cmyk(c, m, y, k);
            assert_close(from_cmyk.red(), r, "cmyk red")?;
            assert_close(from_cmyk.green(), g, "cmyk green")?;
            assert_close(from_cmyk.blue(), b, "cmyk blue")?;
        }

        assert_close(model.white(), 0.299 * r + 0.587 * g + 0.114 * b, "luma")?;
    }

    #[test]
    fn alpha_is_never_synchronized(model in any_model(), value in component()) {
        let alpha = model.alpha();
        prop_assert_eq!(model.update_red(value).alpha(), alpha);
        prop_assert_eq!(model.update_hue(value).alpha(), alpha);
        prop_assert_eq!(model.update_key_black(value).alpha(), alpha);
        prop_assert_eq!(model.update_white(value).alpha(), alpha);
    }

    #[test]
    fn full_key_black_is_black(c in component(), m in component(), y in component()) {
        let model = ColorModel::from_cmyk(c, m, y, 1.0);
        prop_assert_eq!(model.rgb(), (0.0, 0.0, 0.0));
    }

    #[test]
    fn srgb_hex_round_trips_bytes(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let hex = format!("#{r:02X}{g:02X}{b:02X}");
        let model = swatch::parse_hex(&hex).unwrap();
        prop_assert_eq!(model.to_rgb8(), (r, g, b));
        prop_assert_eq!(swatch::to_hex(&model, RgbColorSpace::Srgb), hex);
    }
}
