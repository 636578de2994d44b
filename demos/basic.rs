//! Standalone demo: decodes a few hex strings and prints every formulation.
//!
//! Run with `RUST_LOG=swatch=trace` to see synchronization events.

use swatch::{ColorModel, Palette, RgbColorSpace, SchemeKind};
use tracing_subscriber::EnvFilter;

fn describe(color: &ColorModel) {
    let (r, g, b) = color.rgb();
    let (h, s, v) = color.hsb();
    let (c, m, y, k) = color.cmyk();
    println!(
        "{:<12} {:<10} rgb({r:.3}, {g:.3}, {b:.3}) hsb({:.0}°, {s:.3}, {v:.3}) cmyk({c:.3}, {m:.3}, {y:.3}, {k:.3}) gray {:.3} alpha {:.3}",
        color.name(),
        color.hex(),
        h * 360.0,
        color.white(),
        color.alpha(),
    );
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut palette = Palette::default();
    for input in ["#3B82F6", "f00", "4f", "#00FF0066", "0000F"] {
        match palette.add_hex(input) {
            Ok(id) => {
                if let Some(color) = palette.get(id) {
                    describe(color);
                }
            }
            Err(err) => println!("{input:<12} rejected: {err}"),
        }
    }

    let base = ColorModel::from_hsb(0.6, 0.7, 0.9).with_name("Base");
    println!("\n{} in Display P3: {}", base.name(), swatch::to_hex(&base, RgbColorSpace::DisplayP3));
    for kind in SchemeKind::ALL {
        println!("\n{kind}");
        for color in base.scheme(kind) {
            describe(&color);
        }
    }
}
