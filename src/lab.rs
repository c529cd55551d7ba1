use crate::Color;

// D65 reference white, 2° observer, with Y normalised to 100
const REF_X: f64 = 95.047;
const REF_Y: f64 = 100.0;
const REF_Z: f64 = 108.883;

const SRGB_LINEAR_LIMIT: f64 = 0.04045;
const LAB_EPSILON: f64 = 0.008856;
const LAB_SLOPE: f64 = 7.787;

/// A CIE L*a*b* coordinate.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LabCoordinate {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl LabCoordinate {
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        LabCoordinate { l, a, b }
    }
}

impl From<Color> for LabCoordinate {
    fn from(color: Color) -> Self {
        to_lab(color)
    }
}

/// Converts a device RGB color to CIE Lab under the D65 illuminant, going through sRGB
/// linearisation and CIE XYZ.
///
/// # Examples
/// ```
///use palette_graph::{to_lab, Color};
///
///let white = to_lab(Color::new(255, 255, 255));
///assert!((white.l - 100.0).abs() < 1e-3);
///assert!(white.a.abs() < 0.05 && white.b.abs() < 0.05);
/// ```
pub fn to_lab(color: Color) -> LabCoordinate {
    let [r, g, b] = color.components().map(linearise);

    let x = r * 0.4124 + g * 0.3576 + b * 0.1805;
    let y = r * 0.2126 + g * 0.7152 + b * 0.0722;
    let z = r * 0.0193 + g * 0.1192 + b * 0.9505;

    let fx = lab_f(x / REF_X);
    let fy = lab_f(y / REF_Y);
    let fz = lab_f(z / REF_Z);

    LabCoordinate {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

/// Inverse sRGB companding, scaled to 0..=100.
fn linearise(component: u8) -> f64 {
    let v = component as f64 / 255.0;
    let linear = if v > SRGB_LINEAR_LIMIT {
        ((v + 0.055) / 1.055).powf(2.4)
    } else {
        v / 12.92
    };
    linear * 100.0
}

fn lab_f(t: f64) -> f64 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        LAB_SLOPE * t + 16.0 / 116.0
    }
}
