use crate::LabCoordinate;

// 25^7, used by both the G correction and the rotation term
const POW25_7: f64 = 6_103_515_625.0;

/// Possible color difference formulas that can be used when calculating the perceptual
/// distance between two colors of a palette.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum DeltaE {
    /// CIEDE2000 with unit weighting factors (k_L = k_C = k_H = 1).
    #[default]
    Ciede2000,
    /// CIE76, the Euclidean distance in Lab space. Cheaper, but less perceptually uniform.
    Cie76,
}

impl DeltaE {
    pub fn calc_dist(&self, a: LabCoordinate, b: LabCoordinate) -> f64 {
        get_dist_func(self)(a, b)
    }
}

pub(crate) fn get_dist_func(metric: &DeltaE) -> fn(LabCoordinate, LabCoordinate) -> f64 {
    match metric {
        DeltaE::Ciede2000 => ciede2000,
        DeltaE::Cie76 => cie76,
    }
}

/// The CIEDE2000 color difference between two Lab coordinates.
///
/// The result is exactly symmetric in its arguments and zero for identical inputs.
///
/// # Examples
/// ```
///use palette_graph::{ciede2000, LabCoordinate};
///
///let a = LabCoordinate::new(50.0, 2.5, 0.0);
///let b = LabCoordinate::new(58.0, 24.0, 15.0);
///assert!((ciede2000(a, b) - 19.4535).abs() < 1e-4);
///assert_eq!(ciede2000(a, b), ciede2000(b, a));
/// ```
pub fn ciede2000(lab1: LabCoordinate, lab2: LabCoordinate) -> f64 {
    let c1 = lab1.a.hypot(lab1.b);
    let c2 = lab2.a.hypot(lab2.b);
    let c_bar7 = ((c1 + c2) / 2.0).powi(7);
    let g = 0.5 * (1.0 - (c_bar7 / (c_bar7 + POW25_7)).sqrt());

    let a1_prime = (1.0 + g) * lab1.a;
    let a2_prime = (1.0 + g) * lab2.a;
    let c1_prime = a1_prime.hypot(lab1.b);
    let c2_prime = a2_prime.hypot(lab2.b);
    let h1_prime = hue_angle(lab1.b, a1_prime);
    let h2_prime = hue_angle(lab2.b, a2_prime);
    let chroma_product = c1_prime * c2_prime;

    let delta_l = lab2.l - lab1.l;
    let delta_c = c2_prime - c1_prime;
    let delta_h_prime = if chroma_product == 0.0 {
        0.0
    } else {
        let diff = h2_prime - h1_prime;
        if diff > 180.0 {
            diff - 360.0
        } else if diff < -180.0 {
            diff + 360.0
        } else {
            diff
        }
    };
    let delta_h = 2.0 * chroma_product.sqrt() * (delta_h_prime.to_radians() / 2.0).sin();

    let l_bar_prime = (lab1.l + lab2.l) / 2.0;
    let c_bar_prime = (c1_prime + c2_prime) / 2.0;
    let h_bar_prime = mean_hue(h1_prime, h2_prime, chroma_product);

    let t = 1.0 - 0.17 * (h_bar_prime - 30.0).to_radians().cos()
        + 0.24 * (2.0 * h_bar_prime).to_radians().cos()
        + 0.32 * (3.0 * h_bar_prime + 6.0).to_radians().cos()
        - 0.20 * (4.0 * h_bar_prime - 63.0).to_radians().cos();

    // Only non negligible for blue hues, centred on 275°
    let delta_theta = 30.0 * (-((h_bar_prime - 275.0) / 25.0).powi(2)).exp();
    let c_bar_prime7 = c_bar_prime.powi(7);
    let r_c = 2.0 * (c_bar_prime7 / (c_bar_prime7 + POW25_7)).sqrt();
    let r_t = -(2.0 * delta_theta).to_radians().sin() * r_c;

    let l_offset = (l_bar_prime - 50.0).powi(2);
    let s_l = 1.0 + 0.015 * l_offset / (20.0 + l_offset).sqrt();
    let s_c = 1.0 + 0.045 * c_bar_prime;
    let s_h = 1.0 + 0.015 * c_bar_prime * t;

    let lightness = delta_l / s_l;
    let chroma = delta_c / s_c;
    let hue = delta_h / s_h;

    (lightness * lightness + chroma * chroma + hue * hue + r_t * chroma * hue).sqrt()
}

/// The CIE76 color difference, i.e. the Euclidean distance in Lab space.
pub fn cie76(lab1: LabCoordinate, lab2: LabCoordinate) -> f64 {
    let dl = lab1.l - lab2.l;
    let da = lab1.a - lab2.a;
    let db = lab1.b - lab2.b;
    (dl * dl + da * da + db * db).sqrt()
}

/// Hue angle in degrees in [0, 360). Achromatic coordinates get a hue of 0.
fn hue_angle(b: f64, a_prime: f64) -> f64 {
    if b == 0.0 && a_prime == 0.0 {
        return 0.0;
    }
    let hue = b.atan2(a_prime).to_degrees();
    if hue < 0.0 {
        hue + 360.0
    } else {
        hue
    }
}

fn mean_hue(h1: f64, h2: f64, chroma_product: f64) -> f64 {
    let sum = h1 + h2;
    if chroma_product == 0.0 {
        sum
    } else if (h1 - h2).abs() <= 180.0 {
        sum / 2.0
    } else if sum < 360.0 {
        (sum + 360.0) / 2.0
    } else {
        (sum - 360.0) / 2.0
    }
}
