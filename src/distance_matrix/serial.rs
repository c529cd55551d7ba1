use super::{checked_distance, DistanceMatrix};
use crate::distance::{get_dist_func, DeltaE};
use crate::{to_lab, Color, LabCoordinate};
use num_traits::Float;

/// Builds the dense matrix of pairwise color differences for a palette. Each color is
/// converted to Lab once and only the upper triangle is evaluated, so the result is exactly
/// symmetrical with a zero diagonal. Empty and single color palettes give an empty and a
/// `[[0]]` matrix respectively.
///
/// # Examples
/// ```
///use palette_graph::{build_matrix, Color, DeltaE, DistanceMatrix};
///
///let colors = [Color::new(255, 0, 0), Color::new(0, 255, 0), Color::new(0, 0, 255)];
///let matrix: DistanceMatrix<f64> = build_matrix(&colors, DeltaE::Ciede2000);
///assert!(matrix.is_symmetric());
///assert_eq!(0.0, matrix.get(1, 1));
/// ```
pub fn build_matrix<T: Float>(colors: &[Color], metric: DeltaE) -> DistanceMatrix<T> {
    let labs: Vec<LabCoordinate> = colors.iter().map(|&color| to_lab(color)).collect();
    let dist_func = get_dist_func(&metric);
    let n = labs.len();

    let mut rows = vec![vec![T::zero(); n]; n];
    for i in 0..n {
        for j in (i + 1)..n {
            let dist = checked_distance(dist_func(labs[i], labs[j]));
            rows[i][j] = dist;
            rows[j][i] = dist;
        }
    }
    DistanceMatrix::from_trusted_rows(rows)
}
