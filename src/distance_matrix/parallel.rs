#![cfg(feature = "parallel")]
use super::{checked_distance, DistanceMatrix};
use crate::distance::{get_dist_func, DeltaE};
use crate::{to_lab, Color, LabCoordinate};
use num_traits::Float;
use rayon::prelude::*;

/// Parallel version of [`build_matrix`](crate::build_matrix). Rows of the upper triangle are
/// computed on the rayon thread pool; the result is identical to the serial build.
pub fn build_matrix_par<T: Float + Send + Sync>(
    colors: &[Color],
    metric: DeltaE,
) -> DistanceMatrix<T> {
    let labs: Vec<LabCoordinate> = colors.par_iter().map(|&color| to_lab(color)).collect();
    let dist_func = get_dist_func(&metric);
    let n = labs.len();

    let upper: Vec<Vec<T>> = (0..n)
        .into_par_iter()
        .map(|i| {
            ((i + 1)..n)
                .map(|j| checked_distance(dist_func(labs[i], labs[j])))
                .collect()
        })
        .collect();

    let mut rows = vec![vec![T::zero(); n]; n];
    for (i, distances) in upper.into_iter().enumerate() {
        for (offset, dist) in distances.into_iter().enumerate() {
            let j = i + 1 + offset;
            rows[i][j] = dist;
            rows[j][i] = dist;
        }
    }
    DistanceMatrix::from_trusted_rows(rows)
}
