use crate::union_find::UnionFind;
use crate::{DistanceMatrix, GraphError};
use num_traits::Float;

/// A distance matrix filtered down to the pairs within a threshold. Entry (i, j) holds the
/// distance between colors i and j if they are linked and zero otherwise. Always exactly
/// symmetrical with a zero diagonal.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredAdjacency<T> {
    rows: Vec<Vec<T>>,
}

impl<T: Float> FilteredAdjacency<T> {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Vec<T>] {
        &self.rows
    }

    pub fn get(&self, i: usize, j: usize) -> T {
        self.rows[i][j]
    }

    pub fn has_edge(&self, i: usize, j: usize) -> bool {
        self.rows[i][j] != T::zero()
    }

    /// Every edge once, as `(i, j, distance)` with `i < j`.
    pub fn edges(&self) -> Vec<(usize, usize, T)> {
        let n = self.len();
        (0..n)
            .flat_map(|i| ((i + 1)..n).map(move |j| (i, j)))
            .filter(|&(i, j)| self.has_edge(i, j))
            .map(|(i, j)| (i, j, self.rows[i][j]))
            .collect()
    }

    pub fn edge_count(&self) -> usize {
        self.edges().len()
    }

    pub fn degree(&self, i: usize) -> usize {
        (0..self.len()).filter(|&j| self.has_edge(i, j)).count()
    }

    /// True if every node can be reached from every other one through the edges.
    pub fn is_connected(&self) -> bool {
        let mut union_find = UnionFind::new(self.len());
        for (i, j, _) in self.edges() {
            union_find.union(i, j);
        }
        union_find.n_components() <= 1
    }

    /// The entries rounded to a number of decimal places, for display. Rounding never
    /// removes an edge: a linked pair whose distance rounds to zero keeps its exact value.
    pub fn rounded(&self, decimals: i32) -> Vec<Vec<T>> {
        let scale = T::from(10.0f64.powi(decimals)).expect("Couldn't convert scale to T");
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&dist| {
                        let rounded = (dist * scale).round() / scale;
                        if rounded == T::zero() {
                            dist
                        } else {
                            rounded
                        }
                    })
                    .collect()
            })
            .collect()
    }
}

/// Prunes a distance matrix to the pairs whose distance is at most `threshold`.
///
/// Any pair whose two entries differ is first reset to the larger of them, so the filtered
/// matrix is exactly symmetrical even if the input is not. The diagonal is always zero.
///
/// # Returns
/// * The filtered adjacency, or `GraphError::InvalidThreshold` for a negative or NaN
///   threshold.
///
/// # Examples
/// ```
///use palette_graph::{prune, DistanceMatrix};
///
///let matrix = DistanceMatrix::from_rows(vec![
///    vec![0.0, 2.0, 5.0],
///    vec![2.0, 0.0, 4.0],
///    vec![5.0, 4.0, 0.0],
///]).unwrap();
///let adjacency = prune(&matrix, 4.0).unwrap();
///assert_eq!(vec![(0, 1, 2.0), (1, 2, 4.0)], adjacency.edges());
///assert!(adjacency.is_connected());
/// ```
pub fn prune<T: Float>(
    matrix: &DistanceMatrix<T>,
    threshold: T,
) -> Result<FilteredAdjacency<T>, GraphError> {
    if threshold.is_nan() || threshold < T::zero() {
        return Err(GraphError::InvalidThreshold(String::from(
            "Pruning threshold must be a non-negative distance",
        )));
    }
    let mut rows = matrix.rows().to_vec();
    symmetrise(&mut rows);

    let n = rows.len();
    for (i, row) in rows.iter_mut().enumerate() {
        for (j, dist) in row.iter_mut().enumerate() {
            if i == j || *dist > threshold {
                *dist = T::zero();
            }
        }
    }
    debug_assert!((0..n).all(|i| (0..n).all(|j| rows[i][j] == rows[j][i])));
    Ok(FilteredAdjacency { rows })
}

fn symmetrise<T: Float>(rows: &mut [Vec<T>]) {
    let n = rows.len();
    for i in 0..n {
        for j in (i + 1)..n {
            if rows[i][j] != rows[j][i] {
                let dist = rows[i][j].max(rows[j][i]);
                rows[i][j] = dist;
                rows[j][i] = dist;
            }
        }
    }
}
