use crate::validation::MatrixValidator;
use crate::GraphError;
use num_traits::Float;

#[cfg(feature = "parallel")]
pub(super) mod parallel;
pub(super) mod serial;

/// A dense matrix of pairwise distances between the colors of a palette. Row and column
/// indices are palette indices.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix<T> {
    rows: Vec<Vec<T>>,
}

impl<T: Float> DistanceMatrix<T> {
    /// Wraps pre-calculated distances. The rows must form a square matrix of finite,
    /// non-negative values that is symmetrical up to floating point error.
    ///
    /// # Examples
    /// ```
    ///use palette_graph::DistanceMatrix;
    ///
    ///let matrix = DistanceMatrix::from_rows(vec![
    ///    vec![0.0, 2.0, 5.0],
    ///    vec![2.0, 0.0, 4.0],
    ///    vec![5.0, 4.0, 0.0],
    ///]).unwrap();
    ///assert_eq!(3, matrix.len());
    /// ```
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, GraphError> {
        MatrixValidator::new(&rows).validate_distances()?;
        Ok(DistanceMatrix { rows })
    }

    pub(crate) fn from_trusted_rows(rows: Vec<Vec<T>>) -> Self {
        DistanceMatrix { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, i: usize, j: usize) -> T {
        self.rows[i][j]
    }

    pub fn rows(&self) -> &[Vec<T>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<T>> {
        self.rows
    }

    /// True if every entry equals its mirror exactly.
    pub fn is_symmetric(&self) -> bool {
        let n = self.len();
        (0..n).all(|i| ((i + 1)..n).all(|j| self.rows[i][j] == self.rows[j][i]))
    }

    /// The undirected weight of the pair, taking the larger entry if the matrix is not
    /// exactly symmetrical.
    pub(crate) fn symmetric_weight(&self, i: usize, j: usize) -> T {
        self.rows[i][j].max(self.rows[j][i])
    }
}

/// Converts a color difference into the matrix's float type. A NaN or negative distance
/// from valid colors is a bug in the metric, not an input problem.
pub(crate) fn checked_distance<T: Float>(dist: f64) -> T {
    assert!(
        dist >= 0.0,
        "color difference must be a non-negative number, got {dist}"
    );
    T::from(dist).expect("Couldn't convert f64 distance to T")
}
