use crate::{Color, GraphError};
use num_traits::Float;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PaletteValidator<'a> {
    colors: &'a [Color],
}

impl<'a> PaletteValidator<'a> {
    pub(crate) fn new(colors: &'a [Color]) -> Self {
        Self { colors }
    }

    pub(crate) fn validate_palette(&self) -> Result<(), GraphError> {
        match self.colors.len() {
            0 => return Err(GraphError::EmptyPalette),
            1 => return Err(GraphError::DegenerateGraph(1)),
            _ => {}
        }
        let mut seen = HashSet::with_capacity(self.colors.len());
        for (n, color) in self.colors.iter().enumerate() {
            if !seen.insert(color) {
                return Err(GraphError::DuplicateColor(format!(
                    "{n}th color {color} appears earlier in the palette"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct MatrixValidator<'a, T> {
    rows: &'a [Vec<T>],
}

impl<'a, T: Float> MatrixValidator<'a, T> {
    pub(crate) fn new(rows: &'a [Vec<T>]) -> Self {
        Self { rows }
    }

    pub(crate) fn validate_distances(&self) -> Result<(), GraphError> {
        let n = self.rows.len();
        for (i, row) in self.rows.iter().enumerate() {
            if row.len() != n {
                return Err(GraphError::WrongDimension(format!(
                    "Matrix has {n} rows, but row {i} has {} columns",
                    row.len()
                )));
            }
            for (j, dist) in row.iter().enumerate() {
                if !dist.is_finite() || *dist < T::zero() {
                    return Err(GraphError::NonFiniteDistance(format!(
                        "entry ({i}, {j}) is not a finite, non-negative distance"
                    )));
                }
            }
        }
        if !self.is_symmetrical_matrix() {
            return Err(GraphError::WrongDimension(String::from(
                "Pre-calculated distances must be a symmetrical distance matrix",
            )));
        }
        Ok(())
    }

    fn is_symmetrical_matrix(&self) -> bool {
        let n = self.rows.len();
        for i in 0..n {
            for j in (i + 1)..n {
                if (self.rows[i][j] - self.rows[j][i]).abs() > T::epsilon() {
                    return false;
                }
            }
        }
        true
    }
}
