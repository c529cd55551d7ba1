use crate::{GraphError, SpanningTree};
use num_traits::Float;

/// How the pruning threshold is derived from a palette's minimum spanning tree.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub enum ThresholdPolicy {
    /// The largest edge weight of the minimum spanning tree.
    #[default]
    MstMaximum,
    /// The largest edge weight of the minimum spanning tree, but never less than the floor.
    Floor(f64),
    /// A caller supplied threshold, ignoring the tree's weights.
    Fixed(f64),
}

/// Selects the threshold for pruning the distance matrix a spanning tree was computed from.
///
/// # Returns
/// * The threshold, or `GraphError::DegenerateGraph` if the tree has no edges (fewer than two
///   colors), and `GraphError::InvalidThreshold` if the policy holds a negative or non-finite
///   value.
///
/// # Examples
/// ```
///use palette_graph::{min_spanning_tree, select_threshold, DistanceMatrix, ThresholdPolicy};
///
///let matrix = DistanceMatrix::from_rows(vec![
///    vec![0.0, 2.0, 5.0],
///    vec![2.0, 0.0, 4.0],
///    vec![5.0, 4.0, 0.0],
///]).unwrap();
///let tree = min_spanning_tree(&matrix);
///assert_eq!(4.0, select_threshold(&tree, ThresholdPolicy::MstMaximum).unwrap());
///assert_eq!(20.0, select_threshold(&tree, ThresholdPolicy::Floor(20.0)).unwrap());
/// ```
pub fn select_threshold<T: Float>(
    tree: &SpanningTree<T>,
    policy: ThresholdPolicy,
) -> Result<T, GraphError> {
    let mst_maximum = tree
        .max_weight()
        .ok_or(GraphError::DegenerateGraph(tree.n_nodes()))?;
    match policy {
        ThresholdPolicy::MstMaximum => Ok(mst_maximum),
        ThresholdPolicy::Floor(floor) => Ok(mst_maximum.max(convert_threshold(floor)?)),
        ThresholdPolicy::Fixed(threshold) => convert_threshold(threshold),
    }
}

pub(crate) fn convert_threshold<T: Float>(threshold: f64) -> Result<T, GraphError> {
    if !threshold.is_finite() || threshold < 0.0 {
        return Err(GraphError::InvalidThreshold(format!(
            "{threshold} is not a finite, non-negative distance"
        )));
    }
    T::from(threshold).ok_or_else(|| {
        GraphError::InvalidThreshold(format!("{threshold} cannot be represented"))
    })
}
