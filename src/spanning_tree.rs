use crate::{DistanceMatrix, MstEdge};
use num_traits::Float;

/// A minimum spanning tree over the nodes of a distance matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningTree<T> {
    n_nodes: usize,
    edges: Vec<MstEdge<T>>,
}

impl<T: Float> SpanningTree<T> {
    /// The tree edges, sorted by ascending distance.
    pub fn edges(&self) -> &[MstEdge<T>] {
        &self.edges
    }

    pub fn n_nodes(&self) -> usize {
        self.n_nodes
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn total_weight(&self) -> T {
        self.edges
            .iter()
            .map(|edge| edge.distance)
            .fold(T::zero(), std::ops::Add::add)
    }

    /// The largest distance the tree had to include to connect every node, or `None` for a
    /// tree without edges.
    pub fn max_weight(&self) -> Option<T> {
        self.edges.last().map(|edge| edge.distance)
    }

    /// N x N view of the tree, with each edge weight written at both (i, j) and (j, i).
    pub fn to_dense(&self) -> Vec<Vec<T>> {
        let mut dense = vec![vec![T::zero(); self.n_nodes]; self.n_nodes];
        for edge in &self.edges {
            dense[edge.left_node_id][edge.right_node_id] = edge.distance;
            dense[edge.right_node_id][edge.left_node_id] = edge.distance;
        }
        dense
    }
}

/// Computes the minimum spanning tree of the complete graph described by a distance matrix,
/// using the dense variant of Prim's algorithm. The diagonal is ignored and every other
/// entry is an edge. Matrices with fewer than two nodes give a tree without edges.
///
/// # Examples
/// ```
///use palette_graph::{min_spanning_tree, DistanceMatrix};
///
///let matrix = DistanceMatrix::from_rows(vec![
///    vec![0.0, 2.0, 5.0],
///    vec![2.0, 0.0, 4.0],
///    vec![5.0, 4.0, 0.0],
///]).unwrap();
///let tree = min_spanning_tree(&matrix);
///assert_eq!(2, tree.edges().len());
///assert_eq!(Some(4.0), tree.max_weight());
/// ```
pub fn min_spanning_tree<T: Float>(matrix: &DistanceMatrix<T>) -> SpanningTree<T> {
    let n_nodes = matrix.len();
    let mut in_tree = vec![false; n_nodes];
    let mut distances = vec![T::infinity(); n_nodes];
    let mut nearest_tree_node = vec![0; n_nodes];

    let mut mst = Vec::with_capacity(n_nodes.saturating_sub(1));
    let mut newest_node_id = 0;

    for _ in 1..n_nodes {
        in_tree[newest_node_id] = true;
        let mut current_min_dist = T::infinity();
        let mut right_node_id = None;

        for i in 0..n_nodes {
            if in_tree[i] {
                continue;
            }
            let dist = matrix.symmetric_weight(newest_node_id, i);
            if dist < distances[i] {
                distances[i] = dist;
                nearest_tree_node[i] = newest_node_id;
            }
            if right_node_id.is_none() || distances[i] < current_min_dist {
                right_node_id = Some(i);
                current_min_dist = distances[i];
            }
        }

        let Some(right_node_id) = right_node_id else {
            break;
        };
        mst.push(MstEdge {
            left_node_id: nearest_tree_node[right_node_id],
            right_node_id,
            distance: current_min_dist,
        });
        newest_node_id = right_node_id;
    }
    sort_mst_by_dist(&mut mst);
    SpanningTree { n_nodes, edges: mst }
}

fn sort_mst_by_dist<T: Float>(min_spanning_tree: &mut [MstEdge<T>]) {
    min_spanning_tree.sort_by(|a, b| a.distance.partial_cmp(&b.distance).expect("Invalid floats"));
}
