/// An edge of a minimum spanning tree, between two palette indices.
#[derive(Clone, Debug, PartialEq)]
pub struct MstEdge<T> {
    pub left_node_id: usize,
    pub right_node_id: usize,
    pub distance: T,
}
