//! Perceptual similarity graphs over RGB color palettes, in Rust.
//!
//! Given a palette, this crate:
//!  1. converts every color to CIE Lab and computes the CIEDE2000 difference between every pair
//!     of colors, giving a dense, symmetrical distance matrix;
//!  2. finds the minimum spanning tree of that matrix, and takes its largest edge as the
//!     threshold: the smallest cut-off at which the whole palette is still connected; and
//!  3. prunes the distance matrix to the pairs within the threshold, giving a sparse graph of
//!     perceptually close colors, ready to be drawn or fed to a downstream clustering step.
//!
//! Every step is also available on its own: [`to_lab`], [`ciede2000`], [`build_matrix`],
//! [`min_spanning_tree`], [`select_threshold`] and [`prune`]. The graph layer is generic over
//! floating point types and accepts pre-calculated distances through
//! [`DistanceMatrix::from_rows`].
//!
//! # Examples
//! ```
//!use palette_graph::{Color, Palette, SimilarityGraph};
//!
//!let palette = Palette::new([
//!    Color::new(255, 0, 0),
//!    Color::new(250, 10, 10),
//!    Color::new(0, 0, 255),
//!    Color::new(10, 10, 250),
//!    Color::new(0, 0, 0),
//!]);
//!let graph = SimilarityGraph::default_params(palette.colors()).build().unwrap();
//!assert_eq!(4, graph.matrix.len());
//!assert!(graph.adjacency.is_connected());
//!assert!(graph.adjacency.edge_count() >= 3);
//! ```
//!
//! # References
//! * [Sharma, G.; Wu, W.; Dalal, E. The CIEDE2000 color-difference formula: Implementation notes, supplementary test data, and mathematical observations.](https://doi.org/10.1002/col.20070)
//! * [Prim, R. C. Shortest connection networks and some generalizations.](https://doi.org/10.1002/j.1538-7305.1957.tb01515.x)

pub use crate::color::Color;
pub use crate::data_wrappers::MstEdge;
pub use crate::distance::{cie76, ciede2000, DeltaE};
#[cfg(feature = "parallel")]
pub use crate::distance_matrix::parallel::build_matrix_par;
pub use crate::distance_matrix::serial::build_matrix;
pub use crate::distance_matrix::DistanceMatrix;
pub use crate::error::GraphError;
pub use crate::graph_params::{GraphParamBuilder, GraphParams};
pub use crate::lab::{to_lab, LabCoordinate};
pub use crate::palette::Palette;
pub use crate::pruning::{prune, FilteredAdjacency};
pub use crate::similarity_graph::{GraphOutput, SimilarityGraph};
pub use crate::spanning_tree::{min_spanning_tree, SpanningTree};
pub use crate::threshold::{select_threshold, ThresholdPolicy};

mod color;
mod data_wrappers;
mod distance;
mod distance_matrix;
mod error;
mod graph_params;
mod lab;
mod palette;
mod pruning;
mod similarity_graph;
mod spanning_tree;
mod threshold;
mod union_find;
mod validation;
