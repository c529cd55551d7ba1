#[cfg(feature = "parallel")]
use crate::distance_matrix::parallel::build_matrix_par;
use crate::distance_matrix::serial::build_matrix;
use crate::validation::PaletteValidator;
use crate::{
    min_spanning_tree, prune, select_threshold, Color, DistanceMatrix, FilteredAdjacency,
    GraphError, GraphParams, SpanningTree,
};
use tracing::debug;

/// Perceptual similarity graph over a palette: CIEDE2000 distances between every pair of
/// colors, pruned at the largest edge of their minimum spanning tree.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityGraph<'a> {
    colors: &'a [Color],
    params: GraphParams,
}

/// Everything a renderer needs from one palette: the raw distances, the spanning tree, the
/// threshold and the pruned adjacency.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphOutput<T> {
    pub colors: Vec<Color>,
    pub matrix: DistanceMatrix<T>,
    pub spanning_tree: SpanningTree<T>,
    pub threshold: T,
    pub adjacency: FilteredAdjacency<T>,
}

impl GraphOutput<f64> {
    /// The pruned edges as color pairs, `(from, to, distance)`.
    pub fn color_edges(&self) -> Vec<(Color, Color, f64)> {
        self.adjacency
            .edges()
            .into_iter()
            .map(|(i, j, dist)| (self.colors[i], self.colors[j], dist))
            .collect()
    }
}

impl<'a> SimilarityGraph<'a> {
    /// Creates a similarity graph builder using custom parameters.
    ///
    /// # Parameters
    /// * `colors` - the palette, with no color appearing twice. Use `Palette` to deduplicate
    ///              and sort raw colors.
    /// * `params` - the graph parameters.
    ///
    /// # Examples
    /// ```
    ///use palette_graph::{Color, GraphParams, SimilarityGraph};
    ///
    ///let colors = [Color::new(10, 10, 10), Color::new(12, 12, 12), Color::new(250, 20, 20)];
    ///let params = GraphParams::builder()
    ///    .threshold_floor(20.0)
    ///    .build();
    ///let graph = SimilarityGraph::new(&colors, params).build().unwrap();
    ///assert!(graph.threshold >= 20.0);
    /// ```
    pub fn new(colors: &'a [Color], params: GraphParams) -> Self {
        SimilarityGraph { colors, params }
    }

    /// Creates a similarity graph builder with CIEDE2000 distances and the spanning tree
    /// threshold.
    pub fn default_params(colors: &'a [Color]) -> Self {
        SimilarityGraph::new(colors, GraphParams::default())
    }

    /// Builds the graph for the colors passed to the constructor.
    ///
    /// # Returns
    /// * A result that, if successful, contains the distance matrix, its minimum spanning tree,
    ///   the threshold and the pruned adjacency. An error is returned if the palette is empty,
    ///   holds a single color, or contains the same color twice.
    ///
    /// # Examples
    /// ```
    ///use palette_graph::{Color, SimilarityGraph};
    ///
    ///let colors = [Color::new(255, 0, 0), Color::new(0, 255, 0), Color::new(0, 0, 255)];
    ///let graph = SimilarityGraph::default_params(&colors).build().unwrap();
    ///assert_eq!(2, graph.spanning_tree.edges().len());
    ///assert!(graph.adjacency.is_connected());
    /// ```
    pub fn build(&self) -> Result<GraphOutput<f64>, GraphError> {
        PaletteValidator::new(self.colors).validate_palette()?;
        let matrix = build_matrix(self.colors, self.params.metric);
        self.reduce(matrix)
    }

    /// Builds the graph for the colors passed to the constructor, computing the distance
    /// matrix in parallel. Only worth it for large palettes; results are identical to
    /// `build`.
    #[cfg(feature = "parallel")]
    pub fn build_par(&self) -> Result<GraphOutput<f64>, GraphError> {
        PaletteValidator::new(self.colors).validate_palette()?;
        let matrix = build_matrix_par(self.colors, self.params.metric);
        self.reduce(matrix)
    }

    fn reduce(&self, matrix: DistanceMatrix<f64>) -> Result<GraphOutput<f64>, GraphError> {
        debug!(n_colors = matrix.len(), metric = ?self.params.metric, "Built distance matrix");
        let spanning_tree = min_spanning_tree(&matrix);
        let threshold = select_threshold(&spanning_tree, self.params.threshold_policy)?;
        debug!(
            mst_weight = spanning_tree.total_weight(),
            threshold,
            policy = ?self.params.threshold_policy,
            "Selected threshold"
        );
        let adjacency = prune(&matrix, threshold)?;
        debug!(n_edges = adjacency.edge_count(), "Pruned distance matrix");

        Ok(GraphOutput {
            colors: self.colors.to_vec(),
            matrix,
            spanning_tree,
            threshold,
            adjacency,
        })
    }
}
