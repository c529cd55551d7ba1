use palette_graph::{
    prune, Color, GraphError, GraphOutput, GraphParams, Palette, SimilarityGraph,
};

pub type BuildFn = fn(&SimilarityGraph) -> Result<GraphOutput<f64>, GraphError>;

pub fn test_primaries(build_fn: BuildFn) {
    let colors = vec![Color::new(255, 0, 0), Color::new(0, 255, 0), Color::new(0, 0, 255)];
    let graph = build_fn(&SimilarityGraph::default_params(&colors)).unwrap();

    let rows = graph.matrix.rows();
    assert_eq!(3, rows.len());
    for i in 0..3 {
        assert_eq!(0.0, rows[i][i]);
        for j in 0..3 {
            assert_eq!(rows[i][j], rows[j][i]);
            if i != j {
                assert!(rows[i][j] > 0.0);
            }
        }
    }

    let mut pair_distances = vec![rows[0][1], rows[0][2], rows[1][2]];
    pair_distances.sort_by(|a, b| a.partial_cmp(b).unwrap());
    // Primary to primary differences are all of the same order of magnitude
    assert!(pair_distances[2] < 4.0 * pair_distances[0]);

    let tree_distances: Vec<f64> =
        graph.spanning_tree.edges().iter().map(|edge| edge.distance).collect();
    assert_eq!(pair_distances[..2], tree_distances[..]);
    assert_eq!(pair_distances[1], graph.threshold);
    assert!(graph.adjacency.edge_count() >= 2);
    assert!(graph.adjacency.is_connected());
}

pub fn test_near_identical_grays(build_fn: BuildFn) {
    let colors = vec![Color::new(10, 10, 10), Color::new(12, 12, 12)];
    let graph = build_fn(&SimilarityGraph::default_params(&colors)).unwrap();

    let distance = graph.matrix.get(0, 1);
    assert!(distance > 0.0 && distance < 1.0, "distance {distance}");
    assert_eq!(1, graph.spanning_tree.edges().len());
    assert_eq!(distance, graph.spanning_tree.edges()[0].distance);
    assert_eq!(distance, graph.threshold);
    assert_eq!(vec![(0, 1, distance)], graph.adjacency.edges());
}

pub fn test_threshold_connects_palette(build_fn: BuildFn) {
    let palette = grid_palette();
    let graph = build_fn(&SimilarityGraph::default_params(palette.colors())).unwrap();

    assert_eq!(palette.len() - 1, graph.spanning_tree.edges().len());
    let max_edge = graph
        .spanning_tree
        .edges()
        .iter()
        .map(|edge| edge.distance)
        .fold(0.0, f64::max);
    assert_eq!(max_edge, graph.threshold);
    assert!(graph.adjacency.is_connected());
    for edge in graph.spanning_tree.edges() {
        assert!(graph.adjacency.has_edge(edge.left_node_id, edge.right_node_id));
    }
}

pub fn test_threshold_is_minimal(build_fn: BuildFn) {
    let palette = grid_palette();
    let graph = build_fn(&SimilarityGraph::default_params(palette.colors())).unwrap();

    let below = graph.threshold * (1.0 - 1e-9);
    assert!(below < graph.threshold);
    let adjacency = prune(&graph.matrix, below).unwrap();
    assert!(!adjacency.is_connected());
}

pub fn test_deterministic(build_fn: BuildFn) {
    let palette = grid_palette();
    let first = build_fn(&SimilarityGraph::default_params(palette.colors())).unwrap();
    let second = build_fn(&SimilarityGraph::default_params(palette.colors())).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.threshold.to_bits(), second.threshold.to_bits());
}

pub fn test_threshold_floor(build_fn: BuildFn) {
    let colors = vec![Color::new(10, 10, 10), Color::new(12, 12, 12), Color::new(14, 14, 14)];
    let params = GraphParams::builder().threshold_floor(20.0).build();
    let graph = build_fn(&SimilarityGraph::new(&colors, params)).unwrap();
    assert_eq!(20.0, graph.threshold);
    assert_eq!(3, graph.adjacency.edge_count());
}

pub fn test_empty_palette(build_fn: BuildFn) {
    let result = build_fn(&SimilarityGraph::default_params(&[]));
    assert!(matches!(result, Err(GraphError::EmptyPalette)));
}

pub fn test_single_color(build_fn: BuildFn) {
    let colors = vec![Color::new(40, 50, 60)];
    let result = build_fn(&SimilarityGraph::default_params(&colors));
    assert!(matches!(result, Err(GraphError::DegenerateGraph(1))));
}

pub fn test_duplicate_colors(build_fn: BuildFn) {
    let colors = vec![Color::new(40, 50, 60), Color::new(1, 1, 1), Color::new(40, 50, 60)];
    let result = build_fn(&SimilarityGraph::default_params(&colors));
    assert!(matches!(result, Err(GraphError::DuplicateColor(..))));
}

fn grid_palette() -> Palette {
    let steps = [0u8, 64, 128, 192, 255];
    steps
        .iter()
        .flat_map(|&r| steps.iter().map(move |&g| (r, g)))
        .flat_map(|(r, g)| steps.iter().map(move |&b| Color::new(r, g, b)))
        .collect()
}
