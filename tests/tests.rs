use palette_graph::{
    build_matrix, ciede2000, min_spanning_tree, prune, select_threshold, to_lab, Color,
    DeltaE, DistanceMatrix, GraphError, Palette, SimilarityGraph, ThresholdPolicy,
};

#[test]
fn identical_colors_have_zero_distance() {
    for color in sample_colors() {
        let lab = to_lab(color);
        assert_eq!(0.0, ciede2000(lab, lab));
    }
}

#[test]
fn distance_is_exactly_symmetric() {
    let colors = sample_colors();
    for &a in &colors {
        for &b in &colors {
            assert_eq!(ciede2000(to_lab(a), to_lab(b)), ciede2000(to_lab(b), to_lab(a)));
        }
    }
}

#[test]
fn step_by_step_pipeline() {
    let palette = Palette::new(sample_colors());
    let matrix: DistanceMatrix<f64> = build_matrix(palette.colors(), DeltaE::Ciede2000);
    assert!(matrix.is_symmetric());
    assert!((0..matrix.len()).all(|i| matrix.get(i, i) == 0.0));

    let tree = min_spanning_tree(&matrix);
    assert_eq!(palette.len() - 1, tree.edges().len());
    let threshold = select_threshold(&tree, ThresholdPolicy::MstMaximum).unwrap();
    assert_eq!(tree.max_weight(), Some(threshold));

    let adjacency = prune(&matrix, threshold).unwrap();
    assert!(adjacency.is_connected());
    assert!(adjacency.edge_count() >= tree.edges().len());

    let graph = SimilarityGraph::default_params(palette.colors()).build().unwrap();
    assert_eq!(matrix, graph.matrix);
    assert_eq!(threshold, graph.threshold);
    assert_eq!(adjacency, graph.adjacency);
}

#[test]
fn single_precision_pipeline() {
    let colors = [Color::new(200, 10, 10), Color::new(10, 200, 10), Color::new(10, 10, 200)];
    let matrix: DistanceMatrix<f32> = build_matrix(&colors, DeltaE::Ciede2000);
    let tree = min_spanning_tree(&matrix);
    let threshold = select_threshold(&tree, ThresholdPolicy::default()).unwrap();
    let adjacency = prune(&matrix, threshold).unwrap();
    assert!(adjacency.is_connected());
}

#[test]
fn precalculated_distances() {
    let rows = vec![
        vec![0.0, 3.0, 10.0, 11.0],
        vec![3.0, 0.0, 4.0, 12.0],
        vec![10.0, 4.0, 0.0, 5.0],
        vec![11.0, 12.0, 5.0, 0.0],
    ];
    let matrix = DistanceMatrix::from_rows(rows).unwrap();
    let tree = min_spanning_tree(&matrix);
    assert_eq!(12.0, tree.total_weight());
    let threshold = select_threshold(&tree, ThresholdPolicy::MstMaximum).unwrap();
    assert_eq!(5.0, threshold);

    let adjacency = prune(&matrix, threshold).unwrap();
    assert_eq!(vec![(0, 1, 3.0), (1, 2, 4.0), (2, 3, 5.0)], adjacency.edges());
    assert!(!prune(&matrix, 4.999).unwrap().is_connected());
}

#[test]
fn precalculated_distances_must_be_symmetrical() {
    let rows = vec![vec![0.0, 3.0], vec![4.0, 0.0]];
    assert!(matches!(DistanceMatrix::from_rows(rows), Err(GraphError::WrongDimension(..))));
}

#[test]
fn gimp_palette_to_graph() {
    let gpl = "GIMP Palette
Name: Reds and blues
#
  0   0   0\tPlaceholder
255   0   0\tRed
250  10  10\tAlmost red
  0   0 255\tBlue
 10  10 250\tAlmost blue
255   0   0\tRed
";
    let palette = Palette::from_gimp(gpl).unwrap();
    assert_eq!(4, palette.len());

    let graph = SimilarityGraph::default_params(palette.colors()).build().unwrap();
    // Reds and blues are joined through their closest cross pair only
    let red = palette.colors().iter().position(|&c| c == Color::new(255, 0, 0)).unwrap();
    let almost_red = palette.colors().iter().position(|&c| c == Color::new(250, 10, 10)).unwrap();
    assert!(graph.adjacency.has_edge(red, almost_red));
    assert!(graph.adjacency.is_connected());
    assert!(graph.adjacency.edge_count() < 6);
}

#[test]
fn invalid_colors_are_rejected_before_conversion() {
    assert!(matches!(Color::try_from((300i64, 0, 0)), Err(GraphError::InvalidColor(..))));
    let components: &[i64] = &[1, 2, 3, 4];
    assert!(matches!(Color::try_from(components), Err(GraphError::InvalidColor(..))));
}

fn sample_colors() -> Vec<Color> {
    let mut state: u32 = 0x9e37_79b9;
    (0..60)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            let [r, g, b, _] = state.to_le_bytes();
            Color::new(r, g, b)
        })
        .chain([Color::new(255, 255, 255), Color::new(1, 1, 1), Color::new(128, 128, 128)])
        .collect()
}
