use palette_graph::{GraphError, GraphOutput, SimilarityGraph};

mod common;

macro_rules! define_serial_test {
    ($test_fn:ident) => {
        #[test]
        fn $test_fn() {
            fn build_fn(graph: &SimilarityGraph) -> Result<GraphOutput<f64>, GraphError> {
                graph.build()
            }

            common::$test_fn(build_fn);
        }
    };
}

define_serial_test!(test_primaries);
define_serial_test!(test_near_identical_grays);
define_serial_test!(test_threshold_connects_palette);
define_serial_test!(test_threshold_is_minimal);
define_serial_test!(test_deterministic);
define_serial_test!(test_threshold_floor);
define_serial_test!(test_empty_palette);
define_serial_test!(test_single_color);
define_serial_test!(test_duplicate_colors);
