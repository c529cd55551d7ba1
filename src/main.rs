use std::env;
use std::process::ExitCode;
use palette_graph::{GraphError, Palette, SimilarityGraph};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let path = env::args().nth(1).unwrap_or_else(|| String::from("palette.gpl"));
    match run(&path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(path, "{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(path: &str) -> Result<(), GraphError> {
    let palette = Palette::read_gimp(path)?;
    let graph = SimilarityGraph::default_params(palette.colors()).build()?;

    println!("{} colors, threshold {:.4}", palette.len(), graph.threshold);
    for (from, to, distance) in graph.color_edges() {
        println!("{from} -- {to} {distance:.2}");
    }
    Ok(())
}
