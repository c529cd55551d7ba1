use thiserror::Error;

/// Possible errors that arise due to issues with palette or distance matrix input data.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Invalid color: {0}")]
    InvalidColor(String),
    #[error("The palette provided is empty")]
    EmptyPalette,
    #[error("A similarity graph needs at least 2 colors, got {0}")]
    DegenerateGraph(usize),
    #[error("Palette contains duplicate colors: {0}")]
    DuplicateColor(String),
    #[error("Distance matrix has mismatched dimensions: {0}")]
    WrongDimension(String),
    #[error("Non finite distance: {0}")]
    NonFiniteDistance(String),
    #[error("Invalid threshold: {0}")]
    InvalidThreshold(String),
    #[error("Malformed GIMP palette: {0}")]
    PaletteFormat(String),
    #[error("Failed to read palette file")]
    Io(#[from] std::io::Error),
}
