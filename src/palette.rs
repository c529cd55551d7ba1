use crate::{Color, GraphError};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tracing::debug;

const GIMP_HEADER: &str = "GIMP Palette";

/// A deduplicated set of colors in ascending order, without the (0, 0, 0) placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Creates a palette from any collection of colors, removing duplicates and placeholders.
    ///
    /// # Examples
    /// ```
    ///use palette_graph::{Color, Palette};
    ///
    ///let palette = Palette::new([
    ///    Color::new(0, 0, 255),
    ///    Color::new(0, 0, 0),
    ///    Color::new(255, 0, 0),
    ///    Color::new(0, 0, 255),
    ///]);
    ///assert_eq!(&[Color::new(0, 0, 255), Color::new(255, 0, 0)], palette.colors());
    /// ```
    pub fn new(colors: impl IntoIterator<Item = Color>) -> Self {
        let unique: BTreeSet<Color> = colors
            .into_iter()
            .filter(|color| !color.is_placeholder())
            .collect();
        Palette {
            colors: unique.into_iter().collect(),
        }
    }

    /// Parses the contents of a GIMP palette (`.gpl`) file.
    ///
    /// The first line must be the `GIMP Palette` header and the second one (the palette
    /// name) is skipped. Every other line starting with three numbers is a color; lines
    /// without a leading number, such as comments and `Columns:`, are ignored.
    pub fn from_gimp(contents: &str) -> Result<Self, GraphError> {
        let mut lines = contents.lines();
        match lines.next() {
            Some(header) if header.trim() == GIMP_HEADER => {}
            _ => {
                return Err(GraphError::PaletteFormat(String::from(
                    "missing 'GIMP Palette' header",
                )))
            }
        }
        lines.next();

        let mut colors = Vec::new();
        for (n, line) in lines.enumerate() {
            let components: Vec<i64> = line
                .split_whitespace()
                .map_while(|token| {
                    if token.bytes().all(|byte| byte.is_ascii_digit()) {
                        token.parse().ok()
                    } else {
                        None
                    }
                })
                .collect();
            match components.len() {
                0 => continue,
                1 | 2 => {
                    return Err(GraphError::PaletteFormat(format!(
                        "line {} has an incomplete color: {line:?}",
                        n + 3
                    )))
                }
                _ => colors.push(Color::try_from(&components[..3])?),
            }
        }
        let palette = Palette::new(colors);
        debug!(n_colors = palette.len(), "Parsed GIMP palette");
        Ok(palette)
    }

    /// Reads and parses a GIMP palette file.
    pub fn read_gimp(path: impl AsRef<Path>) -> Result<Self, GraphError> {
        let contents = fs::read_to_string(path)?;
        Palette::from_gimp(&contents)
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl AsRef<[Color]> for Palette {
    fn as_ref(&self) -> &[Color] {
        &self.colors
    }
}

impl FromIterator<Color> for Palette {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        Palette::new(iter)
    }
}
