use crate::GraphError;
use std::fmt::{Display, Formatter};

/// A device RGB color. Colors order by their (red, green, blue) triple, which is the order
/// palettes are sorted in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Creates a color from its red, green and blue components.
    ///
    /// # Examples
    /// ```
    ///use palette_graph::Color;
    ///
    ///let red = Color::new(255, 0, 0);
    ///assert_eq!(red.to_string(), "#FF0000");
    /// ```
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// The all zero triple, used as an empty slot marker in palette files.
    pub fn is_placeholder(&self) -> bool {
        *self == Color::new(0, 0, 0)
    }

    pub fn components(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Color::new(r, g, b)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Color::new(r, g, b)
    }
}

impl TryFrom<&[i64]> for Color {
    type Error = GraphError;

    /// Validates a loosely typed component list, as produced by a file parser.
    fn try_from(components: &[i64]) -> Result<Self, Self::Error> {
        if components.len() != 3 {
            return Err(GraphError::InvalidColor(format!(
                "expected 3 components, got {}",
                components.len()
            )));
        }
        let mut rgb = [0u8; 3];
        for (channel, &value) in rgb.iter_mut().zip(components) {
            *channel = u8::try_from(value).map_err(|_| {
                GraphError::InvalidColor(format!(
                    "component {value} of {components:?} is outside 0..=255"
                ))
            })?;
        }
        Ok(Color::from(rgb))
    }
}

impl TryFrom<(i64, i64, i64)> for Color {
    type Error = GraphError;

    fn try_from((r, g, b): (i64, i64, i64)) -> Result<Self, Self::Error> {
        Color::try_from([r, g, b].as_slice())
    }
}
