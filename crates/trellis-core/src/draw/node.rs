//! The [`Node`] sum type stored in grid cells and on the stage.

use crate::{
    draw::{Drawable, Grid, TextBox},
    error::RenderError,
    geometry::{Bounds, Point},
    surface::Surface,
};

/// A node of the composition tree: either a text leaf or a nested grid.
///
/// Nodes are owned by exactly one parent, which makes shared children and
/// cycles unrepresentable.
#[derive(Debug, Clone)]
pub enum Node {
    Text(TextBox),
    Grid(Grid),
}

impl Node {
    /// Returns the text leaf, if this node is one.
    pub fn as_text(&self) -> Option<&TextBox> {
        match self {
            Self::Text(text) => Some(text),
            Self::Grid(_) => None,
        }
    }

    /// Returns the nested grid, if this node is one.
    pub fn as_grid(&self) -> Option<&Grid> {
        match self {
            Self::Grid(grid) => Some(grid),
            Self::Text(_) => None,
        }
    }
}

impl From<TextBox> for Node {
    fn from(text: TextBox) -> Self {
        Self::Text(text)
    }
}

impl From<Grid> for Node {
    fn from(grid: Grid) -> Self {
        Self::Grid(grid)
    }
}

impl Drawable for Node {
    fn draw(&self, offset: Point, surface: &mut dyn Surface) -> Result<(), RenderError> {
        match self {
            Self::Text(text) => text.draw(offset, surface),
            Self::Grid(grid) => grid.draw(offset, surface),
        }
    }

    fn extent(&self, offset: Point) -> Bounds {
        match self {
            Self::Text(text) => text.extent(offset),
            Self::Grid(grid) => grid.extent(offset),
        }
    }
}
