//! Composition tree and rendering traversal.
//!
//! A diagram is a tree of [`Node`]s: [`TextBox`] leaves and [`Grid`]
//! containers that place their children on an integer lattice. A [`Stage`]
//! holds the root of the tree and renders it onto a
//! [`Surface`](crate::surface::Surface).
//!
//! Every node implements [`Drawable`]. Drawing is a recursive traversal in
//! which each grid adds its cell origin to the accumulated offset before
//! descending, so a leaf ends up at the sum of all ancestor contributions
//! plus its own local offset.
//!
//! # Layer-Based Output
//!
//! Surfaces that produce SVG collect their elements in a [`LayeredOutput`],
//! which orders them by [`RenderLayer`] when the document is assembled.

mod grid;
mod layer;
mod node;
mod stage;
mod text;

pub use grid::{Grid, GridConfig};
pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use node::Node;
pub use stage::Stage;
pub use text::{TextBox, TextStyle};

use crate::{
    error::RenderError,
    geometry::{Bounds, Point},
    surface::Surface,
};

/// Trait for composition tree nodes that can be drawn onto a surface.
pub trait Drawable: std::fmt::Debug {
    /// Issues the drawing commands for this node and its descendants.
    ///
    /// # Arguments
    ///
    /// * `offset` - The accumulated absolute offset of this node's origin.
    /// * `surface` - The target receiving absolute-position commands.
    ///
    /// # Errors
    ///
    /// Propagates the first error reported by the surface; the traversal
    /// stops at that point.
    fn draw(&self, offset: Point, surface: &mut dyn Surface) -> Result<(), RenderError>;

    /// Returns the absolute area this node covers when drawn at `offset`.
    ///
    /// Text is not measured, so a leaf contributes only its anchor point.
    fn extent(&self, offset: Point) -> Bounds;
}
