//! The root of a composition tree and the render entry point.

use log::{debug, info};

use crate::{
    draw::{Drawable, Node},
    error::RenderError,
    geometry::{Bounds, Point},
    surface::Surface,
};

/// Holds at most one composition tree and renders it onto a surface.
///
/// A stage can be rendered any number of times. Each render clears the
/// surface and traverses the whole tree again, so repeated renders of an
/// unchanged tree produce identical output.
///
/// # Examples
///
/// ```
/// # use trellis_core::draw::{Stage, TextBox};
/// # use trellis_core::surface::SvgSurface;
/// let mut stage = Stage::new();
/// stage.add(TextBox::new("hello"));
///
/// let mut surface = SvgSurface::new();
/// stage.render(&mut surface).expect("svg surface is always attached");
/// assert_eq!(surface.commands().len(), 1);
/// ```
#[derive(Debug, Default, Clone)]
pub struct Stage {
    root: Option<Node>,
}

impl Stage {
    /// Creates an empty stage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches `node` as the root, returning the previous root if there was one.
    pub fn add(&mut self, node: impl Into<Node>) -> Option<Node> {
        let previous = self.root.replace(node.into());
        if previous.is_some() {
            debug!("Replaced stage root");
        }
        previous
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    /// Returns the absolute area covered by the tree, or `None` for an empty stage.
    pub fn extent(&self) -> Option<Bounds> {
        self.root.as_ref().map(|root| root.extent(Point::default()))
    }

    /// Clears `surface` and draws the whole tree onto it.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::SurfaceUnavailable`] without touching the
    /// surface if it is not attached, and otherwise propagates the first
    /// error the surface reports while drawing.
    pub fn render(&self, surface: &mut dyn Surface) -> Result<(), RenderError> {
        if !surface.is_attached() {
            return Err(RenderError::SurfaceUnavailable);
        }

        surface.clear();

        match &self.root {
            Some(root) => {
                info!("Rendering stage");
                root.draw(Point::default(), surface)
            }
            None => {
                debug!("Rendering empty stage");
                Ok(())
            }
        }
    }
}
