//! Drawing targets for rendered composition trees.
//!
//! A [`Surface`] receives absolute-position [`TextCommand`]s from the
//! [`Drawable`](crate::draw::Drawable) traversal. It is the one mutable
//! resource a render writes to; [`Stage::render`](crate::draw::Stage::render)
//! clears it before every traversal.
//!
//! [`SvgSurface`] records the commands and assembles them into an SVG
//! document.

mod svg;

pub use self::svg::SvgSurface;

use crate::{draw::TextStyle, error::RenderError, geometry::Point};

/// A target that accepts drawing commands.
pub trait Surface {
    /// Returns `false` if the surface can no longer accept commands.
    ///
    /// A stage refuses to render onto a detached surface.
    fn is_attached(&self) -> bool {
        true
    }

    /// Discards all previously drawn output.
    fn clear(&mut self);

    /// Draws one line of text at an absolute position.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::SurfaceUnavailable`] if the surface stopped
    /// accepting commands.
    fn draw_text(&mut self, command: TextCommand) -> Result<(), RenderError>;
}

/// A request to draw a line of text at an absolute position.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCommand {
    content: String,
    position: Point,
    style: TextStyle,
}

impl TextCommand {
    pub fn new(content: impl Into<String>, position: Point, style: TextStyle) -> Self {
        Self {
            content: content.into(),
            position,
            style,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Absolute position of the text anchor (top-left of the line).
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn style(&self) -> &TextStyle {
        &self.style
    }
}
