//! Text leaves of the composition tree.
//!
//! # Overview
//!
//! - [`TextStyle`] - Fill color and font size shared by text leaves
//! - [`TextBox`] - A single line of styled text anchored inside a grid cell
//!
//! # Quick Start
//!
//! ```
//! # use trellis_core::draw::TextBox;
//! # use trellis_core::color::Color;
//! # use trellis_core::geometry::Point;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let label = TextBox::new("State:0")
//!     .with_color(Color::new("navy")?)
//!     .with_font_size(16)
//!     .with_offset(Point::new(4.0, 2.0));
//! assert_eq!(label.text(), "State:0");
//! # Ok(())
//! # }
//! ```

use log::trace;

use crate::{
    color::Color,
    draw::Drawable,
    error::RenderError,
    geometry::{Bounds, Point},
    surface::{Surface, TextCommand},
};

/// Visual style of a text leaf.
///
/// # Default Values
///
/// | Property | Default |
/// |----------|---------|
/// | Color | `black` |
/// | Font size | `16` |
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    color: Color,
    font_size: u16,
}

impl TextStyle {
    /// Creates a new style with the given color and font size.
    pub fn new(color: Color, font_size: u16) -> Self {
        Self { color, font_size }
    }

    /// Sets the fill color.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Sets the font size in points.
    pub fn set_font_size(&mut self, size: u16) {
        self.font_size = size;
    }

    pub fn color(&self) -> &Color {
        &self.color
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: Color::default(),
            font_size: 16,
        }
    }
}

/// A single line of styled text.
///
/// The text is anchored at `local_offset` relative to the origin of the cell
/// it is placed in. There is no wrapping, measurement or clipping.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBox {
    text: String,
    style: TextStyle,
    local_offset: Point,
}

impl TextBox {
    /// Creates a text box with the default style anchored at its cell origin.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: TextStyle::default(),
            local_offset: Point::default(),
        }
    }

    /// Replaces the whole style (builder style).
    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets the fill color (builder style).
    pub fn with_color(mut self, color: Color) -> Self {
        self.style.set_color(color);
        self
    }

    /// Sets the font size (builder style).
    pub fn with_font_size(mut self, size: u16) -> Self {
        self.style.set_font_size(size);
        self
    }

    /// Sets the offset from the cell origin (builder style).
    pub fn with_offset(mut self, offset: Point) -> Self {
        self.local_offset = offset;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    pub fn local_offset(&self) -> Point {
        self.local_offset
    }
}

impl Drawable for TextBox {
    fn draw(&self, offset: Point, surface: &mut dyn Surface) -> Result<(), RenderError> {
        let position = offset.add_point(self.local_offset);
        trace!(text = self.text.as_str(), x = position.x(), y = position.y(); "Drawing text");
        surface.draw_text(TextCommand::new(
            self.text.clone(),
            position,
            self.style.clone(),
        ))
    }

    fn extent(&self, offset: Point) -> Bounds {
        Bounds::from_point(offset.add_point(self.local_offset))
    }
}
