//! SVG surface.

use log::debug;
use svg::{Document, node::Text as SvgText, node::element as svg_element};

use crate::{
    color::Color,
    draw::{LayeredOutput, RenderLayer},
    error::RenderError,
    geometry::{Bounds, Point, Size},
    surface::{Surface, TextCommand},
};

/// Space added around the drawn content when no explicit size is set.
const MARGIN: f32 = 50.0;

/// A surface that records text commands and turns them into an SVG document.
///
/// The document can be produced any number of times from the recorded
/// commands; producing it does not consume them.
///
/// # Examples
///
/// ```
/// # use trellis_core::surface::{Surface, SvgSurface, TextCommand};
/// # use trellis_core::draw::TextStyle;
/// # use trellis_core::geometry::{Point, Size};
/// let mut surface = SvgSurface::new().with_size(Size::new(300.0, 200.0));
/// surface
///     .draw_text(TextCommand::new("S0", Point::new(10.0, 10.0), TextStyle::default()))
///     .unwrap();
///
/// let svg = surface.to_svg_string();
/// assert!(svg.contains("S0"));
/// assert!(svg.contains("viewBox=\"0 0 300 200\""));
/// ```
#[derive(Debug, Default, Clone)]
pub struct SvgSurface {
    commands: Vec<TextCommand>,
    size: Option<Size>,
    background: Option<Color>,
}

impl SvgSurface {
    /// Creates an empty surface sized to its content.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a fixed document size (builder style).
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    /// Fills the document with a background color (builder style).
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Returns the commands drawn since the last clear, in drawing order.
    pub fn commands(&self) -> &[TextCommand] {
        &self.commands
    }

    /// Returns the document size: the configured size, or the bounds of all
    /// text anchors measured from the origin, grown by twice `MARGIN`.
    pub fn size(&self) -> Size {
        self.size.unwrap_or_else(|| {
            let content = self
                .commands
                .iter()
                .fold(Bounds::from_point(Point::default()), |acc, cmd| {
                    acc.merge(&Bounds::from_point(cmd.position()))
                });
            Size::new(content.max_x(), content.max_y()).add_margin(MARGIN)
        })
    }

    /// Assembles the recorded commands into an SVG document.
    pub fn to_document(&self) -> Document {
        let size = self.size();
        debug!(width = size.width(), height = size.height(); "Building SVG document");

        let mut output = LayeredOutput::new();

        if let Some(color) = &self.background {
            let bg = svg_element::Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", size.width())
                .set("height", size.height())
                .set("fill", color)
                .set("fill-opacity", color.alpha());
            output.add_to_layer(RenderLayer::Background, Box::new(bg));
        }

        for command in &self.commands {
            output.add_to_layer(RenderLayer::Text, Box::new(text_element(command)));
        }

        output.render().into_iter().fold(
            Document::new()
                .set(
                    "viewBox",
                    format!("0 0 {} {}", size.width(), size.height()),
                )
                .set("width", size.width())
                .set("height", size.height()),
            |doc, node| doc.add(node),
        )
    }

    /// Renders the SVG document to a string.
    pub fn to_svg_string(&self) -> String {
        self.to_document().to_string()
    }
}

impl Surface for SvgSurface {
    fn clear(&mut self) {
        self.commands.clear();
    }

    fn draw_text(&mut self, command: TextCommand) -> Result<(), RenderError> {
        self.commands.push(command);
        Ok(())
    }
}

fn text_element(command: &TextCommand) -> svg_element::Text {
    let style = command.style();
    let position = command.position();

    svg_element::Text::new("")
        .set("x", position.x())
        .set("y", position.y())
        .set("dominant-baseline", "hanging")
        .set("font-size", style.font_size())
        .set("fill", style.color())
        .set("fill-opacity", style.color().alpha())
        .add(SvgText::new(command.content()))
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::draw::TextStyle;

    fn command(content: &str, x: f32, y: f32) -> TextCommand {
        TextCommand::new(content, Point::new(x, y), TextStyle::default())
    }

    #[test]
    fn test_surface_records_commands_in_order() {
        let mut surface = SvgSurface::new();
        surface.draw_text(command("a", 0.0, 0.0)).unwrap();
        surface.draw_text(command("b", 10.0, 0.0)).unwrap();

        let contents: Vec<&str> = surface.commands().iter().map(TextCommand::content).collect();
        assert_eq!(contents, vec!["a", "b"]);
    }

    #[test]
    fn test_surface_clear() {
        let mut surface = SvgSurface::new();
        surface.draw_text(command("a", 0.0, 0.0)).unwrap();
        surface.clear();
        assert!(surface.commands().is_empty());
    }

    #[test]
    fn test_size_from_content() {
        let mut surface = SvgSurface::new();
        surface.draw_text(command("a", 110.0, 110.0)).unwrap();
        surface.draw_text(command("b", 30.0, 200.0)).unwrap();

        let size = surface.size();
        assert_approx_eq!(f32, size.width(), 210.0);
        assert_approx_eq!(f32, size.height(), 300.0);
    }

    #[test]
    fn test_size_explicit() {
        let surface = SvgSurface::new().with_size(Size::new(640.0, 480.0));
        assert_eq!(surface.size(), Size::new(640.0, 480.0));
    }

    #[test]
    fn test_document_contains_text_attributes() {
        let mut surface = SvgSurface::new();
        let style = TextStyle::new(Color::new("red").unwrap(), 16);
        surface
            .draw_text(TextCommand::new("role:Leader", Point::new(110.0, 50.0), style))
            .unwrap();

        let svg = surface.to_svg_string();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("role:Leader"));
        assert!(svg.contains("x=\"110\""));
        assert!(svg.contains("y=\"50\""));
        assert!(svg.contains("font-size=\"16\""));
        assert!(svg.contains("fill=\"red\""));
        assert!(svg.contains("data-layer=\"text\""));
        assert!(!svg.contains("data-layer=\"background\""));
    }

    #[test]
    fn test_document_escapes_text() {
        let mut surface = SvgSurface::new();
        surface.draw_text(command("a<b & c", 0.0, 0.0)).unwrap();

        let svg = surface.to_svg_string();
        assert!(svg.contains("a&lt;b &amp; c"));
    }

    #[test]
    fn test_document_with_background() {
        let surface = SvgSurface::new()
            .with_size(Size::new(100.0, 100.0))
            .with_background(Color::new("white").unwrap());

        let svg = surface.to_svg_string();
        assert!(svg.contains("data-layer=\"background\""));
        assert!(svg.contains("fill=\"white\""));
    }

    #[test]
    fn test_document_is_repeatable() {
        let mut surface = SvgSurface::new();
        surface.draw_text(command("x", 1.0, 2.0)).unwrap();
        assert_eq!(surface.to_svg_string(), surface.to_svg_string());
        assert_eq!(surface.commands().len(), 1);
    }
}
