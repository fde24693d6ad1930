//! Configuration types for trace diagram rendering.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from
//! external sources such as TOML files. Every section is optional and falls
//! back to the defaults documented on each type.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and style settings.
//! - [`LayoutConfig`] - Grid geometry and the trace relations shown per participant.
//! - [`StyleConfig`] - Text style, background color and document size.
//!
//! # Example
//!
//! ```
//! # use trellis::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.layout().signature(), "Server");
//! assert!(config.style().background_color().is_ok());
//! ```

use serde::Deserialize;

use trellis_core::{
    color::Color,
    draw::{GridConfig, TextStyle},
    geometry::{Dimensions, Point, Size},
};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Geometry of one grid level.
///
/// Both keys are required when the table is present.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct GridSettings {
    /// `[x, y]` pixel offset of the first cell.
    origin: [f32; 2],

    /// `[width, height]` of every cell in pixels.
    cell_size: [f32; 2],
}

impl GridSettings {
    pub fn new(origin: Point, cell_size: Size) -> Self {
        Self {
            origin: [origin.x(), origin.y()],
            cell_size: [cell_size.width(), cell_size.height()],
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.origin[0], self.origin[1])
    }

    pub fn cell_size(&self) -> Size {
        Size::new(self.cell_size[0], self.cell_size[1])
    }

    /// Builds a [`GridConfig`] with these settings and the given dimensions.
    pub fn grid_config(&self, dimensions: Dimensions) -> GridConfig {
        GridConfig::new(self.origin(), self.cell_size(), dimensions)
    }
}

/// A relation displayed for every participant, rendered as `{label}:{value}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FieldSettings {
    /// Name of the field in the trace.
    relation: String,

    /// Prefix shown in the diagram.
    label: String,
}

impl FieldSettings {
    pub fn new(relation: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            relation: relation.into(),
            label: label.into(),
        }
    }

    pub fn relation(&self) -> &str {
        &self.relation
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Layout of the trace diagram.
///
/// # Default Values
///
/// | Property | Default |
/// |----------|---------|
/// | `states` | origin `[10, 10]`, cell size `[400, 300]` |
/// | `participants` | origin `[10, 10]`, cell size `[120, 40]` |
/// | `signature` | `"Server"` |
/// | `fields` | `role` as `role`, `votedFor` as `voted` |
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Outer grid: one row per state.
    states: GridSettings,

    /// Inner grid: one row per participant of a state.
    participants: GridSettings,

    /// Signature whose atoms are listed as participants.
    signature: String,

    /// Relations shown next to each participant, in column order.
    fields: Vec<FieldSettings>,
}

impl LayoutConfig {
    pub fn new(
        states: GridSettings,
        participants: GridSettings,
        signature: impl Into<String>,
        fields: Vec<FieldSettings>,
    ) -> Self {
        Self {
            states,
            participants,
            signature: signature.into(),
            fields,
        }
    }

    pub fn states(&self) -> &GridSettings {
        &self.states
    }

    pub fn participants(&self) -> &GridSettings {
        &self.participants
    }

    pub fn signature(&self) -> &str {
        &self.signature
    }

    pub fn fields(&self) -> &[FieldSettings] {
        &self.fields
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            states: GridSettings::new(Point::new(10.0, 10.0), Size::new(400.0, 300.0)),
            participants: GridSettings::new(Point::new(10.0, 10.0), Size::new(120.0, 40.0)),
            signature: "Server".to_string(),
            fields: vec![
                FieldSettings::new("role", "role"),
                FieldSettings::new("votedFor", "voted"),
            ],
        }
    }
}

/// Visual styling of rendered diagrams.
///
/// `width` and `height` fix the document size; when unset the size follows
/// the extent of the diagram.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Background color string, no background when unset.
    background_color: Option<String>,

    /// Color of all text.
    text_color: String,

    /// Font size of all text.
    font_size: u16,

    width: Option<f32>,

    height: Option<f32>,
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_deref()
            .map(Color::new)
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    /// Returns the text style built from `text_color` and `font_size`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured text color cannot be parsed.
    pub fn text_style(&self) -> Result<TextStyle, String> {
        let color = Color::new(&self.text_color)
            .map_err(|err| format!("Invalid text color in config: {err}"))?;
        Ok(TextStyle::new(color, self.font_size))
    }

    /// Returns the fixed document width, or `None` to size by content.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured width is not a positive number.
    pub fn width(&self) -> Result<Option<f32>, String> {
        document_length("width", self.width)
    }

    /// Returns the fixed document height, or `None` to size by content.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured height is not a positive number.
    pub fn height(&self) -> Result<Option<f32>, String> {
        document_length("height", self.height)
    }
}

fn document_length(name: &str, value: Option<f32>) -> Result<Option<f32>, String> {
    match value {
        Some(length) if !(length.is_finite() && length > 0.0) => Err(format!(
            "Invalid {name} in config: {length} (must be a positive number)"
        )),
        _ => Ok(value),
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: None,
            text_color: "black".to_string(),
            font_size: 16,
            width: None,
            height: None,
        }
    }
}
