//! Trellis - render model-checker state traces as nested grid diagrams.
//!
//! Each state of a trace becomes one row of an outer grid: a label on the
//! left and, on the right, a nested grid listing the participants of the
//! state with the values of selected relations. The grid engine itself lives
//! in `trellis-core` and is re-exported here.

pub mod compose;
pub mod config;
pub mod trace;

mod error;

pub use trellis_core::{color, draw, geometry, surface};

pub use error::TrellisError;

use log::{debug, info};

use trellis_core::{draw::Stage, geometry::Size, surface::SvgSurface};

use compose::TraceComposer;
use config::AppConfig;
use trace::Trace;

/// Space added to the right and bottom of the diagram extent.
const DOCUMENT_MARGIN: f32 = 10.0;

/// Builder for parsing and rendering trace diagrams.
///
/// # Examples
///
/// ```rust
/// use trellis::{TraceRenderer, config::AppConfig};
///
/// let source = r#"{
///     "states": [
///         {
///             "signatures": { "Server": ["Server0"] },
///             "fields": { "role": { "Server0": ["Leader"] }, "votedFor": {} }
///         }
///     ]
/// }"#;
///
/// let renderer = TraceRenderer::new(AppConfig::default());
/// let trace = renderer.parse(source).expect("Failed to parse");
/// let svg = renderer.render_svg(&trace).expect("Failed to render");
/// assert!(svg.contains("role:Leader"));
/// ```
#[derive(Debug, Default)]
pub struct TraceRenderer {
    config: AppConfig,
}

impl TraceRenderer {
    /// Create a new renderer with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse a JSON trace document.
    ///
    /// # Errors
    ///
    /// Returns [`TrellisError::Trace`] if the source is not a valid trace.
    pub fn parse(&self, source: &str) -> Result<Trace, TrellisError> {
        info!("Parsing trace");
        let trace = Trace::from_json(source)?;
        debug!(states = trace.len(); "Trace parsed successfully");
        Ok(trace)
    }

    /// Build the composition tree of a trace, ready to be rendered.
    ///
    /// # Errors
    ///
    /// Returns [`TrellisError`] for invalid configuration, trace queries that
    /// fail, an out-of-range loop-back index or an empty trace.
    pub fn build_stage(&self, trace: &Trace) -> Result<Stage, TrellisError> {
        let style = self
            .config
            .style()
            .text_style()
            .map_err(TrellisError::Config)?;
        let composer = TraceComposer::new(self.config.layout().clone(), style);

        let grid = composer.compose(trace.states(), trace.loopback())?;
        debug!(cells = grid.occupied(); "Trace composed");

        let mut stage = Stage::new();
        stage.add(grid);
        Ok(stage)
    }

    /// Render a trace to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`TrellisError`] for composition or rendering failures.
    pub fn render_svg(&self, trace: &Trace) -> Result<String, TrellisError> {
        let stage = self.build_stage(trace)?;
        let mut surface = self.surface_for(&stage)?;

        stage.render(&mut surface)?;

        info!(texts = surface.commands().len(); "SVG rendered successfully");
        Ok(surface.to_svg_string())
    }

    fn surface_for(&self, stage: &Stage) -> Result<SvgSurface, TrellisError> {
        let style = self.config.style();

        let content = stage
            .extent()
            .map(|bounds| {
                Size::new(
                    bounds.max_x() + DOCUMENT_MARGIN,
                    bounds.max_y() + DOCUMENT_MARGIN,
                )
            })
            .unwrap_or_default();
        let width = style.width().map_err(TrellisError::Config)?;
        let height = style.height().map_err(TrellisError::Config)?;
        let size = Size::new(
            width.unwrap_or(content.width()),
            height.unwrap_or(content.height()),
        );
        debug!(width = size.width(), height = size.height(); "Surface size");

        let surface = SvgSurface::new().with_size(size);
        Ok(match style.background_color().map_err(TrellisError::Config)? {
            Some(color) => surface.with_background(color),
            None => surface,
        })
    }
}
