//! CLI logic for the Trellis trace renderer.
//!
//! Reads a JSON trace, renders it with [`trellis::TraceRenderer`] and writes
//! the SVG document to disk.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use trellis::{TraceRenderer, TrellisError};

/// Run the Trellis CLI application
///
/// Loads the configuration, parses the input trace, applies the loop-back
/// override from `args` if given and writes the resulting SVG to the output
/// file.
///
/// # Errors
///
/// Returns `TrellisError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Trace parsing and query errors
/// - Layout errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), TrellisError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing trace"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let renderer = TraceRenderer::new(app_config);
    let mut trace = renderer.parse(&source)?;
    if let Some(loopback) = args.loopback {
        info!(loopback; "Overriding trace loop-back");
        trace.set_loopback(Some(loopback));
    }
    let svg = renderer.render_svg(&trace)?;

    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
