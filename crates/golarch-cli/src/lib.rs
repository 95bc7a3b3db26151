//! CLI logic for the architecture diagram tool.
//!
//! Renders each selected architecture in turn and writes one SVG file per
//! diagram into the output directory.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, DiagramArg};

use std::{fs, path::PathBuf};

use log::info;

use golarch::{DiagramRenderer, GolarchError};

/// Run the golarch CLI application
///
/// Every style is resolved before the output directory is touched, so an
/// invalid configuration writes nothing. Diagrams are then built, rendered
/// and written one after another, in canonical order.
///
/// Returns the paths of the files written.
///
/// # Errors
///
/// Returns `GolarchError` for:
/// - Configuration loading errors
/// - Graph construction errors
/// - Rendering errors
/// - File I/O errors
pub fn run(args: &Args) -> Result<Vec<PathBuf>, GolarchError> {
    let output_dir = PathBuf::from(&args.output_dir);
    info!(output_dir = args.output_dir; "Rendering architecture diagrams");

    let app_config = config::load_config(args.config.as_ref())?;
    let renderer = DiagramRenderer::new(app_config);

    // Configuration problems must surface before anything is written
    renderer.layout()?;
    let styles = args
        .architectures()
        .into_iter()
        .map(|architecture| {
            renderer
                .style_for(architecture)
                .map(|style| (architecture, style))
        })
        .collect::<Result<Vec<_>, GolarchError>>()?;

    fs::create_dir_all(&output_dir)?;

    let mut written = Vec::new();
    for (architecture, style) in styles {
        let diagram = architecture.diagram();
        let path = output_dir.join(format!("{}.svg", architecture.slug()));

        renderer.export_svg(&diagram, &style, &path)?;

        info!(
            diagram = architecture.slug(),
            output_file = path.display().to_string();
            "SVG exported successfully"
        );
        written.push(path);
    }

    Ok(written)
}
