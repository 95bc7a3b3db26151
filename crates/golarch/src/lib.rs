//! golarch - Architecture diagrams for the Game of Life API.
//!
//! Builds the monolithic and microservices diagrams, places their nodes at
//! fixed coordinates and renders them to standalone SVG documents.

pub mod catalog;
pub mod config;
pub mod diagram;
pub mod layout;
pub mod style;

mod error;
mod export;

pub use golarch_core::{color, draw, geometry};

pub use catalog::Architecture;
pub use diagram::{Diagram, GraphBuilder, GraphError};
pub use error::GolarchError;
pub use style::RenderStyle;

use std::path::Path;

use log::{debug, info, trace};

use config::AppConfig;
use export::Exporter;
use layout::ManualLayout;

/// Renders diagrams to SVG.
///
/// Holds the application configuration and resolves styles and layout from
/// it for each render.
///
/// # Examples
///
/// ```rust
/// use golarch::{Architecture, DiagramRenderer};
///
/// let renderer = DiagramRenderer::default();
/// let style = renderer.style_for(Architecture::Monolithic).unwrap();
/// let svg = renderer
///     .render_svg(&Architecture::Monolithic.diagram(), &style)
///     .unwrap();
/// assert!(svg.contains("Monolithic Architecture"));
/// ```
#[derive(Debug, Default)]
pub struct DiagramRenderer {
    config: AppConfig,
}

impl DiagramRenderer {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Resolves the render style for `architecture` from the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GolarchError::Config`] for an invalid color or size.
    pub fn style_for(&self, architecture: Architecture) -> Result<RenderStyle, GolarchError> {
        self.config
            .render_style(architecture)
            .map_err(GolarchError::Config)
    }

    /// Builds the manual layout from the `[layout]` section.
    ///
    /// # Errors
    ///
    /// Returns [`GolarchError::Config`] for a non-positive scale or a negative
    /// margin.
    pub fn layout(&self) -> Result<ManualLayout, GolarchError> {
        let layout = self.config.layout();
        let scale = layout.scale().map_err(GolarchError::Config)?;
        let margin = layout.margin().map_err(GolarchError::Config)?;
        debug!(scale, margin; "Layout configured");
        Ok(ManualLayout::new(scale, margin))
    }

    /// Render a diagram to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns `GolarchError` for invalid layout settings or rendering errors.
    pub fn render_svg(&self, diagram: &Diagram, style: &RenderStyle) -> Result<String, GolarchError> {
        info!(diagram = diagram.title(); "Rendering diagram");
        trace!(diagram:?; "Diagram to render");

        let placed = self.layout()?.place(diagram, style);
        let svg = export::svg::Svg::new(style).render_string(&placed)?;

        info!(bytes = svg.len(); "SVG rendered successfully");
        Ok(svg)
    }

    /// Render a diagram and write it to `path`.
    ///
    /// # Errors
    ///
    /// Returns `GolarchError` for invalid layout settings, rendering errors or
    /// a file that cannot be written.
    pub fn export_svg(
        &self,
        diagram: &Diagram,
        style: &RenderStyle,
        path: &Path,
    ) -> Result<(), GolarchError> {
        info!(diagram = diagram.title(); "Exporting diagram");
        trace!(diagram:?; "Diagram to export");

        let placed = self.layout()?.place(diagram, style);
        export::svg::Svg::new(style).export_diagram(&placed, path)?;

        Ok(())
    }

    /// Builds one architecture and renders it with its configured style.
    ///
    /// # Errors
    ///
    /// See [`DiagramRenderer::style_for`] and [`DiagramRenderer::render_svg`].
    pub fn render_architecture(&self, architecture: Architecture) -> Result<String, GolarchError> {
        let style = self.style_for(architecture)?;
        self.render_svg(&architecture.diagram(), &style)
    }
}
