//! Exporters that turn a placed diagram into an output format.

pub mod svg;

use std::{io, path::Path};

use thiserror::Error;

use crate::layout::PlacedDiagram;

/// Writes a placed diagram to a file.
pub trait Exporter {
    fn export_diagram(&self, diagram: &PlacedDiagram<'_>, path: &Path) -> Result<(), Error>;
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Render error: {0}")]
    Render(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
