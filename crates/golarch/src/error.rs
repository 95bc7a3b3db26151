//! Error types for diagram rendering.
//!
//! [`GolarchError`] is the single error returned by the public API. It wraps
//! graph validation failures, configuration problems and export failures.

use std::io;

use thiserror::Error;

use crate::diagram::GraphError;

/// The main error type for golarch operations.
#[derive(Debug, Error)]
pub enum GolarchError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for GolarchError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}
