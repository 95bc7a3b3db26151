//! Command-line argument definitions for the golarch CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select which diagrams to render, where to write
//! them, the configuration file and the logging verbosity.

use clap::{Parser, ValueEnum};

use golarch::Architecture;

/// Command-line arguments for the architecture diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory the SVG files are written to, created if missing
    #[arg(short, long, default_value = ".")]
    pub output_dir: String,

    /// Diagram to render; repeat to render several (default: all)
    #[arg(short, long = "diagram", value_enum)]
    pub diagrams: Vec<DiagramArg>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Architectures to render, in canonical order and without repeats.
    pub fn architectures(&self) -> Vec<Architecture> {
        Architecture::ALL
            .into_iter()
            .filter(|arch| {
                self.diagrams.is_empty()
                    || self.diagrams.iter().any(|d| Architecture::from(*d) == *arch)
            })
            .collect()
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagramArg {
    Monolithic,
    Microservices,
}

impl From<DiagramArg> for Architecture {
    fn from(arg: DiagramArg) -> Self {
        match arg {
            DiagramArg::Monolithic => Architecture::Monolithic,
            DiagramArg::Microservices => Architecture::Microservices,
        }
    }
}
