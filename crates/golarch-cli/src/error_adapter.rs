//! Error adapter for converting GolarchError to miette diagnostics.
//!
//! The library reports plain [`thiserror`] errors. This module gives each
//! variant a stable diagnostic code and, where the user can act on it, a
//! help line for miette's report.

use std::fmt;

use miette::{Diagnostic, LabeledSpan};

use golarch::GolarchError;

/// Adapter presenting a [`GolarchError`] as a miette diagnostic.
pub struct ErrorAdapter<'a>(pub &'a GolarchError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl Diagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            GolarchError::Io(_) => "golarch::io",
            GolarchError::Graph(_) => "golarch::graph",
            GolarchError::Config(_) => "golarch::config",
            GolarchError::Export(_) => "golarch::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            GolarchError::Graph(_) => {
                "every edge must connect two distinct nodes declared exactly once"
            }
            GolarchError::Config(_) => {
                "check the configuration file; colors use CSS syntax and sizes must be positive"
            }
            GolarchError::Io(_) | GolarchError::Export(_) => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use golarch::GraphError;

    use super::*;

    fn code(err: &GolarchError) -> Option<String> {
        ErrorAdapter(err).code().map(|c| c.to_string())
    }

    #[test]
    fn test_codes_per_variant() {
        let io = GolarchError::Io(io::Error::other("disk full"));
        let graph = GolarchError::Graph(GraphError::DuplicateNode("API".to_string()));
        let config = GolarchError::Config("bad color".to_string());
        let export = GolarchError::Export(Box::new(io::Error::other("closed")));

        assert_eq!(code(&io).as_deref(), Some("golarch::io"));
        assert_eq!(code(&graph).as_deref(), Some("golarch::graph"));
        assert_eq!(code(&config).as_deref(), Some("golarch::config"));
        assert_eq!(code(&export).as_deref(), Some("golarch::export"));
    }

    #[test]
    fn test_help_only_where_actionable() {
        let config = GolarchError::Config("bad color".to_string());
        let io = GolarchError::Io(io::Error::other("disk full"));

        assert!(ErrorAdapter(&config).help().is_some());
        assert!(ErrorAdapter(&io).help().is_none());
    }

    #[test]
    fn test_display_matches_library_error() {
        let err = GolarchError::Config("bad color".to_string());
        assert_eq!(
            ErrorAdapter(&err).to_string(),
            "Configuration error: bad color"
        );
    }

    #[test]
    fn test_report_renders() {
        let err = GolarchError::Config("layout.scale must be a positive number".to_string());
        let mut writer = String::new();
        miette::GraphicalReportHandler::new()
            .render_report(&mut writer, &ErrorAdapter(&err))
            .unwrap();

        assert!(writer.contains("golarch::config"));
        assert!(writer.contains("layout.scale"));
    }
}
