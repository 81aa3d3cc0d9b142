//! Error adapter for converting TrellisError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error type
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use trellis::TrellisError;

/// Adapter rendering a [`TrellisError`] as a miette diagnostic.
pub struct ErrorAdapter<'a>(pub &'a TrellisError);

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
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            TrellisError::Io(_) => "trellis::io",
            TrellisError::Config(_) => "trellis::config",
            TrellisError::Style(_) => "trellis::style",
            TrellisError::UnknownDiagram { .. } => "trellis::unknown_diagram",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            TrellisError::UnknownDiagram { .. } => "run `trellis --list` to see every diagram",
            TrellisError::Style(_) => "colors accept any CSS color, e.g. `#fafafa` or `navy`",
            _ => return None,
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
    use super::*;

    fn code_of(err: &TrellisError) -> Option<String> {
        ErrorAdapter(err).code().map(|code| code.to_string())
    }

    #[test]
    fn test_codes_per_variant() {
        let io = TrellisError::Io(std::io::Error::other("disk full"));
        let config = TrellisError::Config("bad".to_string());
        let style = TrellisError::Style("bad".to_string());
        let unknown = TrellisError::UnknownDiagram {
            name: "nope".to_string(),
            expected: "arch-hal".to_string(),
        };

        assert_eq!(code_of(&io).as_deref(), Some("trellis::io"));
        assert_eq!(code_of(&config).as_deref(), Some("trellis::config"));
        assert_eq!(code_of(&style).as_deref(), Some("trellis::style"));
        assert_eq!(code_of(&unknown).as_deref(), Some("trellis::unknown_diagram"));
    }

    #[test]
    fn test_display_and_help() {
        let err = TrellisError::UnknownDiagram {
            name: "nope".to_string(),
            expected: "arch-hal".to_string(),
        };
        let adapter = ErrorAdapter(&err);

        assert_eq!(adapter.to_string(), err.to_string());
        assert!(adapter.help().is_some());
        assert!(ErrorAdapter(&TrellisError::Config("x".to_string())).help().is_none());
    }

    #[test]
    fn test_renders_with_graphical_handler() {
        let err = TrellisError::Style("text_color: invalid color".to_string());
        let mut out = String::new();
        miette::GraphicalReportHandler::new_themed(miette::GraphicalTheme::unicode_nocolor())
            .render_report(&mut out, &ErrorAdapter(&err))
            .unwrap();

        assert!(out.contains("trellis::style"));
        assert!(out.contains("text_color: invalid color"));
    }
}
