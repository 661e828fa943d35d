//! Error types for icon resolution and markup parsing

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// Errors raised while resolving a named icon
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IconError {
    /// The requested name is not part of the icon catalog
    #[error("icon not found in catalog: {name}")]
    Unresolved { name: String },
}

impl IconError {
    /// Create an unresolved icon error
    pub fn unresolved(name: impl Into<String>) -> Self {
        Self::Unresolved { name: name.into() }
    }
}

/// Errors raised while reading the root tag of a fragment
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarkupError {
    #[error("Parse error at {span:?}: {message}")]
    Syntax {
        span: Span,
        message: String,
        expected: Vec<String>,
    },

    /// The fragment contains no opening tag at all
    #[error("fragment has no root tag")]
    NoRootTag,
}

impl MarkupError {
    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let mut buf = Vec::new();
        match self {
            MarkupError::Syntax {
                span,
                message,
                expected,
            } => {
                let expected_str = if expected.is_empty() {
                    String::new()
                } else {
                    format!("\nExpected: {}", expected.join(", "))
                };

                let written = Report::build(ReportKind::Error, filename, span.start)
                    .with_message(message)
                    .with_label(
                        Label::new((filename, span.clone()))
                            .with_message(format!("{}{}", message, expected_str))
                            .with_color(Color::Red),
                    )
                    .finish()
                    .write((filename, Source::from(source)), &mut buf);
                if written.is_err() {
                    return self.to_string();
                }
            }
            MarkupError::NoRootTag => return format!("{}: {}", filename, self),
        }
        String::from_utf8_lossy(&buf).into_owned()
    }
}
