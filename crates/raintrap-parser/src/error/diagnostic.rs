//! The Diagnostic type for reporting input problems.

use std::fmt;

use crate::{
    error::{ErrorCode, Label, Severity},
    span::Span,
};

/// A single diagnostic message with optional code, spans, and help text.
///
/// Diagnostics are built incrementally with the `with_*` builder methods:
///
/// ```
/// # use raintrap_parser::error::{Diagnostic, ErrorCode};
/// # use raintrap_parser::Span;
/// let diag = Diagnostic::error("`x` is not a valid block height")
///     .with_code(ErrorCode::E002)
///     .with_label(Span::new(2..3), "expected a non-negative integer")
///     .with_help("heights are whole numbers, e.g. `3,0,2,0,4`");
///
/// assert_eq!(diag.code(), Some(ErrorCode::E002));
/// assert_eq!(diag.labels().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    message: String,
    severity: Severity,
    code: Option<ErrorCode>,
    labels: Vec<Label>,
    help: Option<String>,
}

impl Diagnostic {
    /// Creates a new error-severity diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
            code: None,
            labels: Vec::new(),
            help: None,
        }
    }

    /// Creates a new warning-severity diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Warning,
            code: None,
            labels: Vec::new(),
            help: None,
        }
    }

    /// Attaches an error code.
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Attaches a primary label pointing at the offending span.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(span, message));
        self
    }

    /// Attaches a secondary label with related context.
    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(span, message));
        self
    }

    /// Attaches a help message suggesting a fix.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Returns the diagnostic message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the severity of this diagnostic.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the error code, if one was attached.
    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    /// Returns all labels attached to this diagnostic.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Returns the help message, if one was attached.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

impl std::error::Error for Diagnostic {}
