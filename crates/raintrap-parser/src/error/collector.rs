//! Accumulates diagnostics across a whole validation pass.

use crate::error::{Diagnostic, ParseError};

/// Collects diagnostics so that every bad entry is reported in one pass
/// instead of stopping at the first.
#[derive(Debug, Default)]
pub(crate) struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    /// Creates an empty collector.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Records a diagnostic.
    pub(crate) fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Returns `true` if any error-severity diagnostic was recorded.
    pub(crate) fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity().is_error())
    }

    /// Finishes the pass: returns `value` if no errors were recorded,
    /// otherwise all collected diagnostics as a [`ParseError`].
    pub(crate) fn finish<T>(self, value: T) -> Result<T, ParseError> {
        if self.has_errors() {
            Err(ParseError::new(self.diagnostics))
        } else {
            Ok(value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collector_empty_finishes_ok() {
        let collector = DiagnosticCollector::new();
        assert!(!collector.has_errors());
        assert_eq!(collector.finish(42).unwrap(), 42);
    }

    #[test]
    fn test_collector_with_errors_finishes_err() {
        let mut collector = DiagnosticCollector::new();
        collector.report(Diagnostic::error("bad"));
        collector.report(Diagnostic::error("worse"));

        assert!(collector.has_errors());
        let err = collector.finish(42).unwrap_err();
        assert_eq!(err.diagnostics().len(), 2);
    }

    #[test]
    fn test_collector_warnings_do_not_fail() {
        let mut collector = DiagnosticCollector::new();
        collector.report(Diagnostic::warning("suspicious"));

        assert!(!collector.has_errors());
        assert!(collector.finish(()).is_ok());
    }
}
