//! Labeled source spans attached to diagnostics.

use crate::span::Span;

/// A labeled span pointing at a location in the source input.
///
/// Labels come in two flavors: a primary label marks the span the
/// diagnostic is about, secondary labels add related context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    span: Span,
    message: String,
    primary: bool,
}

impl Label {
    /// Creates a primary label.
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            primary: true,
        }
    }

    /// Creates a secondary label.
    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            primary: false,
        }
    }

    /// Returns the span this label points at.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Returns the label message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns `true` if this is the primary label of its diagnostic.
    pub fn is_primary(&self) -> bool {
        self.primary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_label() {
        let label = Label::primary(Span::new(0..3), "here");
        assert!(label.is_primary());
        assert_eq!(label.message(), "here");
        assert_eq!(label.span(), Span::new(0..3));
    }

    #[test]
    fn test_secondary_label() {
        let label = Label::secondary(Span::new(5..8), "related");
        assert!(!label.is_primary());
    }
}
