//! Error types for raintrap operations.
//!
//! This module provides the main error type [`RaintrapError`] which wraps
//! the error conditions that can occur while turning height text into a
//! rendered chart.

use std::io;

use thiserror::Error;

use raintrap_parser::error::ParseError;

/// The main error type for raintrap operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant carries structured diagnostics with source spans
/// alongside the original input text, so callers can render rich error
/// reports pointing at the offending entries.
#[derive(Debug, Error)]
pub enum RaintrapError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Layout error: {0}")]
    Layout(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for RaintrapError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl From<crate::layout::LayoutError> for RaintrapError {
    fn from(error: crate::layout::LayoutError) -> Self {
        Self::Layout(error.to_string())
    }
}

impl RaintrapError {
    /// Create a new `Parse` error with the associated source text.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
