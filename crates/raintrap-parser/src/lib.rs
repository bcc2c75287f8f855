//! Parser for raintrap block-height input.
//!
//! This crate is the input boundary of the raintrap pipeline: it turns
//! raw comma-separated text such as `3, 0, 2, 0, 4` into a validated
//! [`HeightSequence`], or a [`ParseError`](error::ParseError) carrying one
//! diagnostic per offending entry.
//!
//! # Example
//!
//! ```
//! let heights = raintrap_parser::parse("3,0,2,0,4").unwrap();
//! assert_eq!(heights.values(), &[3, 0, 2, 0, 4]);
//!
//! let err = raintrap_parser::parse("3,x,4").unwrap_err();
//! assert_eq!(err.diagnostics().len(), 1);
//! ```

pub mod error;

mod parser;
mod span;

#[cfg(test)]
mod parser_tests;

pub use span::{Span, Spanned};

use raintrap_core::profile::HeightSequence;

use error::ParseError;

/// Parse comma-separated height text into a [`HeightSequence`].
///
/// Entries may be padded with ASCII whitespace. Every entry is checked and
/// all invalid entries are reported together, each as its own
/// [`Diagnostic`](error::Diagnostic) with a source span.
///
/// # Errors
///
/// Returns [`ParseError`] when the input is empty, or when any entry is
/// not a decimal `u32` (non-numeric, negative, too large, or missing).
pub fn parse(source: &str) -> Result<HeightSequence, ParseError> {
    parser::parse_heights(source)
}
