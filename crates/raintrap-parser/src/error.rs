//! Error and diagnostic system for the raintrap input parser.
//!
//! This module provides an error handling system with:
//! - Error codes for documentation and searchability
//! - Labeled spans pointing at the offending input
//! - Severity levels
//! - Diagnostic collector for accumulating multiple errors
//!
//! # Overview
//!
//! The error system is built around the [`Diagnostic`] type, which
//! represents a single error or warning with optional error code, source
//! locations, and help text. Multiple diagnostics are wrapped in
//! [`ParseError`] for returning from the parse entry point, so every bad
//! entry in the input is reported in one pass.
//!
//! # Example
//!
//! ```
//! # use raintrap_parser::error::{Diagnostic, ErrorCode};
//! # use raintrap_parser::Span;
//!
//! let diag = Diagnostic::error("`-2` is not a valid block height")
//!     .with_code(ErrorCode::E003)
//!     .with_label(Span::new(2..4), "negative height")
//!     .with_help("block heights must be zero or greater");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
pub use severity::Severity;
