//! Export of chart layouts to output documents.

pub(crate) mod svg;

/// Errors produced while realizing a layout into an output document.
#[derive(Debug)]
pub enum Error {
    Render(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}
