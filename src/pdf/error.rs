// src/pdf/error.rs
use thiserror::Error;

/// Raised when the PDF cannot be produced. No partial output accompanies it.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("PDF serialization failed: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("I/O error while writing PDF: {0}")]
    Io(#[from] std::io::Error),

    #[error("Render worker did not complete: {0}")]
    Aborted(String),
}
