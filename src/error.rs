//! Error types for the roster extraction library.
//!
//! Only document-level and batch-level conditions are errors. A line that does
//! not produce a name is a normal outcome and never surfaces here.

/// Result type alias for roster extraction operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while extracting names from documents.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed or serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV sheet could not be written
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Input file type is not accepted by any text source
    #[error("Unsupported input format: {0}")]
    UnsupportedFormat(String),

    /// The text source failed for one document
    #[error("Text extraction failed for '{source_name}': {reason}")]
    Extraction {
        /// Document the failure belongs to
        source_name: String,
        /// What went wrong
        reason: String,
    },

    /// An external OCR tool is missing
    #[error("OCR unavailable: {0}")]
    OcrUnavailable(String),

    /// No document in the batch produced a single name
    #[error("No valid documents: {failed} of {attempted} failed extraction and none yielded names")]
    NoValidDocuments {
        /// Documents submitted to the batch
        attempted: usize,
        /// Documents whose extraction failed
        failed: usize,
    },

    /// PDF parsing error
    #[cfg(feature = "pdf")]
    #[error("PDF error: {0}")]
    Pdf(#[from] pdf_oxide::error::Error),
}

impl Error {
    /// Build an extraction error for the named document.
    pub fn extraction(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Extraction {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }
}
