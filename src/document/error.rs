use std::path::PathBuf;
use thiserror::Error;

use super::extractor::ExtractError;

/// The upload was rejected before reading it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("unsupported file type: {}", mime_type.as_deref().unwrap_or("unknown"))]
    InvalidType { mime_type: Option<String> },

    #[error("file is {size} bytes, limit is {limit} bytes")]
    TooLarge { size: u64, limit: u64 },
}

impl ValidationError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::InvalidType { .. } => "Please select a valid PDF file.",
            ValidationError::TooLarge { .. } => "File size must not exceed 20 MB.",
        }
    }
}

/// Reading the file or extracting its text failed.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("PDF extraction failed: {0}")]
    Extract(#[from] ExtractError),

    #[error("PDF contains no extractable text")]
    NoText,

    #[error("extraction worker failed: {0}")]
    Worker(String),
}

impl ExtractionError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ExtractionError::Read { .. } => "Failed to read the file.",
            ExtractionError::Extract(_) | ExtractionError::NoText | ExtractionError::Worker(_) => {
                "Failed to process PDF. Make sure it is a text-based PDF."
            }
        }
    }
}

/// Any failure of [`super::ingest`].
#[derive(Debug, Error)]
pub enum IngestError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}

impl IngestError {
    /// Message shown to the user. Diagnostics stay in the logs.
    pub fn user_message(&self) -> &'static str {
        match self {
            IngestError::Validation(err) => err.user_message(),
            IngestError::Extraction(err) => err.user_message(),
        }
    }
}
