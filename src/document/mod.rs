//! Document ingestion.
//!
//! A file is validated (type and size), read in full, and handed to a
//! [`PageExtractor`]. Page texts are joined in page order into the
//! [`Document`] text.

mod error;
mod extractor;
mod ingest;

use std::sync::Arc;

pub use error::{ExtractionError, IngestError, ValidationError};
pub use extractor::{ExtractError, PageExtractor, PdfExtractor};
pub use ingest::{ingest, join_pages, UploadedFile, MAX_UPLOAD_BYTES, PDF_MIME_TYPE};

/// Extracted text of a successfully ingested PDF.
///
/// Immutable; a new upload replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    text: Arc<str>,
    file_name: String,
}

impl Document {
    pub fn new(text: impl Into<Arc<str>>, file_name: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            file_name: file_name.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Shared handle to the text, for handing to background requests.
    pub fn shared_text(&self) -> Arc<str> {
        Arc::clone(&self.text)
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}
