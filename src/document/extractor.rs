use thiserror::Error;

/// Opaque failure from the PDF library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ExtractError {
    message: String,
}

impl ExtractError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Page-by-page text extraction.
///
/// Given the raw file bytes, returns one string per page in page order.
pub trait PageExtractor: Send + Sync {
    fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<String>, ExtractError>;
}

/// [`PageExtractor`] backed by the `pdf-extract` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractor;

impl PageExtractor for PdfExtractor {
    fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<String>, ExtractError> {
        pdf_extract::extract_text_from_mem_by_pages(bytes)
            .map_err(|e| ExtractError::new(e.to_string()))
    }
}
