use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::io::AsyncReadExt;

use super::error::{ExtractionError, IngestError, ValidationError};
use super::extractor::PageExtractor;
use super::Document;

/// The only accepted upload type.
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// Upload size limit: 20 MiB.
pub const MAX_UPLOAD_BYTES: u64 = 20 * 1024 * 1024;

/// A file picked for upload, as reported by the file system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub path: PathBuf,
    pub file_name: String,
    /// MIME type guessed from the file extension.
    pub mime_type: Option<String>,
    pub size: u64,
}

impl UploadedFile {
    /// Stat `path` and guess its type.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ExtractionError> {
        let path = path.as_ref();
        let metadata = std::fs::metadata(path).map_err(|source| ExtractionError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let mime_type = mime_guess::from_path(path)
            .first()
            .map(|mime| mime.essence_str().to_string());

        Ok(Self {
            path: path.to_path_buf(),
            file_name,
            mime_type,
            size: metadata.len(),
        })
    }

    /// Check type and size without touching the contents.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.mime_type.as_deref() != Some(PDF_MIME_TYPE) {
            return Err(ValidationError::InvalidType {
                mime_type: self.mime_type.clone(),
            });
        }
        check_size(self.size)
    }
}

fn check_size(size: u64) -> Result<(), ValidationError> {
    if size > MAX_UPLOAD_BYTES {
        return Err(ValidationError::TooLarge {
            size,
            limit: MAX_UPLOAD_BYTES,
        });
    }
    Ok(())
}

/// Validate, read and extract `file` into a [`Document`].
///
/// Extraction runs on the blocking pool; a panic inside the PDF library
/// surfaces as [`ExtractionError::Worker`].
pub async fn ingest(
    file: UploadedFile,
    extractor: Arc<dyn PageExtractor>,
) -> Result<Document, IngestError> {
    file.validate()?;

    let bytes = read_capped(&file.path).await.map_err(|source| ExtractionError::Read {
        path: file.path.clone(),
        source,
    })?;
    // The file may have grown since it was picked.
    check_size(bytes.len() as u64)?;

    let pages = tokio::task::spawn_blocking(move || extractor.extract_pages(&bytes))
        .await
        .map_err(|e| ExtractionError::Worker(e.to_string()))?
        .map_err(ExtractionError::from)?;

    let text = join_pages(&pages);
    if text.trim().is_empty() {
        return Err(ExtractionError::NoText.into());
    }

    tracing::info!(
        file = %file.file_name,
        pages = pages.len(),
        chars = text.len(),
        "Document ingested"
    );
    Ok(Document::new(text, file.file_name))
}

/// Read at most one byte past the limit, so an oversized file is never
/// loaded whole.
async fn read_capped(path: &Path) -> std::io::Result<Vec<u8>> {
    let file = tokio::fs::File::open(path).await?;
    let mut bytes = Vec::new();
    file.take(MAX_UPLOAD_BYTES + 1).read_to_end(&mut bytes).await?;
    Ok(bytes)
}

/// Join page texts in order, each followed by a newline.
pub fn join_pages(pages: &[String]) -> String {
    let mut text = String::with_capacity(pages.iter().map(|p| p.len() + 1).sum());
    for page in pages {
        text.push_str(page);
        text.push('\n');
    }
    text
}
