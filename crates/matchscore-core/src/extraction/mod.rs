pub mod native;
pub mod pdftotext;

use crate::error::MatchError;
use crate::model::{Document, DocumentFormat};

/// Text extracted from a single page of a PDF.
#[derive(Debug, Clone)]
pub struct PageContent {
    pub page_number: usize,
    pub text: String,
}

/// Trait for PDF text extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Extract text content from PDF bytes, returning one PageContent per page.
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, MatchError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Turn a document into one flat string.
///
/// PDF pages are concatenated in page order with no separator. An empty
/// result (no pages, or pages with only whitespace) is reported as an
/// extraction failure so callers never score a blank document.
pub fn extract_text(
    document: Document,
    extractor: &dyn PdfExtractor,
) -> Result<String, MatchError> {
    let text = match document.format {
        DocumentFormat::PlainText => String::from_utf8_lossy(&document.bytes).into_owned(),
        DocumentFormat::Pdf => {
            let mut pages = extractor.extract_pages(&document.bytes)?;
            pages.sort_by_key(|p| p.page_number);
            tracing::debug!(
                backend = extractor.backend_name(),
                pages = pages.len(),
                "extracted pdf pages"
            );
            pages.into_iter().map(|p| p.text).collect::<String>()
        }
    };

    if text.trim().is_empty() {
        return Err(MatchError::Extraction(
            "no text found. Scanned or image-only documents are not supported".into(),
        ));
    }

    Ok(text)
}
