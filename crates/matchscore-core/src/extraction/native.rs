use crate::error::MatchError;
use crate::extraction::{PageContent, PdfExtractor};
use std::panic;

/// In-process PDF extraction backed by the `pdf-extract` crate.
///
/// Needs no external binary. The whole document comes back as one page.
#[derive(Debug, Default)]
pub struct NativePdfExtractor;

impl NativePdfExtractor {
    pub fn new() -> Self {
        NativePdfExtractor
    }
}

impl PdfExtractor for NativePdfExtractor {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, MatchError> {
        // pdf-extract panics on some malformed inputs instead of erroring
        let text = panic::catch_unwind(|| pdf_extract::extract_text_from_mem(pdf_bytes))
            .map_err(|_| MatchError::Extraction("malformed PDF structure".into()))?
            .map_err(|e| MatchError::Extraction(e.to_string()))?;

        Ok(vec![PageContent {
            page_number: 1,
            text,
        }])
    }

    fn backend_name(&self) -> &str {
        "pdf-extract"
    }
}
