use gag::Gag;

use crate::{
    error::{AssistantError, Result},
    log_debug, log_warn,
    viewer::DocumentViewStrategy,
};

#[derive(Debug)]
pub struct PdfViewStrategy;

impl DocumentViewStrategy for PdfViewStrategy {
    fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<String>> {
        // pdf-extract panics on some malformed inputs; the hook's report stays off screen.
        let stderr_gag = Gag::stderr()
            .map_err(|e| log_debug!("Could not gag stderr for PDF extraction: {}", e))
            .ok();
        let extracted = std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(bytes));
        drop(stderr_gag);

        let extracted = extracted.map_err(|_| {
            log_warn!("PDF extraction panicked");
            AssistantError::DocumentError("Failed to load PDF".to_string())
        })?;

        extracted.map_err(|e| AssistantError::DocumentError(format!("Failed to load PDF: {}", e)))
    }

    fn get_supported_extensions(&self) -> Vec<&'static str> {
        vec!["pdf"]
    }
}
