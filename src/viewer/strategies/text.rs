use crate::{
    error::Result,
    viewer::DocumentViewStrategy,
};

/// Form feed separates pages in plain-text exports.
const PAGE_BREAK: char = '\u{0c}';

#[derive(Debug)]
pub struct TextViewStrategy;

impl DocumentViewStrategy for TextViewStrategy {
    fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<String>> {
        let text = String::from_utf8_lossy(bytes);
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(text.split(PAGE_BREAK).map(str::to_string).collect())
    }

    fn get_supported_extensions(&self) -> Vec<&'static str> {
        vec!["txt", "md"]
    }
}
