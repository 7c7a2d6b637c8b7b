use std::collections::HashMap;
use std::sync::Arc;

use crate::{
    error::{AssistantError, Result},
    viewer::{
        strategies::{PdfViewStrategy, TextViewStrategy},
        DocumentSource,
        DocumentViewStrategy,
    },
};

/// Extension-keyed strategy registry. Cheap to clone into a blocking task.
#[derive(Debug, Clone)]
pub struct PageExtractor {
    strategies: Arc<HashMap<String, Box<dyn DocumentViewStrategy>>>,
}

impl PageExtractor {
    pub fn new() -> Self {
        let mut strategies: HashMap<String, Box<dyn DocumentViewStrategy>> = HashMap::new();

        for ext in PdfViewStrategy.get_supported_extensions() {
            strategies.insert(ext.to_string(), Box::new(PdfViewStrategy));
        }

        for ext in TextViewStrategy.get_supported_extensions() {
            strategies.insert(ext.to_string(), Box::new(TextViewStrategy));
        }

        Self { strategies: Arc::new(strategies) }
    }

    /// Blocking: reads the source and extracts its pages.
    pub fn extract(&self, source: &DocumentSource) -> Result<Vec<String>> {
        let extension = source.extension();
        let strategy = self.strategies.get(&extension)
            .ok_or_else(|| AssistantError::UnsupportedFile(extension.clone()))?;

        let bytes = source.read_bytes()?;
        strategy.extract_pages(&bytes)
    }
}

impl Default for PageExtractor {
    fn default() -> Self {
        Self::new()
    }
}
