use std::fmt::Debug;

use crate::error::Result;

/// Extracts the text layer of one file type, one string per page.
pub trait DocumentViewStrategy: Debug + Send + Sync {
    fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<String>>;
    fn get_supported_extensions(&self) -> Vec<&'static str>;
}
