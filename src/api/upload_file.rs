use std::path::Path;

use crate::error::{AssistantError, Result};

/// Extensions the upload picker accepts.
pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["pdf", "doc", "docx"];

/// One file selected for upload, already read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self { name: name.into(), bytes }
    }

    pub async fn from_path(path: &Path) -> Result<Self> {
        let name = path.file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();

        if !Self::is_accepted(&name) {
            return Err(AssistantError::UnsupportedFile(name));
        }

        let bytes = tokio::fs::read(path).await?;
        Ok(Self { name, bytes })
    }

    pub fn is_accepted(name: &str) -> bool {
        Path::new(name).extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ACCEPTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
            .unwrap_or(false)
    }

    pub fn is_pdf(&self) -> bool {
        self.name.to_lowercase().ends_with(".pdf")
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}
