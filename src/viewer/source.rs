use std::borrow::Cow;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::Result;

/// Where a document comes from: a served path, or a file the user just picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    Path(PathBuf),
    Memory { name: String, bytes: Arc<Vec<u8>> },
}

impl DocumentSource {
    pub fn memory(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        DocumentSource::Memory { name: name.into(), bytes: Arc::new(bytes) }
    }

    pub fn extension(&self) -> String {
        let name = match self {
            DocumentSource::Path(path) => path.as_path(),
            DocumentSource::Memory { name, .. } => Path::new(name),
        };
        name.extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_lowercase()
    }

    pub fn read_bytes(&self) -> Result<Cow<'_, [u8]>> {
        match self {
            DocumentSource::Path(path) => Ok(Cow::Owned(std::fs::read(path)?)),
            DocumentSource::Memory { bytes, .. } => Ok(Cow::Borrowed(bytes.as_slice())),
        }
    }
}

impl fmt::Display for DocumentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentSource::Path(path) => write!(f, "{}", path.display()),
            DocumentSource::Memory { name, .. } => write!(f, "{}", name),
        }
    }
}
