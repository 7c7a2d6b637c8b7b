use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssistantError {
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("API error: {status} {reason}")]
    ApiStatus { status: u16, reason: String },

    #[error("Upload error: {status} {reason}")]
    UploadStatus { status: u16, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Unsupported file type: {0}")]
    UnsupportedFile(String),

    #[error("{0}")]
    DocumentError(String),
}

impl From<&str> for AssistantError {
    fn from(error: &str) -> Self {
        AssistantError::DocumentError(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AssistantError>;
