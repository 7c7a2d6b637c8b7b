mod from_env;

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_SAMPLE_DOCUMENT: &str = "./sample-contract.pdf";
pub const DEFAULT_LOG_DIR: &str = "./logs";

/// Everything the client needs to reach the backend, handed to the app at construction.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub base_url: String,
    /// `None` waits for the backend indefinitely.
    pub timeout: Option<Duration>,
    /// Served document shown in the analysis viewer until a file is uploaded.
    pub sample_document: PathBuf,
    pub log_dir: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            sample_document: PathBuf::from(DEFAULT_SAMPLE_DOCUMENT),
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
