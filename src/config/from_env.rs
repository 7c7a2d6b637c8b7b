use std::path::PathBuf;
use std::time::Duration;

use super::ClientConfig;

impl ClientConfig {
    /// Defaults, overridden by `CONTRACT_API_URL`, `CONTRACT_API_TIMEOUT_SECS`,
    /// `CONTRACT_SAMPLE_DOCUMENT` and `CONTRACT_LOG_DIR` when set.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ClientConfig::default();

        if let Some(url) = lookup("CONTRACT_API_URL").filter(|v| !v.trim().is_empty()) {
            config = config.with_base_url(url.trim());
        }

        if let Some(secs) = lookup("CONTRACT_API_TIMEOUT_SECS").and_then(|v| v.trim().parse::<u64>().ok()) {
            if secs > 0 {
                config = config.with_timeout(Duration::from_secs(secs));
            }
        }

        if let Some(path) = lookup("CONTRACT_SAMPLE_DOCUMENT").filter(|v| !v.is_empty()) {
            config.sample_document = PathBuf::from(path);
        }

        if let Some(dir) = lookup("CONTRACT_LOG_DIR").filter(|v| !v.is_empty()) {
            config.log_dir = PathBuf::from(dir);
        }

        config
    }
}
