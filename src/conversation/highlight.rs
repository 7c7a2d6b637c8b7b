use std::time::{Duration, Instant};

/// How long a requested highlight stays on screen.
pub const HIGHLIGHT_WINDOW: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightRequest {
    pub query: String,
    pub expiry: Instant,
}

impl HighlightRequest {
    pub fn new(query: impl Into<String>, now: Instant) -> Self {
        Self {
            query: query.into(),
            expiry: now + HIGHLIGHT_WINDOW,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expiry
    }
}
