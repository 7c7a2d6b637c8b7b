use std::time::Instant;

use crate::{
    conversation::{Conversation, HighlightRequest},
    log_debug,
};

impl Conversation {
    /// Opens the paired viewer and highlights `text` for the highlight window.
    ///
    /// A newer request replaces an older one outright, so the older one's expiry
    /// can never clear it. Returns false on pages without a viewer.
    pub fn request_highlight(&mut self, text: &str, now: Instant) -> bool {
        if self.viewer.is_none() || text.trim().is_empty() {
            return false;
        }

        log_debug!("Highlight requested: {:?}", text);
        self.viewer_visible = true;
        self.highlight = Some(HighlightRequest::new(text, now));
        true
    }

    /// Drops the active highlight once its window has passed. Returns true if one was cleared.
    pub fn expire_highlight(&mut self, now: Instant) -> bool {
        match &self.highlight {
            Some(request) if request.is_expired(now) => {
                self.highlight = None;
                true
            }
            _ => false,
        }
    }

    pub fn active_highlight(&self) -> Option<&str> {
        self.highlight.as_ref().map(|r| r.query.as_str())
    }
}
