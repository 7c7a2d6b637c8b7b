//! Per-page conversation controller: message list, in-flight state, and the
//! highlight handshake with the paired document viewer.

mod message;
mod kind;
mod highlight;
mod new;
mod send_message;
mod upload_files;
mod request_highlight;
mod excerpt_focus;
mod reset;

#[cfg(test)]
pub(crate) mod test_support;

use std::sync::Arc;

use crate::{
    api::ContractApi,
    viewer::DocumentViewer,
};

pub use highlight::{HighlightRequest, HIGHLIGHT_WINDOW};
pub use kind::ConversationKind;
pub use message::{Message, MessageId, Role};
pub use excerpt_focus::ExcerptTarget;
pub use upload_files::{upload_prompt, UploadOutcome};

pub const ERROR_APOLOGY: &str = "Sorry, I encountered an error processing your request. Please try again.";
pub const UPLOAD_FAILED_ALERT: &str = "Failed to upload files. Please try again.";
pub const UPLOAD_STATUS: &str = "Uploading and processing files...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversationState {
    Idle,
    Sending,
    Uploading,
}

pub struct Conversation {
    kind: ConversationKind,
    api: Arc<dyn ContractApi>,
    messages: Vec<Message>,
    state: ConversationState,
    /// Paired viewer; only the analysis page has one.
    viewer: Option<DocumentViewer>,
    viewer_visible: bool,
    highlight: Option<HighlightRequest>,
    focused_excerpt: Option<usize>,
}

impl Conversation {
    pub fn kind(&self) -> ConversationKind {
        self.kind
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn state(&self) -> ConversationState {
        self.state
    }

    pub fn is_busy(&self) -> bool {
        self.state != ConversationState::Idle
    }

    /// The transient line shown while a request is in flight.
    pub fn status_line(&self) -> Option<&'static str> {
        match self.state {
            ConversationState::Idle => None,
            ConversationState::Sending => Some(self.kind.status_line()),
            ConversationState::Uploading => Some(UPLOAD_STATUS),
        }
    }

    pub fn api(&self) -> Arc<dyn ContractApi> {
        self.api.clone()
    }

    pub fn viewer(&self) -> Option<&DocumentViewer> {
        self.viewer.as_ref()
    }

    pub fn viewer_mut(&mut self) -> Option<&mut DocumentViewer> {
        self.viewer.as_mut()
    }

    pub fn is_viewer_visible(&self) -> bool {
        self.viewer.is_some() && self.viewer_visible
    }

    pub fn toggle_viewer(&mut self) {
        if self.viewer.is_some() {
            self.viewer_visible = !self.viewer_visible;
        }
    }

    pub fn close_viewer(&mut self) {
        self.viewer_visible = false;
    }
}

impl std::fmt::Debug for Conversation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Conversation")
            .field("kind", &self.kind)
            .field("messages", &self.messages.len())
            .field("state", &self.state)
            .field("viewer_visible", &self.viewer_visible)
            .field("highlight", &self.highlight)
            .finish()
    }
}
