use std::sync::Arc;

use crate::{
    api::ContractApi,
    conversation::{Conversation, ConversationKind, ConversationState},
    viewer::DocumentViewer,
};

impl Conversation {
    pub fn new(kind: ConversationKind, api: Arc<dyn ContractApi>) -> Self {
        Self {
            kind,
            api,
            messages: Vec::new(),
            state: ConversationState::Idle,
            viewer: kind.has_viewer().then(DocumentViewer::new),
            viewer_visible: false,
            highlight: None,
            focused_excerpt: None,
        }
    }
}
