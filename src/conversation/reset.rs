use crate::conversation::{Conversation, ConversationState};

impl Conversation {
    /// Clears the conversation. The viewer keeps its document.
    pub fn reset(&mut self) {
        self.messages.clear();
        self.state = ConversationState::Idle;
        self.highlight = None;
        self.focused_excerpt = None;
    }
}
