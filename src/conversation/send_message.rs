use serde_json::Value;

use crate::{
    conversation::{Conversation, ConversationState, Message, ERROR_APOLOGY},
    error::Result,
    log_error, log_info,
    response::normalize,
};

impl Conversation {
    /// Records the user turn and enters `Sending`.
    ///
    /// Returns the query to submit, or `None` when the text is blank or a
    /// request is already in flight (nothing is appended in that case).
    pub fn begin_send(&mut self, text: &str) -> Option<String> {
        let query = text.trim();
        if query.is_empty() || self.is_busy() {
            return None;
        }

        self.messages.push(Message::new_user(query));
        self.state = ConversationState::Sending;
        self.focused_excerpt = None;
        Some(query.to_string())
    }

    /// Appends the assistant turn for a finished query and returns to `Idle`.
    pub fn complete_send(&mut self, result: Result<Value>) {
        let message = match result {
            Ok(payload) => Message::new_assistant(normalize(payload)),
            Err(e) => {
                log_error!("Error generating response: {}", e);
                Message::new_error(ERROR_APOLOGY)
            }
        };

        log_info!("{} reply appended ({})", self.kind.title(), if message.is_error { "error" } else { "ok" });
        self.messages.push(message);
        self.state = ConversationState::Idle;
    }

    /// Sends `text` and waits for the reply. Returns whether anything was sent.
    pub async fn send_message(&mut self, text: &str) -> bool {
        let Some(query) = self.begin_send(text) else {
            return false;
        };

        let result = self.api.generate_response(&query).await;
        self.complete_send(result);
        true
    }
}
