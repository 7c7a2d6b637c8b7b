use crate::response::AssistantContent;

use super::{Message, Role};

impl Message {
    pub fn new_assistant(content: AssistantContent) -> Self {
        Self::with(Role::Assistant, content, false)
    }

    pub fn new_error(text: &str) -> Self {
        Self::with(Role::Assistant, AssistantContent::text(text), true)
    }
}
