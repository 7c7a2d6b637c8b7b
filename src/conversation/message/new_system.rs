use crate::response::AssistantContent;

use super::{Message, Role};

impl Message {
    pub fn new_system(text: String) -> Self {
        Self::with(Role::System, AssistantContent::PlainText(text), false)
    }
}
