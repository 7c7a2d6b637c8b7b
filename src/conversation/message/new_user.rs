use crate::response::AssistantContent;

use super::{Message, Role};

impl Message {
    pub fn new_user(text: &str) -> Self {
        Self::with(Role::User, AssistantContent::text(text.trim()), false)
    }
}
