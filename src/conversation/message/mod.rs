mod new_user;
mod new_assistant;
mod new_system;

use std::fmt;

use uuid::Uuid;

use crate::response::AssistantContent;

/// Time-ordered identifier, unique within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MessageId(Uuid);

impl MessageId {
    pub fn new() -> Self {
        MessageId(Uuid::now_v7())
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
    System,
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::System => "system",
        }
    }
}

/// One conversation entry. Never mutated once appended.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: MessageId,
    pub role: Role,
    pub content: AssistantContent,
    /// RFC 3339 creation time.
    pub timestamp: String,
    pub is_error: bool,
}

impl Message {
    fn with(role: Role, content: AssistantContent, is_error: bool) -> Self {
        Self {
            id: MessageId::new(),
            role,
            content,
            timestamp: chrono::Utc::now().to_rfc3339(),
            is_error,
        }
    }
}
