use std::time::Instant;

use crate::{
    conversation::Conversation,
    render::{render_answer, Section},
    response::AssistantContent,
};

/// An excerpt in the message list that can be activated to highlight the document.
#[derive(Debug, Clone, PartialEq)]
pub struct ExcerptTarget {
    pub message_index: usize,
    pub text: String,
    pub page: Option<i64>,
}

impl Conversation {
    /// Every clickable excerpt, oldest first. Empty on pages without a viewer.
    pub fn excerpt_targets(&self) -> Vec<ExcerptTarget> {
        if self.viewer.is_none() {
            return Vec::new();
        }

        let mut targets = Vec::new();
        for (index, message) in self.messages.iter().enumerate() {
            let AssistantContent::Answer(answer) = &message.content else {
                continue;
            };
            for section in render_answer(answer, true) {
                if let (Some(text), Section::Excerpt(block)) = (section.highlight_target(), &section) {
                    targets.push(ExcerptTarget {
                        message_index: index,
                        text: text.to_string(),
                        page: block.page,
                    });
                }
            }
        }
        targets
    }

    pub fn cycle_excerpts(&mut self, direction: i32) {
        let len = self.excerpt_targets().len() as i32;
        if len == 0 {
            self.focused_excerpt = None;
            return;
        }

        match self.focused_excerpt {
            None => self.focused_excerpt = Some(if direction > 0 { 0 } else { (len - 1) as usize }),
            Some(index) => {
                let new_index = if direction > 0 {
                    (index as i32 + 1) % len
                } else {
                    (index as i32 - 1 + len) % len
                };
                self.focused_excerpt = Some(new_index as usize);
            }
        }
    }

    pub fn focused_excerpt(&self) -> Option<ExcerptTarget> {
        self.focused_excerpt
            .and_then(|idx| self.excerpt_targets().into_iter().nth(idx))
    }

    pub fn clear_excerpt_focus(&mut self) {
        self.focused_excerpt = None;
    }

    /// Requests a highlight for the focused excerpt, if any.
    pub fn activate_focused_excerpt(&mut self, now: Instant) -> bool {
        match self.focused_excerpt() {
            Some(target) => self.request_highlight(&target.text, now),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::conversation::{test_support::FakeApi, ConversationKind};

    async fn with_two_excerpts(kind: ConversationKind) -> Conversation {
        let api = FakeApi::sequence(vec![
            json!({"answer": "Net 30", "excerpt": "Payment Terms", "excerpt_page_no": 4}),
            json!("plain reply"),
            json!({"excerpt": "Limitation of Liability"}),
        ]);
        let mut conversation = Conversation::new(kind, api);
        for query in ["payment?", "hello", "liability?"] {
            conversation.send_message(query).await;
        }
        conversation
    }

    #[tokio::test]
    async fn test_targets_follow_message_order() {
        let conversation = with_two_excerpts(ConversationKind::Analysis).await;
        let targets = conversation.excerpt_targets();

        assert_eq!(targets.len(), 2);
        assert_eq!(targets[0], ExcerptTarget { message_index: 1, text: "Payment Terms".into(), page: Some(4) });
        assert_eq!(targets[1].message_index, 5);
        assert_eq!(targets[1].page, None);
    }

    #[tokio::test]
    async fn test_cycle_wraps_both_ways() {
        let mut conversation = with_two_excerpts(ConversationKind::Analysis).await;

        conversation.cycle_excerpts(-1);
        assert_eq!(conversation.focused_excerpt().map(|t| t.text), Some("Limitation of Liability".into()));
        conversation.cycle_excerpts(1);
        assert_eq!(conversation.focused_excerpt().map(|t| t.text), Some("Payment Terms".into()));
        conversation.cycle_excerpts(-1);
        assert_eq!(conversation.focused_excerpt().map(|t| t.text), Some("Limitation of Liability".into()));
    }

    #[tokio::test]
    async fn test_activation_highlights_excerpt() {
        let mut conversation = with_two_excerpts(ConversationKind::Analysis).await;
        assert!(!conversation.activate_focused_excerpt(Instant::now()));

        conversation.cycle_excerpts(1);
        assert!(conversation.activate_focused_excerpt(Instant::now()));
        assert_eq!(conversation.active_highlight(), Some("Payment Terms"));
        assert!(conversation.is_viewer_visible());
    }

    #[tokio::test]
    async fn test_comparison_page_has_no_targets() {
        let mut conversation = with_two_excerpts(ConversationKind::Comparison).await;
        assert!(conversation.excerpt_targets().is_empty());

        conversation.cycle_excerpts(1);
        assert!(conversation.focused_excerpt().is_none());
    }
}
