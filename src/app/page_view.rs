use std::sync::Arc;

use crate::{
    api::ContractApi,
    conversation::{Conversation, ConversationKind},
    input_bar::InputBar,
};

const SCROLL_STEP: u16 = 5;

/// One page on screen: its conversation, composer and chat scroll position.
#[derive(Debug)]
pub struct PageView {
    pub conversation: Conversation,
    pub input: InputBar,
    pub scroll_offset: u16,
    /// Keep the newest message in view; cleared when the user scrolls up.
    pub follow_bottom: bool,
}

impl PageView {
    pub fn new(kind: ConversationKind, api: Arc<dyn ContractApi>) -> Self {
        Self {
            conversation: Conversation::new(kind, api),
            input: InputBar::new(),
            scroll_offset: 0,
            follow_bottom: true,
        }
    }

    pub fn scroll_up(&mut self) {
        self.follow_bottom = false;
        self.scroll_offset = self.scroll_offset.saturating_sub(SCROLL_STEP);
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(SCROLL_STEP);
    }

    /// Clamps the offset to the rendered content and re-pins to the bottom when reached.
    pub fn clamp_scroll(&mut self, max_scroll: u16) {
        if self.follow_bottom || self.scroll_offset >= max_scroll {
            self.scroll_offset = max_scroll;
            self.follow_bottom = true;
        }
    }

    pub fn follow(&mut self) {
        self.follow_bottom = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::ConversationKind;

    struct NoApi;

    #[async_trait::async_trait]
    impl ContractApi for NoApi {
        async fn generate_response(&self, _query: &str) -> crate::error::Result<serde_json::Value> {
            Err("offline".into())
        }

        async fn upload_contract(&self, _files: &[crate::api::UploadFile]) -> crate::error::Result<serde_json::Value> {
            Err("offline".into())
        }
    }

    #[test]
    fn test_scrolling_up_unpins_until_bottom_reached() {
        let mut page = PageView::new(ConversationKind::Comparison, Arc::new(NoApi));
        page.clamp_scroll(20);
        assert_eq!(page.scroll_offset, 20);

        page.scroll_up();
        assert!(!page.follow_bottom);
        page.clamp_scroll(30);
        assert_eq!(page.scroll_offset, 15);

        page.scroll_down();
        page.scroll_down();
        page.scroll_down();
        page.clamp_scroll(30);
        assert_eq!(page.scroll_offset, 30);
        assert!(page.follow_bottom);
    }
}
