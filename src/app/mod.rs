mod page_view;
mod new;
mod run;
mod handle_key_events;
mod handle_app_event;
mod submit;
mod load_document;

#[cfg(test)]
mod test_support;

use throbber_widgets_tui::ThrobberState;

use crate::{
    config::ClientConfig,
    conversation::ConversationKind,
    event::EventHandler,
};

pub use page_view::PageView;

/// Application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// Page currently on screen.
    pub active: ConversationKind,
    pub analysis: PageView,
    pub comparison: PageView,
    /// Modal message, dismissed with Enter or Esc.
    pub alert: Option<String>,
    pub throbber: ThrobberState,
    pub config: ClientConfig,
    /// Event handler.
    pub events: EventHandler,
}

impl App {
    pub fn page(&self, kind: ConversationKind) -> &PageView {
        match kind {
            ConversationKind::Analysis => &self.analysis,
            ConversationKind::Comparison => &self.comparison,
        }
    }

    pub fn page_mut(&mut self, kind: ConversationKind) -> &mut PageView {
        match kind {
            ConversationKind::Analysis => &mut self.analysis,
            ConversationKind::Comparison => &mut self.comparison,
        }
    }

    pub fn active_page(&self) -> &PageView {
        self.page(self.active)
    }

    pub fn active_page_mut(&mut self) -> &mut PageView {
        self.page_mut(self.active)
    }

    /// Handles the tick event of the terminal.
    pub fn tick(&mut self) -> bool {
        let now = std::time::Instant::now();
        let mut changed = self.analysis.conversation.expire_highlight(now);
        changed |= self.comparison.conversation.expire_highlight(now);

        if self.analysis.conversation.is_busy() || self.comparison.conversation.is_busy() {
            self.throbber.calc_next();
            changed = true;
        }
        changed
    }

    /// Set running to false to quit the application.
    pub fn quit(&mut self) {
        self.running = false;
    }
}
