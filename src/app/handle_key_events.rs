use std::time::Instant;

use color_eyre::Result;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    conversation::ConversationKind,
    event::AppEvent,
    input_bar::InputMode,
};

use super::App;

impl App {
    /// Handles the key events and updates the state of [`App`].
    pub fn handle_key_events(&mut self, key_event: KeyEvent) -> Result<()> {
        let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);

        if ctrl && matches!(key_event.code, KeyCode::Char('c' | 'C')) {
            self.events.send(AppEvent::Quit);
            return Ok(());
        }

        if self.alert.is_some() {
            if matches!(key_event.code, KeyCode::Enter | KeyCode::Esc) {
                self.alert = None;
            }
            return Ok(());
        }

        let kind = self.active;
        match key_event.code {
            KeyCode::F(1) => self.active = ConversationKind::Analysis,
            KeyCode::F(2) => self.active = ConversationKind::Comparison,
            KeyCode::Char('o' | 'O') if ctrl => {
                let page = self.active_page_mut();
                if !page.conversation.is_busy() {
                    page.input.begin_attach();
                }
            }
            KeyCode::Char('p' | 'P') if ctrl => self.active_page_mut().conversation.toggle_viewer(),
            KeyCode::Char('l' | 'L') if ctrl => {
                let page = self.active_page_mut();
                if !page.conversation.is_busy() {
                    page.conversation.reset();
                    page.input.cancel();
                }
            }
            KeyCode::F(n @ 5..=7) => {
                let page = self.active_page();
                if page.conversation.messages().is_empty() {
                    let prompt = kind.example_prompts()[usize::from(n - 5)];
                    self.submit_query(kind, prompt);
                }
            }
            KeyCode::Tab => self.active_page_mut().conversation.cycle_excerpts(1),
            KeyCode::BackTab => self.active_page_mut().conversation.cycle_excerpts(-1),
            KeyCode::Enter => {
                let conversation = &mut self.active_page_mut().conversation;
                if conversation.activate_focused_excerpt(Instant::now()) {
                    conversation.clear_excerpt_focus();
                } else {
                    self.submit_input(kind);
                }
            }
            KeyCode::Esc => self.handle_escape(),
            KeyCode::PageUp => self.active_page_mut().scroll_up(),
            KeyCode::PageDown => self.active_page_mut().scroll_down(),
            KeyCode::Left => self.turn_page(false),
            KeyCode::Right => self.turn_page(true),
            KeyCode::Char(ch @ ('[' | ']')) if self.active_page().input.get_input().is_empty()
                && self.active_page().conversation.is_viewer_visible() =>
            {
                self.turn_page(ch == ']');
            }
            KeyCode::Backspace => {
                let page = self.active_page_mut();
                if !page.conversation.is_busy() {
                    page.input.backspace();
                }
            }
            KeyCode::Char(ch) if !ctrl => {
                let page = self.active_page_mut();
                if !page.conversation.is_busy() {
                    page.input.handle_input(ch);
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_escape(&mut self) {
        let page = self.active_page_mut();
        if page.input.mode() == InputMode::Attach {
            page.input.cancel();
        } else if page.conversation.focused_excerpt().is_some() {
            page.conversation.clear_excerpt_focus();
        } else if page.conversation.is_viewer_visible() {
            page.conversation.close_viewer();
        } else {
            page.input.cancel();
        }
    }

    fn turn_page(&mut self, forward: bool) {
        let conversation = &mut self.active_page_mut().conversation;
        if !conversation.is_viewer_visible() {
            return;
        }
        if let Some(viewer) = conversation.viewer_mut() {
            if forward {
                viewer.next_page();
            } else {
                viewer.prev_page();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use serde_json::json;

    use crate::{
        app::test_support::{next_app_event, press, settled_app, type_text},
        conversation::{test_support::FakeApi, ConversationKind},
        event::AppEvent,
    };

    #[tokio::test]
    async fn test_enter_activates_focused_excerpt_before_sending() {
        let api = FakeApi::replying(json!({"answer": "Noted."}));
        let mut app = settled_app(api.clone()).await;

        let chat = &mut app.analysis.conversation;
        chat.begin_send("What are the payment terms?");
        chat.complete_send(Ok(json!({"excerpt": "Payment is due within 30 days", "excerpt_page_no": 4})));

        type_text(&mut app, "And late fees?");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);

        let chat = &app.analysis.conversation;
        assert_eq!(chat.active_highlight(), Some("Payment is due within 30 days"));
        assert!(chat.is_viewer_visible());
        assert!(chat.focused_excerpt().is_none());
        assert_eq!(chat.messages().len(), 2);
        assert_eq!(app.analysis.input.get_input(), "And late fees?");

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.analysis.conversation.messages().len(), 3);
        assert!(app.analysis.conversation.is_busy());

        let event = next_app_event(&mut app).await;
        app.handle_app_event(event);
        assert_eq!(api.queries(), vec!["And late fees?"]);
        assert_eq!(app.analysis.conversation.messages().len(), 4);
    }

    #[tokio::test]
    async fn test_input_is_disabled_until_reply_arrives() {
        let api = FakeApi::replying(json!("Termination requires 30 days notice."));
        let mut app = settled_app(api).await;
        press(&mut app, KeyCode::F(2));

        type_text(&mut app, "Compare termination");
        press(&mut app, KeyCode::Enter);
        assert!(app.comparison.conversation.is_busy());

        type_text(&mut app, "more");
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.comparison.input.get_input(), "");
        assert_eq!(app.comparison.conversation.messages().len(), 1);

        let event = next_app_event(&mut app).await;
        assert!(matches!(event, AppEvent::QueryFinished { page: ConversationKind::Comparison, .. }));
        app.handle_app_event(event);
        assert!(!app.comparison.conversation.is_busy());

        type_text(&mut app, "ok");
        assert_eq!(app.comparison.input.get_input(), "ok");
    }

    #[tokio::test]
    async fn test_function_keys_send_example_prompts_on_empty_page() {
        let api = FakeApi::replying(json!("Net 30."));
        let mut app = settled_app(api.clone()).await;

        press(&mut app, KeyCode::F(6));
        let messages = app.analysis.conversation.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].content.as_text(), Some("What are the payment terms?"));

        let event = next_app_event(&mut app).await;
        app.handle_app_event(event);

        press(&mut app, KeyCode::F(5));
        assert_eq!(app.analysis.conversation.messages().len(), 2);
        assert_eq!(api.queries(), vec!["What are the payment terms?"]);
    }

    #[tokio::test]
    async fn test_alert_swallows_keys_until_dismissed() {
        let mut app = settled_app(FakeApi::failing()).await;
        app.alert = Some("Failed to upload files. Please try again.".to_string());

        type_text(&mut app, "hi");
        assert_eq!(app.analysis.input.get_input(), "");

        press(&mut app, KeyCode::Esc);
        assert!(app.alert.is_none());

        app.handle_key_events(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)).unwrap();
        let event = next_app_event(&mut app).await;
        assert!(matches!(event, AppEvent::Quit));
    }
}
