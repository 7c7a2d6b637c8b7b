use std::sync::Arc;
use std::time::Duration;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    config::ClientConfig,
    conversation::test_support::FakeApi,
    event::{AppEvent, Event},
};

use super::App;

/// An app over `api` with its startup sample load already applied.
pub async fn settled_app(api: Arc<FakeApi>) -> App {
    let config = ClientConfig {
        sample_document: "./no-such-sample-contract.txt".into(),
        ..ClientConfig::default()
    };
    let mut app = App::with_api(config, api);

    let event = next_app_event(&mut app).await;
    assert!(matches!(event, AppEvent::DocumentLoaded { .. }), "unexpected startup event: {:?}", event);
    app.handle_app_event(event);
    app
}

/// Waits for the next event a background task reported, skipping ticks and terminal input.
pub async fn next_app_event(app: &mut App) -> AppEvent {
    loop {
        let event = tokio::time::timeout(Duration::from_secs(5), app.events.next())
            .await
            .expect("no app event within 5s")
            .unwrap();
        if let Event::App(app_event) = event {
            return app_event;
        }
    }
}

pub fn press(app: &mut App, code: KeyCode) {
    app.handle_key_events(KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
}

pub fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}
