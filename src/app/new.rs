use std::sync::Arc;

use color_eyre::Result;
use throbber_widgets_tui::ThrobberState;

use crate::{
    api::{ApiClient, ContractApi},
    config::ClientConfig,
    conversation::ConversationKind,
    event::EventHandler,
    viewer::DocumentSource,
};

use super::{App, PageView};

impl App {
    /// Constructs a new instance of [`App`] talking to the configured backend.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let api: Arc<dyn ContractApi> = Arc::new(ApiClient::new(config.clone())?);
        Ok(Self::with_api(config, api))
    }

    /// Builds the app around any backend and starts loading the sample document.
    pub fn with_api(config: ClientConfig, api: Arc<dyn ContractApi>) -> Self {
        let sample = DocumentSource::Path(config.sample_document.clone());

        let mut app = Self {
            running: true,
            active: ConversationKind::Analysis,
            analysis: PageView::new(ConversationKind::Analysis, api.clone()),
            comparison: PageView::new(ConversationKind::Comparison, api),
            alert: None,
            throbber: ThrobberState::default(),
            config,
            events: EventHandler::new(),
        };

        app.load_document(sample);
        app
    }
}
