use crate::{
    event::AppEvent,
    log_warn,
    viewer::DocumentSource,
};

use super::App;

impl App {
    /// Starts extracting `source` for the analysis viewer on a blocking task.
    pub fn load_document(&mut self, source: DocumentSource) {
        let Some(viewer) = self.analysis.conversation.viewer_mut() else {
            return;
        };

        let generation = viewer.begin_load(source.clone());
        let extractor = viewer.extractor();
        let sender = self.events.app_sender();

        tokio::spawn(async move {
            let result = match tokio::task::spawn_blocking(move || extractor.extract(&source)).await {
                Ok(result) => result,
                Err(e) => {
                    log_warn!("Document extraction task failed: {}", e);
                    Err(crate::error::AssistantError::DocumentError("Failed to load PDF".to_string()))
                }
            };
            sender.send(AppEvent::DocumentLoaded { generation, result });
        });
    }
}
