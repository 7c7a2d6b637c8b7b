use std::path::PathBuf;

use crate::{
    api::UploadFile,
    error::AssistantError,
    conversation::ConversationKind,
    event::AppEvent,
    input_bar::InputSubmission,
    log_info,
};

use super::App;

impl App {
    pub fn submit_input(&mut self, kind: ConversationKind) {
        let page = self.page_mut(kind);
        if page.conversation.is_busy() {
            return;
        }

        match page.input.submit() {
            Some(InputSubmission::Query(query)) => self.submit_query(kind, &query),
            Some(InputSubmission::Upload(paths)) => self.submit_upload(kind, paths),
            None => {}
        }
    }

    /// Records the question and sends it in the background.
    pub fn submit_query(&mut self, kind: ConversationKind, text: &str) {
        let page = self.page_mut(kind);
        let Some(query) = page.conversation.begin_send(text) else {
            return;
        };
        page.follow();

        let api = page.conversation.api();
        let sender = self.events.app_sender();
        tokio::spawn(async move {
            let result = api.generate_response(&query).await;
            sender.send(AppEvent::QueryFinished { page: kind, result });
        });
    }

    /// Reads the selected files and uploads them in the background.
    pub fn submit_upload(&mut self, kind: ConversationKind, paths: Vec<PathBuf>) {
        let page = self.page_mut(kind);
        if !page.conversation.begin_upload(paths.len()) {
            return;
        }
        log_info!("Uploading {} file(s)", paths.len());

        let api = page.conversation.api();
        let sender = self.events.app_sender();
        tokio::spawn(async move {
            let result = async {
                let mut files = Vec::with_capacity(paths.len());
                for path in &paths {
                    files.push(UploadFile::from_path(path).await?);
                }
                api.upload_contract(&files).await?;
                Ok::<_, AssistantError>(files)
            }
            .await;
            sender.send(AppEvent::UploadFinished { page: kind, result });
        });
    }
}
