use crate::{
    conversation::{upload_prompt, UploadOutcome},
    event::AppEvent,
};

use super::App;

impl App {
    pub fn handle_app_event(&mut self, app_event: AppEvent) {
        match app_event {
            AppEvent::Quit => self.quit(),
            AppEvent::QueryFinished { page, result } => {
                let page = self.page_mut(page);
                page.conversation.complete_send(result);
                page.follow();
            }
            AppEvent::UploadFinished { page, result } => {
                let view = self.page_mut(page);
                match view.conversation.complete_upload(result) {
                    UploadOutcome::Uploaded { names, document } => {
                        view.input.prefill(upload_prompt(&names));
                        view.follow();
                        if let Some(document) = document {
                            self.load_document(document);
                        }
                    }
                    UploadOutcome::Failed { alert } => self.alert = Some(alert.to_string()),
                    UploadOutcome::Skipped => {}
                }
            }
            AppEvent::DocumentLoaded { generation, result } => {
                if let Some(viewer) = self.analysis.conversation.viewer_mut() {
                    viewer.finish_load(generation, result);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        api::UploadFile,
        app::test_support::{next_app_event, settled_app},
        conversation::{test_support::FakeApi, ConversationKind, UPLOAD_FAILED_ALERT},
        event::AppEvent,
        viewer::{DocumentSource, ViewerState},
    };

    #[tokio::test]
    async fn test_upload_prefills_input_and_loads_first_pdf() {
        let mut app = settled_app(FakeApi::failing()).await;
        assert!(app.analysis.conversation.begin_upload(2));

        app.handle_app_event(AppEvent::UploadFinished {
            page: ConversationKind::Analysis,
            result: Ok(vec![
                UploadFile::new("notes.docx", b"PK".to_vec()),
                UploadFile::new("msa.pdf", b"not really a pdf".to_vec()),
            ]),
        });

        assert_eq!(
            app.analysis.input.get_input(),
            "I've uploaded: notes.docx, msa.pdf. Please analyze these contracts.",
        );
        let viewer = app.analysis.conversation.viewer().unwrap();
        assert_eq!(viewer.state(), &ViewerState::Loading);
        assert_eq!(viewer.source().map(|s| s.to_string()), Some("msa.pdf".to_string()));

        let event = next_app_event(&mut app).await;
        assert!(matches!(event, AppEvent::DocumentLoaded { .. }));
        app.handle_app_event(event);
        assert!(matches!(app.analysis.conversation.viewer().unwrap().state(), ViewerState::Error(_)));
    }

    #[tokio::test]
    async fn test_failed_upload_raises_alert() {
        let mut app = settled_app(FakeApi::failing()).await;
        assert!(app.comparison.conversation.begin_upload(1));

        app.handle_app_event(AppEvent::UploadFinished {
            page: ConversationKind::Comparison,
            result: Err("Upload error: 500 Internal Server Error".into()),
        });

        assert_eq!(app.alert.as_deref(), Some(UPLOAD_FAILED_ALERT));
        assert!(app.comparison.conversation.messages().is_empty());
        assert_eq!(app.comparison.input.get_input(), "");
    }

    #[tokio::test]
    async fn test_superseded_document_load_is_ignored() {
        let mut app = settled_app(FakeApi::failing()).await;

        app.load_document(DocumentSource::memory("old.txt", b"only page".to_vec()));
        app.load_document(DocumentSource::memory("new.txt", b"one\x0ctwo".to_vec()));

        let mut loads = vec![next_app_event(&mut app).await, next_app_event(&mut app).await];
        // Newest first, so the stale result arrives last and must not win.
        loads.sort_by_key(|event| match event {
            AppEvent::DocumentLoaded { generation, .. } => std::cmp::Reverse(*generation),
            other => panic!("unexpected event: {:?}", other),
        });
        for event in loads {
            app.handle_app_event(event);
        }

        let viewer = app.analysis.conversation.viewer().unwrap();
        assert_eq!(viewer.state(), &ViewerState::Ready { page_count: 2, current_page: 1 });
        assert_eq!(viewer.source().map(|s| s.to_string()), Some("new.txt".to_string()));
    }
}
