use crate::{
    api::UploadFile,
    conversation::{Conversation, ConversationState, Message, UPLOAD_FAILED_ALERT},
    error::Result,
    log_error, log_info,
    viewer::DocumentSource,
};

#[derive(Debug, Clone, PartialEq)]
pub enum UploadOutcome {
    /// Nothing selected, or the page was busy.
    Skipped,
    Uploaded {
        names: Vec<String>,
        /// First uploaded PDF, for the paired viewer to show.
        document: Option<DocumentSource>,
    },
    /// The conversation is unchanged; `alert` must be shown to the user.
    Failed { alert: &'static str },
}

impl Conversation {
    /// Enters `Uploading` for a selection of `count` files. False when there is nothing to do.
    pub fn begin_upload(&mut self, count: usize) -> bool {
        if count == 0 || self.is_busy() {
            return false;
        }
        self.state = ConversationState::Uploading;
        true
    }

    /// Finishes an upload started with [`Conversation::begin_upload`].
    pub fn complete_upload(&mut self, result: Result<Vec<UploadFile>>) -> UploadOutcome {
        self.state = ConversationState::Idle;

        let files = match result {
            Ok(files) => files,
            Err(e) => {
                log_error!("Upload failed: {}", e);
                return UploadOutcome::Failed { alert: UPLOAD_FAILED_ALERT };
            }
        };

        let names: Vec<String> = files.iter().map(|f| f.name.clone()).collect();
        log_info!("Uploaded {} file(s): {}", names.len(), names.join(", "));
        self.messages.push(Message::new_system(upload_summary(&names)));

        let document = self.viewer.as_ref().and(
            files.iter()
                .find(|f| f.is_pdf())
                .map(|f| DocumentSource::memory(f.name.clone(), f.bytes.clone())),
        );

        UploadOutcome::Uploaded { names, document }
    }

    pub async fn upload_files(&mut self, files: Vec<UploadFile>) -> UploadOutcome {
        if !self.begin_upload(files.len()) {
            return UploadOutcome::Skipped;
        }

        let result = self.api.upload_contract(&files).await.map(|_| files);
        self.complete_upload(result)
    }
}

fn upload_summary(names: &[String]) -> String {
    let subject = if names.len() == 1 { "this document" } else { "these documents" };
    format!("Uploaded {}. Ask me anything about {}!", names.join(", "), subject)
}

/// Text the input bar is pre-filled with after a successful upload.
pub fn upload_prompt(names: &[String]) -> String {
    format!("I've uploaded: {}. Please analyze these contracts.", names.join(", "))
}
