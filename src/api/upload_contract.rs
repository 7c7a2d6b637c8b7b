use reqwest::multipart::{Form, Part};
use serde_json::Value;

use crate::{
    api::{read_json_body::read_json_body, ApiClient, UploadFile, UPLOAD_PATH},
    error::{AssistantError, Result},
};

impl ApiClient {
    #[tracing::instrument(skip(self, files), fields(count = files.len()))]
    pub(super) async fn _upload_contract(&self, files: &[UploadFile]) -> Result<Value> {
        // Content-Type (with boundary) is set by reqwest for multipart bodies
        let form = files.iter().fold(Form::new(), |form, file| {
            let part = Part::bytes(file.bytes.clone()).file_name(file.name.clone());
            form.part("files", part)
        });

        let response = self.client
            .post(self.config.endpoint(UPLOAD_PATH))
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Error uploading contract: {}", e);
                e
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("upload API returned {}", status);
            return Err(AssistantError::UploadStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        read_json_body(response).await
    }
}
