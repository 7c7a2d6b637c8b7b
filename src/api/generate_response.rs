use serde_json::{json, Value};

use crate::{
    api::{read_json_body::read_json_body, ApiClient, GENERATE_PATH},
    error::{AssistantError, Result},
};

impl ApiClient {
    #[tracing::instrument(skip(self), fields(url = %self.config.endpoint(GENERATE_PATH)))]
    pub(super) async fn _generate_response(&self, query: &str) -> Result<Value> {
        let response = self.client
            .post(self.config.endpoint(GENERATE_PATH))
            .json(&json!({ "query": query }))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Error calling generate API: {}", e);
                e
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("generate API returned {}", status);
            return Err(AssistantError::ApiStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        read_json_body(response).await
    }
}
