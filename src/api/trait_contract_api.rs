use async_trait::async_trait;
use serde_json::Value;

use crate::api::UploadFile;
use crate::error::Result;

/// The two backend operations a conversation depends on. The returned JSON is
/// handed to the response normalizer untouched.
#[async_trait]
pub trait ContractApi: Send + Sync {
    async fn generate_response(&self, query: &str) -> Result<Value>;

    async fn upload_contract(&self, files: &[UploadFile]) -> Result<Value>;
}
