use async_trait::async_trait;
use serde_json::Value;

use crate::{
    api::{ApiClient, ContractApi, UploadFile},
    error::Result,
};

#[async_trait]
impl ContractApi for ApiClient {
    async fn generate_response(&self, query: &str) -> Result<Value> {
        self._generate_response(query).await
    }

    async fn upload_contract(&self, files: &[UploadFile]) -> Result<Value> {
        self._upload_contract(files).await
    }
}
