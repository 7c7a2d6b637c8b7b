use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use crate::{
    api::{ContractApi, UploadFile},
    error::{AssistantError, Result},
};

/// Scripted backend: replays canned replies in order, or fails every call.
#[derive(Default)]
pub struct FakeApi {
    replies: Mutex<VecDeque<Value>>,
    fallback: Option<Value>,
    queries: Mutex<Vec<String>>,
    uploads: Mutex<usize>,
}

impl FakeApi {
    pub fn replying(reply: Value) -> Arc<Self> {
        Arc::new(Self { fallback: Some(reply), ..Self::default() })
    }

    pub fn sequence(replies: Vec<Value>) -> Arc<Self> {
        Arc::new(Self { replies: Mutex::new(replies.into()), ..Self::default() })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }

    pub fn uploads(&self) -> usize {
        *self.uploads.lock().unwrap()
    }

    fn next_reply(&self) -> Result<Value> {
        self.replies.lock().unwrap()
            .pop_front()
            .or_else(|| self.fallback.clone())
            .ok_or(AssistantError::ApiStatus { status: 500, reason: "Internal Server Error".into() })
    }
}

#[async_trait]
impl ContractApi for FakeApi {
    async fn generate_response(&self, query: &str) -> Result<Value> {
        self.queries.lock().unwrap().push(query.to_string());
        self.next_reply()
    }

    async fn upload_contract(&self, _files: &[UploadFile]) -> Result<Value> {
        *self.uploads.lock().unwrap() += 1;
        self.next_reply()
    }
}
