//! Backend HTTP surface: one call to ask a question, one to upload contracts.

mod trait_contract_api;
mod new;
mod generate_response;
mod upload_contract;
mod upload_file;
mod read_json_body;
mod trait_contract_api_impl;

pub use trait_contract_api::ContractApi;
pub use upload_file::{UploadFile, ACCEPTED_EXTENSIONS};

use crate::config::ClientConfig;

pub const GENERATE_PATH: &str = "/generate/single";
pub const UPLOAD_PATH: &str = "/upload/contract";

/// reqwest-backed [`ContractApi`].
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    config: ClientConfig,
}
