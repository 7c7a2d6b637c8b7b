use serde_json::Value;

use crate::error::Result;

/// Reads a 2xx body as JSON. A body that is not JSON comes back as a JSON
/// string so the normalizer can fall back to showing it as text.
pub(super) async fn read_json_body(response: reqwest::Response) -> Result<Value> {
    let body = response.text().await?;
    Ok(serde_json::from_str(&body).unwrap_or(Value::String(body)))
}
