#![allow(dead_code)]

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use contract_assistant::ClientConfig;

/// Starts a backend that answers exactly one `POST route` with `status` and `body`.
/// The expectation is verified when the returned server is dropped.
pub async fn serve_once(
    route: &'static str,
    status: u16,
    content_type: &'static str,
    body: &'static str,
) -> (ClientConfig, MockServer) {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_raw(body, content_type))
        .expect(1)
        .mount(&server)
        .await;

    (ClientConfig::default().with_base_url(server.uri()), server)
}

/// The single request the backend received.
pub async fn only_request(server: &MockServer) -> Request {
    let mut requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1, "expected exactly one request");
    requests.remove(0)
}

pub fn header_value(request: &Request, name: &str) -> String {
    request.headers.get(name)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

/// An address nothing is listening on.
pub async fn unreachable_config() -> ClientConfig {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    ClientConfig::default().with_base_url(format!("http://{}", addr))
}
