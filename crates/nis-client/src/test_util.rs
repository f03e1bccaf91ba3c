//! Shared test helpers for `nis-client` unit tests.
//!
//! Builds clients wired to the recording mock transport and asserts on the
//! requests it captured, so facade tests read as one line per route.

use std::sync::Arc;

use reqwest::Method;

use crate::client::{AsyncClient, BlockingClient};
use crate::config::ClientConfig;
use crate::request::Request;
use crate::transport::mock::RecordingTransport;

pub const TEST_ENDPOINT: &str = "http://127.0.0.1:7890";

// ==============================================================================
// Client Builders
// ==============================================================================

pub fn recording_client() -> (
    BlockingClient<Arc<RecordingTransport>>,
    Arc<RecordingTransport>,
) {
    let transport = Arc::new(RecordingTransport::new());
    let client = BlockingClient::with_transport(ClientConfig::new(TEST_ENDPOINT), Arc::clone(&transport))
        .expect("test client must build");
    (client, transport)
}

pub fn recording_async_client(
    max_concurrency: usize,
) -> (AsyncClient<Arc<RecordingTransport>>, Arc<RecordingTransport>) {
    let transport = Arc::new(RecordingTransport::new());
    let config = ClientConfig::new(TEST_ENDPOINT).with_max_concurrency(max_concurrency);
    let client = AsyncClient::with_transport(config, Arc::clone(&transport))
        .expect("test client must build");
    (client, transport)
}

// ==============================================================================
// Request Assertions
// ==============================================================================

/// A GET to `TEST_ENDPOINT/path` carrying exactly `query`, in order, and no body.
pub fn assert_get(request: &Request, path: &str, query: &[(&str, &str)]) {
    assert_eq!(request.method, Method::GET, "method for {path}");
    assert_eq!(request.url, format!("{TEST_ENDPOINT}/{path}"));
    let actual: Vec<(&str, &str)> = request
        .query
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    assert_eq!(actual, query, "query for {path}");
    assert!(request.body.is_none(), "GET {path} must not carry a body");
}

/// A POST to `TEST_ENDPOINT/path` with exactly `body` and no query string.
pub fn assert_post(request: &Request, path: &str, body: serde_json::Value) {
    assert_eq!(request.method, Method::POST, "method for {path}");
    assert_eq!(request.url, format!("{TEST_ENDPOINT}/{path}"));
    assert!(request.query.is_empty(), "POST {path} must not carry a query");
    assert_eq!(request.body.as_ref(), Some(&body), "body for {path}");
}
