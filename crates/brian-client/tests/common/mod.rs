//! Common test utilities for integration tests.

#![allow(dead_code)]

use anyhow::Result;
use brian_client::BrianClient;
use serde_json::Value;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// API key accepted by the stub provider.
pub const API_KEY: &str = "brian_integration_test";

/// A stub provider and a client pointed at it.
pub struct TestProvider {
    pub server: MockServer,
    pub client: BrianClient,
}

impl TestProvider {
    /// Start a stub provider with no routes mounted.
    pub async fn start() -> Result<Self> {
        init_tracing();
        let server = MockServer::start().await;
        let client = BrianClient::builder()
            .api_key(API_KEY)
            .base_url(server.uri())
            .build()?;
        Ok(Self { server, client })
    }

    /// Answer one request to `verb /api/v0/{route}` with `status` and a JSON body.
    ///
    /// The request must carry the JSON and API-key headers.
    pub async fn respond(&self, verb: &str, route: &str, status: u16, body: Value) {
        Mock::given(method(verb))
            .and(path(format!("/api/v0/{}", route)))
            .and(header("x-brian-api-key", API_KEY))
            .and(header("accept", "application/json"))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .expect(1)
            .mount(&self.server)
            .await;
    }
}

/// Route client logs to the test output. Set `RUST_LOG=brian_client=debug` to see them.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
