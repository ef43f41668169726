/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for bitmarket24 tests

use bitmarket24::{Bitmarket24Client, ClientConfig, Credentials};
use wiremock::MockServer;

pub const CLIENT_ID: &str = "abc";
pub const CLIENT_SECRET: &str = "s3cret";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client whose API and status hosts both point at `server`
pub fn client_for(server: &MockServer) -> Bitmarket24Client {
    Bitmarket24Client::with_config_and_base_urls(
        Credentials::new(CLIENT_ID, CLIENT_SECRET),
        ClientConfig::default(),
        &format!("{}/api/v1", server.uri()),
        &format!("{}/api", server.uri()),
    )
    .expect("client init")
}

/// Extract the bearer token from the `index`th recorded request
#[allow(dead_code)]
pub async fn bearer_token(server: &MockServer, index: usize) -> String {
    let requests = server.received_requests().await.expect("recording enabled");
    let header = requests[index]
        .headers
        .get("authorization")
        .expect("authorization header")
        .to_str()
        .expect("ascii header");
    header
        .strip_prefix("Bearer ")
        .expect("bearer scheme")
        .to_string()
}
