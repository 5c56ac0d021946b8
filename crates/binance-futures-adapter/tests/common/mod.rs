/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for binance-futures-adapter tests

use binance_futures_adapter::{BinanceFuturesClient, ClientConfig, Credentials};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Key pair used by every test client
#[allow(dead_code)]
pub fn test_credentials() -> Credentials {
    Credentials::new("test-key", "test-secret")
}

/// Client pointed at the mock server instead of the testnet
pub fn client_for(server: &MockServer) -> BinanceFuturesClient {
    let config = ClientConfig {
        base_url: server.uri(),
        ..ClientConfig::default()
    };
    BinanceFuturesClient::with_config(test_credentials(), config).expect("client init")
}

/// Mount GET /fapi/v1/time so the lazy clock sync before signed calls
/// succeeds against the mock server
#[allow(dead_code)]
pub async fn mount_server_time(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/fapi/v1/time"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"{"serverTime": 1717000000000}"#, "application/json"),
        )
        .mount(server)
        .await;
}
