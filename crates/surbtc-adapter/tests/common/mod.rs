/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for surbtc-adapter tests

use hmac::{Hmac, Mac};
use sha2::Sha384;
use surbtc_adapter::{ClientConfig, NonceSource, RequestSigner, SurbtcClient};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server
pub fn client_for(server: &MockServer) -> SurbtcClient {
    SurbtcClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
        .expect("client init")
}

/// Nonce source pinned to a constant, so signatures are reproducible
#[derive(Debug)]
pub struct FixedNonce(pub &'static str);

impl NonceSource for FixedNonce {
    fn nonce(&self) -> String {
        self.0.to_string()
    }
}

/// Client with credentials and a pinned nonce
#[allow(dead_code)]
pub fn signed_client_with_nonce(
    server: &MockServer,
    api_key: &str,
    secret_key: &str,
    nonce: &'static str,
) -> SurbtcClient {
    let mut client = client_for(server);
    client.authenticate(api_key, secret_key);
    client.set_request_signer(RequestSigner::with_nonce_source(Box::new(FixedNonce(nonce))));
    client
}

/// Independent HMAC-SHA384 computation for verifying signatures on the wire
#[allow(dead_code)]
pub fn hmac_sha384_hex(key: &str, message: &str) -> String {
    let mut mac =
        Hmac::<Sha384>::new_from_slice(key.as_bytes()).expect("HMAC accepts keys of any length");
    mac.update(message.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}
