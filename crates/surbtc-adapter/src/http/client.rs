/*
[INPUT]:  HTTP configuration (base URL, timeouts, credentials)
[OUTPUT]: Executed API calls classified into success payload or last-error
[POS]:    HTTP layer - core connection and dispatch implementation
[UPDATE]: When adding connection options or changing dispatch behavior
*/

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, Url};
use serde_json::Value;
use tracing::debug;

use crate::http::signature::{
    RequestSigner, APIKEY_HEADER, NONCE_HEADER, SIGNATURE_HEADER,
};
use crate::http::{Result, SurbtcError};
use crate::types::{Endpoint, Params};

/// Base URL for the SurBTC REST API.
const API_BASE_URL: &str = "https://www.surbtc.com/api/v2";

/// HTTP statuses the exchange uses for success.
const HTTP_OK: [u16; 2] = [200, 201];

/// HTTP client configuration. Defaults mirror the reference client: no
/// request timeout unless one is configured.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    pub timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
}

/// API credentials. Empty strings are valid; private calls then sign with an
/// empty secret and fail server-side, never client-side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub secret_key: String,
}

/// Decoded outcome of one HTTP exchange.
///
/// `Api` holds the lenient JSON decode of the response body (null when the
/// body was empty or malformed). `Transport` holds the failure description
/// when no response was obtained at all.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiPayload {
    Api(Value),
    Transport(String),
}

/// Record of the most recent failed call. Overwritten by every call and
/// cleared on success; `None` iff the last call's status was in {200, 201}.
#[derive(Debug, Clone, PartialEq)]
pub struct LastError {
    pub code: u16,
    pub response: ApiPayload,
}

/// Connection to the SurBTC REST API.
///
/// Owns the credentials, the base URL and the last-error slot. One in-flight
/// request per call; the slot is synchronized, but since every call
/// overwrites it, callers that inspect it should use one client per logical
/// caller.
#[derive(Debug)]
pub struct SurbtcClient {
    http_client: Client,
    base_url: Url,
    credentials: Credentials,
    signer: RequestSigner,
    last_error: Mutex<Option<LastError>>,
}

impl SurbtcClient {
    /// Create a client with default configuration against the production API.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client with custom configuration against the production API.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(config, API_BASE_URL)
    }

    /// Create a client against an arbitrary base URL (tests, staging).
    pub fn with_config_and_base_url(config: ClientConfig, base_url: &str) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = config.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }

        Ok(Self {
            http_client: builder.build()?,
            base_url: Url::parse(base_url)?,
            credentials: Credentials::default(),
            signer: RequestSigner::new(),
            last_error: Mutex::new(None),
        })
    }

    /// Replace the stored credentials unconditionally. No validation; the
    /// next private call simply signs with whatever is set here.
    pub fn authenticate(&mut self, api_key: impl Into<String>, secret_key: impl Into<String>) {
        self.credentials = Credentials {
            api_key: api_key.into(),
            secret_key: secret_key.into(),
        };
    }

    /// Current credentials.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Replace the request signer. Lets tests pin the nonce source.
    pub fn set_request_signer(&mut self, signer: RequestSigner) {
        self.signer = signer;
    }

    /// Failure record of the most recent call, if it failed. Read-only;
    /// repeated reads without an intervening call return the same value.
    pub fn last_error(&self) -> Option<LastError> {
        self.last_error
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn record_error(&self, error: Option<LastError>) {
        *self
            .last_error
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = error;
    }

    /// Execute one HTTP exchange against the API.
    ///
    /// GET requests encode non-empty `params` as a query string; POST/PUT
    /// serialize them as a JSON body. Private calls additionally carry the
    /// three `X-SBTC-*` headers computed over the full URL and exact body
    /// bytes. Returns the HTTP status (0 when none was obtained) and the
    /// decoded payload; success and failure share this shape and are told
    /// apart only by status membership in {200, 201}. The last-error slot is
    /// set or cleared accordingly.
    pub async fn query(
        &self,
        verb: Method,
        action: &str,
        params: &Params,
        private: bool,
    ) -> (u16, ApiPayload) {
        let base = self.base_url.as_str().trim_end_matches('/');
        let mut full_url = format!("{base}/{action}");
        if verb == Method::GET && !params.is_empty() {
            let query = params.to_query_string();
            if !query.is_empty() {
                full_url.push('?');
                full_url.push_str(&query);
            }
        }

        let url = match Url::parse(&full_url) {
            Ok(url) => url,
            Err(err) => {
                return self.fail_transport(0, format!("invalid request URL {full_url}: {err}"))
            }
        };

        let has_body = verb == Method::POST || verb == Method::PUT;
        let body: Vec<u8> = if has_body {
            match serde_json::to_vec(params) {
                Ok(bytes) => bytes,
                Err(err) => {
                    return self
                        .fail_transport(0, format!("failed to encode request body: {err}"))
                }
            }
        } else {
            Vec::new()
        };

        debug!(%verb, %url, body_len = body.len(), private, "dispatching request");

        let mut builder = self
            .http_client
            .request(verb.clone(), url.clone())
            .header(CONTENT_TYPE, "application/json");
        if has_body {
            builder = builder.body(body.clone());
        }
        if private {
            let auth = self.signer.auth_headers(
                &verb,
                &url,
                &body,
                &self.credentials.api_key,
                &self.credentials.secret_key,
            );
            builder = builder
                .header(APIKEY_HEADER, auth.api_key)
                .header(NONCE_HEADER, auth.nonce)
                .header(SIGNATURE_HEADER, auth.signature);
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(err) => {
                let code = err.status().map(|s| s.as_u16()).unwrap_or(0);
                return self.fail_transport(code, err.to_string());
            }
        };

        let status = response.status().as_u16();
        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(err) => return self.fail_transport(status, err.to_string()),
        };

        let (decoded, decode_failed) = decode_lenient(&bytes);
        if decode_failed {
            debug!(status, "response body was not valid JSON, decoded as null");
        }

        if HTTP_OK.contains(&status) {
            self.record_error(None);
        } else {
            self.record_error(Some(LastError {
                code: status,
                response: ApiPayload::Api(decoded.clone()),
            }));
        }

        (status, ApiPayload::Api(decoded))
    }

    fn fail_transport(&self, code: u16, message: String) -> (u16, ApiPayload) {
        debug!(code, %message, "transport failure");
        self.record_error(Some(LastError {
            code,
            response: ApiPayload::Transport(message.clone()),
        }));
        (code, ApiPayload::Transport(message))
    }

    /// Execute a logical API operation and classify the outcome.
    ///
    /// This is the call every endpoint wrapper funnels through. Success
    /// statuses yield the decoded body; everything else becomes a typed
    /// error carrying the same detail the last-error slot records.
    pub async fn request(
        &self,
        endpoint: &Endpoint,
        params: &Params,
        private: bool,
    ) -> Result<Value> {
        let (status, payload) = self
            .query(endpoint.verb.clone(), &endpoint.action, params, private)
            .await;

        match payload {
            ApiPayload::Api(body) if HTTP_OK.contains(&status) => Ok(body),
            ApiPayload::Api(body) => Err(SurbtcError::Api { code: status, body }),
            ApiPayload::Transport(message) => Err(SurbtcError::Transport {
                code: status,
                message,
            }),
        }
    }
}

/// Best-effort JSON decode. Malformed or empty bodies decode to null rather
/// than an error; the flag tells the two apart for diagnostics.
fn decode_lenient(bytes: &[u8]) -> (Value, bool) {
    match serde_json::from_slice(bytes) {
        Ok(value) => (value, false),
        Err(_) => (Value::Null, true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_client_creation() {
        let client = SurbtcClient::new().expect("client init");
        assert_eq!(client.credentials(), &Credentials::default());
        assert!(client.last_error().is_none());
    }

    #[test]
    fn test_authenticate_overwrites_credentials() {
        let mut client = SurbtcClient::new().expect("client init");
        client.authenticate("old-key", "old-secret");
        client.authenticate("new-key", "new-secret");
        assert_eq!(
            client.credentials(),
            &Credentials {
                api_key: "new-key".to_string(),
                secret_key: "new-secret".to_string(),
            }
        );
    }

    #[test]
    fn test_decode_lenient_valid_json() {
        let (value, failed) = decode_lenient(br#"{"message":"ok"}"#);
        assert_eq!(value, json!({"message": "ok"}));
        assert!(!failed);
    }

    #[test]
    fn test_decode_lenient_literal_null() {
        let (value, failed) = decode_lenient(b"null");
        assert_eq!(value, Value::Null);
        assert!(!failed);
    }

    #[test]
    fn test_decode_lenient_malformed_is_null_with_flag() {
        let (value, failed) = decode_lenient(b"<html>not json</html>");
        assert_eq!(value, Value::Null);
        assert!(failed);

        let (value, failed) = decode_lenient(b"");
        assert_eq!(value, Value::Null);
        assert!(failed);
    }
}
