/*
[INPUT]:  Request method, URL, body bytes and API credentials
[OUTPUT]: Signed request headers (X-SBTC-APIKEY / NONCE / SIGNATURE)
[POS]:    HTTP layer - request signing for private endpoints
[UPDATE]: When changing signing algorithm or header format
*/

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use hmac::{Hmac, Mac};
use rand::Rng;
use reqwest::{Method, Url};
use sha2::Sha384;

type HmacSha384 = Hmac<Sha384>;

/// Wire-protocol header names. Fixed by the exchange, never rename.
pub const APIKEY_HEADER: &str = "X-SBTC-APIKEY";
pub const NONCE_HEADER: &str = "X-SBTC-NONCE";
pub const SIGNATURE_HEADER: &str = "X-SBTC-SIGNATURE";

/// Supplies the single-use nonce mixed into each signature.
///
/// Kept behind a trait so tests can pin the nonce and verify exact
/// signatures on the wire.
pub trait NonceSource: fmt::Debug + Send + Sync {
    fn nonce(&self) -> String;
}

/// Production nonce: unix epoch seconds concatenated with a 5-digit random
/// suffix. Not cryptographically secure; its job is uniqueness within the
/// authentication window, not secrecy.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemNonce;

impl NonceSource for SystemNonce {
    fn nonce(&self) -> String {
        let seconds = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        let suffix: u32 = rand::thread_rng().gen_range(10_000..=99_999);
        format!("{seconds}{suffix}")
    }
}

/// The three authentication headers for one private request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthHeaders {
    pub api_key: String,
    pub nonce: String,
    pub signature: String,
}

/// Signs requests for private endpoints.
///
/// The secret key is taken per call and never stored here; the signer only
/// owns the nonce source.
#[derive(Debug)]
pub struct RequestSigner {
    nonce_source: Box<dyn NonceSource>,
}

impl Default for RequestSigner {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestSigner {
    /// Create a signer with the system clock/RNG nonce source.
    pub fn new() -> Self {
        Self::with_nonce_source(Box::new(SystemNonce))
    }

    /// Create a signer with a custom nonce source.
    pub fn with_nonce_source(nonce_source: Box<dyn NonceSource>) -> Self {
        Self { nonce_source }
    }

    /// Build the authentication headers for one request.
    ///
    /// The signature covers `"{METHOD} {path_with_query} {base64_body} {nonce}"`
    /// (double space collapsed when the body is empty), HMAC-SHA384 keyed by
    /// the secret, hex-encoded lowercase. An empty secret still signs; the
    /// server is the one that rejects it.
    pub fn auth_headers(
        &self,
        method: &Method,
        url: &Url,
        body: &[u8],
        api_key: &str,
        secret_key: &str,
    ) -> AuthHeaders {
        let nonce = self.nonce_source.nonce();
        let base = signature_base(method.as_str(), &path_with_query(url), body, &nonce);
        let signature = sign(&base, secret_key);
        AuthHeaders {
            api_key: api_key.to_string(),
            nonce,
            signature,
        }
    }
}

/// URL path plus the raw (not re-encoded) query string when present.
fn path_with_query(url: &Url) -> String {
    match url.query() {
        Some(query) => format!("{}?{}", url.path(), query),
        None => url.path().to_string(),
    }
}

/// The exact byte string that gets signed.
///
/// An empty body base64-encodes to the empty string, leaving two adjacent
/// spaces in the template; those collapse to one. The exchange's reference
/// implementation signs the collapsed form, so this normalization is part of
/// the wire contract.
fn signature_base(method: &str, path_with_query: &str, body: &[u8], nonce: &str) -> String {
    let encoded_body = BASE64.encode(body);
    format!(
        "{} {} {} {}",
        method.to_ascii_uppercase(),
        path_with_query,
        encoded_body,
        nonce
    )
    .replace("  ", " ")
}

/// HMAC-SHA384 over the signature base, lowercase hex.
fn sign(signature_base: &str, secret_key: &str) -> String {
    let mut mac = HmacSha384::new_from_slice(secret_key.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(signature_base.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}
