/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses classified into payloads and errors
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod public;
pub mod signature;
pub mod trade;
pub mod user;

pub use error::{Result, SurbtcError};
pub use signature::{
    AuthHeaders, NonceSource, RequestSigner, SystemNonce, APIKEY_HEADER, NONCE_HEADER,
    SIGNATURE_HEADER,
};

pub use client::{ApiPayload, ClientConfig, Credentials, LastError, SurbtcClient};
