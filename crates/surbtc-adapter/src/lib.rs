/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public SurBTC adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    ApiPayload,
    AuthHeaders,
    ClientConfig,
    Credentials,
    LastError,
    NonceSource,
    RequestSigner,
    Result,
    SurbtcClient,
    SurbtcError,
    SystemNonce,
    APIKEY_HEADER,
    NONCE_HEADER,
    SIGNATURE_HEADER,
};

// Re-export all types
pub use types::*;
