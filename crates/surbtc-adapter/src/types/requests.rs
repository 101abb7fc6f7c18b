/*
[INPUT]:  HTTP verb and action path of a logical API operation
[OUTPUT]: Endpoint descriptor consumed by the dispatch core
[POS]:    Data layer - the facade-to-connection request contract
[UPDATE]: When the exchange introduces new verbs
*/

use reqwest::Method;

/// Describes one logical API operation: the verb and the action path
/// relative to the API base URL (e.g. `markets/btc-clp/ticker`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub verb: Method,
    pub action: String,
}

impl Endpoint {
    pub fn get(action: impl Into<String>) -> Self {
        Self {
            verb: Method::GET,
            action: action.into(),
        }
    }

    pub fn post(action: impl Into<String>) -> Self {
        Self {
            verb: Method::POST,
            action: action.into(),
        }
    }

    pub fn put(action: impl Into<String>) -> Self {
        Self {
            verb: Method::PUT,
            action: action.into(),
        }
    }
}
