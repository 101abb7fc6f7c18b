/*
[INPUT]:  Order parameters with signed authentication headers
[OUTPUT]: Order placement/cancellation responses
[POS]:    HTTP layer - trading endpoints (require signature)
[UPDATE]: When the exchange implements withdrawal/deposit creation
*/

use serde_json::Value;

use crate::http::{Result, SurbtcClient, SurbtcError};
use crate::types::{Endpoint, OrderSide, OrderState, Params, PriceType};

impl SurbtcClient {
    /// Place a new order. `limit` is the price and may be absent for market
    /// orders; it is then sent as an explicit null, matching the wire format.
    ///
    /// POST markets/{market_id}/orders
    pub async fn create_order(
        &self,
        market_id: &str,
        side: OrderSide,
        price_type: PriceType,
        limit: Option<f64>,
        amount: f64,
    ) -> Result<Value> {
        let endpoint = Endpoint::post(format!("markets/{market_id}/orders"));
        let mut params = Params::new();
        params
            .insert("type", side.as_str())
            .insert("price_type", price_type.as_str())
            .insert("limit", limit)
            .insert("amount", amount);
        self.request(&endpoint, &params, true).await
    }

    /// Cancel an order. The exchange models cancellation as a state write.
    ///
    /// PUT orders/{id} with body {"state":"canceling"}
    pub async fn cancel_order(&self, id: &str) -> Result<Value> {
        let endpoint = Endpoint::put(format!("orders/{id}"));
        let mut params = Params::new();
        params.insert("state", OrderState::Canceling.as_str());
        self.request(&endpoint, &params, true).await
    }

    /// Not offered by the exchange API; fails without issuing a call.
    pub async fn create_withdrawal(&self) -> Result<Value> {
        Err(SurbtcError::Unsupported {
            operation: "create_withdrawal",
        })
    }

    /// Not offered by the exchange API; fails without issuing a call.
    pub async fn create_fiat_deposit(&self) -> Result<Value> {
        Err(SurbtcError::Unsupported {
            operation: "create_fiat_deposit",
        })
    }

    /// Not offered by the exchange API; fails without issuing a call.
    pub async fn create_crypto_deposit(&self) -> Result<Value> {
        Err(SurbtcError::Unsupported {
            operation: "create_crypto_deposit",
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{ClientConfig, SurbtcClient, SurbtcError};
    use crate::types::{OrderSide, PriceType};
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn signed_client(server: &MockServer) -> SurbtcClient {
        let mut client =
            SurbtcClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
                .expect("client init");
        client.authenticate("key-id", "secret");
        client
    }

    #[tokio::test]
    async fn test_create_order_posts_json_body() {
        let server = MockServer::start().await;
        let response_body = json!({"order": {"id": 1, "state": "received"}});

        let _mock = Mock::given(method("POST"))
            .and(path("/markets/btc-clp/orders"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({
                "type": "Bid",
                "price_type": "limit",
                "limit": 7490000.0,
                "amount": 0.5
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(response_body.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let client = signed_client(&server).await;
        let response = client
            .create_order("btc-clp", OrderSide::Bid, PriceType::Limit, Some(7_490_000.0), 0.5)
            .await
            .expect("create_order failed");
        assert_eq!(response, response_body);

        // POST parameters travel in the body, never the query string
        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests[0].url.query(), None);
    }

    #[tokio::test]
    async fn test_market_order_sends_null_limit() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("POST"))
            .and(path("/markets/btc-clp/orders"))
            .and(body_json(json!({
                "type": "Ask",
                "price_type": "market",
                "limit": null,
                "amount": 0.25
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"order": {"id": 2}})))
            .expect(1)
            .mount(&server)
            .await;

        let client = signed_client(&server).await;
        client
            .create_order("btc-clp", OrderSide::Ask, PriceType::Market, None, 0.25)
            .await
            .expect("create_order failed");
    }

    #[tokio::test]
    async fn test_cancel_order_puts_canceling_state() {
        let server = MockServer::start().await;
        let response_body = json!({"order": {"id": 42, "state": "canceling"}});

        let _mock = Mock::given(method("PUT"))
            .and(path("/orders/42"))
            .and(body_json(json!({"state": "canceling"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(response_body.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let client = signed_client(&server).await;
        let response = client.cancel_order("42").await.expect("cancel_order failed");
        assert_eq!(response, response_body);
    }

    #[tokio::test]
    async fn test_unsupported_stubs_make_no_call() {
        let server = MockServer::start().await;
        let client = signed_client(&server).await;

        for result in [
            client.create_withdrawal().await,
            client.create_fiat_deposit().await,
            client.create_crypto_deposit().await,
        ] {
            assert!(matches!(result, Err(SurbtcError::Unsupported { .. })));
        }

        assert!(server.received_requests().await.unwrap().is_empty());
        // stubs never touch the last-error slot either
        assert!(client.last_error().is_none());
    }
}
