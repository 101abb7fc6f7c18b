/*
[INPUT]:  Market identifiers and query parameters
[OUTPUT]: Market data (ticker, order book, trades, market list)
[POS]:    HTTP layer - public market data endpoints (no auth required)
[UPDATE]: When adding new public endpoints
*/

use serde_json::Value;

use crate::http::{Result, SurbtcClient};
use crate::types::{Endpoint, Params};

impl SurbtcClient {
    /// Current ticker for a market
    ///
    /// GET markets/{market_id}/ticker
    pub async fn ticker(&self, market_id: &str) -> Result<Value> {
        let endpoint = Endpoint::get(format!("markets/{market_id}/ticker"));
        self.request(&endpoint, &Params::new(), false).await
    }

    /// Order book for a market
    ///
    /// GET markets/{market_id}/order_book
    pub async fn order_book(&self, market_id: &str) -> Result<Value> {
        let endpoint = Endpoint::get(format!("markets/{market_id}/order_book"));
        self.request(&endpoint, &Params::new(), false).await
    }

    /// Recent trades for a market, optionally only those at or after the
    /// given timestamp (unix time with microseconds)
    ///
    /// GET markets/{market_id}/trades?timestamp={timestamp}
    pub async fn trades(&self, market_id: &str, timestamp: Option<i64>) -> Result<Value> {
        let endpoint = Endpoint::get(format!("markets/{market_id}/trades"));
        let mut params = Params::new();
        params.insert_opt("timestamp", timestamp);
        self.request(&endpoint, &params, false).await
    }

    /// All markets listed on the exchange
    ///
    /// GET markets
    pub async fn markets(&self) -> Result<Value> {
        let endpoint = Endpoint::get("markets");
        self.request(&endpoint, &Params::new(), false).await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{ClientConfig, SurbtcClient};
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> SurbtcClient {
        SurbtcClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
            .expect("client init")
    }

    #[tokio::test]
    async fn test_ticker() {
        let server = MockServer::start().await;
        let body = json!({
            "ticker": {
                "last_price": ["7490000.0", "CLP"],
                "market_id": "BTC-CLP",
                "price_variation_24h": "0.012"
            }
        });

        let _mock = Mock::given(method("GET"))
            .and(path("/markets/btc-clp/ticker"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let response = client.ticker("btc-clp").await.expect("ticker failed");
        assert_eq!(response, body);
    }

    #[tokio::test]
    async fn test_trades_with_timestamp_filter() {
        let server = MockServer::start().await;
        let body = json!({"trades": {"entries": [], "market_id": "BTC-CLP"}});

        let _mock = Mock::given(method("GET"))
            .and(path("/markets/btc-clp/trades"))
            .and(query_param("timestamp", "1700000000000"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let response = client
            .trades("btc-clp", Some(1_700_000_000_000))
            .await
            .expect("trades failed");
        assert_eq!(response, body);
    }

    #[tokio::test]
    async fn test_trades_without_timestamp_sends_no_query() {
        let server = MockServer::start().await;
        let body = json!({"trades": {"entries": []}});

        let _mock = Mock::given(method("GET"))
            .and(path("/markets/btc-clp/trades"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let response = client.trades("btc-clp", None).await.expect("trades failed");
        assert_eq!(response, body);

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests[0].url.query(), None);
    }

    #[tokio::test]
    async fn test_markets() {
        let server = MockServer::start().await;
        let body = json!({"markets": [{"id": "BTC-CLP"}, {"id": "BTC-COP"}]});

        let _mock = Mock::given(method("GET"))
            .and(path("/markets"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let response = client.markets().await.expect("markets failed");
        assert_eq!(response, body);
    }
}
