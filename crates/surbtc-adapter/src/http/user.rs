/*
[INPUT]:  Query parameters and signed authentication headers
[OUTPUT]: Account data (balances, orders, deposit/withdrawal history)
[POS]:    HTTP layer - private account endpoints (require signature)
[UPDATE]: When adding new account endpoints or changing filters
*/

use serde_json::Value;

use crate::http::{Result, SurbtcClient};
use crate::types::{Endpoint, OrderState, Params};

impl SurbtcClient {
    /// Account balances, for one currency or all of them
    ///
    /// GET balances or balances/{currency}
    pub async fn balances(&self, currency: Option<&str>) -> Result<Value> {
        let action = match currency {
            Some(currency) => format!("balances/{currency}"),
            None => "balances".to_string(),
        };
        self.request(&Endpoint::get(action), &Params::new(), true).await
    }

    /// Own orders in a market, paged. `per` is capped at 300 by the server.
    ///
    /// GET markets/{market_id}/orders?per={per}&page={page}&state={state}&minimum_exchanged={minimum_exchanged}
    pub async fn orders(
        &self,
        market_id: &str,
        per: u32,
        page: u32,
        state: Option<OrderState>,
        minimum_exchanged: Option<f64>,
    ) -> Result<Value> {
        let endpoint = Endpoint::get(format!("markets/{market_id}/orders"));
        let mut params = Params::new();
        params.insert("per", per).insert("page", page);
        params.insert_opt("state", state.map(|s| s.as_str()));
        params.insert_opt("minimum_exchanged", minimum_exchanged);
        self.request(&endpoint, &params, true).await
    }

    /// Single order by id
    ///
    /// GET orders/{id}
    pub async fn order(&self, id: &str) -> Result<Value> {
        let endpoint = Endpoint::get(format!("orders/{id}"));
        self.request(&endpoint, &Params::new(), true).await
    }

    /// Deposit history for a currency
    ///
    /// GET currencies/{currency_code}/deposits
    pub async fn deposits(&self, currency_code: &str) -> Result<Value> {
        let endpoint = Endpoint::get(format!("currencies/{currency_code}/deposits"));
        self.request(&endpoint, &Params::new(), true).await
    }

    /// Withdrawal history for a currency
    ///
    /// GET currencies/{currency_code}/withdrawals
    pub async fn withdrawals(&self, currency_code: &str) -> Result<Value> {
        let endpoint = Endpoint::get(format!("currencies/{currency_code}/withdrawals"));
        self.request(&endpoint, &Params::new(), true).await
    }
}
