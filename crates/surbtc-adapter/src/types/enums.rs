/*
[INPUT]:  Wire-protocol string constants from the SurBTC API
[OUTPUT]: Typed enums with their exact wire spellings
[POS]:    Data layer - order direction, pricing and state enums
[UPDATE]: When the exchange adds order types or states
*/

use serde::{Deserialize, Serialize};

/// Direction of an order. The wire format capitalizes these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderSide {
    Bid,
    Ask,
}

impl OrderSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderSide::Bid => "Bid",
            OrderSide::Ask => "Ask",
        }
    }
}

/// Pricing mode of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceType {
    Limit,
    Market,
}

impl PriceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceType::Limit => "limit",
            PriceType::Market => "market",
        }
    }
}

/// Lifecycle state of an order. `Canceling` is also the state written
/// by the cancel endpoint (cancellation is a PUT of this state).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderState {
    Received,
    Pending,
    Traded,
    Canceling,
    Canceled,
}

impl OrderState {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderState::Received => "received",
            OrderState::Pending => "pending",
            OrderState::Traded => "traded",
            OrderState::Canceling => "canceling",
            OrderState::Canceled => "canceled",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_spellings() {
        assert_eq!(OrderSide::Bid.as_str(), "Bid");
        assert_eq!(OrderSide::Ask.as_str(), "Ask");
        assert_eq!(PriceType::Limit.as_str(), "limit");
        assert_eq!(OrderState::Canceling.as_str(), "canceling");
    }

    #[test]
    fn test_serde_matches_as_str() {
        let json = serde_json::to_string(&OrderState::Canceling).unwrap();
        assert_eq!(json, "\"canceling\"");
        let json = serde_json::to_string(&OrderSide::Ask).unwrap();
        assert_eq!(json, "\"Ask\"");
    }
}
