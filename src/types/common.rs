//! Common domain types shared by the relay objects and websocket messages.

use serde::{Deserialize, Serialize};

/// Buy or sell side of a user order request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserOrderType {
    /// Buy the base token
    Buy,
    /// Sell the base token
    Sell,
}

impl UserOrderType {
    /// Every member, in declaration order.
    pub const ALL: [UserOrderType; 2] = [UserOrderType::Buy, UserOrderType::Sell];

    /// The book side an order of this type rests on.
    pub fn order_type(&self) -> OrderType {
        match self {
            UserOrderType::Buy => OrderType::Bid,
            UserOrderType::Sell => OrderType::Ask,
        }
    }
}

impl std::fmt::Display for UserOrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserOrderType::Buy => write!(f, "BUY"),
            UserOrderType::Sell => write!(f, "SELL"),
        }
    }
}

/// Book side of a signed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderType {
    /// Bid (buy side of the book)
    Bid,
    /// Ask (sell side of the book)
    Ask,
}

impl OrderType {
    /// Every member, in declaration order.
    pub const ALL: [OrderType; 2] = [OrderType::Bid, OrderType::Ask];

    /// The user order type that produces an order on this side.
    pub fn user_order_type(&self) -> UserOrderType {
        match self {
            OrderType::Bid => UserOrderType::Buy,
            OrderType::Ask => UserOrderType::Sell,
        }
    }
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderType::Bid => write!(f, "BID"),
            OrderType::Ask => write!(f, "ASK"),
        }
    }
}

/// Lifecycle state of a signed order as tracked by the relay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderState {
    /// Order is on the book and fillable
    Open,
    /// Order has been completely filled
    Filled,
    /// Order has been cancelled on-chain
    Cancelled,
    /// Order has passed its expiration time
    Expired,
    /// Maker no longer holds the balance or allowance to fill the order
    Unfunded,
}

impl OrderState {
    /// Every member, in declaration order.
    pub const ALL: [OrderState; 5] = [
        OrderState::Open,
        OrderState::Filled,
        OrderState::Cancelled,
        OrderState::Expired,
        OrderState::Unfunded,
    ];
}

impl std::fmt::Display for OrderState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OrderState::Open => "OPEN",
            OrderState::Filled => "FILLED",
            OrderState::Cancelled => "CANCELLED",
            OrderState::Expired => "EXPIRED",
            OrderState::Unfunded => "UNFUNDED",
        };
        write!(f, "{}", s)
    }
}

/// The literal `"SET"` marking a field the client fills in before signing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Placeholder {
    /// To be set by the client
    #[default]
    #[serde(rename = "SET")]
    Set,
}

impl std::fmt::Display for Placeholder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SET")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_order_type_serde() {
        assert_eq!(
            serde_json::to_string(&UserOrderType::Buy).unwrap(),
            r#""BUY""#
        );
        assert_eq!(
            serde_json::from_str::<UserOrderType>(r#""SELL""#).unwrap(),
            UserOrderType::Sell
        );
        assert!(serde_json::from_str::<UserOrderType>(r#""buy""#).is_err());
    }

    #[test]
    fn test_order_state_rejects_unknown() {
        assert!(serde_json::from_str::<OrderState>(r#""PENDING""#).is_err());
        // Older schema spelling is not accepted.
        assert!(serde_json::from_str::<OrderState>(r#""CANCELED""#).is_err());
    }

    #[test]
    fn test_display_matches_wire() {
        for state in OrderState::ALL {
            let json = serde_json::to_string(&state).unwrap();
            assert_eq!(json, format!("\"{}\"", state));
        }
        for side in OrderType::ALL {
            let json = serde_json::to_string(&side).unwrap();
            assert_eq!(json, format!("\"{}\"", side));
        }
        for side in UserOrderType::ALL {
            let json = serde_json::to_string(&side).unwrap();
            assert_eq!(json, format!("\"{}\"", side));
        }
    }

    #[test]
    fn test_side_mapping() {
        for side in UserOrderType::ALL {
            assert_eq!(side.order_type().user_order_type(), side);
        }
        assert_eq!(UserOrderType::Buy.order_type(), OrderType::Bid);
    }

    #[test]
    fn test_placeholder_literal() {
        assert_eq!(serde_json::to_string(&Placeholder::Set).unwrap(), r#""SET""#);
        assert!(serde_json::from_str::<Placeholder>(r#""0xabc""#).is_err());
    }
}
