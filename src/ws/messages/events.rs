//! Market events pushed to websocket subscribers.
//!
//! Every event arrives as `{"action": ..., "event": {...}}`, and each action
//! has exactly one payload shape:
//!
//! | action   | payload         |
//! |----------|-----------------|
//! | `FILL`   | [`FillOrder`]   |
//! | `NEW`    | [`NewOrder`]    |
//! | `CANCEL` | [`CancelOrder`] |
//! | `REMOVE` | [`RemoveOrder`] |

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, de};

use super::WebsocketAction;
use crate::objects::SignedOrder;
use crate::types::{OrderType, UserOrderType};
use crate::types::serde_helpers::decimal_exact;

/// A fill, without the relay's signed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fill {
    /// Base token address.
    pub base_token_address: String,
    /// Quote token address.
    pub quote_token_address: String,
    /// Fill transaction hash.
    pub transaction_hash: String,
    /// Taker side.
    #[serde(rename = "type")]
    pub order_type: UserOrderType,
    /// Block the fill was mined in.
    pub block_number: u64,
    /// Maker address.
    pub maker_address: String,
    /// Taker address.
    pub taker_address: String,
    /// Fee recipient address.
    pub fee_recipient_address: String,
    /// Maker fee paid (converted).
    #[serde(with = "decimal_exact")]
    pub maker_fee_paid: Decimal,
    /// Taker fee paid (converted).
    #[serde(with = "decimal_exact")]
    pub taker_fee_paid: Decimal,
    /// Base token amount filled (converted).
    #[serde(with = "decimal_exact")]
    pub filled_base_token_amount: Decimal,
    /// Quote token amount filled (converted).
    #[serde(with = "decimal_exact")]
    pub filled_quote_token_amount: Decimal,
    /// Hash of the filled order.
    pub order_hash: String,
    /// Fill timestamp.
    pub timestamp: u64,
    /// Whether the fill price is an outlier.
    pub outlier: bool,
}

/// Fill event: a fill together with the order it filled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FillOrder {
    /// Base token address.
    pub base_token_address: String,
    /// Quote token address.
    pub quote_token_address: String,
    /// Fill transaction hash.
    pub transaction_hash: String,
    /// Taker side.
    #[serde(rename = "type")]
    pub order_type: UserOrderType,
    /// Block the fill was mined in.
    pub block_number: u64,
    /// Maker address.
    pub maker_address: String,
    /// Taker address.
    pub taker_address: String,
    /// Fee recipient address.
    pub fee_recipient_address: String,
    /// Maker fee paid (converted).
    #[serde(with = "decimal_exact")]
    pub maker_fee_paid: Decimal,
    /// Taker fee paid (converted).
    #[serde(with = "decimal_exact")]
    pub taker_fee_paid: Decimal,
    /// Base token amount filled (converted).
    #[serde(with = "decimal_exact")]
    pub filled_base_token_amount: Decimal,
    /// Quote token amount filled (converted).
    #[serde(with = "decimal_exact")]
    pub filled_quote_token_amount: Decimal,
    /// Hash of the filled order.
    pub order_hash: String,
    /// Fill timestamp.
    pub timestamp: u64,
    /// Whether the fill price is an outlier.
    pub outlier: bool,
    /// The filled order, with its state after the fill.
    pub order: SignedOrder,
}

impl FillOrder {
    /// The fill without the order.
    pub fn fill(&self) -> Fill {
        Fill {
            base_token_address: self.base_token_address.clone(),
            quote_token_address: self.quote_token_address.clone(),
            transaction_hash: self.transaction_hash.clone(),
            order_type: self.order_type,
            block_number: self.block_number,
            maker_address: self.maker_address.clone(),
            taker_address: self.taker_address.clone(),
            fee_recipient_address: self.fee_recipient_address.clone(),
            maker_fee_paid: self.maker_fee_paid,
            taker_fee_paid: self.taker_fee_paid,
            filled_base_token_amount: self.filled_base_token_amount,
            filled_quote_token_amount: self.filled_quote_token_amount,
            order_hash: self.order_hash.clone(),
            timestamp: self.timestamp,
            outlier: self.outlier,
        }
    }
}

/// New order event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewOrder {
    /// Base token address.
    pub base_token_address: String,
    /// Quote token address.
    pub quote_token_address: String,
    /// The new order.
    pub order: SignedOrder,
}

/// Cancelled order event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CancelOrder {
    /// Base token address.
    pub base_token_address: String,
    /// Quote token address.
    pub quote_token_address: String,
    /// Cancel transaction hash.
    pub transaction_hash: String,
    /// Book side of the cancelled order.
    pub order_type: OrderType,
    /// Hash of the cancelled order.
    pub order_hash: String,
}

/// Removed order event (expired, unfunded, or otherwise dropped by the relay).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RemoveOrder {
    /// Base token address.
    pub base_token_address: String,
    /// Quote token address.
    pub quote_token_address: String,
    /// Why the relay removed the order.
    pub reason: String,
    /// Book side of the removed order.
    pub order_type: OrderType,
    /// Hash of the removed order.
    pub order_hash: String,
}

/// A market event, keyed by its action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "event", rename_all = "UPPERCASE")]
pub enum WebsocketEvent {
    /// Order filled
    Fill(FillOrder),
    /// Order added
    New(NewOrder),
    /// Order cancelled
    Cancel(CancelOrder),
    /// Order removed
    Remove(RemoveOrder),
}

impl WebsocketEvent {
    /// The action tag of this event.
    pub fn action(&self) -> WebsocketAction {
        match self {
            WebsocketEvent::Fill(_) => WebsocketAction::Fill,
            WebsocketEvent::New(_) => WebsocketAction::New,
            WebsocketEvent::Cancel(_) => WebsocketAction::Cancel,
            WebsocketEvent::Remove(_) => WebsocketAction::Remove,
        }
    }

    /// Base token address of the event's market.
    pub fn base_token_address(&self) -> &str {
        match self {
            WebsocketEvent::Fill(e) => &e.base_token_address,
            WebsocketEvent::New(e) => &e.base_token_address,
            WebsocketEvent::Cancel(e) => &e.base_token_address,
            WebsocketEvent::Remove(e) => &e.base_token_address,
        }
    }

    /// Quote token address of the event's market.
    pub fn quote_token_address(&self) -> &str {
        match self {
            WebsocketEvent::Fill(e) => &e.quote_token_address,
            WebsocketEvent::New(e) => &e.quote_token_address,
            WebsocketEvent::Cancel(e) => &e.quote_token_address,
            WebsocketEvent::Remove(e) => &e.quote_token_address,
        }
    }

    /// Hash of the order the event concerns.
    pub fn order_hash(&self) -> &str {
        match self {
            WebsocketEvent::Fill(e) => &e.order_hash,
            WebsocketEvent::New(e) => &e.order.order_hash,
            WebsocketEvent::Cancel(e) => &e.order_hash,
            WebsocketEvent::Remove(e) => &e.order_hash,
        }
    }
}

// Decoding goes through `serde_json::Value` so the payload is matched against
// the shape its action names, regardless of key order in the frame.
impl<'de> Deserialize<'de> for WebsocketEvent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RawEvent {
            action: WebsocketAction,
            event: serde_json::Value,
        }

        let raw = RawEvent::deserialize(deserializer)?;
        let event = match raw.action {
            WebsocketAction::Fill => serde_json::from_value(raw.event).map(WebsocketEvent::Fill),
            WebsocketAction::New => serde_json::from_value(raw.event).map(WebsocketEvent::New),
            WebsocketAction::Cancel => {
                serde_json::from_value(raw.event).map(WebsocketEvent::Cancel)
            }
            WebsocketAction::Remove => {
                serde_json::from_value(raw.event).map(WebsocketEvent::Remove)
            }
        };
        event.map_err(|e| de::Error::custom(format!("invalid {} event: {}", raw.action, e)))
    }
}
