//! Token and market metadata.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::Result;
use crate::types::serde_helpers::{decimal_exact, decimal_exact_seq, optional_decimal_exact};

/// Information specific to a single token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    /// Token contract address.
    pub address: String,
    /// Ticker symbol (e.g. "ZRX").
    pub symbol: String,
    /// Full name.
    pub name: String,
    /// Number of decimals the token uses on-chain.
    pub decimals: u8,
    /// Listed in the official 0x token registry.
    #[serde(rename = "zeroex_official")]
    pub zeroex_official: bool,
    /// Currently tradable on the relay.
    pub active: bool,
    /// Date the token was listed.
    pub created_date: String,
    /// Usable as the quote side of a market.
    pub quote: bool,
}

impl Token {
    /// Parse the listing date as an RFC 3339 timestamp.
    pub fn created_at(&self) -> Result<OffsetDateTime> {
        Ok(OffsetDateTime::parse(&self.created_date, &Rfc3339)?)
    }
}

/// Most recent trade and best bid/ask for a market.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticker {
    /// Last trade transaction hash.
    pub transaction_hash: String,
    /// Last trade price.
    #[serde(with = "decimal_exact")]
    pub price: Decimal,
    /// Last trade size (in quote).
    #[serde(with = "decimal_exact")]
    pub size: Decimal,
    /// Timestamp of last trade.
    pub timestamp: u64,
    /// Best bid on the book.
    #[serde(with = "decimal_exact")]
    pub best_bid: Decimal,
    /// Best ask on the book.
    #[serde(with = "decimal_exact")]
    pub best_ask: Decimal,
    /// Bid-ask spread percentage.
    #[serde(with = "decimal_exact")]
    pub spread_percentage: Decimal,
}

/// Order book depth and 24 hour volume statistics for a market.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    /// Bids within the relay's depth range of the best bid.
    pub num_bids_within_range: u32,
    /// Asks within the relay's depth range of the best ask.
    pub num_asks_within_range: u32,
    /// Base token available on the book.
    #[serde(with = "decimal_exact")]
    pub base_token_available: Decimal,
    /// Quote token available on the book.
    #[serde(with = "decimal_exact")]
    pub quote_token_available: Decimal,
    /// 24 hour volume.
    #[serde(with = "decimal_exact")]
    pub volume_24_hour: Decimal,
    /// 24 hour price change percentage.
    #[serde(with = "decimal_exact")]
    pub percent_change_24_hour: Decimal,
}

/// Historical prices for a market.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct History {
    /// Price history over the last 24 hours, oldest first.
    #[serde(with = "decimal_exact_seq")]
    pub price_24_hour: Vec<Decimal>,
}

/// Market information for a base/quote token pair.
///
/// Only `id` is mandatory. Everything else is filled in depending on which
/// endpoint and `include` options produced the market.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Market {
    /// Market ID (e.g. "ZRX-WETH").
    pub id: String,
    /// Display name (e.g. "ZRX/WETH").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Base token address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_token_address: Option<String>,
    /// Quote token address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote_token_address: Option<String>,
    /// Base token decimals.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_token_decimals: Option<u8>,
    /// Quote token decimals.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote_token_decimals: Option<u8>,
    /// Maximum price precision in decimal places (e.g. 7).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote_increment: Option<u32>,
    /// Minimum base token order size, derived from the last trade price.
    #[serde(
        default,
        with = "optional_decimal_exact",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_order_size: Option<Decimal>,
    /// Maximum base token order size.
    #[serde(
        default,
        with = "optional_decimal_exact",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_order_size: Option<Decimal>,
    /// Activity score used to rank markets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    /// Ticker snapshot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticker: Option<Ticker>,
    /// Depth and volume statistics.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<Stats>,
    /// Price history.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history: Option<History>,
}

impl Market {
    /// Create a market with only its ID set.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: None,
            base_token_address: None,
            quote_token_address: None,
            base_token_decimals: None,
            quote_token_decimals: None,
            quote_increment: None,
            min_order_size: None,
            max_order_size: None,
            score: None,
            ticker: None,
            stats: None,
            history: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use time::macros::datetime;

    #[test]
    fn test_token_deserialization() {
        let json = r#"{
            "address": "0xe41d2489571d322189246dafa5ebde1f4699f498",
            "symbol": "ZRX",
            "name": "0x Protocol Token",
            "decimals": 18,
            "zeroex_official": true,
            "active": true,
            "createdDate": "2018-05-03T16:20:00Z",
            "quote": false
        }"#;
        let token: Token = serde_json::from_str(json).unwrap();
        assert_eq!(token.symbol, "ZRX");
        assert_eq!(token.decimals, 18);
        assert!(token.zeroex_official);
        assert!(!token.quote);
        assert_eq!(token.created_at().unwrap(), datetime!(2018-05-03 16:20:00 UTC));
    }

    #[test]
    fn test_token_bad_created_date() {
        let token = Token {
            address: "0x0".into(),
            symbol: "X".into(),
            name: "X".into(),
            decimals: 0,
            zeroex_official: false,
            active: false,
            created_date: "yesterday".into(),
            quote: false,
        };
        assert!(matches!(
            token.created_at(),
            Err(crate::error::RelayError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_stats_field_names() {
        let stats = Stats {
            num_bids_within_range: 12,
            num_asks_within_range: 9,
            base_token_available: Decimal::from(1000),
            quote_token_available: Decimal::from_str("2.5").unwrap(),
            volume_24_hour: Decimal::from_str("10.25").unwrap(),
            percent_change_24_hour: Decimal::from_str("-3.1").unwrap(),
        };
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["numBidsWithinRange"], 12);
        assert_eq!(json["volume24Hour"], "10.25");
        assert_eq!(json["percentChange24Hour"], "-3.1");
    }

    fn ticker_json(price: &str) -> serde_json::Value {
        serde_json::json!({
            "transactionHash": "0x6e2b5b5d9e8a7b1c",
            "price": price,
            "size": "12.25",
            "timestamp": 1540000000,
            "bestBid": "0.00244",
            "bestAsk": "0.00246",
            "spreadPercentage": "0.0081967"
        })
    }

    #[test]
    fn test_ticker_keeps_token_precision() {
        // 10 integer digits plus 18 token decimals.
        let json = ticker_json("1234567890.123456789012345678");
        let ticker: Ticker = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(serde_json::to_value(&ticker).unwrap(), json);
    }

    #[test]
    fn test_ticker_rejects_unrepresentable_price() {
        let json = ticker_json("123456789012.123456789012345678");
        assert!(serde_json::from_value::<Ticker>(json).is_err());
    }

    #[test]
    fn test_market_only_id() {
        let market: Market = serde_json::from_str(r#"{"id":"ZRX-WETH"}"#).unwrap();
        assert_eq!(market, Market::new("ZRX-WETH"));
        assert_eq!(serde_json::to_string(&market).unwrap(), r#"{"id":"ZRX-WETH"}"#);
    }

    #[test]
    fn test_market_missing_id() {
        assert!(serde_json::from_str::<Market>(r#"{"displayName":"ZRX/WETH"}"#).is_err());
    }

    #[test]
    fn test_market_empty_history_is_present() {
        let market: Market =
            serde_json::from_str(r#"{"id":"ZRX-WETH","history":{"price24Hour":[]}}"#).unwrap();
        assert_eq!(market.history, Some(History::default()));

        let market: Market = serde_json::from_str(r#"{"id":"ZRX-WETH","history":null}"#).unwrap();
        assert_eq!(market.history, None);
    }
}
