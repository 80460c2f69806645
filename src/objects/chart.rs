//! Order book snapshots and candle chart data.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::SignedOrder;
use crate::Result;
use crate::types::serde_helpers::decimal_exact;

/// The order book for a market.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Base token address.
    pub base_token_address: String,
    /// Quote token address.
    pub quote_token_address: String,
    /// Bids, best first.
    pub bids: Vec<SignedOrder>,
    /// Asks, best first.
    pub asks: Vec<SignedOrder>,
}

/// Open-high-low-close chart data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ohlc {
    /// Open price.
    #[serde(with = "decimal_exact")]
    pub open: Decimal,
    /// High price.
    #[serde(with = "decimal_exact")]
    pub high: Decimal,
    /// Low price.
    #[serde(with = "decimal_exact")]
    pub low: Decimal,
    /// Close price.
    #[serde(with = "decimal_exact")]
    pub close: Decimal,
}

/// Candle keyed by a block range.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candle {
    /// Open price.
    #[serde(with = "decimal_exact")]
    pub open: Decimal,
    /// High price.
    #[serde(with = "decimal_exact")]
    pub high: Decimal,
    /// Low price.
    #[serde(with = "decimal_exact")]
    pub low: Decimal,
    /// Close price.
    #[serde(with = "decimal_exact")]
    pub close: Decimal,
    /// First block included in this candle.
    pub start_block: u64,
    /// Timestamp of the first block, unix seconds.
    pub start_block_timestamp: u64,
    /// Last block included in this candle (inclusive).
    pub end_block: u64,
    /// Timestamp of the last block, unix seconds.
    pub end_block_timestamp: u64,
    /// Base token volume.
    #[serde(with = "decimal_exact")]
    pub base_token_volume: Decimal,
    /// Quote token volume.
    #[serde(with = "decimal_exact")]
    pub quote_token_volume: Decimal,
}

impl Candle {
    /// The price part of the candle.
    pub fn ohlc(&self) -> Ohlc {
        Ohlc {
            open: self.open,
            high: self.high,
            low: self.low,
            close: self.close,
        }
    }

    /// Time of the first block.
    pub fn start_time(&self) -> Result<OffsetDateTime> {
        super::unix_time(self.start_block_timestamp)
    }

    /// Time of the last block.
    pub fn end_time(&self) -> Result<OffsetDateTime> {
        super::unix_time(self.end_block_timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use time::macros::datetime;

    #[test]
    fn test_candle_deserialization() {
        let json = r#"{
            "open": "0.00231",
            "high": "0.00245",
            "low": "0.00229",
            "close": "0.0024",
            "startBlock": 6500000,
            "startBlockTimestamp": 1540000000,
            "endBlock": 6500240,
            "endBlockTimestamp": 1540003600,
            "baseTokenVolume": "15230.5",
            "quoteTokenVolume": "36.01"
        }"#;
        let candle: Candle = serde_json::from_str(json).unwrap();
        assert_eq!(candle.end_block, 6_500_240);
        assert_eq!(candle.ohlc().high, Decimal::from_str("0.00245").unwrap());
        assert_eq!(candle.start_time().unwrap(), datetime!(2018-10-20 01:46:40 UTC));
        assert_eq!(candle.end_time().unwrap(), datetime!(2018-10-20 02:46:40 UTC));
    }

    #[test]
    fn test_ohlc_field_names() {
        let ohlc = Ohlc {
            open: Decimal::ONE,
            high: Decimal::from(2),
            low: Decimal::ZERO,
            close: Decimal::ONE,
        };
        let json = serde_json::to_string(&ohlc).unwrap();
        assert_eq!(json, r#"{"open":"1","high":"2","low":"0","close":"1"}"#);
    }

    #[test]
    fn test_empty_book() {
        let json = r#"{"baseTokenAddress":"0xa","quoteTokenAddress":"0xb","bids":[],"asks":[]}"#;
        let book: Book = serde_json::from_str(json).unwrap();
        assert!(book.bids.is_empty());
        assert!(book.asks.is_empty());
        assert!(serde_json::from_str::<Book>(r#"{"baseTokenAddress":"0xa","quoteTokenAddress":"0xb"}"#).is_err());
    }
}
