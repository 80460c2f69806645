//! Order requests, unsigned order payloads and relay signed orders.

use alloy_primitives::U256;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::Result;
use crate::types::serde_helpers::{decimal_exact, u256_decimal};
use crate::types::{OrderState, OrderType, Placeholder, UserOrderType};
use crate::zero_ex;

/// A 0x signed order with the relay's derived order state.
///
/// Amounts other than those inside `signed_order` are converted from base
/// units into token units using each token's decimals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedOrder {
    /// 0x order hash.
    pub order_hash: String,
    /// Book side.
    #[serde(rename = "type")]
    pub order_type: OrderType,
    /// Lifecycle state.
    pub state: OrderState,
    /// Base token address.
    pub base_token_address: String,
    /// Quote token address.
    pub quote_token_address: String,
    /// Remaining fillable base token amount.
    #[serde(with = "decimal_exact")]
    pub remaining_base_token_amount: Decimal,
    /// Remaining fillable quote token amount.
    #[serde(with = "decimal_exact")]
    pub remaining_quote_token_amount: Decimal,
    /// Price in quote token per base token.
    #[serde(with = "decimal_exact")]
    pub price: Decimal,
    /// Creation time as unix seconds.
    #[serde(with = "decimal_exact")]
    pub created_date: Decimal,
    /// The underlying 0x order.
    pub signed_order: zero_ex::SignedOrder,
}

impl SignedOrder {
    /// Creation time as a UTC date-time.
    pub fn created_at(&self) -> Result<OffsetDateTime> {
        super::decimal_unix_time(self.created_date)
    }
}

/// Request for an unsigned order at a given quantity and price, which the
/// client then signs and posts back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitOrder {
    /// Buy or sell.
    #[serde(rename = "type")]
    pub order_type: UserOrderType,
    /// Base token quantity.
    #[serde(with = "decimal_exact")]
    pub quantity: Decimal,
    /// Limit price in quote token per base token.
    #[serde(with = "decimal_exact")]
    pub price: Decimal,
    /// Expiration as unix seconds.
    #[serde(with = "decimal_exact")]
    pub expiration: Decimal,
}

impl LimitOrder {
    /// Create a new limit order request.
    pub fn new(
        order_type: UserOrderType,
        quantity: Decimal,
        price: Decimal,
        expiration: Decimal,
    ) -> Self {
        Self {
            order_type,
            quantity,
            price,
            expiration,
        }
    }
}

/// Request for fillable orders, up to the given quantity, at the best price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketOrder {
    /// Buy or sell.
    #[serde(rename = "type")]
    pub order_type: UserOrderType,
    /// Base token quantity.
    #[serde(with = "decimal_exact")]
    pub quantity: Decimal,
}

impl MarketOrder {
    /// Create a new market order request.
    pub fn new(order_type: UserOrderType, quantity: Decimal) -> Self {
        Self {
            order_type,
            quantity,
        }
    }
}

/// An unsigned 0x order returned for a [`LimitOrder`] request.
///
/// The maker address and signature come back as `"SET"` and must be filled
/// in by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnsignedOrder {
    /// Chain ID.
    pub chain_id: u64,
    /// Sender address.
    pub sender_address: String,
    /// Maker address (to be set by the client).
    pub maker_address: Placeholder,
    /// Taker address.
    pub taker_address: String,
    /// Maker fee in base units.
    #[serde(with = "u256_decimal")]
    pub maker_fee: U256,
    /// Taker fee in base units.
    #[serde(with = "u256_decimal")]
    pub taker_fee: U256,
    /// Maker fee asset data.
    pub maker_fee_asset_data: String,
    /// Taker fee asset data.
    pub taker_fee_asset_data: String,
    /// Maker asset amount in base units.
    #[serde(with = "u256_decimal")]
    pub maker_asset_amount: U256,
    /// Taker asset amount in base units.
    #[serde(with = "u256_decimal")]
    pub taker_asset_amount: U256,
    /// Maker asset data.
    pub maker_asset_data: String,
    /// Taker asset data.
    pub taker_asset_data: String,
    /// Random salt.
    #[serde(with = "u256_decimal")]
    pub salt: U256,
    /// Exchange contract address.
    pub exchange_address: String,
    /// Fee recipient address.
    pub fee_recipient_address: String,
    /// Expiration as unix seconds.
    #[serde(with = "u256_decimal")]
    pub expiration_time_seconds: U256,
    /// Signature (to be set by the client).
    pub signature: Placeholder,
}

impl UnsignedOrder {
    /// Fill in the maker address, producing a 0x order ready to be signed.
    pub fn into_order(self, maker_address: impl Into<String>) -> zero_ex::Order {
        zero_ex::Order {
            chain_id: self.chain_id,
            exchange_address: self.exchange_address,
            maker_address: maker_address.into(),
            taker_address: self.taker_address,
            fee_recipient_address: self.fee_recipient_address,
            sender_address: self.sender_address,
            maker_asset_amount: self.maker_asset_amount,
            taker_asset_amount: self.taker_asset_amount,
            maker_fee: self.maker_fee,
            taker_fee: self.taker_fee,
            expiration_time_seconds: self.expiration_time_seconds,
            salt: self.salt,
            maker_asset_data: self.maker_asset_data,
            taker_asset_data: self.taker_asset_data,
            maker_fee_asset_data: self.maker_fee_asset_data,
            taker_fee_asset_data: self.taker_fee_asset_data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn unsigned_json() -> serde_json::Value {
        serde_json::json!({
            "chainId": 1,
            "senderAddress": "0x0000000000000000000000000000000000000000",
            "makerAddress": "SET",
            "takerAddress": "0x0000000000000000000000000000000000000000",
            "makerFee": "0",
            "takerFee": "0",
            "makerFeeAssetData": "0x",
            "takerFeeAssetData": "0x",
            "makerAssetAmount": "1000000000000000000",
            "takerAssetAmount": "2500000000000000",
            "makerAssetData": "0xf47261b0000000000000000000000000e41d2489571d322189246dafa5ebde1f4699f498",
            "takerAssetData": "0xf47261b0000000000000000000000000c02aaa39b223fe8d0a0e5c4f27ead9083c756cc2",
            "salt": "98761234598761234598761234598761234598761234598761234",
            "exchangeAddress": "0x61935cbdd02287b511119ddb11aeb42f1593b7ef",
            "feeRecipientAddress": "0xa258b39954cef5cb142fd567a46cddb31a670124",
            "expirationTimeSeconds": "1600000000",
            "signature": "SET"
        })
    }

    #[test]
    fn test_limit_order_round_trip() {
        let order = LimitOrder::new(
            UserOrderType::Buy,
            Decimal::from_str("100.5").unwrap(),
            Decimal::from_str("0.00123").unwrap(),
            Decimal::from(1_600_000_000u64),
        );
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "BUY",
                "quantity": "100.5",
                "price": "0.00123",
                "expiration": "1600000000"
            })
        );

        let decoded: LimitOrder = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, order);
    }

    #[test]
    fn test_limit_order_decode_keeps_precision() {
        let json = serde_json::json!({
            "type": "SELL",
            "quantity": "1234567890.123456789012345678",
            "price": "0.000000000000000001",
            "expiration": "1600000000"
        });
        let order: LimitOrder = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(order.order_type, UserOrderType::Sell);
        assert_eq!(serde_json::to_value(&order).unwrap(), json);

        let mut json = json;
        json["quantity"] = "123456789012.123456789012345678".into();
        assert!(serde_json::from_value::<LimitOrder>(json).is_err());
    }

    #[test]
    fn test_market_order_round_trip() {
        let order = MarketOrder::new(UserOrderType::Sell, Decimal::from(3));
        let json = serde_json::to_string(&order).unwrap();
        assert_eq!(json, r#"{"type":"SELL","quantity":"3"}"#);

        let decoded: MarketOrder =
            serde_json::from_str(r#"{"type":"BUY","quantity":"42.0500"}"#).unwrap();
        assert_eq!(decoded.order_type, UserOrderType::Buy);
        assert_eq!(decoded.quantity, Decimal::from_str("42.05").unwrap());
        assert_eq!(
            serde_json::to_string(&decoded).unwrap(),
            r#"{"type":"BUY","quantity":"42.0500"}"#
        );
        assert_eq!(serde_json::from_str::<MarketOrder>(&json).unwrap(), order);
    }

    #[test]
    fn test_market_order_rejects_book_side() {
        assert!(serde_json::from_str::<MarketOrder>(r#"{"type":"BID","quantity":"1"}"#).is_err());
    }

    #[test]
    fn test_unsigned_order_placeholders() {
        let order: UnsignedOrder = serde_json::from_value(unsigned_json()).unwrap();
        assert_eq!(order.maker_address, Placeholder::Set);
        assert_eq!(order.signature, Placeholder::Set);
        assert_eq!(order.expiration_time_seconds, U256::from(1_600_000_000u64));
        assert_eq!(serde_json::to_value(&order).unwrap(), unsigned_json());
    }

    #[test]
    fn test_unsigned_order_rejects_filled_maker() {
        let mut json = unsigned_json();
        json["makerAddress"] = "0x5409ed021d9299bf6814279a6a1411a7e866a631".into();
        assert!(serde_json::from_value::<UnsignedOrder>(json).is_err());
    }

    #[test]
    fn test_unsigned_order_into_order() {
        let unsigned: UnsignedOrder = serde_json::from_value(unsigned_json()).unwrap();
        let salt = unsigned.salt;
        let order = unsigned.into_order("0x5409ed021d9299bf6814279a6a1411a7e866a631");
        assert_eq!(order.maker_address, "0x5409ed021d9299bf6814279a6a1411a7e866a631");
        assert_eq!(order.salt, salt);

        let signed = order.sign("0x1c");
        let json = serde_json::to_value(&signed).unwrap();
        assert_eq!(json["signature"], "0x1c");
        assert_eq!(json["makerAssetAmount"], "1000000000000000000");
    }
}
