//! Types for REST endpoint responses.

use alloy_primitives::U256;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::serde_helpers::{decimal_exact, optional_u256_decimal};
use crate::zero_ex;

/// Price information and fillable orders for a market order request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketOrderResponse {
    /// Average fill price across `orders`.
    #[serde(with = "decimal_exact")]
    pub average_price: Decimal,
    /// Best price among `orders`.
    #[serde(with = "decimal_exact")]
    pub best_price: Decimal,
    /// Worst price among `orders`.
    #[serde(with = "decimal_exact")]
    pub worst_price: Decimal,
    /// Spread between best and worst price.
    #[serde(with = "decimal_exact")]
    pub spread: Decimal,
    /// Orders to fill, best price first.
    pub orders: Vec<zero_ex::SignedOrder>,
}

/// Fee information for a market.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFeeResponse {
    /// Maker fee.
    #[serde(with = "decimal_exact")]
    pub maker_fee: Decimal,
    /// Taker fee.
    #[serde(with = "decimal_exact")]
    pub taker_fee: Decimal,
    /// Fee recipient address.
    pub fee_recipient_address: String,
    /// Estimated gas to fill, in gas units.
    #[serde(
        default,
        with = "optional_u256_decimal",
        skip_serializing_if = "Option::is_none"
    )]
    pub gas_estimate: Option<U256>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_order_fee_response_without_gas() {
        let json = r#"{
            "makerFee": "0",
            "takerFee": "0.0001",
            "feeRecipientAddress": "0xa258b39954cef5cb142fd567a46cddb31a670124"
        }"#;
        let fees: OrderFeeResponse = serde_json::from_str(json).unwrap();
        assert_eq!(fees.taker_fee, Decimal::from_str("0.0001").unwrap());
        assert!(fees.gas_estimate.is_none());
        let out = serde_json::to_value(&fees).unwrap();
        assert!(out.get("gasEstimate").is_none());
        assert_eq!(serde_json::from_value::<OrderFeeResponse>(out).unwrap(), fees);
    }

    #[test]
    fn test_order_fee_response_with_gas() {
        let json = r#"{
            "makerFee": "0",
            "takerFee": "0",
            "feeRecipientAddress": "0xa258b39954cef5cb142fd567a46cddb31a670124",
            "gasEstimate": "150000"
        }"#;
        let fees: OrderFeeResponse = serde_json::from_str(json).unwrap();
        assert_eq!(fees.gas_estimate, Some(U256::from(150_000u64)));

        let expected: serde_json::Value = serde_json::from_str(json).unwrap();
        assert_eq!(serde_json::to_value(&fees).unwrap(), expected);
        let again: OrderFeeResponse =
            serde_json::from_str(&serde_json::to_string(&fees).unwrap()).unwrap();
        assert_eq!(again, fees);
    }

    #[test]
    fn test_order_fee_response_rejects_hex_gas() {
        let json = r#"{
            "makerFee": "0",
            "takerFee": "0",
            "feeRecipientAddress": "0xa258b39954cef5cb142fd567a46cddb31a670124",
            "gasEstimate": "0x249f0"
        }"#;
        assert!(serde_json::from_str::<OrderFeeResponse>(json).is_err());
    }

    #[test]
    fn test_market_order_response_empty() {
        let json = r#"{
            "averagePrice": "0.0025",
            "bestPrice": "0.0024",
            "worstPrice": "0.0026",
            "spread": "0.0002",
            "orders": []
        }"#;
        let response: MarketOrderResponse = serde_json::from_str(json).unwrap();
        assert!(response.orders.is_empty());
        assert_eq!(response.spread, Decimal::from_str("0.0002").unwrap());
    }
}
