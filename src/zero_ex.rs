//! Orders of the underlying 0x exchange protocol.
//!
//! The relay embeds these as-is inside its own order objects. All integer
//! amounts are raw base-unit `uint256` values carried as decimal strings.

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use crate::types::serde_helpers::u256_decimal;

/// An unsigned 0x order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Chain the exchange contract lives on.
    pub chain_id: u64,
    /// Exchange contract address.
    pub exchange_address: String,
    /// Maker address.
    pub maker_address: String,
    /// Taker address (zero address for open orders).
    pub taker_address: String,
    /// Fee recipient address.
    pub fee_recipient_address: String,
    /// Sender address (zero address when anyone may submit).
    pub sender_address: String,
    /// Maker asset amount in base units.
    #[serde(with = "u256_decimal")]
    pub maker_asset_amount: U256,
    /// Taker asset amount in base units.
    #[serde(with = "u256_decimal")]
    pub taker_asset_amount: U256,
    /// Maker fee in base units.
    #[serde(with = "u256_decimal")]
    pub maker_fee: U256,
    /// Taker fee in base units.
    #[serde(with = "u256_decimal")]
    pub taker_fee: U256,
    /// Expiration as unix seconds.
    #[serde(with = "u256_decimal")]
    pub expiration_time_seconds: U256,
    /// Random salt.
    #[serde(with = "u256_decimal")]
    pub salt: U256,
    /// ABI-encoded maker asset data.
    pub maker_asset_data: String,
    /// ABI-encoded taker asset data.
    pub taker_asset_data: String,
    /// ABI-encoded maker fee asset data.
    pub maker_fee_asset_data: String,
    /// ABI-encoded taker fee asset data.
    pub taker_fee_asset_data: String,
}

impl Order {
    /// Attach a signature, producing a signed order.
    pub fn sign(self, signature: impl Into<String>) -> SignedOrder {
        SignedOrder {
            chain_id: self.chain_id,
            exchange_address: self.exchange_address,
            maker_address: self.maker_address,
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
            signature: signature.into(),
        }
    }
}

/// A 0x order together with the maker's signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedOrder {
    /// Chain the exchange contract lives on.
    pub chain_id: u64,
    /// Exchange contract address.
    pub exchange_address: String,
    /// Maker address.
    pub maker_address: String,
    /// Taker address.
    pub taker_address: String,
    /// Fee recipient address.
    pub fee_recipient_address: String,
    /// Sender address.
    pub sender_address: String,
    /// Maker asset amount in base units.
    #[serde(with = "u256_decimal")]
    pub maker_asset_amount: U256,
    /// Taker asset amount in base units.
    #[serde(with = "u256_decimal")]
    pub taker_asset_amount: U256,
    /// Maker fee in base units.
    #[serde(with = "u256_decimal")]
    pub maker_fee: U256,
    /// Taker fee in base units.
    #[serde(with = "u256_decimal")]
    pub taker_fee: U256,
    /// Expiration as unix seconds.
    #[serde(with = "u256_decimal")]
    pub expiration_time_seconds: U256,
    /// Random salt.
    #[serde(with = "u256_decimal")]
    pub salt: U256,
    /// ABI-encoded maker asset data.
    pub maker_asset_data: String,
    /// ABI-encoded taker asset data.
    pub taker_asset_data: String,
    /// ABI-encoded maker fee asset data.
    pub maker_fee_asset_data: String,
    /// ABI-encoded taker fee asset data.
    pub taker_fee_asset_data: String,
    /// Hex-encoded signature.
    pub signature: String,
}

impl SignedOrder {
    /// Split into the unsigned order and its signature.
    pub fn into_parts(self) -> (Order, String) {
        let order = Order {
            chain_id: self.chain_id,
            exchange_address: self.exchange_address,
            maker_address: self.maker_address,
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
        };
        (order, self.signature)
    }
}
