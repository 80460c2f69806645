//! Example: serde helper utilities.
//!
//! Run with: cargo run --example serde_helpers

use alloy_primitives::U256;
use radar_relay_types::types::serde_helpers::{decimal_exact, optional_u256_decimal, u256_decimal};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Payload {
    #[serde(with = "u256_decimal")]
    salt: U256,
    #[serde(with = "decimal_exact")]
    price: Decimal,
    #[serde(
        default,
        with = "optional_u256_decimal",
        skip_serializing_if = "Option::is_none"
    )]
    gas_estimate: Option<U256>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let payload = Payload {
        salt: U256::MAX,
        price: "1234567890.123456789012345678".parse()?,
        gas_estimate: None,
    };

    let json = serde_json::to_string_pretty(&payload)?;
    println!("Serialized payload:\n{}", json);

    let decoded: Payload =
        serde_json::from_str(r#"{"salt":"42","price":"0.00245","gasEstimate":"150000"}"#)?;
    println!("Decoded payload: {:?}", decoded);

    // Neither of these round-trips to the same string, so both are refused.
    let hex_salt = serde_json::from_str::<Payload>(r#"{"salt":"0x2a","price":"1"}"#);
    println!("Hex salt: {:?}", hex_salt.map_err(|e| e.to_string()));
    let long_price =
        serde_json::from_str::<Payload>(r#"{"salt":"1","price":"123456789012.123456789012345678"}"#);
    println!("30-digit price: {:?}", long_price.map_err(|e| e.to_string()));

    Ok(())
}
