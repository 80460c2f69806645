//! Custom serde helpers for the relay's wire formats.
//!
//! The relay encodes every big number as a JSON string. Decimal strings go
//! through [`decimal_exact`] so a value `Decimal` cannot hold is rejected
//! rather than rounded. The 256-bit integers of the embedded 0x order go
//! through [`u256_decimal`], which only accepts base-10 digits.

use std::fmt::Display;
use std::str::FromStr;

use alloy_primitives::U256;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// Serialize/deserialize a type using its Display/FromStr implementations.
///
/// # Example
///
/// ```rust
/// use serde::{Serialize, Deserialize};
/// use radar_relay_types::types::serde_helpers::display_fromstr;
///
/// #[derive(Serialize, Deserialize, Debug)]
/// struct Fill {
///     #[serde(with = "display_fromstr")]
///     block_number: u64,
/// }
///
/// let fill = Fill { block_number: 6500123 };
/// let json = serde_json::to_string(&fill).unwrap();
/// assert_eq!(json, r#"{"block_number":"6500123"}"#);
/// ```
pub mod display_fromstr {
    use super::*;

    /// Serialize using Display trait.
    pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Display,
        S: Serializer,
    {
        serializer.serialize_str(&value.to_string())
    }

    /// Deserialize using FromStr trait.
    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: FromStr,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

fn parse_u256<E: de::Error>(s: &str) -> Result<U256, E> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(E::custom(format!("invalid uint256 decimal string: {:?}", s)));
    }
    U256::from_str_radix(s, 10).map_err(E::custom)
}

/// A `U256` carried as a base-10 digit string.
///
/// Prefixed (`0x..`, `0b..`) and `_`-separated forms are rejected so that the
/// encoded string is always the one that was decoded.
///
/// ```rust
/// use alloy_primitives::U256;
/// use serde::{Serialize, Deserialize};
/// use radar_relay_types::types::serde_helpers::u256_decimal;
///
/// #[derive(Serialize, Deserialize, Debug)]
/// struct Order {
///     #[serde(with = "u256_decimal")]
///     salt: U256,
/// }
///
/// let order: Order = serde_json::from_str(r#"{"salt":"42"}"#).unwrap();
/// assert_eq!(order.salt, U256::from(42u64));
/// assert!(serde_json::from_str::<Order>(r#"{"salt":"0x2a"}"#).is_err());
/// ```
pub mod u256_decimal {
    use super::*;

    pub fn serialize<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
        display_fromstr::serialize(value, serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<U256, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse_u256(&s)
    }
}

/// [`u256_decimal`] for `Option<U256>`.
///
/// Pair with `#[serde(default, skip_serializing_if = "Option::is_none")]` so an
/// absent field decodes as `None` and `None` is omitted on encode.
pub mod optional_u256_decimal {
    use super::*;

    pub fn serialize<S: Serializer>(
        value: &Option<U256>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(value) => u256_decimal::serialize(value, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<U256>, D::Error> {
        let opt: Option<String> = Option::deserialize(deserializer)?;
        opt.as_deref().map(parse_u256).transpose()
    }
}

// `-`? digits (`.` digits)?
fn is_plain_decimal(s: &str) -> bool {
    let unsigned = s.strip_prefix('-').unwrap_or(s);
    let (int, frac) = match unsigned.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (unsigned, None),
    };
    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    all_digits(int) && frac.is_none_or(all_digits)
}

fn parse_decimal<E: de::Error>(s: &str) -> Result<Decimal, E> {
    if !is_plain_decimal(s) {
        return Err(E::custom(format!("invalid decimal string: {:?}", s)));
    }
    Decimal::from_str_exact(s)
        .map_err(|e| E::custom(format!("decimal {:?} is not representable: {}", s, e)))
}

/// A `Decimal` carried as a JSON string, decoded without rounding.
///
/// `Decimal` holds 28 significant digits. A longer value fails to decode
/// instead of being silently rounded, so whatever decodes re-encodes to the
/// same string.
///
/// ```rust
/// use rust_decimal::Decimal;
/// use serde::{Serialize, Deserialize};
/// use radar_relay_types::types::serde_helpers::decimal_exact;
///
/// #[derive(Serialize, Deserialize, Debug)]
/// struct Quote {
///     #[serde(with = "decimal_exact")]
///     price: Decimal,
/// }
///
/// let json = r#"{"price":"1234567890123456789.123456789"}"#;
/// let quote: Quote = serde_json::from_str(json).unwrap();
/// assert_eq!(serde_json::to_string(&quote).unwrap(), json);
///
/// let too_long = r#"{"price":"123456789012.123456789012345678"}"#;
/// assert!(serde_json::from_str::<Quote>(too_long).is_err());
/// ```
pub mod decimal_exact {
    use super::*;

    pub fn serialize<S: Serializer>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
        display_fromstr::serialize(value, serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse_decimal(&s)
    }
}

/// [`decimal_exact`] for `Option<Decimal>`.
///
/// Pair with `#[serde(default, skip_serializing_if = "Option::is_none")]`.
pub mod optional_decimal_exact {
    use super::*;

    pub fn serialize<S: Serializer>(
        value: &Option<Decimal>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(value) => decimal_exact::serialize(value, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Decimal>, D::Error> {
        let opt: Option<String> = Option::deserialize(deserializer)?;
        opt.as_deref().map(parse_decimal).transpose()
    }
}

/// [`decimal_exact`] for `Vec<Decimal>`.
pub mod decimal_exact_seq {
    use super::*;

    #[derive(Serialize, Deserialize)]
    struct Exact(#[serde(with = "decimal_exact")] Decimal);

    pub fn serialize<S: Serializer>(values: &[Decimal], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(values.iter().map(|value| Exact(*value)))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<Decimal>, D::Error> {
        let values: Vec<Exact> = Vec::deserialize(deserializer)?;
        Ok(values.into_iter().map(|Exact(value)| value).collect())
    }
}
