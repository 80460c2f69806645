//! Relay object types: tokens, markets, orders, books and candles.
//!
//! Every price, amount and volume is a [`rust_decimal::Decimal`] carried as a
//! JSON string, so values like `"1234567890123456789.123456789"` survive a
//! round trip without loss.

mod chart;
mod market;
mod order;

pub use chart::{Book, Candle, Ohlc};
pub use market::{History, Market, Stats, Ticker, Token};
pub use order::{LimitOrder, MarketOrder, SignedOrder, UnsignedOrder};

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use time::OffsetDateTime;

use crate::Result;
use crate::error::RelayError;

/// Convert unix seconds into a UTC date-time.
pub(crate) fn unix_time(seconds: u64) -> Result<OffsetDateTime> {
    i64::try_from(seconds)
        .ok()
        .and_then(|s| OffsetDateTime::from_unix_timestamp(s).ok())
        .ok_or_else(|| RelayError::InvalidTimestamp(seconds.to_string()))
}

/// Convert decimal unix seconds into a UTC date-time, ignoring any fraction.
pub(crate) fn decimal_unix_time(seconds: Decimal) -> Result<OffsetDateTime> {
    seconds
        .trunc()
        .to_i64()
        .and_then(|s| OffsetDateTime::from_unix_timestamp(s).ok())
        .ok_or_else(|| RelayError::InvalidTimestamp(seconds.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_unix_time() {
        assert_eq!(unix_time(1_540_000_000).unwrap(), datetime!(2018-10-20 01:46:40 UTC));
        assert!(matches!(
            unix_time(u64::MAX),
            Err(RelayError::InvalidTimestamp(ref s)) if s == "18446744073709551615"
        ));
    }

    #[test]
    fn test_decimal_unix_time_truncates() {
        let seconds: Decimal = "1540000000.75".parse().unwrap();
        assert_eq!(
            decimal_unix_time(seconds).unwrap(),
            datetime!(2018-10-20 01:46:40 UTC)
        );
        let huge: Decimal = "99999999999999999999".parse().unwrap();
        assert!(matches!(
            decimal_unix_time(huge),
            Err(RelayError::InvalidTimestamp(ref s)) if s == "99999999999999999999"
        ));
    }
}
