//! # Radar Relay Types
//!
//! Strongly typed wire vocabulary shared by the Radar Relay REST API, its
//! WebSocket API, and their clients.
//!
//! ## Features
//!
//! - Tokens, markets, tickers, order books, candles and signed orders
//! - WebSocket subscription requests, responses and market events
//! - The embedded 0x protocol order
//! - Financial precision with `rust_decimal`, 256-bit integers for raw
//!   0x amounts
//!
//! ## Quick Start
//!
//! ```rust
//! use radar_relay_types::Market;
//!
//! let json = r#"{"id":"ZRX-WETH","baseTokenAddress":"0xe41d2489571d322189246dafa5ebde1f4699f498"}"#;
//! let market: Market = serde_json::from_str(json).unwrap();
//! assert_eq!(market.id, "ZRX-WETH");
//! assert!(market.ticker.is_none());
//! ```

pub mod error;
pub mod objects;
pub mod rest;
pub mod types;
pub mod ws;
pub mod zero_ex;

// Re-export commonly used types at crate root
pub use error::RelayError;
pub use objects::{
    Book, Candle, History, LimitOrder, Market, MarketOrder, Ohlc, SignedOrder, Stats, Ticker,
    Token, UnsignedOrder,
};
pub use rest::{MarketOrderResponse, OrderFeeResponse};
pub use types::common::{OrderState, OrderType, Placeholder, UserOrderType};
pub use ws::WsFrame;
pub use ws::messages::{
    CancelOrder, Fill, FillOrder, NewOrder, RemoveOrder, WebsocketAction, WebsocketEvent,
    WebsocketRequest, WebsocketRequestType, WebsocketResponse, WebsocketResponseType,
    WebsocketTopic,
};

/// Version of the relay schema these types describe.
pub const RELAY_TYPES_VERSION: &str = "2.0.0-alpha.1";

/// Version of the 0x types the embedded orders are compatible with.
pub const ZERO_EX_TYPES_VERSION: &str = "2.0.2";

/// Result type alias using RelayError
pub type Result<T> = std::result::Result<T, RelayError>;
