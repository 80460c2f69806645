//! Relay WebSocket API messages.
//!
//! Clients send [`WebsocketRequest`](messages::WebsocketRequest) frames to
//! (un)subscribe a topic for a market, receive a
//! [`WebsocketResponse`](messages::WebsocketResponse) for each, and then
//! [`WebsocketEvent`](messages::WebsocketEvent) frames for subscribed markets.
//!
//! # Example
//!
//! ```rust
//! use radar_relay_types::ws::WsFrame;
//! use radar_relay_types::ws::messages::{WebsocketRequest, WebsocketTopic};
//!
//! let request = WebsocketRequest::subscribe(WebsocketTopic::Book, "ZRX-WETH").with_request_id(1);
//! assert_eq!(
//!     request.to_frame().unwrap(),
//!     r#"{"type":"SUBSCRIBE","topic":"BOOK","market":"ZRX-WETH","requestId":1}"#
//! );
//!
//! match WsFrame::parse(r#"{"type":"SUBSCRIBE","requestId":1}"#).unwrap() {
//!     WsFrame::Response(response) => assert!(response.into_result().is_ok()),
//!     other => panic!("unexpected frame: {:?}", other),
//! }
//! ```

mod frame;
pub mod messages;

pub use frame::WsFrame;
