//! WebSocket control messages: subscribe/unsubscribe requests and responses.

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::error::RelayError;

/// Action carried by a market event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WebsocketAction {
    /// An order was (partially) filled on-chain
    Fill,
    /// A new order was added to the book
    New,
    /// An order was cancelled on-chain
    Cancel,
    /// An order was removed from the book by the relay
    Remove,
}

impl WebsocketAction {
    /// Every member, in declaration order.
    pub const ALL: [WebsocketAction; 4] = [
        WebsocketAction::Fill,
        WebsocketAction::New,
        WebsocketAction::Cancel,
        WebsocketAction::Remove,
    ];
}

impl std::fmt::Display for WebsocketAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            WebsocketAction::Fill => "FILL",
            WebsocketAction::New => "NEW",
            WebsocketAction::Cancel => "CANCEL",
            WebsocketAction::Remove => "REMOVE",
        };
        write!(f, "{}", s)
    }
}

/// Subscription topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WebsocketTopic {
    /// Order book events
    Book,
    /// Ticker updates
    Ticker,
    /// Candle updates
    Candle,
}

impl WebsocketTopic {
    /// Every member, in declaration order.
    pub const ALL: [WebsocketTopic; 3] = [
        WebsocketTopic::Book,
        WebsocketTopic::Ticker,
        WebsocketTopic::Candle,
    ];
}

impl std::fmt::Display for WebsocketTopic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WebsocketTopic::Book => write!(f, "BOOK"),
            WebsocketTopic::Ticker => write!(f, "TICKER"),
            WebsocketTopic::Candle => write!(f, "CANDLE"),
        }
    }
}

/// Kind of control request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WebsocketRequestType {
    /// Start receiving a topic for a market
    Subscribe,
    /// Stop receiving a topic for a market
    Unsubscribe,
}

impl std::fmt::Display for WebsocketRequestType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WebsocketRequestType::Subscribe => write!(f, "SUBSCRIBE"),
            WebsocketRequestType::Unsubscribe => write!(f, "UNSUBSCRIBE"),
        }
    }
}

/// Kind of control response: the echoed request type, or `ERROR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WebsocketResponseType {
    /// Subscription accepted
    Subscribe,
    /// Unsubscription accepted
    Unsubscribe,
    /// Request rejected
    Error,
}

impl From<WebsocketRequestType> for WebsocketResponseType {
    fn from(request_type: WebsocketRequestType) -> Self {
        match request_type {
            WebsocketRequestType::Subscribe => WebsocketResponseType::Subscribe,
            WebsocketRequestType::Unsubscribe => WebsocketResponseType::Unsubscribe,
        }
    }
}

/// Subscribe or unsubscribe request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebsocketRequest {
    /// Subscribe or unsubscribe.
    #[serde(rename = "type")]
    pub request_type: WebsocketRequestType,
    /// Topic to (un)subscribe.
    pub topic: WebsocketTopic,
    /// Market ID (e.g. "ZRX-WETH").
    pub market: String,
    /// Optional request ID echoed in the response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<u64>,
}

impl WebsocketRequest {
    /// Create a subscribe request.
    pub fn subscribe(topic: WebsocketTopic, market: impl Into<String>) -> Self {
        Self {
            request_type: WebsocketRequestType::Subscribe,
            topic,
            market: market.into(),
            request_id: None,
        }
    }

    /// Create an unsubscribe request.
    pub fn unsubscribe(topic: WebsocketTopic, market: impl Into<String>) -> Self {
        Self {
            request_type: WebsocketRequestType::Unsubscribe,
            topic,
            market: market.into(),
            request_id: None,
        }
    }

    /// Set the request ID.
    pub fn with_request_id(mut self, id: u64) -> Self {
        self.request_id = Some(id);
        self
    }

    /// Encode as a JSON text frame.
    pub fn to_frame(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Response to a control request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebsocketResponse {
    /// Echoed request type, or `ERROR`.
    #[serde(rename = "type")]
    pub response_type: WebsocketResponseType,
    /// Request ID, if the request carried one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<u64>,
    /// Error detail, when the relay sends one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl WebsocketResponse {
    /// Check if the relay rejected the request.
    pub fn is_error(&self) -> bool {
        self.response_type == WebsocketResponseType::Error
    }

    /// Convert into the acknowledged request type, or the relay's error.
    pub fn into_result(self) -> Result<WebsocketRequestType> {
        match self.response_type {
            WebsocketResponseType::Subscribe => Ok(WebsocketRequestType::Subscribe),
            WebsocketResponseType::Unsubscribe => Ok(WebsocketRequestType::Unsubscribe),
            WebsocketResponseType::Error => Err(RelayError::websocket(
                self.request_id,
                self.message.unwrap_or_default(),
            )),
        }
    }
}
