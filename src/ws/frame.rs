//! Classification of incoming WebSocket text frames.

use crate::Result;
use crate::ws::messages::{WebsocketEvent, WebsocketResponse};

/// A decoded frame received from the relay.
#[derive(Debug, Clone, PartialEq)]
pub enum WsFrame {
    /// Market event for a subscribed topic.
    Event(WebsocketEvent),
    /// Response to a subscribe/unsubscribe request.
    Response(WebsocketResponse),
    /// Valid JSON in a format this crate does not know.
    Unknown(serde_json::Value),
}

impl WsFrame {
    /// Parse a text frame.
    ///
    /// Frames with an `action` key are events and frames with a `type` key are
    /// control responses. A frame with neither is returned as
    /// [`WsFrame::Unknown`]. Invalid JSON, or an event/response that does not
    /// match its declared shape, is an error.
    pub fn parse(text: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(text).inspect_err(|e| {
            tracing::warn!("Failed to parse WebSocket message: {}", e);
        })?;

        if value.get("action").is_some() {
            let event: WebsocketEvent = serde_json::from_value(value).inspect_err(|e| {
                tracing::warn!("Failed to decode WebSocket event: {}", e);
            })?;
            tracing::debug!(action = %event.action(), order_hash = event.order_hash(), "event");
            return Ok(WsFrame::Event(event));
        }

        if value.get("type").is_some() {
            let response: WebsocketResponse = serde_json::from_value(value).inspect_err(|e| {
                tracing::warn!("Failed to decode WebSocket response: {}", e);
            })?;
            return Ok(WsFrame::Response(response));
        }

        tracing::debug!("Unknown message format: {}", text);
        Ok(WsFrame::Unknown(value))
    }

    /// The event, if this frame carries one.
    pub fn into_event(self) -> Option<WebsocketEvent> {
        match self {
            WsFrame::Event(event) => Some(event),
            _ => None,
        }
    }
}
