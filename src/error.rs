//! Error types for the relay types library.

use thiserror::Error;

/// The main error type for decoding and interpreting relay payloads.
#[derive(Error, Debug)]
pub enum RelayError {
    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The relay answered a websocket request with an `ERROR` response
    #[error("WebSocket error (request {request_id:?}): {message}")]
    Websocket {
        /// Request ID echoed by the relay, if the request carried one
        request_id: Option<u64>,
        /// Error detail sent by the relay (empty when none was sent)
        message: String,
    },

    /// A unix timestamp outside the representable date range
    #[error("Invalid unix timestamp: {0}")]
    InvalidTimestamp(String),

    /// A date string that is not valid RFC 3339
    #[error("Invalid date: {0}")]
    InvalidDate(#[from] time::error::Parse),
}

impl RelayError {
    /// Create a websocket error from an `ERROR` response.
    pub fn websocket(request_id: Option<u64>, message: impl Into<String>) -> Self {
        Self::Websocket {
            request_id,
            message: message.into(),
        }
    }

    /// Check if this error came from the relay rejecting a websocket request.
    pub fn is_websocket(&self) -> bool {
        matches!(self, Self::Websocket { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_websocket_error_display() {
        let error = RelayError::websocket(Some(7), "unknown market");
        assert_eq!(
            error.to_string(),
            "WebSocket error (request Some(7)): unknown market"
        );
        assert!(error.is_websocket());
    }

    #[test]
    fn test_json_error_from() {
        let err = serde_json::from_str::<u32>("nope").unwrap_err();
        let error: RelayError = err.into();
        assert!(matches!(error, RelayError::Json(_)));
        assert!(!error.is_websocket());
    }
}
