//! Client error types.
//!
//! [`ViewError`] is the central error type for the crate. Transport
//! failures and malformed payloads are never surfaced to the rendering
//! surface; they terminate or skip processing and are visible through
//! structured logs only.

/// Client-side error enum covering connection, transport, and payload
/// failures.
#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    /// The WebSocket connection could not be established.
    #[error("failed to connect to '{endpoint}': {source}")]
    Connect {
        /// Endpoint the connection was attempted against.
        endpoint: String,
        /// Underlying transport error.
        #[source]
        source: tokio_tungstenite::tungstenite::Error,
    },

    /// Transport-level socket failure after the connection was open.
    #[error("websocket transport error: {0}")]
    Transport(#[from] tokio_tungstenite::tungstenite::Error),

    /// An outbound request failed to encode as JSON.
    #[error("failed to encode request: {0}")]
    EncodeRequest(#[source] serde_json::Error),

    /// An inbound payload did not decode as an update message.
    #[error("malformed update payload: {0}")]
    MalformedUpdate(#[source] serde_json::Error),

    /// A view mode string was not recognized.
    #[error("invalid view mode: '{0}' (expected 'subscribe' or 'probe')")]
    InvalidMode(String),
}
