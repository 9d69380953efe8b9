//! Wire message types: outbound requests and inbound updates.
//!
//! The update endpoint speaks ad-hoc text frames: a subscription is a
//! JSON object naming a file, a probe greeting is the literal text
//! `ping`, and updates arrive as JSON objects carrying a file name and
//! replacement content. Anything else is a malformed payload.

use serde::{Deserialize, Serialize};
use tokio_tungstenite::tungstenite::Message;

use crate::domain::FileId;
use crate::error::ViewError;

/// Literal payload transmitted by a probe view on connect.
pub const PING_PAYLOAD: &str = "ping";

/// Outbound request, sent exactly once immediately after the
/// connection opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Declare which file's updates this view wishes to receive.
    Subscribe {
        /// File the view is subscribing to.
        file: FileId,
    },
    /// Diagnostic probe payload (the literal text `ping`).
    Ping,
}

/// JSON body of a subscription request: `{"file": "<name>"}`.
#[derive(Serialize)]
struct SubscribeBody<'a> {
    file: &'a FileId,
}

impl Request {
    /// Encodes the request as a WebSocket text frame.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::EncodeRequest`] if JSON encoding fails.
    pub fn to_frame(&self) -> Result<Message, ViewError> {
        match self {
            Self::Subscribe { file } => {
                let body = serde_json::to_string(&SubscribeBody { file })
                    .map_err(ViewError::EncodeRequest)?;
                Ok(Message::text(body))
            }
            Self::Ping => Ok(Message::text(PING_PAYLOAD)),
        }
    }
}

/// Inbound update message: `{"file": "<name>", "content": "<text>"}`.
///
/// `content` always replaces displayed content wholesale; updates are
/// never merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Update {
    /// File this update addresses.
    pub file: FileId,
    /// Replacement content for the addressed view.
    pub content: String,
}

impl Update {
    /// Parses an update from a raw text payload.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::MalformedUpdate`] when the payload is not
    /// a JSON object with `file` and `content` string fields.
    pub fn parse(payload: &str) -> Result<Self, ViewError> {
        serde_json::from_str(payload).map_err(ViewError::MalformedUpdate)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn frame_text(request: &Request) -> String {
        let frame = request.to_frame();
        let Ok(Message::Text(text)) = frame else {
            panic!("expected a text frame");
        };
        text.as_str().to_string()
    }

    #[test]
    fn subscribe_frame_is_exact_json() {
        let request = Request::Subscribe {
            file: FileId::new("test"),
        };
        assert_eq!(frame_text(&request), r#"{"file":"test"}"#);
    }

    #[test]
    fn ping_frame_is_the_literal_payload() {
        assert_eq!(frame_text(&Request::Ping), "ping");
    }

    #[test]
    fn parse_valid_update() {
        let update = Update::parse(r#"{"file":"test","content":"hello"}"#);
        let Ok(update) = update else {
            panic!("expected a valid update");
        };
        assert_eq!(update.file, FileId::new("test"));
        assert_eq!(update.content, "hello");
    }

    #[test]
    fn parse_tolerates_extra_fields() {
        let update = Update::parse(r#"{"file":"test","content":"hello","seq":7}"#);
        assert!(update.is_ok());
    }

    #[test]
    fn parse_missing_content_fails() {
        // Shape of a subscription request echoed back by the server.
        let result = Update::parse(r#"{"file":"test"}"#);
        assert!(matches!(result, Err(ViewError::MalformedUpdate(_))));
    }

    #[test]
    fn parse_non_json_fails() {
        let result = Update::parse("not json");
        assert!(matches!(result, Err(ViewError::MalformedUpdate(_))));
    }

    #[test]
    fn parse_wrong_field_type_fails() {
        let result = Update::parse(r#"{"file":"test","content":42}"#);
        assert!(matches!(result, Err(ViewError::MalformedUpdate(_))));
    }
}
