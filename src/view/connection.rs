//! WebSocket connection loop for a mounted view.
//!
//! Handles the read loop for a single view connection: routes inbound
//! updates (subscribe mode) or logs raw frames (probe mode) until the
//! peer closes, the transport fails, or the view unmounts.

use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio::sync::oneshot;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};

use super::mode::ViewMode;
use crate::domain::{ContentState, FileId};
use crate::protocol::{Route, Update, route};

/// Client-side WebSocket stream type used by the view.
pub type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Runs the read loop for a single view connection.
///
/// The greeting has already been transmitted by
/// [`super::FileView::mount`].
///
/// - In subscribe mode, parses and routes inbound updates into `state`.
/// - In probe mode, logs inbound payloads verbatim.
/// - Exits when the peer closes, the transport errors (logged, no
///   retry), or `shutdown` fires, in which case a Close frame is sent
///   first.
pub(crate) async fn run_connection(
    socket: WsStream,
    mode: ViewMode,
    file: FileId,
    state: ContentState,
    mut shutdown: oneshot::Receiver<()>,
) {
    let (mut ws_tx, mut ws_rx) = socket.split();

    loop {
        tokio::select! {
            msg = ws_rx.next() => {
                match msg {
                    Some(Ok(Message::Text(text))) => {
                        handle_text_frame(text.as_str(), mode, &file, &state);
                    }
                    Some(Ok(Message::Binary(payload))) => {
                        tracing::debug!(len = payload.len(), "binary frame ignored");
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Ok(_)) => {}
                    Some(Err(err)) => {
                        tracing::error!(%err, "websocket error");
                        break;
                    }
                }
            }
            _ = &mut shutdown => {
                if let Err(err) = ws_tx.send(Message::Close(None)).await {
                    tracing::debug!(%err, "close frame not delivered");
                }
                break;
            }
        }
    }

    tracing::debug!(%file, "view connection closed");
}

/// Consumes one inbound text frame according to the view mode.
///
/// Malformed payloads are dropped with a warning; the connection stays
/// up. A file mismatch is a defined discard path, not an error.
fn handle_text_frame(text: &str, mode: ViewMode, file: &FileId, state: &ContentState) {
    match mode {
        ViewMode::Probe => {
            tracing::info!(payload = text, "probe frame received");
        }
        ViewMode::Subscribe => match Update::parse(text) {
            Ok(update) => match route(update, file) {
                Route::Deliver(update) => {
                    tracing::debug!(%file, "update accepted");
                    let _ = state.publish(update.content);
                }
                Route::Discard(other) => {
                    tracing::debug!(update_file = %other, view_file = %file, "update discarded");
                }
            },
            Err(err) => {
                tracing::warn!(%err, "malformed update dropped");
            }
        },
    }
}
