//! The file view component and its mounted handle.
//!
//! [`FileView`] describes an unmounted view: file identity, mode, and
//! initial content. [`FileView::mount`] establishes the connection,
//! spawns the connection and render tasks, and returns a
//! [`MountedView`] whose lifetime bounds the socket's.

use futures_util::SinkExt;
use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tokio_tungstenite::connect_async;

use super::connection::run_connection;
use super::mode::ViewMode;
use super::surface::RenderSurface;
use crate::domain::{ContentState, FileId};
use crate::error::ViewError;

/// An unmounted file view: identity, mode, and initial content.
#[derive(Debug, Clone)]
pub struct FileView {
    file: FileId,
    mode: ViewMode,
    initial_content: String,
}

impl FileView {
    /// Creates a view for the given file in the given mode, with
    /// empty initial content.
    #[must_use]
    pub fn new(file: FileId, mode: ViewMode) -> Self {
        Self {
            file,
            mode,
            initial_content: String::new(),
        }
    }

    /// Sets the content displayed before any update is accepted.
    ///
    /// In probe mode this is the only content the view ever displays.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.initial_content = content.into();
        self
    }

    /// Returns the file identity this view is bound to.
    #[must_use]
    pub fn file(&self) -> &FileId {
        &self.file
    }

    /// Connects to `endpoint` and mounts the view onto `surface`.
    ///
    /// Establishes the WebSocket connection, transmits the mode's
    /// greeting exactly once, renders the initial content, and spawns
    /// the connection and render tasks. The returned [`MountedView`]
    /// owns the connection: dropping it releases the socket.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Connect`] when the connection cannot be
    /// established, and [`ViewError::EncodeRequest`] or
    /// [`ViewError::Transport`] when the greeting cannot be sent.
    pub async fn mount(
        self,
        endpoint: &str,
        surface: Box<dyn RenderSurface>,
    ) -> Result<MountedView, ViewError> {
        let (mut socket, _response) =
            connect_async(endpoint)
                .await
                .map_err(|source| ViewError::Connect {
                    endpoint: endpoint.to_string(),
                    source,
                })?;

        // The greeting goes out exactly once, before any read.
        socket.send(self.mode.greeting(&self.file).to_frame()?).await?;
        tracing::info!(file = %self.file, mode = self.mode.as_str(), endpoint, "view mounted");

        let state = ContentState::new(self.initial_content);
        let content = state.subscribe();

        let render = tokio::spawn(run_render_loop(
            self.file.clone(),
            state.subscribe(),
            surface,
        ));

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let connection = tokio::spawn(run_connection(
            socket,
            self.mode,
            self.file.clone(),
            state,
            shutdown_rx,
        ));

        Ok(MountedView {
            file: self.file,
            content,
            shutdown: Some(shutdown_tx),
            connection,
            render,
        })
    }
}

/// Drives `surface` from the content cell: renders the initial value,
/// then re-renders on every replacement until the publishing side goes
/// away.
async fn run_render_loop(
    file: FileId,
    mut content: watch::Receiver<String>,
    mut surface: Box<dyn RenderSurface>,
) {
    let initial = content.borrow_and_update().clone();
    surface.render(&file, &initial);

    while content.changed().await.is_ok() {
        let next = content.borrow_and_update().clone();
        surface.render(&file, &next);
    }
}

/// Handle to a live, mounted view.
///
/// Owns the connection for its lifetime: dropping the handle signals
/// shutdown; [`MountedView::unmount`] additionally waits for the Close
/// frame to go out and the background tasks to finish.
#[derive(Debug)]
pub struct MountedView {
    file: FileId,
    content: watch::Receiver<String>,
    shutdown: Option<oneshot::Sender<()>>,
    connection: JoinHandle<()>,
    render: JoinHandle<()>,
}

impl MountedView {
    /// Returns the file identity this view is bound to.
    #[must_use]
    pub fn file(&self) -> &FileId {
        &self.file
    }

    /// Returns a clone of the currently displayed content.
    #[must_use]
    pub fn content(&self) -> String {
        self.content.borrow().clone()
    }

    /// Returns an observer over displayed-content changes.
    #[must_use]
    pub fn observe(&self) -> watch::Receiver<String> {
        self.content.clone()
    }

    /// Unmounts the view: signals shutdown, lets the connection task
    /// send its Close frame, and joins both background tasks.
    pub async fn unmount(mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Err(err) = (&mut self.connection).await {
            tracing::warn!(%err, "connection task join failed");
        }
        if let Err(err) = (&mut self.render).await {
            tracing::warn!(%err, "render task join failed");
        }
        tracing::info!(file = %self.file, "view unmounted");
    }
}

impl Drop for MountedView {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
    }
}
