//! # fileview-client
//!
//! WebSocket client view for live file content updates.
//!
//! A [`view::FileView`] opens a connection to an update endpoint,
//! declares which file it is watching, and re-renders its surface on
//! every accepted update. A probe mode sends a diagnostic `ping` and
//! logs inbound traffic instead of rendering it.
//!
//! ## Architecture
//!
//! ```text
//! Update endpoint (ws://localhost:8000/ws)
//!     │
//!     ├── connection task (view/connection)
//!     │       greeting on open, then parse → route → publish
//!     │
//!     ├── ContentState (domain/content)
//!     │       watch channel, wholesale replace, last-write-wins
//!     │
//!     └── render task (view/file_view)
//!             RenderSurface (terminal, test fakes)
//! ```
//!
//! The socket's lifetime is bound to the [`view::MountedView`] handle:
//! dropping or unmounting the handle releases the connection.

pub mod config;
pub mod domain;
pub mod error;
pub mod protocol;
pub mod view;
