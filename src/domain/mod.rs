//! Domain layer: file identity and view content state.
//!
//! This module contains the client-side domain model: the typed file
//! identity used to route inbound updates and the watch-channel cell
//! holding the content a mounted view currently displays.

pub mod content;
pub mod file_id;

pub use content::ContentState;
pub use file_id::FileId;
