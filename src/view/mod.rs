//! View layer: the parameterized file view, its connection loop, and
//! render surfaces.
//!
//! [`FileView::mount`] ties the socket's lifetime to the returned
//! [`MountedView`] handle; dropping or unmounting the handle releases
//! the connection.

pub mod connection;
pub mod file_view;
pub mod mode;
pub mod surface;

pub use file_view::{FileView, MountedView};
pub use mode::ViewMode;
pub use surface::{RenderSurface, TerminalSurface};
