//! Render surfaces.
//!
//! A [`RenderSurface`] is the target a mounted view draws into. The
//! shipped [`TerminalSurface`] writes a labeled content block to
//! standard output; tests substitute recording surfaces.

use crate::domain::FileId;

/// Target a view renders into on every content change.
///
/// `render` receives the complete new content; the previous display is
/// replaced, never appended to.
pub trait RenderSurface: Send {
    /// Draws the given content for the given file.
    fn render(&mut self, file: &FileId, content: &str);
}

/// Render surface writing to standard output.
#[derive(Debug, Default)]
pub struct TerminalSurface(());

impl TerminalSurface {
    /// Creates a terminal surface.
    #[must_use]
    pub fn new() -> Self {
        Self(())
    }
}

impl RenderSurface for TerminalSurface {
    fn render(&mut self, file: &FileId, content: &str) {
        println!("--- {file} ---");
        println!("{content}");
    }
}
