//! Display output - frame buffer and presentation backends
//!
//! The menu draws into an owned `FrameCanvas` (an embedded-graphics
//! `DrawTarget`) and presents the completed frame once per tick. Two
//! backends: the chained RGB matrix panels (cargo feature `hardware`) and an
//! ANSI terminal preview for development without the panels.

pub mod canvas;
#[cfg(feature = "hardware")]
pub mod matrix;
pub mod terminal;

pub use canvas::{FrameCanvas, HEIGHT, WIDTH};
#[cfg(feature = "hardware")]
pub use matrix::MatrixDisplay;
pub use terminal::TerminalDisplay;

/// A presentation target for completed frames.
pub trait Display {
    /// Show one completed frame.
    fn present(&mut self, frame: &FrameCanvas);
    /// Blank the output; called before any process hand-off.
    fn blank(&mut self);
}
