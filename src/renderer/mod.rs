//! Rendering module
//!
//! The game loop draws through the [`Renderer`] trait. The native renderer
//! rasterizes the field into a half-block pixel buffer shown in the terminal.

pub mod pixels;
pub mod shapes;
pub mod terminal;

pub use pixels::{PixelBuf, Rgb};
pub use shapes::Viewport;
pub use terminal::TerminalRenderer;

use std::io;

use crate::sim::GameState;

/// Draws the game
///
/// Create the renderer before the game loop starts and release it after the
/// loop returns.
pub trait Renderer {
    /// Draw the field, paddles, ball and scores, then present the frame
    fn draw_frame(&mut self, state: &GameState) -> io::Result<()>;

    /// Draw `text` centered over the current frame and present it
    fn draw_win_message(&mut self, text: &str) -> io::Result<()>;
}
