//! Terminal renderer
//!
//! Owns the terminal for the lifetime of the game: raw mode, the alternate
//! screen and a hidden cursor are set up on creation and undone by
//! [`TerminalRenderer::release`] (or on drop).

use std::io::{self, Stdout, Write, stdout};

use crossterm::style::{self, Stylize};
use crossterm::{cursor, execute, queue, terminal};

use super::Renderer;
use super::pixels::PixelBuf;
use super::shapes::{Viewport, draw_scene};
use crate::sim::GameState;

pub struct TerminalRenderer {
    out: Stdout,
    buf: PixelBuf,
    active: bool,
}

impl TerminalRenderer {
    /// Take over the terminal
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = stdout();
        execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::DisableLineWrap,
            terminal::Clear(terminal::ClearType::All),
        )?;
        let (cols, rows) = terminal::size()?;
        log::info!("Terminal renderer ready ({cols}x{rows} cells)");
        Ok(Self {
            out,
            buf: PixelBuf::new(cols as usize, rows as usize * 2),
            active: true,
        })
    }

    /// Give the terminal back; safe to call more than once
    pub fn release(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        execute!(
            self.out,
            style::ResetColor,
            terminal::LeaveAlternateScreen,
            cursor::Show,
            terminal::EnableLineWrap,
        )?;
        terminal::disable_raw_mode()?;
        log::info!("Terminal restored");
        Ok(())
    }

    /// Match the buffer to the current terminal size
    fn sync_size(&mut self) -> io::Result<()> {
        let (cols, rows) = terminal::size()?;
        let (w, h) = (cols as usize, rows as usize * 2);
        if (w, h) != (self.buf.width(), self.buf.height()) {
            log::debug!("Terminal resized to {cols}x{rows}");
            self.buf.resize(w, h);
            queue!(self.out, terminal::Clear(terminal::ClearType::All))?;
        }
        Ok(())
    }
}

impl Renderer for TerminalRenderer {
    fn draw_frame(&mut self, state: &GameState) -> io::Result<()> {
        self.sync_size()?;
        if self.buf.width() == 0 || self.buf.height() == 0 {
            return Ok(());
        }
        let view = Viewport::fit(state.field, self.buf.width(), self.buf.height());
        draw_scene(&mut self.buf, &view, state);
        self.buf.render(&mut self.out)
    }

    fn draw_win_message(&mut self, text: &str) -> io::Result<()> {
        let (cols, rows) = terminal::size()?;
        let width = text.chars().count() as u16;
        let col = cols.saturating_sub(width) / 2;
        let row = rows / 2;
        let styled = style::style(text)
            .with(style::Color::White)
            .on(style::Color::Black)
            .bold();
        queue!(
            self.out,
            cursor::MoveTo(col, row),
            style::PrintStyledContent(styled),
            style::ResetColor,
        )?;
        self.out.flush()
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        let _ = self.release();
    }
}
