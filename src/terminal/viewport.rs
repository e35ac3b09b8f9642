//! Terminal size in pixels.
//!
//! The session works in pixels like a browser window does. Terminals that
//! report their pixel size are used as is; otherwise every cell counts as
//! 8x16 pixels.

use std::io;

use crate::scene::Viewport;

pub const CELL_WIDTH_PX: u32 = 8;
pub const CELL_HEIGHT_PX: u32 = 16;

/// Terminal size in cells plus the pixel viewport derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalSize {
    pub cols: u16,
    pub rows: u16,
    pub viewport: Viewport,
}

impl TerminalSize {
    /// Size from cell counts and the reported pixel size (0 when unknown).
    pub fn new(cols: u16, rows: u16, width_px: u16, height_px: u16) -> Self {
        let viewport = if width_px > 0 && height_px > 0 {
            Viewport::new(u32::from(width_px), u32::from(height_px))
        } else {
            Viewport::new(
                u32::from(cols) * CELL_WIDTH_PX,
                u32::from(rows) * CELL_HEIGHT_PX,
            )
        };
        Self {
            cols,
            rows,
            viewport,
        }
    }

    /// Query the terminal.
    pub fn query() -> io::Result<Self> {
        match crossterm::terminal::window_size() {
            Ok(size) => Ok(Self::new(size.columns, size.rows, size.width, size.height)),
            Err(e) => {
                log::debug!("window_size unavailable ({}), using cell size", e);
                let (cols, rows) = crossterm::terminal::size()?;
                Ok(Self::new(cols, rows, 0, 0))
            }
        }
    }

    /// Size after a resize event that only carries cell counts.
    pub fn after_resize(cols: u16, rows: u16) -> Self {
        match crossterm::terminal::window_size() {
            Ok(size) if size.columns == cols && size.rows == rows => {
                Self::new(cols, rows, size.width, size.height)
            }
            _ => Self::new(cols, rows, 0, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reported_pixels_win() {
        let size = TerminalSize::new(80, 24, 1280, 720);
        assert_eq!(size.viewport, Viewport::new(1280, 720));
    }

    #[test]
    fn test_cell_fallback() {
        let size = TerminalSize::new(80, 24, 0, 0);
        assert_eq!(size.viewport, Viewport::new(640, 384));

        let size = TerminalSize::new(80, 24, 1280, 0);
        assert_eq!(size.viewport, Viewport::new(640, 384));
    }
}
