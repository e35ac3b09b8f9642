//! Draws the session document onto the terminal.
//!
//! Output is built as one string of ANSI escape codes and written in a
//! single call per frame, which keeps redraws flicker-free.

use std::io::Write;

use crate::ascii::RenderSurface;
use crate::media::FacingMode;
use crate::ui::Document;

const RESET: &str = "\x1b[0m";
const HEADER_STYLE: &str = "\x1b[0;7m";
const ERROR_STYLE: &str = "\x1b[0;1;31m";
const SPLASH: &str = "Press s to start the camera, q to quit";

/// Compose one full screen of `cols` x `rows` cells.
///
/// The surface is centered; when its grid is larger than the terminal the
/// middle part is shown. The header covers the top line and the error area
/// the bottom line.
pub fn compose(document: &Document, facing: FacingMode, cols: u16, rows: u16) -> String {
    let mut output = String::with_capacity(usize::from(cols) * usize::from(rows) * 2);

    match document.container.surface() {
        Some(surface) => compose_surface(&mut output, surface, cols, rows),
        None => compose_splash(&mut output, cols, rows),
    }

    if document.header.visible && rows > 0 {
        let text = document.header.format(&document.controls, facing);
        compose_line(&mut output, 0, cols, HEADER_STYLE, &text);
    }

    if let Some(message) = document.error_area.message() {
        if rows > 1 {
            compose_line(&mut output, rows - 1, cols, ERROR_STYLE, message);
        }
    }

    output.push_str(RESET);
    output
}

/// Compose and write one frame.
pub fn present<W: Write>(
    out: &mut W,
    document: &Document,
    facing: FacingMode,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    let frame = compose(document, facing, cols, rows);
    out.write_all(frame.as_bytes())?;
    out.flush()
}

/// First visible grid index and the screen offset it is drawn at.
fn crop(grid: u16, screen: u16) -> (u16, u16) {
    if grid > screen {
        ((grid - screen) / 2, 0)
    } else {
        (0, (screen - grid) / 2)
    }
}

fn compose_surface(output: &mut String, surface: &RenderSurface, cols: u16, rows: u16) {
    let style = surface.style();
    output.push_str(&style.foreground.ansi_fg());
    output.push_str(&style.background.ansi_bg());

    let (first_col, left) = crop(surface.cols(), cols);
    let (first_row, top) = crop(surface.rows(), rows);

    for y in 0..rows {
        move_to(output, y, 0);
        let grid_row = (y >= top)
            .then(|| surface.row(first_row + (y - top)))
            .flatten();

        for x in 0..cols {
            let glyph = grid_row
                .filter(|_| x >= left)
                .and_then(|row| row.get(usize::from(first_col + (x - left))))
                .copied()
                .unwrap_or(' ');
            output.push(glyph);
        }
    }
}

fn compose_splash(output: &mut String, cols: u16, rows: u16) {
    output.push_str(RESET);
    for y in 0..rows {
        move_to(output, y, 0);
        output.push_str(&" ".repeat(usize::from(cols)));
    }
    if rows == 0 {
        return;
    }
    let text: String = SPLASH.chars().take(usize::from(cols)).collect();
    let x = cols.saturating_sub(text.chars().count() as u16) / 2;
    move_to(output, rows / 2, x);
    output.push_str(&text);
}

/// One full-width line of text, padded or truncated to `cols`.
fn compose_line(output: &mut String, y: u16, cols: u16, style: &str, text: &str) {
    move_to(output, y, 0);
    output.push_str(style);
    let width = usize::from(cols);
    let mut line: String = text.chars().take(width).collect();
    let len = line.chars().count();
    line.extend(std::iter::repeat(' ').take(width - len));
    output.push_str(&line);
}

fn move_to(output: &mut String, y: u16, x: u16) {
    // 1-based
    output.push_str(&format!("\x1b[{};{}H", y + 1, x + 1));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{ColorPair, ColorScheme, Rgb};
    use crate::ui::{Controls, Header};

    fn document(header: bool) -> Document {
        Document::new(
            Controls::new(0.15, ColorScheme::Classic, false),
            Header::with_visibility(header),
        )
    }

    fn strip_ansi(s: &str) -> String {
        let mut out = String::new();
        let mut chars = s.chars().peekable();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                for c in chars.by_ref() {
                    if c.is_ascii_alphabetic() {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn test_crop_centers() {
        assert_eq!(crop(10, 4), (3, 0));
        assert_eq!(crop(4, 10), (0, 3));
        assert_eq!(crop(5, 5), (0, 0));
    }

    #[test]
    fn test_splash_when_stopped() {
        let doc = document(false);
        let out = compose(&doc, FacingMode::Front, 60, 10);
        assert!(strip_ansi(&out).contains(SPLASH));
    }

    #[test]
    fn test_surface_colors_and_glyphs() {
        let mut doc = document(false);
        let mut surface = RenderSurface::new(2, 1, 0.15);
        surface.write_grid(&['@', '#'], 2, 1);
        surface.set_style(ColorPair::new(Rgb::new(255, 176, 0), Rgb::BLACK));
        doc.container.replace(surface);

        let out = compose(&doc, FacingMode::Front, 4, 1);
        assert!(out.contains("\x1b[38;2;255;176;0m"));
        assert!(out.contains("\x1b[48;2;0;0;0m"));
        assert_eq!(strip_ansi(&out), " @# ");
    }

    #[test]
    fn test_oversized_surface_is_cropped() {
        let mut doc = document(false);
        let mut surface = RenderSurface::new(6, 1, 0.15);
        surface.write_grid(&['a', 'b', 'c', 'd', 'e', 'f'], 6, 1);
        doc.container.replace(surface);

        let out = compose(&doc, FacingMode::Front, 2, 1);
        assert_eq!(strip_ansi(&out), "cd");
    }

    #[test]
    fn test_header_and_error_lines() {
        let mut doc = document(true);
        doc.error_area.show("No camera found on this device.");

        let text = strip_ansi(&compose(&doc, FacingMode::Back, 200, 5));
        assert!(text.contains("ascii-cam"));
        assert!(text.contains("cam:back"));
        assert!(text.contains("No camera found on this device."));
    }

    #[test]
    fn test_tiny_terminal() {
        let mut doc = document(true);
        doc.error_area.show("boom");
        let out = compose(&doc, FacingMode::Front, 0, 0);
        assert_eq!(strip_ansi(&out), "");
    }
}
