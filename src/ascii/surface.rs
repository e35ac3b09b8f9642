//! The styleable text surface produced by the glyph effect.

use crate::palette::{ColorPair, ColorScheme};

/// Character grid plus the colors it is displayed with.
///
/// A surface is created by [`GlyphEffect::create_surface`](super::GlyphEffect::create_surface)
/// for one density; changing the density means creating a new surface.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSurface {
    /// Glyphs in row-major order
    chars: Vec<char>,
    cols: u16,
    rows: u16,
    /// Density factor of the effect that created this surface
    density: f32,
    style: ColorPair,
}

impl RenderSurface {
    /// Blank surface styled with the classic scheme.
    pub fn new(cols: u16, rows: u16, density: f32) -> Self {
        Self {
            chars: vec![' '; (cols as usize) * (rows as usize)],
            cols,
            rows,
            density,
            style: ColorScheme::Classic.colors(),
        }
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn density(&self) -> f32 {
        self.density
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn style(&self) -> ColorPair {
        self.style
    }

    /// Assign foreground and background colors.
    pub fn set_style(&mut self, style: ColorPair) {
        self.style = style;
    }

    /// Replace the grid contents, resizing when the effect's grid changed.
    pub fn write_grid(&mut self, chars: &[char], cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
        self.chars.clear();
        self.chars.extend_from_slice(chars);
        self.chars
            .resize((cols as usize) * (rows as usize), ' ');
    }

    /// Glyphs of one row.
    pub fn row(&self, row: u16) -> Option<&[char]> {
        if row >= self.rows || self.cols == 0 {
            return None;
        }
        let start = row as usize * self.cols as usize;
        self.chars.get(start..start + self.cols as usize)
    }

    /// Rows joined by newlines.
    pub fn to_text(&self) -> String {
        if self.cols == 0 || self.rows == 0 {
            return String::new();
        }

        self.chars
            .chunks(self.cols as usize)
            .map(|row| row.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
