//! Color schemes applied to the rendered character grid.
//!
//! The table is fixed at compile time; a scheme is just a foreground and
//! background color, independent of the glyph ramp.

use std::fmt;

use serde::Deserialize;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// ANSI true-color foreground sequence.
    pub fn ansi_fg(&self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.r, self.g, self.b)
    }

    /// ANSI true-color background sequence.
    pub fn ansi_bg(&self) -> String {
        format!("\x1b[48;2;{};{};{}m", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Foreground/background pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPair {
    pub foreground: Rgb,
    pub background: Rgb,
}

impl ColorPair {
    pub const fn new(foreground: Rgb, background: Rgb) -> Self {
        Self {
            foreground,
            background,
        }
    }

    /// Same colors, roles exchanged.
    pub fn swapped(self) -> Self {
        Self {
            foreground: self.background,
            background: self.foreground,
        }
    }
}

/// Key into the color scheme table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// White on black
    #[default]
    Classic,
    /// Handheld LCD greens
    Gameboy,
    /// Amber monochrome monitor
    Amber,
    /// Green phosphor terminal
    Green,
    /// 64-era home computer blues
    C64,
    /// Neon cabinet cyan
    Arcade,
}

/// Every scheme, in selector order.
pub const ALL_SCHEMES: [ColorScheme; 6] = [
    ColorScheme::Classic,
    ColorScheme::Gameboy,
    ColorScheme::Amber,
    ColorScheme::Green,
    ColorScheme::C64,
    ColorScheme::Arcade,
];

impl ColorScheme {
    /// Resolve the scheme to its colors.
    pub fn colors(&self) -> ColorPair {
        match self {
            ColorScheme::Classic => ColorPair::new(Rgb::WHITE, Rgb::BLACK),
            ColorScheme::Gameboy => {
                ColorPair::new(Rgb::new(0x9b, 0xbc, 0x0f), Rgb::new(0x0f, 0x38, 0x0f))
            }
            ColorScheme::Amber => ColorPair::new(Rgb::new(0xff, 0xb0, 0x00), Rgb::BLACK),
            ColorScheme::Green => ColorPair::new(Rgb::new(0x33, 0xff, 0x33), Rgb::BLACK),
            ColorScheme::C64 => {
                ColorPair::new(Rgb::new(0x88, 0x7e, 0xcb), Rgb::new(0x40, 0x31, 0x8d))
            }
            ColorScheme::Arcade => {
                ColorPair::new(Rgb::new(0x00, 0xf0, 0xff), Rgb::new(0x12, 0x00, 0x24))
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ColorScheme::Classic => "classic",
            ColorScheme::Gameboy => "gameboy",
            ColorScheme::Amber => "amber",
            ColorScheme::Green => "green",
            ColorScheme::C64 => "c64",
            ColorScheme::Arcade => "arcade",
        }
    }

    fn position(&self) -> usize {
        ALL_SCHEMES.iter().position(|s| s == self).unwrap_or(0)
    }

    /// Next entry of the selector, wrapping around.
    pub fn next(&self) -> Self {
        ALL_SCHEMES[(self.position() + 1) % ALL_SCHEMES.len()]
    }

    /// Previous entry of the selector, wrapping around.
    pub fn prev(&self) -> Self {
        ALL_SCHEMES[(self.position() + ALL_SCHEMES.len() - 1) % ALL_SCHEMES.len()]
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_is_white_on_black() {
        let pair = ColorScheme::Classic.colors();
        assert_eq!(pair.foreground, Rgb::WHITE);
        assert_eq!(pair.background, Rgb::BLACK);
    }

    #[test]
    fn test_table_has_six_distinct_entries() {
        assert_eq!(ALL_SCHEMES.len(), 6);
        for (i, a) in ALL_SCHEMES.iter().enumerate() {
            for b in &ALL_SCHEMES[i + 1..] {
                assert_ne!(a.colors(), b.colors(), "{} and {} collide", a, b);
            }
        }
    }

    #[test]
    fn test_selector_cycles() {
        let mut scheme = ColorScheme::Classic;
        for _ in 0..ALL_SCHEMES.len() {
            scheme = scheme.next();
        }
        assert_eq!(scheme, ColorScheme::Classic);
        assert_eq!(ColorScheme::Classic.prev(), ColorScheme::Arcade);
        assert_eq!(ColorScheme::Arcade.next(), ColorScheme::Classic);
    }

    #[test]
    fn test_rgb_hex_display() {
        assert_eq!(Rgb::new(0x9b, 0xbc, 0x0f).to_string(), "#9bbc0f");
    }

    #[test]
    fn test_swapped_pair() {
        let pair = ColorScheme::Amber.colors().swapped();
        assert_eq!(pair.background, Rgb::new(0xff, 0xb0, 0x00));
        assert_eq!(pair.foreground, Rgb::BLACK);
    }

    #[test]
    fn test_scheme_from_toml_key() {
        #[derive(Deserialize)]
        struct Wrap {
            scheme: ColorScheme,
        }
        let w: Wrap = toml::from_str("scheme = \"gameboy\"").unwrap();
        assert_eq!(w.scheme, ColorScheme::Gameboy);
    }
}
