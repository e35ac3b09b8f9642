//! CLI enum types for the media source, facing mode and color scheme options.

use clap::ValueEnum;

use crate::media::FacingMode;
use crate::palette::ColorScheme;

/// Where frames come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Source {
    /// Webcam through the platform camera API
    Native,
    /// Synthetic animated pattern, no camera needed
    TestPattern,
}

impl Default for Source {
    fn default() -> Self {
        if cfg!(feature = "native-camera") {
            Source::Native
        } else {
            Source::TestPattern
        }
    }
}

/// Camera to start with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Facing {
    #[default]
    Front,
    Back,
}

impl From<Facing> for FacingMode {
    fn from(f: Facing) -> Self {
        match f {
            Facing::Front => FacingMode::Front,
            Facing::Back => FacingMode::Back,
        }
    }
}

/// Color scheme of the character grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Scheme {
    #[default]
    Classic,
    Gameboy,
    Amber,
    Green,
    C64,
    Arcade,
}

impl From<Scheme> for ColorScheme {
    fn from(s: Scheme) -> Self {
        match s {
            Scheme::Classic => ColorScheme::Classic,
            Scheme::Gameboy => ColorScheme::Gameboy,
            Scheme::Amber => ColorScheme::Amber,
            Scheme::Green => ColorScheme::Green,
            Scheme::C64 => ColorScheme::C64,
            Scheme::Arcade => ColorScheme::Arcade,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facing_to_facing_mode() {
        assert_eq!(FacingMode::from(Facing::Front), FacingMode::Front);
        assert_eq!(FacingMode::from(Facing::Back), FacingMode::Back);
    }

    #[test]
    fn test_scheme_to_color_scheme() {
        assert_eq!(ColorScheme::from(Scheme::Classic), ColorScheme::Classic);
        assert_eq!(ColorScheme::from(Scheme::Gameboy), ColorScheme::Gameboy);
        assert_eq!(ColorScheme::from(Scheme::C64), ColorScheme::C64);
        assert_eq!(ColorScheme::from(Scheme::Arcade), ColorScheme::Arcade);
    }

    #[test]
    fn test_scheme_names_match_palette() {
        for scheme in Scheme::value_variants() {
            let name = scheme
                .to_possible_value()
                .map(|v| v.get_name().to_string())
                .unwrap_or_default();
            assert_eq!(name, ColorScheme::from(*scheme).name());
        }
    }
}
