//! Glyph ramps used by the effect.

/// Default ramp, lightest to densest (10 levels).
pub const GLYPH_RAMP: &[char] = &[' ', '.', ':', '-', '+', '*', '=', '%', '@', '#'];

/// Build a ramp from a string, e.g. `" .:-+*=%@#"`.
///
/// Returns `None` when fewer than two glyphs are given, since a one-glyph
/// ramp cannot encode brightness.
pub fn parse_ramp(s: &str) -> Option<Vec<char>> {
    let chars: Vec<char> = s.chars().filter(|c| !c.is_control()).collect();
    if chars.len() < 2 {
        None
    } else {
        Some(chars)
    }
}
