//! Brightness to glyph mapping.

/// Ramp index for one brightness value.
///
/// Dark cells get the dense end of the ramp:
/// `floor((1 - b/255) * (levels - 1))`. With `invert` the ramp is walked
/// from the other end, `levels - 1 - index`.
#[inline]
pub fn glyph_index(brightness: u8, levels: usize, invert: bool) -> usize {
    if levels == 0 {
        return 0;
    }
    let idx = ((255 - brightness) as usize * (levels - 1)) / 255;
    if invert {
        levels - 1 - idx
    } else {
        idx
    }
}

/// Map brightness values to glyphs, reusing `buffer`.
///
/// An empty ramp yields spaces.
///
/// # Returns
/// The number of glyphs written.
pub fn map_to_glyphs_into(
    brightness: &[u8],
    ramp: &[char],
    invert: bool,
    buffer: &mut Vec<char>,
) -> usize {
    buffer.clear();

    if ramp.is_empty() {
        buffer.resize(brightness.len(), ' ');
        return brightness.len();
    }

    buffer.reserve(brightness.len());
    let levels = ramp.len();
    buffer.extend(
        brightness
            .iter()
            .map(|&b| ramp[glyph_index(b, levels, invert)]),
    );

    brightness.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::GLYPH_RAMP;

    #[test]
    fn test_extremes() {
        assert_eq!(glyph_index(0, 10, false), 9);
        assert_eq!(glyph_index(255, 10, false), 0);
        assert_eq!(glyph_index(0, 10, true), 0);
        assert_eq!(glyph_index(255, 10, true), 9);
    }

    #[test]
    fn test_midtone_floors() {
        // (255 - 128) * 9 / 255 = 4.48 -> 4
        assert_eq!(glyph_index(128, 10, false), 4);
        assert_eq!(glyph_index(128, 10, true), 5);
    }

    #[test]
    fn test_map_with_default_ramp() {
        let mut out = Vec::new();
        map_to_glyphs_into(&[0, 255, 128], GLYPH_RAMP, false, &mut out);
        assert_eq!(out, vec!['#', ' ', '+']);
    }

    #[test]
    fn test_empty_ramp_yields_spaces() {
        let mut out = Vec::new();
        assert_eq!(map_to_glyphs_into(&[1, 2, 3], &[], false, &mut out), 3);
        assert_eq!(out, vec![' ', ' ', ' ']);
    }
}
