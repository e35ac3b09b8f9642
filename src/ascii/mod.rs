//! Glyph effect: converts rendered frames into a character grid.
//!
//! Pipeline per frame:
//!
//! 1. **Render** - the scene is rasterized into an RGB framebuffer
//! 2. **Grayscale** - RGB to BT.601 luminance
//! 3. **Downsample** - area average onto the character grid
//! 4. **Map** - brightness to a glyph of the ramp
//!
//! The result is written into a [`RenderSurface`], which also carries the
//! foreground/background colors it is displayed with.

mod charset;
mod downsample;
mod effect;
mod grayscale;
mod mapping;
mod surface;

pub use charset::{parse_ramp, GLYPH_RAMP};
pub use downsample::downsample_into;
pub use effect::{grid_dimensions, EffectOptions, GlyphEffect, DEFAULT_RESOLUTION};
pub use grayscale::to_grayscale_into;
pub use mapping::{glyph_index, map_to_glyphs_into};
pub use surface::RenderSurface;
