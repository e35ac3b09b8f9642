//! The glyph effect: renders a scene and converts it to a character grid.

use super::downsample::downsample_into;
use super::grayscale::to_grayscale_into;
use super::mapping::map_to_glyphs_into;
use super::surface::RenderSurface;
use crate::scene::{OrthographicCamera, Renderer, Scene, Viewport};

/// Default density factor.
pub const DEFAULT_RESOLUTION: f32 = 0.15;

/// Options fixed at effect construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectOptions {
    /// Walk the ramp from the dense end for bright cells
    pub invert: bool,
    /// Characters per pixel, 0 < r <= 1; smaller means a coarser grid
    pub resolution: f32,
}

impl Default for EffectOptions {
    fn default() -> Self {
        Self {
            invert: false,
            resolution: DEFAULT_RESOLUTION,
        }
    }
}

/// Grid size for a viewport at a given density.
///
/// Columns are `round(width * resolution)`. Rows are half of
/// `round(height * resolution)`, rounded up, because a character cell is
/// about twice as tall as it is wide.
pub fn grid_dimensions(viewport: Viewport, resolution: f32) -> (u16, u16) {
    if !resolution.is_finite() || resolution <= 0.0 {
        return (0, 0);
    }
    let cols = (viewport.width as f32 * resolution).round();
    let sample_rows = (viewport.height as f32 * resolution).round();
    let rows = (sample_rows / 2.0).ceil();
    (
        cols.clamp(0.0, u16::MAX as f32) as u16,
        rows.clamp(0.0, u16::MAX as f32) as u16,
    )
}

/// Converts rendered frames into glyphs from a fixed ramp.
#[derive(Debug)]
pub struct GlyphEffect {
    ramp: Vec<char>,
    options: EffectOptions,
    viewport: Viewport,
    cols: u16,
    rows: u16,
    // Reused across frames
    gray: Vec<u8>,
    brightness: Vec<u8>,
    glyphs: Vec<char>,
}

impl GlyphEffect {
    pub fn new(ramp: &[char], options: EffectOptions) -> Self {
        Self {
            ramp: ramp.to_vec(),
            options,
            viewport: Viewport::default(),
            cols: 0,
            rows: 0,
            gray: Vec::new(),
            brightness: Vec::new(),
            glyphs: Vec::new(),
        }
    }

    pub fn options(&self) -> EffectOptions {
        self.options
    }

    pub fn ramp(&self) -> &[char] {
        &self.ramp
    }

    /// Current grid size in characters.
    pub fn grid(&self) -> (u16, u16) {
        (self.cols, self.rows)
    }

    /// Resize the output to cover `width` x `height` pixels.
    pub fn set_size(&mut self, width: u32, height: u32) {
        self.viewport = Viewport::new(width, height);
        let (cols, rows) = grid_dimensions(self.viewport, self.options.resolution);
        self.cols = cols;
        self.rows = rows;
    }

    /// A blank surface matching the current grid and density.
    pub fn create_surface(&self) -> RenderSurface {
        RenderSurface::new(self.cols, self.rows, self.options.resolution)
    }

    /// Render the scene through `renderer` and write glyphs into `surface`.
    pub fn render(
        &mut self,
        renderer: &mut Renderer,
        scene: &Scene,
        camera: &OrthographicCamera,
        surface: &mut RenderSurface,
    ) {
        let frame = renderer.render(scene, camera);

        to_grayscale_into(frame, &mut self.gray);
        downsample_into(
            &self.gray,
            frame.width,
            frame.height,
            self.cols,
            self.rows,
            &mut self.brightness,
        );
        map_to_glyphs_into(
            &self.brightness,
            &self.ramp,
            self.options.invert,
            &mut self.glyphs,
        );

        surface.write_grid(&self.glyphs, self.cols, self.rows);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::GLYPH_RAMP;
    use crate::media::Frame;
    use crate::scene::{PlaneGeometry, TextureFilter, VideoTexture};

    #[test]
    fn test_grid_dimensions_default_density() {
        // 1280 * 0.15 = 192 columns, round(720 * 0.15) = 108 -> 54 rows
        assert_eq!(grid_dimensions(Viewport::new(1280, 720), 0.15), (192, 54));
    }

    #[test]
    fn test_grid_dimensions_odd_rows_round_up() {
        // round(100 * 0.25) = 25 -> 13 rows
        assert_eq!(grid_dimensions(Viewport::new(40, 100), 0.25), (10, 13));
    }

    #[test]
    fn test_grid_dimensions_rejects_nonpositive() {
        assert_eq!(grid_dimensions(Viewport::new(100, 100), 0.0), (0, 0));
        assert_eq!(grid_dimensions(Viewport::new(100, 100), -1.0), (0, 0));
    }

    #[test]
    fn test_render_dark_scene_is_dense() {
        let viewport = Viewport::new(40, 40);
        let mut texture = VideoTexture::new(TextureFilter::Linear);
        texture.upload(Frame::filled(8, 8, [0, 0, 0]));
        let scene = Scene::new(texture, PlaneGeometry::filling(viewport));
        let camera = OrthographicCamera::for_viewport(viewport);
        let mut renderer = Renderer::new(viewport);

        let mut effect = GlyphEffect::new(
            GLYPH_RAMP,
            EffectOptions {
                invert: false,
                resolution: 0.25,
            },
        );
        effect.set_size(40, 40);
        let mut surface = effect.create_surface();
        effect.render(&mut renderer, &scene, &camera, &mut surface);

        assert_eq!((surface.cols(), surface.rows()), (10, 5));
        assert!(surface.chars().iter().all(|&c| c == '#'));
    }

    #[test]
    fn test_render_inverted_bright_scene_is_dense() {
        let viewport = Viewport::new(20, 20);
        let mut texture = VideoTexture::new(TextureFilter::Linear);
        texture.upload(Frame::filled(4, 4, [255, 255, 255]));
        let scene = Scene::new(texture, PlaneGeometry::filling(viewport));
        let camera = OrthographicCamera::for_viewport(viewport);
        let mut renderer = Renderer::new(viewport);

        let mut effect = GlyphEffect::new(
            GLYPH_RAMP,
            EffectOptions {
                invert: true,
                resolution: 0.5,
            },
        );
        effect.set_size(20, 20);
        let mut surface = effect.create_surface();
        effect.render(&mut renderer, &scene, &camera, &mut surface);

        assert!(surface.chars().iter().all(|&c| c == '#'));
    }
}
