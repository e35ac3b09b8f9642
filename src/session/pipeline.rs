//! Scene, camera, renderer and effect, built together on start.

use crate::ascii::{EffectOptions, GlyphEffect, RenderSurface};
use crate::scene::{
    fit_plane, OrthographicCamera, PlaneGeometry, Renderer, Scene, TextureFilter, VideoTexture,
    Viewport,
};

/// The render pipeline for one running session.
#[derive(Debug)]
pub struct Pipeline {
    pub scene: Scene,
    pub camera: OrthographicCamera,
    pub renderer: Renderer,
    pub effect: GlyphEffect,
}

impl Pipeline {
    /// Build everything sized to `viewport`. The plane keeps
    /// `stream_aspect` when known, otherwise it fills the viewport.
    pub fn build(
        viewport: Viewport,
        stream_aspect: Option<f32>,
        ramp: &[char],
        options: EffectOptions,
    ) -> Self {
        let geometry = plane_for(viewport, stream_aspect);
        let scene = Scene::new(VideoTexture::new(TextureFilter::Linear), geometry);
        let camera = OrthographicCamera::for_viewport(viewport);
        let renderer = Renderer::new(viewport);
        let mut effect = GlyphEffect::new(ramp, options);
        effect.set_size(viewport.width, viewport.height);

        Self {
            scene,
            camera,
            renderer,
            effect,
        }
    }

    /// Swap in a new effect; renderer and scene are kept. Returns the
    /// surface the new effect draws into.
    pub fn replace_effect(
        &mut self,
        ramp: &[char],
        options: EffectOptions,
        viewport: Viewport,
    ) -> RenderSurface {
        let mut effect = GlyphEffect::new(ramp, options);
        effect.set_size(viewport.width, viewport.height);
        let surface = effect.create_surface();
        self.effect = effect;
        surface
    }

    /// Follow a viewport change. The plane is only rebuilt when the stream
    /// dimensions are known.
    pub fn resize(&mut self, viewport: Viewport, stream_aspect: Option<f32>) {
        self.camera.set_viewport(viewport);
        self.renderer.set_size(viewport);
        self.effect.set_size(viewport.width, viewport.height);
        if let Some(aspect) = stream_aspect {
            self.scene.set_plane_geometry(fit_plane(viewport, aspect));
        }
    }

    /// Render one frame into `surface`.
    pub fn render_into(&mut self, surface: &mut RenderSurface) {
        self.effect
            .render(&mut self.renderer, &self.scene, &self.camera, surface);
    }
}

fn plane_for(viewport: Viewport, stream_aspect: Option<f32>) -> PlaneGeometry {
    match stream_aspect {
        Some(aspect) => fit_plane(viewport, aspect),
        None => PlaneGeometry::filling(viewport),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::GLYPH_RAMP;

    #[test]
    fn test_build_fits_plane_to_stream() {
        let pipeline = Pipeline::build(
            Viewport::new(720, 720),
            Some(16.0 / 9.0),
            GLYPH_RAMP,
            EffectOptions::default(),
        );
        assert_eq!(pipeline.scene.plane.geometry.width, 720.0);
        assert!((pipeline.scene.plane.geometry.height - 405.0).abs() < 0.01);
        assert_eq!(pipeline.effect.grid(), (108, 54));
    }

    #[test]
    fn test_resize_without_stream_keeps_plane() {
        let mut pipeline = Pipeline::build(
            Viewport::new(100, 100),
            None,
            GLYPH_RAMP,
            EffectOptions::default(),
        );
        pipeline.resize(Viewport::new(200, 50), None);
        assert_eq!(pipeline.scene.plane.geometry, PlaneGeometry::new(100.0, 100.0));
        assert_eq!(pipeline.camera.right, 100.0);
        assert_eq!(pipeline.renderer.size(), Viewport::new(200, 50));
    }

    #[test]
    fn test_replace_effect_keeps_renderer() {
        let mut pipeline = Pipeline::build(
            Viewport::new(100, 100),
            None,
            GLYPH_RAMP,
            EffectOptions::default(),
        );
        let surface = pipeline.replace_effect(
            GLYPH_RAMP,
            EffectOptions {
                invert: true,
                resolution: 0.3,
            },
            Viewport::new(100, 100),
        );
        assert_eq!(surface.density(), 0.3);
        assert_eq!((surface.cols(), surface.rows()), (30, 15));
        assert!(pipeline.effect.options().invert);
        assert_eq!(pipeline.renderer.size(), Viewport::new(100, 100));
    }
}
