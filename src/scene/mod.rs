//! Minimal 3D scene: one textured plane seen by an orthographic camera.
//!
//! World units equal viewport pixels. The plane sits at z = 0, centered on
//! the origin, and carries the live video as its texture.

mod camera;
mod geometry;
mod renderer;
mod texture;

use std::fmt;

pub use camera::OrthographicCamera;
pub use geometry::{fit_plane, PlaneGeometry};
pub use renderer::Renderer;
pub use texture::{TextureFilter, VideoTexture};

/// Size of the drawing area in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn aspect(&self) -> f32 {
        if self.height == 0 {
            0.0
        } else {
            self.width as f32 / self.height as f32
        }
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Textured plane mesh.
#[derive(Debug)]
pub struct Plane {
    pub geometry: PlaneGeometry,
    pub texture: VideoTexture,
}

/// The scene graph: a single plane.
#[derive(Debug)]
pub struct Scene {
    pub plane: Plane,
}

impl Scene {
    pub fn new(texture: VideoTexture, geometry: PlaneGeometry) -> Self {
        Self {
            plane: Plane { geometry, texture },
        }
    }

    /// Swap the plane geometry; the old one is dropped.
    pub fn set_plane_geometry(&mut self, geometry: PlaneGeometry) {
        self.plane.geometry = geometry;
    }

    pub fn texture_mut(&mut self) -> &mut VideoTexture {
        &mut self.plane.texture
    }
}
