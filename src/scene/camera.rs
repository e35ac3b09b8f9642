//! Orthographic camera looking down the -Z axis.

use super::Viewport;

/// Orthographic projection bounds in world units (one unit per pixel).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthographicCamera {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
    pub near: f32,
    pub far: f32,
    /// Camera distance along Z
    pub position_z: f32,
}

impl OrthographicCamera {
    pub const NEAR: f32 = 1.0;
    pub const FAR: f32 = 1000.0;
    pub const POSITION_Z: f32 = 500.0;

    /// Camera whose bounds cover the viewport, centered on the origin.
    pub fn for_viewport(viewport: Viewport) -> Self {
        let mut camera = Self {
            left: 0.0,
            right: 0.0,
            top: 0.0,
            bottom: 0.0,
            near: Self::NEAR,
            far: Self::FAR,
            position_z: Self::POSITION_Z,
        };
        camera.set_viewport(viewport);
        camera
    }

    /// Recompute the projection bounds: ±width/2, ±height/2.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        let half_w = viewport.width as f32 / 2.0;
        let half_h = viewport.height as f32 / 2.0;
        self.left = -half_w;
        self.right = half_w;
        self.top = half_h;
        self.bottom = -half_h;
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.top - self.bottom
    }

    /// Whether a plane at z = 0 lies between the near and far planes.
    pub fn sees_origin_plane(&self) -> bool {
        (self.near..=self.far).contains(&self.position_z)
    }
}
