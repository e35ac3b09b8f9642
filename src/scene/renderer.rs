//! CPU rasterizer for the video plane.

use std::time::Instant;

use super::{OrthographicCamera, Scene, Viewport};
use crate::media::{Frame, FrameFormat};

/// Renders a [`Scene`] into an RGB framebuffer the size of the viewport.
#[derive(Debug)]
pub struct Renderer {
    framebuffer: Frame,
    clear_color: [u8; 3],
}

impl Renderer {
    pub fn new(viewport: Viewport) -> Self {
        let mut renderer = Self {
            framebuffer: Frame {
                data: Vec::new(),
                width: 0,
                height: 0,
                format: FrameFormat::Rgb,
                timestamp: Instant::now(),
            },
            clear_color: [0, 0, 0],
        };
        renderer.set_size(viewport);
        renderer
    }

    pub fn set_size(&mut self, viewport: Viewport) {
        self.framebuffer.width = viewport.width;
        self.framebuffer.height = viewport.height;
        let len = (viewport.width as usize) * (viewport.height as usize) * 3;
        self.framebuffer.data.resize(len, 0);
    }

    pub fn size(&self) -> Viewport {
        Viewport::new(self.framebuffer.width, self.framebuffer.height)
    }

    /// The last rendered image.
    pub fn framebuffer(&self) -> &Frame {
        &self.framebuffer
    }

    /// Rasterize the scene as seen through `camera`.
    ///
    /// Pixels outside the plane are cleared to black. Each pixel center is
    /// projected back into world space and, when inside the plane, samples
    /// the video texture.
    pub fn render(&mut self, scene: &Scene, camera: &OrthographicCamera) -> &Frame {
        let width = self.framebuffer.width;
        let height = self.framebuffer.height;
        let clear = self.clear_color;

        for px in self.framebuffer.data.chunks_exact_mut(3) {
            px.copy_from_slice(&clear);
        }

        let plane = &scene.plane;
        if width == 0
            || height == 0
            || !camera.sees_origin_plane()
            || plane.geometry.width <= 0.0
            || plane.geometry.height <= 0.0
        {
            self.framebuffer.timestamp = Instant::now();
            return &self.framebuffer;
        }

        let units_per_px_x = camera.width() / width as f32;
        let units_per_px_y = camera.height() / height as f32;
        let half_w = plane.geometry.width / 2.0;
        let half_h = plane.geometry.height / 2.0;

        for y in 0..height {
            let world_y = camera.top - (y as f32 + 0.5) * units_per_px_y;
            if world_y < -half_h || world_y > half_h {
                continue;
            }
            let v = (half_h - world_y) / plane.geometry.height;
            let row = (y as usize) * (width as usize) * 3;

            for x in 0..width {
                let world_x = camera.left + (x as f32 + 0.5) * units_per_px_x;
                if world_x < -half_w || world_x > half_w {
                    continue;
                }
                let u = (world_x + half_w) / plane.geometry.width;
                let texel = plane.texture.sample(u, v);
                let idx = row + (x as usize) * 3;
                self.framebuffer.data[idx..idx + 3].copy_from_slice(&texel);
            }
        }

        self.framebuffer.timestamp = Instant::now();
        &self.framebuffer
    }
}
