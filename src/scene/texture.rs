//! Texture fed from the live video stream.

use crate::media::Frame;

/// Sampling filter for magnification and minification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextureFilter {
    Nearest,
    /// Bilinear interpolation between the four closest texels
    #[default]
    Linear,
}

/// Texture holding the latest video frame.
#[derive(Debug, Default)]
pub struct VideoTexture {
    frame: Option<Frame>,
    pub filter: TextureFilter,
    /// Set when the source changed and the next frame must replace the image
    needs_update: bool,
}

impl VideoTexture {
    pub fn new(filter: TextureFilter) -> Self {
        Self {
            frame: None,
            filter,
            needs_update: true,
        }
    }

    /// Replace the image with a new frame.
    pub fn upload(&mut self, frame: Frame) {
        self.frame = Some(frame);
        self.needs_update = false;
    }

    /// Flag the texture for refresh after a source swap.
    pub fn mark_needs_update(&mut self) {
        self.needs_update = true;
    }

    pub fn needs_update(&self) -> bool {
        self.needs_update
    }

    pub fn image(&self) -> Option<&Frame> {
        self.frame.as_ref()
    }

    /// Sample at normalized coordinates (u right, v down), both in [0, 1].
    ///
    /// Returns black when there is no image yet.
    pub fn sample(&self, u: f32, v: f32) -> [u8; 3] {
        let Some(frame) = self.frame.as_ref() else {
            return [0, 0, 0];
        };
        if frame.width == 0 || frame.height == 0 {
            return [0, 0, 0];
        }

        let u = u.clamp(0.0, 1.0);
        let v = v.clamp(0.0, 1.0);
        // Texel centers sit at half-integer positions
        let x = u * frame.width as f32 - 0.5;
        let y = v * frame.height as f32 - 0.5;

        match self.filter {
            TextureFilter::Nearest => {
                let max_x = frame.width - 1;
                let max_y = frame.height - 1;
                let px = (x.round().max(0.0) as u32).min(max_x);
                let py = (y.round().max(0.0) as u32).min(max_y);
                frame.pixel(px, py)
            }
            TextureFilter::Linear => bilinear(frame, x, y),
        }
    }
}

fn bilinear(frame: &Frame, x: f32, y: f32) -> [u8; 3] {
    let max_x = (frame.width - 1) as f32;
    let max_y = (frame.height - 1) as f32;
    let x = x.clamp(0.0, max_x);
    let y = y.clamp(0.0, max_y);

    let x0 = x.floor();
    let y0 = y.floor();
    let fx = x - x0;
    let fy = y - y0;
    let x1 = (x0 + 1.0).min(max_x);
    let y1 = (y0 + 1.0).min(max_y);

    let p00 = frame.pixel(x0 as u32, y0 as u32);
    let p10 = frame.pixel(x1 as u32, y0 as u32);
    let p01 = frame.pixel(x0 as u32, y1 as u32);
    let p11 = frame.pixel(x1 as u32, y1 as u32);

    let mut out = [0u8; 3];
    for c in 0..3 {
        let top = p00[c] as f32 * (1.0 - fx) + p10[c] as f32 * fx;
        let bottom = p01[c] as f32 * (1.0 - fx) + p11[c] as f32 * fx;
        out[c] = (top * (1.0 - fy) + bottom * fy).round() as u8;
    }
    out
}
