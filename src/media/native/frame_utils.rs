//! Conversions from nokhwa buffers into session frames.

use nokhwa::pixel_format::RgbFormat;
use std::time::Instant;

use crate::media::{Frame, FrameFormat};

/// Decode a nokhwa buffer (MJPEG, YUYV, NV12, ...) into an RGB frame.
///
/// Returns `None` for unsupported formats or corrupt data.
pub fn convert_to_rgb(buffer: &nokhwa::Buffer) -> Option<Frame> {
    let decoded = buffer.decode_image::<RgbFormat>().ok()?;
    let resolution = buffer.resolution();

    Some(Frame {
        data: decoded.into_raw(),
        width: resolution.width(),
        height: resolution.height(),
        format: FrameFormat::Rgb,
        timestamp: Instant::now(),
    })
}

/// Flip a frame left-right in place, for the user-facing camera.
pub fn mirror_horizontal(frame: &mut Frame) {
    let bpp = frame.bytes_per_pixel();
    let stride = frame.width as usize * bpp;
    if stride == 0 {
        return;
    }

    for row in frame.data.chunks_exact_mut(stride) {
        let width = frame.width as usize;
        for x in 0..width / 2 {
            let left = x * bpp;
            let right = (width - 1 - x) * bpp;
            for i in 0..bpp {
                row.swap(left + i, right + i);
            }
        }
    }
}
