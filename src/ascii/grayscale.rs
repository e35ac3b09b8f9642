//! RGB to luminance conversion.

use crate::media::Frame;

/// Convert an RGB frame to per-pixel luminance (0-255), reusing `buffer`.
///
/// Uses the ITU-R BT.601 weights with integer math, coefficients scaled by
/// 1000: Y = (299*R + 587*G + 114*B) / 1000.
///
/// # Returns
/// The number of pixels written to the buffer
pub fn to_grayscale_into(frame: &Frame, buffer: &mut Vec<u8>) -> usize {
    let pixel_count = (frame.width as usize) * (frame.height as usize);
    buffer.clear();
    buffer.reserve(pixel_count);

    for rgb in frame.data.chunks_exact(frame.bytes_per_pixel()).take(pixel_count) {
        let r = rgb[0] as u32;
        let g = rgb[1] as u32;
        let b = rgb[2] as u32;
        buffer.push(((299 * r + 587 * g + 114 * b) / 1000) as u8);
    }

    buffer.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_luminance() {
        let mut buf = Vec::new();
        let frame = crate::media::Frame {
            data: vec![255, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 255],
            width: 4,
            height: 1,
            format: crate::media::FrameFormat::Rgb,
            timestamp: std::time::Instant::now(),
        };
        assert_eq!(to_grayscale_into(&frame, &mut buf), 4);
        assert_eq!(buf, vec![76, 149, 29, 255]);
    }

    #[test]
    fn test_buffer_is_reused() {
        let mut buf = vec![1, 2, 3, 4, 5, 6, 7, 8];
        let frame = Frame::filled(2, 1, [0, 0, 0]);
        to_grayscale_into(&frame, &mut buf);
        assert_eq!(buf, vec![0, 0]);
    }
}
