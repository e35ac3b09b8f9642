//! Plane geometry that keeps the stream's aspect ratio inside the viewport.

use super::Viewport;

/// Rectangle centered on the origin, in world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneGeometry {
    pub width: f32,
    pub height: f32,
}

impl PlaneGeometry {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Plane covering the whole viewport.
    pub fn filling(viewport: Viewport) -> Self {
        Self::new(viewport.width as f32, viewport.height as f32)
    }
}

/// Largest plane with `stream_aspect` that fits the viewport.
///
/// A window wider than the stream gets full height (pillarbox bars left and
/// right); otherwise the plane takes full width (letterbox bars top and
/// bottom).
pub fn fit_plane(viewport: Viewport, stream_aspect: f32) -> PlaneGeometry {
    let width = viewport.width as f32;
    let height = viewport.height as f32;
    if height <= 0.0 || !stream_aspect.is_finite() || stream_aspect <= 0.0 {
        return PlaneGeometry::filling(viewport);
    }

    let window_aspect = width / height;
    if window_aspect > stream_aspect {
        PlaneGeometry::new(height * stream_aspect, height)
    } else {
        PlaneGeometry::new(width, width / stream_aspect)
    }
}
