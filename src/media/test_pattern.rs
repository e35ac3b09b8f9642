//! Synthetic camera source producing animated test patterns.
//!
//! Useful without a webcam: the front "camera" shows a light blob drifting
//! over a horizontal gradient, the back "camera" shows expanding rings.

use std::time::Instant;

use super::{
    FacingMode, Frame, FrameFormat, MediaError, MediaSource, MediaStream, Resolution,
    StreamConstraints, StreamMetadata,
};

/// Largest pattern generated, regardless of the requested ideal size.
pub const MAX_PATTERN_RESOLUTION: Resolution = Resolution {
    width: 640,
    height: 360,
};

/// Media source that synthesizes frames instead of opening a device.
#[derive(Debug, Clone)]
pub struct TestPatternSource {
    front_available: bool,
    back_available: bool,
    fps: u32,
}

impl Default for TestPatternSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TestPatternSource {
    /// Both cameras available.
    pub fn new() -> Self {
        Self {
            front_available: true,
            back_available: true,
            fps: 30,
        }
    }

    /// Choose which facing modes exist. Missing ones fail with `DeviceNotFound`.
    pub fn with_cameras(front_available: bool, back_available: bool) -> Self {
        Self {
            front_available,
            back_available,
            ..Self::new()
        }
    }

    fn is_available(&self, facing: FacingMode) -> bool {
        match facing {
            FacingMode::Front => self.front_available,
            FacingMode::Back => self.back_available,
        }
    }
}

impl MediaSource for TestPatternSource {
    type Stream = TestPatternStream;

    fn acquire(&mut self, constraints: &StreamConstraints) -> Result<Self::Stream, MediaError> {
        if !self.is_available(constraints.facing_mode) {
            return Err(MediaError::DeviceNotFound);
        }
        let resolution = fit_within(constraints.ideal, MAX_PATTERN_RESOLUTION);
        log::debug!(
            "Test pattern acquired: {} camera at {}",
            constraints.facing_mode,
            resolution
        );
        Ok(TestPatternStream {
            facing_mode: constraints.facing_mode,
            resolution,
            fps: self.fps,
            started: None,
            stopped: false,
        })
    }
}

/// A running synthetic stream.
#[derive(Debug)]
pub struct TestPatternStream {
    facing_mode: FacingMode,
    resolution: Resolution,
    fps: u32,
    started: Option<Instant>,
    stopped: bool,
}

impl TestPatternStream {
    pub fn facing_mode(&self) -> FacingMode {
        self.facing_mode
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}

impl MediaStream for TestPatternStream {
    fn wait_for_metadata(&mut self) -> Result<StreamMetadata, MediaError> {
        if self.stopped {
            return Err(MediaError::Acquisition("stream already stopped".to_string()));
        }
        Ok(StreamMetadata {
            resolution: self.resolution,
            fps: Some(self.fps),
        })
    }

    fn play(&mut self) -> Result<(), MediaError> {
        if self.stopped {
            return Err(MediaError::Acquisition("stream already stopped".to_string()));
        }
        self.started.get_or_insert_with(Instant::now);
        Ok(())
    }

    fn latest_frame(&self) -> Option<Frame> {
        if self.stopped {
            return None;
        }
        let started = self.started?;
        let t = started.elapsed().as_secs_f32();
        Some(render_pattern(self.facing_mode, self.resolution, t))
    }

    fn stop_tracks(&mut self) {
        self.stopped = true;
    }
}

/// Scale `ideal` down (keeping its aspect) until it fits in `max`.
fn fit_within(ideal: Resolution, max: Resolution) -> Resolution {
    if ideal.width <= max.width && ideal.height <= max.height {
        return ideal;
    }
    let scale = (max.width as f32 / ideal.width as f32).min(max.height as f32 / ideal.height as f32);
    Resolution {
        width: ((ideal.width as f32 * scale).round() as u32).max(1),
        height: ((ideal.height as f32 * scale).round() as u32).max(1),
    }
}

/// Draw one pattern frame at time `t` seconds.
pub fn render_pattern(facing: FacingMode, resolution: Resolution, t: f32) -> Frame {
    let w = resolution.width.max(1);
    let h = resolution.height.max(1);
    let mut data = Vec::with_capacity((w as usize) * (h as usize) * 3);

    let cx = 0.5 + 0.3 * (t * 0.7).sin();
    let cy = 0.5 + 0.25 * (t * 0.9).cos();

    for y in 0..h {
        let v = y as f32 / h as f32;
        for x in 0..w {
            let u = x as f32 / w as f32;
            let level = match facing {
                FacingMode::Front => {
                    let dx = (u - cx) * (w as f32 / h as f32);
                    let dy = v - cy;
                    let blob = (1.0 - (dx * dx + dy * dy).sqrt() * 3.0).max(0.0);
                    (0.35 * u + 0.65 * blob).min(1.0)
                }
                FacingMode::Back => {
                    let dx = (u - 0.5) * (w as f32 / h as f32);
                    let dy = v - 0.5;
                    let r = (dx * dx + dy * dy).sqrt();
                    0.5 + 0.5 * (r * 24.0 - t * 4.0).sin()
                }
            };
            let l = (level * 255.0) as u8;
            data.extend_from_slice(&[l, l, l]);
        }
    }

    Frame {
        data,
        width: w,
        height: h,
        format: FrameFormat::Rgb,
        timestamp: Instant::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquire_scales_ideal_resolution() {
        let mut source = TestPatternSource::new();
        let constraints = StreamConstraints::new(FacingMode::Front, Resolution::IDEAL);
        let mut stream = source.acquire(&constraints).unwrap();
        let meta = stream.wait_for_metadata().unwrap();
        assert_eq!(meta.resolution, MAX_PATTERN_RESOLUTION);
        assert_eq!(meta.fps, Some(30));
    }

    #[test]
    fn test_no_frames_before_play() {
        let mut source = TestPatternSource::new();
        let constraints = StreamConstraints::new(FacingMode::Back, Resolution::IDEAL);
        let mut stream = source.acquire(&constraints).unwrap();
        assert!(stream.latest_frame().is_none());
        stream.play().unwrap();
        let frame = stream.latest_frame().unwrap();
        assert_eq!(frame.width, 640);
        assert_eq!(frame.height, 360);
        assert_eq!(frame.data.len(), 640 * 360 * 3);
    }

    #[test]
    fn test_missing_camera_is_device_not_found() {
        let mut source = TestPatternSource::with_cameras(true, false);
        let constraints = StreamConstraints::new(FacingMode::Back, Resolution::IDEAL);
        assert_eq!(
            source.acquire(&constraints).unwrap_err(),
            MediaError::DeviceNotFound
        );
    }

    #[test]
    fn test_release_stops_stream() {
        let mut source = TestPatternSource::new();
        let constraints = StreamConstraints::new(FacingMode::Front, Resolution::IDEAL);
        let mut stream = source.acquire(&constraints).unwrap();
        stream.play().unwrap();
        stream.stop_tracks();
        assert!(stream.is_stopped());
        assert!(stream.latest_frame().is_none());
    }

    #[test]
    fn test_fit_within_keeps_small_sizes() {
        let small = Resolution {
            width: 320,
            height: 240,
        };
        assert_eq!(fit_within(small, MAX_PATTERN_RESOLUTION), small);
    }
}
