//! Real webcam backend built on nokhwa.
//!
//! Facing modes map to configured device indices. Frames are captured on a
//! background thread; the session only ever sees the latest one.

mod capture;
mod capture_loop;
mod device;
mod frame_utils;

use std::thread;
use std::time::{Duration, Instant};

pub use capture::{CameraCapture, CaptureSettings};
pub use device::list_devices;

use super::{
    FacingMode, Frame, MediaError, MediaSource, MediaStream, StreamConstraints, StreamMetadata,
};

/// How long `play()` waits for the first decoded frame.
const FIRST_FRAME_TIMEOUT: Duration = Duration::from_secs(3);

/// Media source backed by the platform camera API.
#[derive(Debug, Clone)]
pub struct NativeCameraSource {
    pub front_device: u32,
    pub back_device: u32,
    pub fps: u32,
    /// Mirror frames of the front camera (selfie view)
    pub mirror_front: bool,
}

impl Default for NativeCameraSource {
    fn default() -> Self {
        Self {
            front_device: 0,
            back_device: 1,
            fps: 30,
            mirror_front: true,
        }
    }
}

impl NativeCameraSource {
    fn device_for(&self, facing: FacingMode) -> u32 {
        match facing {
            FacingMode::Front => self.front_device,
            FacingMode::Back => self.back_device,
        }
    }
}

impl MediaSource for NativeCameraSource {
    type Stream = NativeCameraStream;

    fn acquire(&mut self, constraints: &StreamConstraints) -> Result<Self::Stream, MediaError> {
        let settings = CaptureSettings {
            device_index: self.device_for(constraints.facing_mode),
            resolution: constraints.ideal,
            fps: self.fps,
            mirror: self.mirror_front && constraints.facing_mode == FacingMode::Front,
        };
        log::debug!("Opening camera {:?}", settings);
        let capture = CameraCapture::open(settings)?;
        Ok(NativeCameraStream { capture })
    }
}

/// A webcam stream owned by the session.
#[derive(Debug)]
pub struct NativeCameraStream {
    capture: CameraCapture,
}

impl MediaStream for NativeCameraStream {
    fn wait_for_metadata(&mut self) -> Result<StreamMetadata, MediaError> {
        self.capture.start()
    }

    fn play(&mut self) -> Result<(), MediaError> {
        let deadline = Instant::now() + FIRST_FRAME_TIMEOUT;
        while Instant::now() < deadline {
            if self.capture.get_frame().is_some() {
                return Ok(());
            }
            if !self.capture.is_running() {
                return Err(MediaError::Acquisition(
                    "camera stream ended before the first frame".to_string(),
                ));
            }
            thread::sleep(Duration::from_millis(5));
        }
        Err(MediaError::Acquisition(format!(
            "no frame received within {:?}",
            FIRST_FRAME_TIMEOUT
        )))
    }

    fn latest_frame(&self) -> Option<Frame> {
        self.capture.get_frame()
    }

    fn stop_tracks(&mut self) {
        self.capture.stop();
    }
}
