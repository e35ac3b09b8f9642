//! Media sources: where camera frames come from.
//!
//! The session talks to cameras only through [`MediaSource`] and
//! [`MediaStream`]. Two backends are provided:
//! - [`TestPatternSource`] - synthetic animated frames, always available
//! - `NativeCameraSource` - real webcams via nokhwa (feature `native-camera`)

mod error;
pub mod test_pattern;
mod types;

#[cfg(feature = "native-camera")]
pub mod native;

pub use error::MediaError;
pub use test_pattern::TestPatternSource;
pub use types::{
    CameraInfo, FacingMode, Frame, FrameFormat, Resolution, StreamConstraints, StreamMetadata,
};

/// Provider of camera streams.
pub trait MediaSource {
    /// Handle to an acquired stream. Owned exclusively by the caller.
    type Stream: MediaStream;

    /// Acquire a stream for the requested camera.
    ///
    /// # Errors
    /// * `MediaError::PermissionDenied` - camera access was declined
    /// * `MediaError::DeviceNotFound` - no camera for this facing mode
    /// * `MediaError::Acquisition` - any other setup failure
    fn acquire(&mut self, constraints: &StreamConstraints) -> Result<Self::Stream, MediaError>;

    /// Release a stream, stopping all of its tracks.
    fn release(&mut self, mut stream: Self::Stream) {
        stream.stop_tracks();
    }
}

/// An acquired camera stream.
pub trait MediaStream {
    /// Block until the stream knows its video dimensions.
    fn wait_for_metadata(&mut self) -> Result<StreamMetadata, MediaError>;

    /// Begin playback. Frames are available from `latest_frame` afterwards.
    fn play(&mut self) -> Result<(), MediaError>;

    /// The most recent decoded frame, if any.
    fn latest_frame(&self) -> Option<Frame>;

    /// Stop every track of the stream. Safe to call more than once.
    fn stop_tracks(&mut self);
}
