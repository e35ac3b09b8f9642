//! User-facing session errors.

use crate::media::MediaError;

/// Errors reported by the session controller.
///
/// The `Display` text of each variant is exactly what the error area shows.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("Camera permission denied. Please allow camera access and try again.")]
    PermissionDenied,

    #[error("No camera found on this device.")]
    DeviceNotFound,

    #[error("Failed to access camera: {0}")]
    Acquisition(String),

    /// A camera switch failed; wraps the acquisition error.
    #[error("Failed to switch camera: {0}")]
    SwitchFailed(Box<SessionError>),

    /// `start()` was called while a stream is already running.
    #[error("Camera is already running.")]
    AlreadyRunning,
}

impl From<MediaError> for SessionError {
    fn from(err: MediaError) -> Self {
        match err {
            MediaError::PermissionDenied => SessionError::PermissionDenied,
            MediaError::DeviceNotFound => SessionError::DeviceNotFound,
            MediaError::Acquisition(msg) => SessionError::Acquisition(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            SessionError::from(MediaError::PermissionDenied).to_string(),
            "Camera permission denied. Please allow camera access and try again."
        );
        assert_eq!(
            SessionError::from(MediaError::DeviceNotFound).to_string(),
            "No camera found on this device."
        );
        assert_eq!(
            SessionError::from(MediaError::Acquisition("busy".to_string())).to_string(),
            "Failed to access camera: busy"
        );
    }

    #[test]
    fn test_switch_message_wraps_cause() {
        let err = SessionError::SwitchFailed(Box::new(SessionError::DeviceNotFound));
        assert_eq!(
            err.to_string(),
            "Failed to switch camera: No camera found on this device."
        );
    }
}
