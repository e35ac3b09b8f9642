//! Errors raised by media backends.

/// Errors that can occur while acquiring or running a media stream.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MediaError {
    /// The user or OS declined camera access
    #[error("camera permission denied")]
    PermissionDenied,

    /// No camera matches the request
    #[error("no camera device found")]
    DeviceNotFound,

    /// Any other stream-setup failure
    #[error("{0}")]
    Acquisition(String),
}

impl MediaError {
    /// Classify a backend error message.
    ///
    /// Camera drivers report permission problems as free-form text, so the
    /// message is matched against the usual wording.
    pub fn from_backend_message(message: impl Into<String>) -> Self {
        let message = message.into();
        let lower = message.to_lowercase();
        if lower.contains("permission")
            || lower.contains("denied")
            || lower.contains("authorization")
            || lower.contains("not authorized")
        {
            MediaError::PermissionDenied
        } else if lower.contains("not found") || lower.contains("no device") {
            MediaError::DeviceNotFound
        } else {
            MediaError::Acquisition(message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_permission_messages() {
        assert_eq!(
            MediaError::from_backend_message("Access Denied by user"),
            MediaError::PermissionDenied
        );
        assert_eq!(
            MediaError::from_backend_message("AVFoundation authorization failed"),
            MediaError::PermissionDenied
        );
    }

    #[test]
    fn test_classify_missing_device() {
        assert_eq!(
            MediaError::from_backend_message("Device not found: /dev/video3"),
            MediaError::DeviceNotFound
        );
    }

    #[test]
    fn test_classify_other_failures() {
        assert_eq!(
            MediaError::from_backend_message("format negotiation failed"),
            MediaError::Acquisition("format negotiation failed".to_string())
        );
    }
}
