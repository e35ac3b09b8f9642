//! Camera device enumeration.

use nokhwa::query;
use nokhwa::utils::ApiBackend;

use crate::media::{CameraInfo, MediaError};

/// List the cameras the platform backend can see.
///
/// An empty list is not an error.
pub fn list_devices() -> Result<Vec<CameraInfo>, MediaError> {
    let devices = query(ApiBackend::Auto).map_err(|e| MediaError::from_backend_message(e.to_string()))?;

    Ok(devices
        .into_iter()
        .map(|d| CameraInfo {
            index: d.index().as_index().unwrap_or(0),
            name: d.human_name(),
            description: d.description().to_string(),
        })
        .collect())
}
