//! Camera capture handle backed by a background thread.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Sender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use super::capture_loop::{run_capture_loop, CaptureCommand};
use super::device::list_devices;
use crate::media::{Frame, MediaError, Resolution, StreamMetadata};

/// Settings for one capture session.
#[derive(Debug, Clone)]
pub struct CaptureSettings {
    /// Camera device index
    pub device_index: u32,
    /// Requested resolution (closest match is used)
    pub resolution: Resolution,
    /// Target FPS (actual may vary)
    pub fps: u32,
    /// Mirror horizontally (selfie mode)
    pub mirror: bool,
}

/// Camera capture handle.
///
/// The camera itself is opened inside a background thread that keeps the
/// latest decoded frame in a shared slot. `start()` blocks until that thread
/// reports the negotiated resolution, which is the stream's metadata.
pub struct CameraCapture {
    /// Latest captured frame (shared with capture thread)
    frame_buffer: Arc<Mutex<Option<Frame>>>,
    capture_thread: Option<JoinHandle<()>>,
    command_tx: Option<Sender<CaptureCommand>>,
    stop_signal: Arc<AtomicBool>,
    settings: CaptureSettings,
    /// Set once the stream is open
    metadata: Option<StreamMetadata>,
}

impl std::fmt::Debug for CameraCapture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CameraCapture")
            .field("settings", &self.settings)
            .field("is_running", &self.is_running())
            .finish_non_exhaustive()
    }
}

impl CameraCapture {
    /// Validate that the device exists. The stream is not opened until
    /// `start()`.
    ///
    /// # Errors
    /// * `MediaError::DeviceNotFound` - no device with this index
    /// * `MediaError::Acquisition` - device enumeration failed
    pub fn open(settings: CaptureSettings) -> Result<Self, MediaError> {
        let devices = list_devices()?;
        if !devices.iter().any(|d| d.index == settings.device_index) {
            return Err(MediaError::DeviceNotFound);
        }

        Ok(Self {
            frame_buffer: Arc::new(Mutex::new(None)),
            capture_thread: None,
            command_tx: None,
            stop_signal: Arc::new(AtomicBool::new(false)),
            settings,
            metadata: None,
        })
    }

    pub fn settings(&self) -> &CaptureSettings {
        &self.settings
    }

    /// Negotiated stream properties, once started.
    pub fn metadata(&self) -> Option<StreamMetadata> {
        self.metadata
    }

    /// Spawn the capture thread and wait for it to open the stream.
    ///
    /// Calling this while already running returns the known metadata.
    pub fn start(&mut self) -> Result<StreamMetadata, MediaError> {
        if let (true, Some(meta)) = (self.is_running(), self.metadata) {
            return Ok(meta);
        }

        self.stop_signal.store(false, Ordering::SeqCst);

        let (tx, rx) = mpsc::channel();
        self.command_tx = Some(tx);

        let buffer = Arc::clone(&self.frame_buffer);
        let stop = Arc::clone(&self.stop_signal);
        let settings = self.settings.clone();

        let (info_tx, info_rx) = mpsc::channel::<Result<StreamMetadata, MediaError>>();

        let handle = std::thread::spawn(move || {
            run_capture_loop(settings, buffer, stop, rx, info_tx);
        });
        self.capture_thread = Some(handle);

        match info_rx.recv() {
            Ok(Ok(meta)) => {
                self.metadata = Some(meta);
                Ok(meta)
            }
            Ok(Err(e)) => {
                self.join_thread();
                Err(e)
            }
            Err(_) => {
                self.join_thread();
                Err(MediaError::Acquisition(
                    "Capture thread terminated unexpectedly".to_string(),
                ))
            }
        }
    }

    /// Signal the capture thread and wait for it to finish.
    pub fn stop(&mut self) {
        if let Some(tx) = self.command_tx.take() {
            let _ = tx.send(CaptureCommand::Stop);
        }
        self.join_thread();
        if let Ok(mut buf) = self.frame_buffer.lock() {
            *buf = None;
        }
    }

    fn join_thread(&mut self) {
        self.stop_signal.store(true, Ordering::SeqCst);
        if let Some(h) = self.capture_thread.take() {
            let _ = h.join();
        }
    }

    /// The latest captured frame, if any.
    pub fn get_frame(&self) -> Option<Frame> {
        let buffer = self.frame_buffer.lock().ok()?;
        buffer.clone()
    }

    pub fn is_running(&self) -> bool {
        self.capture_thread
            .as_ref()
            .is_some_and(|h| !h.is_finished())
    }
}

impl Drop for CameraCapture {
    fn drop(&mut self) {
        self.stop();
    }
}
