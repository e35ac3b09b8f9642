//! Lifecycle state and render-loop scheduling.

use std::fmt;

/// Session lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Stopped,
    /// Waiting on stream acquisition, metadata or playback
    Starting,
    Running,
}

impl SessionState {
    pub fn name(&self) -> &'static str {
        match self {
            SessionState::Stopped => "stopped",
            SessionState::Starting => "starting",
            SessionState::Running => "running",
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The per-frame render loop.
///
/// The loop is driven from outside (one `animate()` per display tick); this
/// only records whether it is scheduled. Cancelling takes effect on the next
/// tick.
#[derive(Debug, Clone, Default)]
pub struct RenderLoop {
    scheduled: bool,
    frames: u64,
}

impl RenderLoop {
    pub fn schedule(&mut self) {
        self.scheduled = true;
    }

    pub fn cancel(&mut self) {
        self.scheduled = false;
    }

    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }

    pub fn record_frame(&mut self) {
        self.frames += 1;
    }

    /// Frames rendered since the session was created.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
