//! Session controller: camera lifecycle, render pipeline and display state.
//!
//! A [`Session`] is driven by UI actions (`start`, `stop`, `switch_camera`,
//! `update_resolution`, ...) and by the frame tick (`animate`). It holds a
//! camera stream exactly while it is running.

mod controller;
mod error;
mod pipeline;
mod state;

pub use controller::{Session, SessionSettings};
pub use error::SessionError;
pub use pipeline::Pipeline;
pub use state::{RenderLoop, SessionState};
