//! ascii-cam library crate.
//!
//! A live camera stream is drawn onto a plane in an orthographic scene,
//! rasterized on the CPU and converted to a styled character grid. The
//! [`session::Session`] ties camera lifecycle, render pipeline and display
//! state together; the binary wraps it in a terminal UI.

pub mod ascii;
pub mod cli;
pub mod config;
pub mod event_loop;
pub mod input;
pub mod logging;
pub mod media;
pub mod palette;
pub mod scene;
pub mod session;
pub mod terminal;
pub mod ui;
