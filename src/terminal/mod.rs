//! Terminal management: raw mode with cleanup, pixel sizing and drawing.

mod presenter;
mod raw_mode;
mod viewport;

pub use presenter::{compose, present};
pub use raw_mode::RawModeGuard;
pub use viewport::{TerminalSize, CELL_HEIGHT_PX, CELL_WIDTH_PX};
