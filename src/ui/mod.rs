//! Display-side state the session controller writes to.
//!
//! The [`Document`] is what the terminal presenter draws: the render surface
//! slot, the header, the error area and the control states.

mod container;
mod controls;
mod error_area;
mod header;

pub use container::Container;
pub use controls::{Controls, ResolutionSlider};
pub use error_area::ErrorArea;
pub use header::Header;

/// All display state owned by the session.
#[derive(Debug)]
pub struct Document {
    pub container: Container,
    pub error_area: ErrorArea,
    pub controls: Controls,
    pub header: Header,
}

impl Document {
    pub fn new(controls: Controls, header: Header) -> Self {
        Self {
            container: Container::new(),
            error_area: ErrorArea::default(),
            controls,
            header,
        }
    }
}
