//! The display slot holding the live render surface.

use crate::ascii::RenderSurface;

/// Holds at most one render surface.
///
/// Attaching a new surface removes the previous one in the same step, so
/// the display never shows two surfaces or a half-replaced one.
#[derive(Debug, Default)]
pub struct Container {
    surface: Option<RenderSurface>,
    /// Number of surfaces attached over the container's lifetime
    generation: u64,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `surface`, returning the one it replaced.
    pub fn replace(&mut self, surface: RenderSurface) -> Option<RenderSurface> {
        self.generation += 1;
        self.surface.replace(surface)
    }

    /// Remove the attached surface.
    pub fn clear(&mut self) -> Option<RenderSurface> {
        self.surface.take()
    }

    pub fn surface(&self) -> Option<&RenderSurface> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut RenderSurface> {
        self.surface.as_mut()
    }

    /// 0 or 1.
    pub fn attached_count(&self) -> usize {
        usize::from(self.surface.is_some())
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_returns_previous() {
        let mut container = Container::new();
        assert!(container.replace(RenderSurface::new(1, 1, 0.1)).is_none());
        let old = container.replace(RenderSurface::new(2, 2, 0.2)).unwrap();
        assert_eq!(old.density(), 0.1);
        assert_eq!(container.attached_count(), 1);
        assert_eq!(container.surface().unwrap().density(), 0.2);
        assert_eq!(container.generation(), 2);
    }

    #[test]
    fn test_clear_detaches() {
        let mut container = Container::new();
        container.replace(RenderSurface::new(1, 1, 0.1));
        assert!(container.clear().is_some());
        assert_eq!(container.attached_count(), 0);
        assert!(container.clear().is_none());
    }
}
