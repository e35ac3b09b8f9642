//! Control state: button enablement, the density slider and the scheme
//! selector.

use crate::palette::ColorScheme;

/// Slider for the density factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolutionSlider {
    value: f32,
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl ResolutionSlider {
    pub const MIN: f32 = 0.05;
    pub const MAX: f32 = 0.30;
    pub const STEP: f32 = 0.01;

    pub fn new(value: f32) -> Self {
        let mut slider = Self {
            value: Self::MIN,
            min: Self::MIN,
            max: Self::MAX,
            step: Self::STEP,
        };
        slider.set(value);
        slider
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Set the value, snapped to the step grid and clamped to the range.
    pub fn set(&mut self, value: f32) -> f32 {
        let steps = ((value - self.min) / self.step).round();
        let snapped = self.min + steps * self.step;
        // Trim float noise so the value prints and compares cleanly
        self.value = (snapped.clamp(self.min, self.max) * 1000.0).round() / 1000.0;
        self.value
    }

    pub fn step_up(&mut self) -> f32 {
        self.set(self.value + self.step)
    }

    pub fn step_down(&mut self) -> f32 {
        self.set(self.value - self.step)
    }

    /// Value as shown next to the slider.
    pub fn display_value(&self) -> String {
        format!("{:.2}", self.value)
    }
}

/// Everything the user can press or drag.
#[derive(Debug, Clone, PartialEq)]
pub struct Controls {
    pub start_enabled: bool,
    pub stop_enabled: bool,
    pub switch_enabled: bool,
    pub resolution: ResolutionSlider,
    /// Selected entry of the color scheme selector
    pub scheme: ColorScheme,
    pub invert: bool,
}

impl Controls {
    pub fn new(resolution: f32, scheme: ColorScheme, invert: bool) -> Self {
        let mut controls = Self {
            start_enabled: true,
            stop_enabled: false,
            switch_enabled: false,
            resolution: ResolutionSlider::new(resolution),
            scheme,
            invert,
        };
        controls.set_running(false);
        controls
    }

    /// Start is enabled only while stopped; Stop and Switch only while running.
    pub fn set_running(&mut self, running: bool) {
        self.start_enabled = !running;
        self.stop_enabled = running;
        self.switch_enabled = running;
    }
}
