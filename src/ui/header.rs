//! Header line with control states and current settings.

use super::controls::Controls;
use crate::media::FacingMode;

/// Header bar at the top of the screen. Hiding it has no effect on the
/// session.
#[derive(Debug, Clone)]
pub struct Header {
    pub visible: bool,
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self { visible: true }
    }

    pub fn with_visibility(visible: bool) -> Self {
        Self { visible }
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    /// Header text. Disabled controls are shown in brackets.
    ///
    /// Format: " ascii-cam | s:start [x:stop] [c:switch] | cam:front | res 0.15 (+/-) | classic ([/]) | h:hide q:quit "
    ///
    /// `| inverted` follows the scheme name while invert is on.
    pub fn format(&self, controls: &Controls, facing: FacingMode) -> String {
        format!(
            " ascii-cam | {} {} {} | cam:{} | res {} (+/-) | {} ([/]){} | h:hide q:quit ",
            button("s:start", controls.start_enabled),
            button("x:stop", controls.stop_enabled),
            button("c:switch", controls.switch_enabled),
            facing.name(),
            controls.resolution.display_value(),
            controls.scheme.name(),
            if controls.invert { " | inverted" } else { "" },
        )
    }
}

fn button(label: &str, enabled: bool) -> String {
    if enabled {
        label.to_string()
    } else {
        format!("[{}]", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::ColorScheme;

    #[test]
    fn test_format_full_line() {
        let header = Header::new();
        let mut controls = Controls::new(0.15, ColorScheme::Classic, false);
        assert_eq!(
            header.format(&controls, FacingMode::Front),
            " ascii-cam | s:start [x:stop] [c:switch] | cam:front | res 0.15 (+/-) | classic ([/]) | h:hide q:quit "
        );

        controls.invert = true;
        assert!(header
            .format(&controls, FacingMode::Front)
            .contains("classic ([/]) | inverted | h:hide"));
    }

    #[test]
    fn test_format_marks_disabled_controls() {
        let header = Header::new();
        let controls = Controls::new(0.15, ColorScheme::Amber, false);
        let text = header.format(&controls, FacingMode::Front);
        assert!(text.contains(" s:start "));
        assert!(text.contains("[x:stop]"));
        assert!(text.contains("[c:switch]"));
        assert!(text.contains("res 0.15"));
        assert!(text.contains("amber"));
        assert!(text.contains("cam:front"));
    }

    #[test]
    fn test_toggle() {
        let mut header = Header::with_visibility(false);
        header.toggle();
        assert!(header.visible);
    }
}
