//! Visible area for user-facing error messages.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorArea {
    message: Option<String>,
}

impl ErrorArea {
    pub fn show(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn hide(&mut self) {
        self.message = None;
    }

    pub fn is_visible(&self) -> bool {
        self.message.is_some()
    }

    /// The shown message, `None` while hidden.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_and_hide() {
        let mut area = ErrorArea::default();
        assert!(!area.is_visible());
        area.show("boom");
        assert_eq!(area.message(), Some("boom"));
        area.hide();
        assert!(area.message().is_none());
    }
}
