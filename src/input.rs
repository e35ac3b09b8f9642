//! Keyboard input handling.
//!
//! Keys stand in for the on-screen controls:
//! - `s` start, `x` stop, `c` switch camera
//! - `+`/`=` and `-` move the resolution slider
//! - `]`/`[` next/previous color scheme, `i` invert
//! - `h` toggle the header
//! - `q`, Esc or Ctrl+C quit

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::Controls;

/// A control the user operated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    Start,
    Stop,
    SwitchCamera,
    ResolutionUp,
    ResolutionDown,
    NextScheme,
    PrevScheme,
    ToggleInvert,
    ToggleHeader,
    Quit,
}

impl UiAction {
    /// Whether the control behind this action currently accepts input.
    /// Disabled buttons ignore their key.
    pub fn is_enabled(&self, controls: &Controls) -> bool {
        match self {
            UiAction::Start => controls.start_enabled,
            UiAction::Stop => controls.stop_enabled,
            UiAction::SwitchCamera => controls.switch_enabled,
            _ => true,
        }
    }
}

/// Map a key event to an action. Key releases and unbound keys give `None`.
pub fn map_key(event: KeyEvent) -> Option<UiAction> {
    let KeyEvent {
        code,
        modifiers,
        kind,
        ..
    } = event;

    if kind == KeyEventKind::Release {
        return None;
    }

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(UiAction::Quit),
            _ => None,
        };
    }

    match code {
        KeyCode::Char('s') | KeyCode::Char('S') => Some(UiAction::Start),
        KeyCode::Char('x') | KeyCode::Char('X') => Some(UiAction::Stop),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(UiAction::SwitchCamera),
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => Some(UiAction::ResolutionUp),
        KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Down => {
            Some(UiAction::ResolutionDown)
        }
        KeyCode::Char(']') | KeyCode::Right => Some(UiAction::NextScheme),
        KeyCode::Char('[') | KeyCode::Left => Some(UiAction::PrevScheme),
        KeyCode::Char('i') | KeyCode::Char('I') => Some(UiAction::ToggleInvert),
        KeyCode::Char('h') | KeyCode::Char('H') => Some(UiAction::ToggleHeader),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(UiAction::Quit),
        _ => None,
    }
}
