//! Async event loop driving the session from terminal input and a frame
//! timer.

use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use std::io::Write;
use std::time::Duration;

use crate::input::{map_key, UiAction};
use crate::media::MediaSource;
use crate::session::Session;
use crate::terminal::{present, TerminalSize};

/// Whether the loop keeps going after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Apply one UI action to the session. Actions of disabled controls are
/// ignored.
pub fn dispatch<M: MediaSource>(session: &mut Session<M>, action: UiAction) -> Flow {
    if !action.is_enabled(&session.document().controls) {
        log::debug!("Ignoring {:?}: control disabled", action);
        return Flow::Continue;
    }

    // Failures are shown in the error area by the session itself
    match action {
        UiAction::Start => {
            let _ = session.start();
        }
        UiAction::Stop => session.stop(),
        UiAction::SwitchCamera => {
            let _ = session.switch_camera();
        }
        UiAction::ResolutionUp => session.step_resolution(true),
        UiAction::ResolutionDown => session.step_resolution(false),
        UiAction::NextScheme => {
            let scheme = session.color_scheme().next();
            session.set_color_scheme(scheme);
        }
        UiAction::PrevScheme => {
            let scheme = session.color_scheme().prev();
            session.set_color_scheme(scheme);
        }
        UiAction::ToggleInvert => {
            let invert = !session.invert();
            session.set_invert(invert);
        }
        UiAction::ToggleHeader => session.toggle_header(),
        UiAction::Quit => return Flow::Quit,
    }
    Flow::Continue
}

/// Main loop using tokio::select! over terminal events and the frame timer.
///
/// Runs until the user quits or the event stream ends. The session is
/// stopped before returning.
pub async fn run<M: MediaSource>(
    session: &mut Session<M>,
    mut size: TerminalSize,
    frame_interval: Duration,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut stdout = std::io::stdout();
    let mut event_stream = EventStream::new();

    let mut frame_timer = tokio::time::interval(frame_interval);
    frame_timer.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    let result = loop {
        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) => {
                        if let Some(action) = map_key(key_event) {
                            if dispatch(session, action) == Flow::Quit {
                                break Ok(());
                            }
                            redraw(&mut stdout, session, size)?;
                        }
                    }
                    Some(Ok(Event::Resize(cols, rows))) => {
                        size = TerminalSize::after_resize(cols, rows);
                        session.on_window_resize(size.viewport);
                        redraw(&mut stdout, session, size)?;
                    }
                    Some(Ok(_)) => {
                        // Mouse, focus and paste events are not used
                    }
                    Some(Err(e)) => break Err(e.into()),
                    None => break Ok(()),
                }
            }

            _ = frame_timer.tick() => {
                session.animate();
                redraw(&mut stdout, session, size)?;
            }
        }
    };

    session.stop();
    result
}

fn redraw<M: MediaSource, W: Write>(
    out: &mut W,
    session: &Session<M>,
    size: TerminalSize,
) -> std::io::Result<()> {
    present(
        out,
        session.document(),
        session.facing_mode(),
        size.cols,
        size.rows,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::TestPatternSource;
    use crate::palette::ColorScheme;
    use crate::scene::Viewport;
    use crate::session::SessionSettings;

    fn session() -> Session<TestPatternSource> {
        Session::new(
            TestPatternSource::new(),
            SessionSettings::default(),
            Viewport::new(320, 240),
        )
    }

    #[test]
    fn test_disabled_stop_is_ignored() {
        let mut session = session();
        assert_eq!(dispatch(&mut session, UiAction::Stop), Flow::Continue);
        assert!(!session.is_running());
    }

    #[test]
    fn test_start_then_start_key_is_ignored() {
        let mut session = session();
        dispatch(&mut session, UiAction::Start);
        assert!(session.is_running());

        dispatch(&mut session, UiAction::Start);
        assert!(!session.document().error_area.is_visible());
    }

    #[test]
    fn test_scheme_cycles() {
        let mut session = session();
        dispatch(&mut session, UiAction::NextScheme);
        assert_eq!(session.color_scheme(), ColorScheme::Gameboy);
        dispatch(&mut session, UiAction::PrevScheme);
        dispatch(&mut session, UiAction::PrevScheme);
        assert_eq!(session.color_scheme(), ColorScheme::Arcade);
    }

    #[test]
    fn test_quit() {
        let mut session = session();
        assert_eq!(dispatch(&mut session, UiAction::Quit), Flow::Quit);
    }

    #[test]
    fn test_slider_keys_move_factor() {
        let mut session = session();
        dispatch(&mut session, UiAction::ResolutionUp);
        assert_eq!(session.resolution_factor(), 0.16);
        dispatch(&mut session, UiAction::ResolutionDown);
        dispatch(&mut session, UiAction::ResolutionDown);
        assert_eq!(session.resolution_factor(), 0.14);
    }
}
