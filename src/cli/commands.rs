//! Subcommand handlers for list-cameras, list-schemes, snapshot and config
//! actions.

use std::io::Write;
use std::path::Path;

use super::args::ConfigAction;
use crate::config::{self, Config, ConfigError};
use crate::media::MediaSource;
use crate::palette::ALL_SCHEMES;
use crate::scene::Viewport;
use crate::session::{Session, SessionError, SessionSettings};

/// List available cameras and print them to stdout.
#[cfg(feature = "native-camera")]
pub fn list_cameras() -> Result<(), crate::media::MediaError> {
    let devices = crate::media::native::list_devices()?;
    if devices.is_empty() {
        println!("No cameras found.");
        println!();
        println!("Make sure your camera is connected and permissions are granted.");
        println!("On macOS, grant access in System Settings > Privacy & Security > Camera.");
    } else {
        println!("Available cameras:");
        for device in devices {
            println!("  {}", device);
        }
        println!();
        println!("Set camera.front_device / camera.back_device in the config to choose.");
    }
    Ok(())
}

/// List available cameras and print them to stdout.
#[cfg(not(feature = "native-camera"))]
pub fn list_cameras() -> Result<(), crate::media::MediaError> {
    println!("Native camera support is not compiled in.");
    println!("Rebuild with `--features native-camera`, or use `--source test-pattern`.");
    Ok(())
}

/// Print every color scheme with its colors.
pub fn list_schemes<W: Write>(out: &mut W) -> std::io::Result<()> {
    for scheme in ALL_SCHEMES {
        let colors = scheme.colors();
        writeln!(
            out,
            "{:<8} {} on {}",
            scheme.name(),
            colors.foreground,
            colors.background
        )?;
    }
    Ok(())
}

/// Start a session, render a single frame and return it as plain text.
pub fn snapshot<M: MediaSource>(
    media: M,
    settings: SessionSettings,
    viewport: Viewport,
) -> Result<String, SessionError> {
    let mut session = Session::new(media, settings, viewport);
    session.start()?;
    session.animate();

    let text = session
        .document()
        .container
        .surface()
        .map(|surface| surface.to_text())
        .unwrap_or_default();

    session.stop();
    Ok(text)
}

/// Handle config subcommand actions.
pub fn handle_config_action(action: ConfigAction, path: Option<&Path>) -> Result<(), ConfigError> {
    let config_path = path.map(Path::to_path_buf).unwrap_or_else(config::default_path);

    match action {
        ConfigAction::Show => {
            let config = Config::load(Some(&config_path))?;
            println!("Current configuration:");
            println!(
                "  Cameras: front={} back={} (start with {})",
                config.camera.front_device, config.camera.back_device, config.camera.facing
            );
            println!("  Ideal size: {}", config.ideal_resolution());
            println!(
                "  Mirror: {}",
                if config.camera.mirror { "yes" } else { "no" }
            );
            println!("  FPS: {}", config.camera.fps);
            println!("  Resolution: {}", config.ascii.resolution);
            println!("  Color scheme: {}", config.ascii.color_scheme);
            println!(
                "  Invert: {}",
                if config.ascii.invert { "yes" } else { "no" }
            );
            println!("  Ramp: {:?}", config.ramp().iter().collect::<String>());
            println!(
                "  Header: {}",
                if config.ui.header { "yes" } else { "no" }
            );
            println!("  Frame interval: {} ms", config.ui.frame_interval_ms);
            println!();

            if config_path.exists() {
                println!("Config file: {} (exists)", config_path.display());
            } else {
                println!("Config file: {} (not found)", config_path.display());
            }
        }
        ConfigAction::Init => {
            config::write_default(&config_path)?;
            println!("Created config file: {}", config_path.display());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::TestPatternSource;

    #[test]
    fn test_list_schemes() {
        let mut out = Vec::new();
        list_schemes(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 6);
        assert!(text.contains("gameboy  #9bbc0f on #0f380f"));
    }

    #[test]
    fn test_snapshot_grid_size() {
        let text = snapshot(
            TestPatternSource::new(),
            SessionSettings::default(),
            Viewport::new(200, 100),
        )
        .unwrap();
        let lines: Vec<&str> = text.lines().collect();
        // 200 * 0.15 = 30 columns, ceil(15 / 2) = 8 rows
        assert_eq!(lines.len(), 8);
        assert!(lines.iter().all(|l| l.chars().count() == 30));
    }

    #[test]
    fn test_snapshot_without_camera() {
        let err = snapshot(
            TestPatternSource::with_cameras(false, false),
            SessionSettings::default(),
            Viewport::new(200, 100),
        )
        .unwrap_err();
        assert_eq!(err, SessionError::DeviceNotFound);
    }

    #[test]
    fn test_config_init_then_show() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        handle_config_action(ConfigAction::Init, Some(&path)).unwrap();
        assert!(path.exists());
        handle_config_action(ConfigAction::Show, Some(&path)).unwrap();
        assert!(matches!(
            handle_config_action(ConfigAction::Init, Some(&path)),
            Err(ConfigError::AlreadyExists(_))
        ));
    }
}
