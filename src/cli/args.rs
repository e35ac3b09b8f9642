//! CLI argument parsing with clap.

use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use super::enums::{Facing, Scheme, Source};
use crate::session::SessionSettings;
use crate::ui::ResolutionSlider;

/// Parse and validate the characters-per-pixel factor (0.05-0.30)
fn parse_resolution(s: &str) -> Result<f32, String> {
    let value: f32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if !(ResolutionSlider::MIN..=ResolutionSlider::MAX).contains(&value) {
        return Err(format!(
            "Resolution must be between {} and {}, got {}",
            ResolutionSlider::MIN,
            ResolutionSlider::MAX,
            value
        ));
    }
    Ok(value)
}

/// Live webcam rendered as ASCII art in the terminal
#[derive(Parser, Debug)]
#[command(name = "ascii-cam")]
#[command(version, about = "Live webcam rendered as ASCII art in the terminal", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub options: RunOptions,
}

/// Options for the interactive view and snapshots. Unset options fall back
/// to the config file.
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct RunOptions {
    /// Frame source
    #[arg(long, global = true)]
    pub source: Option<Source>,

    /// Camera to start with
    #[arg(long, global = true)]
    pub facing: Option<Facing>,

    /// Characters per pixel (0.05-0.30)
    #[arg(long, short, global = true, value_parser = parse_resolution)]
    pub resolution: Option<f32>,

    /// Color scheme
    #[arg(long, global = true)]
    pub scheme: Option<Scheme>,

    /// Invert brightness and colors
    #[arg(long, global = true)]
    pub invert: bool,

    /// Start with the header hidden
    #[arg(long, global = true)]
    pub no_header: bool,

    /// Start the camera immediately
    #[arg(long, short, global = true)]
    pub autostart: bool,

    /// Config file path
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Write logs to this file (the interactive view logs nowhere else)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

impl RunOptions {
    /// Override `settings` with the options given on the command line.
    pub fn apply(&self, settings: &mut SessionSettings) {
        if let Some(facing) = self.facing {
            settings.facing_mode = facing.into();
        }
        if let Some(resolution) = self.resolution {
            settings.resolution_factor = resolution;
        }
        if let Some(scheme) = self.scheme {
            settings.color_scheme = scheme.into();
        }
        if self.invert {
            settings.invert = true;
        }
        if self.no_header {
            settings.header_visible = false;
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open the interactive view (default)
    Run,
    /// List available cameras
    ListCameras,
    /// List color schemes
    ListSchemes,
    /// Render one frame as plain text to stdout
    Snapshot {
        /// Viewport width in pixels
        #[arg(long, default_value = "640")]
        width: u32,
        /// Viewport height in pixels
        #[arg(long, default_value = "480")]
        height: u32,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::FacingMode;
    use crate::palette::ColorScheme;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["ascii-cam"]);
        assert!(args.command.is_none());
        assert!(args.options.source.is_none());
        assert!(args.options.facing.is_none());
        assert!(args.options.resolution.is_none());
        assert!(args.options.scheme.is_none());
        assert!(!args.options.invert);
        assert!(!args.options.no_header);
        assert!(!args.options.autostart);
        assert!(args.options.config.is_none());
        assert!(args.options.log_file.is_none());
    }

    #[test]
    fn test_args_source_values() {
        let args = Args::parse_from(["ascii-cam", "--source", "test-pattern"]);
        assert_eq!(args.options.source, Some(Source::TestPattern));

        let args = Args::parse_from(["ascii-cam", "--source", "native"]);
        assert_eq!(args.options.source, Some(Source::Native));
    }

    #[test]
    fn test_args_resolution_range() {
        let args = Args::parse_from(["ascii-cam", "--resolution", "0.2"]);
        assert_eq!(args.options.resolution, Some(0.2));

        assert!(Args::try_parse_from(["ascii-cam", "--resolution", "0.5"]).is_err());
        assert!(Args::try_parse_from(["ascii-cam", "-r", "abc"]).is_err());
    }

    #[test]
    fn test_args_scheme_values() {
        let args = Args::parse_from(["ascii-cam", "--scheme", "c64"]);
        assert_eq!(args.options.scheme, Some(Scheme::C64));
        assert!(Args::try_parse_from(["ascii-cam", "--scheme", "neon"]).is_err());
    }

    #[test]
    fn test_args_run_subcommand() {
        let args = Args::parse_from(["ascii-cam", "run", "--autostart"]);
        assert!(matches!(args.command, Some(Command::Run)));
        assert!(args.options.autostart);
    }

    #[test]
    fn test_args_snapshot_subcommand() {
        let args = Args::parse_from([
            "ascii-cam",
            "snapshot",
            "--width",
            "320",
            "--scheme",
            "amber",
        ]);
        match args.command {
            Some(Command::Snapshot { width, height }) => {
                assert_eq!(width, 320);
                assert_eq!(height, 480);
            }
            _ => panic!("Expected Snapshot subcommand"),
        }
        assert_eq!(args.options.scheme, Some(Scheme::Amber));
    }

    #[test]
    fn test_args_list_subcommands() {
        let args = Args::parse_from(["ascii-cam", "list-cameras"]);
        assert!(matches!(args.command, Some(Command::ListCameras)));

        let args = Args::parse_from(["ascii-cam", "list-schemes"]);
        assert!(matches!(args.command, Some(Command::ListSchemes)));
    }

    #[test]
    fn test_args_config_subcommands() {
        let args = Args::parse_from(["ascii-cam", "config", "show"]);
        match args.command {
            Some(Command::Config {
                action: ConfigAction::Show,
            }) => (),
            _ => panic!("Expected Config Show subcommand"),
        }

        let args = Args::parse_from(["ascii-cam", "config", "init"]);
        assert!(matches!(
            args.command,
            Some(Command::Config {
                action: ConfigAction::Init
            })
        ));
    }

    #[test]
    fn test_options_override_settings() {
        let args = Args::parse_from([
            "ascii-cam",
            "--facing",
            "back",
            "--resolution",
            "0.1",
            "--scheme",
            "green",
            "--invert",
            "--no-header",
        ]);
        let mut settings = SessionSettings::default();
        args.options.apply(&mut settings);

        assert_eq!(settings.facing_mode, FacingMode::Back);
        assert_eq!(settings.resolution_factor, 0.1);
        assert_eq!(settings.color_scheme, ColorScheme::Green);
        assert!(settings.invert);
        assert!(!settings.header_visible);
    }

    #[test]
    fn test_absent_options_keep_settings() {
        let args = Args::parse_from(["ascii-cam"]);
        let mut settings = SessionSettings {
            invert: true,
            ..SessionSettings::default()
        };
        args.options.apply(&mut settings);
        assert!(settings.invert);
        assert_eq!(settings, SessionSettings {
            invert: true,
            ..SessionSettings::default()
        });
    }
}
