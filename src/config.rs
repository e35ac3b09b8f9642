//! Configuration file handling for ascii-cam.
//!
//! Loads configuration from `<config_dir>/ascii-cam/config.toml` or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::ascii::{parse_ramp, DEFAULT_RESOLUTION, GLYPH_RAMP};
use crate::media::{FacingMode, Resolution};
use crate::palette::ColorScheme;
use crate::session::SessionSettings;

/// Configuration file structure for ascii-cam.
/// Loaded from `<config_dir>/ascii-cam/config.toml` (or custom path via --config).
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub ascii: AsciiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CameraConfig {
    /// Device index used for the front ("user") camera
    #[serde(default)]
    pub front_device: u32,
    /// Device index used for the back ("environment") camera
    #[serde(default = "default_back_device")]
    pub back_device: u32,
    #[serde(default = "default_ideal_width")]
    pub ideal_width: u32,
    #[serde(default = "default_ideal_height")]
    pub ideal_height: u32,
    /// Mirror the front camera horizontally
    #[serde(default = "default_true")]
    pub mirror: bool,
    #[serde(default = "default_fps")]
    pub fps: u32,
    /// Camera to start with
    #[serde(default)]
    pub facing: FacingMode,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            front_device: 0,
            back_device: default_back_device(),
            ideal_width: default_ideal_width(),
            ideal_height: default_ideal_height(),
            mirror: true,
            fps: default_fps(),
            facing: FacingMode::Front,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AsciiConfig {
    #[serde(default = "default_resolution")]
    pub resolution: f32,
    #[serde(default)]
    pub color_scheme: ColorScheme,
    #[serde(default)]
    pub invert: bool,
    /// Glyph ramp from lightest to densest, at least two characters
    #[serde(default)]
    pub ramp: Option<String>,
}

impl Default for AsciiConfig {
    fn default() -> Self {
        Self {
            resolution: default_resolution(),
            color_scheme: ColorScheme::Classic,
            invert: false,
            ramp: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub header: bool,
    #[serde(default = "default_frame_interval_ms")]
    pub frame_interval_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            header: true,
            frame_interval_ms: default_frame_interval_ms(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_back_device() -> u32 {
    1
}

fn default_ideal_width() -> u32 {
    Resolution::IDEAL.width
}

fn default_ideal_height() -> u32 {
    Resolution::IDEAL.height
}

fn default_fps() -> u32 {
    30
}

fn default_resolution() -> f32 {
    DEFAULT_RESOLUTION
}

fn default_frame_interval_ms() -> u64 {
    33
}

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;
        let config = parse_at(&content, &path)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        parse_at(content, Path::new(""))
    }

    /// The glyph ramp to render with.
    pub fn ramp(&self) -> Vec<char> {
        self.ascii
            .ramp
            .as_deref()
            .and_then(parse_ramp)
            .unwrap_or_else(|| GLYPH_RAMP.to_vec())
    }

    pub fn ideal_resolution(&self) -> Resolution {
        Resolution {
            width: self.camera.ideal_width,
            height: self.camera.ideal_height,
        }
    }

    /// Initial session settings described by this config.
    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            facing_mode: self.camera.facing,
            resolution_factor: self.ascii.resolution,
            color_scheme: self.ascii.color_scheme,
            invert: self.ascii.invert,
            ramp: self.ramp(),
            ideal_resolution: self.ideal_resolution(),
            header_visible: self.ui.header,
        }
    }
}

fn parse_at(content: &str, path: &Path) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;
    if let Some(ramp) = &config.ascii.ramp {
        if parse_ramp(ramp).is_none() {
            return Err(ConfigError::InvalidRamp {
                path: path.to_path_buf(),
                ramp: ramp.clone(),
            });
        }
    }
    Ok(config)
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Invalid glyph ramp {ramp:?} in '{}': need at least two characters", path.display())]
    InvalidRamp { path: PathBuf, ramp: String },
    #[error("Config file already exists: {}", .0.display())]
    AlreadyExists(PathBuf),
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("ascii-cam").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/ascii-cam/config.toml")
        })
}

/// Contents written by `config init`.
pub const DEFAULT_CONFIG: &str = r#"# ascii-cam configuration

[camera]
# Device indices for the front and back cameras (see `ascii-cam list-cameras`)
front_device = 0
back_device = 1
# Camera to start with: front or back
facing = "front"
# Requested capture size; the camera may pick the closest it supports
ideal_width = 1280
ideal_height = 720
# Mirror the front camera horizontally (selfie mode)
mirror = true
fps = 30

[ascii]
# Characters per pixel, 0.05 - 0.30
resolution = 0.15
# classic, gameboy, amber, green, c64, arcade
color_scheme = "classic"
invert = false
# Glyphs from lightest to densest
# ramp = " .:-+*=%@#"

[ui]
header = true
# Time between frames
frame_interval_ms = 33
"#;

/// Write [`DEFAULT_CONFIG`] to `path`, creating parent directories.
/// Refuses to overwrite an existing file.
pub fn write_default(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        return Err(ConfigError::AlreadyExists(path.to_path_buf()));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    std::fs::write(path, DEFAULT_CONFIG).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}
