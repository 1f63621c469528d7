//! Demo configuration.
//!
//! Settings for the demo binary, loaded from an INI file. Every value has a
//! safe default so a missing or partial file still starts the demo.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 960
//! height = 540
//! target_fps = 60
//!
//! [font]
//! key = demo
//! path = ./assets/fonts/demo.json
//!
//! [label]
//! text = abc cab
//! style = synchronized
//! font_size = 48
//! separation = 52
//! sync_frame_speed = 8
//! horizontal_alignment = center
//! vertical_alignment = center
//! ```
//!
//! `text` may hold several lines separated by `|`; the demo spawns one label
//! per line.

use std::path::PathBuf;

use configparser::ini::Ini;
use log::{info, warn};

use crate::components::alignment::{HorizontalAlignment, VerticalAlignment};
use crate::components::animatedlabel::{
    DEFAULT_FONT_SIZE, DEFAULT_SEPARATION, DEFAULT_SYNC_FRAME_SPEED, LabelSettings,
};
use crate::components::animationstyle::AnimationStyle;

const DEFAULT_WINDOW_WIDTH: u32 = 960;
const DEFAULT_WINDOW_HEIGHT: u32 = 540;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_FONT_KEY: &str = "demo";
const DEFAULT_FONT_PATH: &str = "./assets/fonts/demo.json";
const DEFAULT_TEXT: &str = "abc cab|bca";
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Demo configuration.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub window_width: u32,
    pub window_height: u32,
    pub target_fps: u32,
    /// Key the font is registered under in the font store.
    pub font_key: String,
    /// Path of the font description JSON.
    pub font_path: PathBuf,
    /// Label lines, separated by `|`.
    pub text: String,
    pub style: AnimationStyle,
    pub font_size: f32,
    pub separation: f32,
    pub sync_frame_speed: f32,
    pub horizontal_alignment: HorizontalAlignment,
    pub vertical_alignment: VerticalAlignment,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            font_key: DEFAULT_FONT_KEY.to_string(),
            font_path: PathBuf::from(DEFAULT_FONT_PATH),
            text: DEFAULT_TEXT.to_string(),
            style: AnimationStyle::default(),
            font_size: DEFAULT_FONT_SIZE,
            separation: DEFAULT_SEPARATION,
            sync_frame_speed: DEFAULT_SYNC_FRAME_SPEED,
            horizontal_alignment: HorizontalAlignment::Center,
            vertical_alignment: VerticalAlignment::Center,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply_ini(&config);
        Ok(())
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, ini: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(ini.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply_ini(&config);
        Ok(())
    }

    fn apply_ini(&mut self, config: &Ini) {
        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }

        // [font] section
        if let Some(key) = config.get("font", "key") {
            self.font_key = key;
        }
        if let Some(path) = config.get("font", "path") {
            self.font_path = PathBuf::from(path);
        }

        // [label] section
        if let Some(text) = config.get("label", "text") {
            self.text = text;
        }
        if let Some(style) = config.get("label", "style") {
            match style.parse() {
                Ok(style) => self.style = style,
                Err(e) => warn!("Ignoring label style: {}", e),
            }
        }
        if let Some(size) = config.getfloat("label", "font_size").ok().flatten() {
            self.font_size = size as f32;
        }
        if let Some(separation) = config.getfloat("label", "separation").ok().flatten() {
            self.separation = separation as f32;
        }
        if let Some(speed) = config.getfloat("label", "sync_frame_speed").ok().flatten() {
            self.sync_frame_speed = speed as f32;
        }
        if let Some(alignment) = config.get("label", "horizontal_alignment") {
            match alignment.parse() {
                Ok(alignment) => self.horizontal_alignment = alignment,
                Err(e) => warn!("Ignoring horizontal alignment: {}", e),
            }
        }
        if let Some(alignment) = config.get("label", "vertical_alignment") {
            match alignment.parse() {
                Ok(alignment) => self.vertical_alignment = alignment,
                Err(e) => warn!("Ignoring vertical alignment: {}", e),
            }
        }

        info!(
            "Loaded config: {}x{} window, fps={}, font '{}' from {}, style={}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.font_key,
            self.font_path.display(),
            self.style
        );
    }

    /// Label lines to spawn.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('|')
    }

    /// Settings for one label line.
    pub fn label_settings(&self, line: &str) -> LabelSettings {
        LabelSettings::new(line)
            .with_font(self.font_key.clone())
            .with_style(self.style)
            .with_font_size(self.font_size)
            .with_separation(self.separation)
            .with_sync_frame_speed(self.sync_frame_speed)
            .with_alignment(self.horizontal_alignment, self.vertical_alignment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_defaults() {
        let config = DemoConfig::new();
        assert_eq!(config.window_width, DEFAULT_WINDOW_WIDTH);
        assert_eq!(config.style, AnimationStyle::Synchronized);
        assert_eq!(config.lines().count(), 2);
    }

    #[test]
    fn test_load_from_str_overrides_values() {
        let mut config = DemoConfig::new();
        config
            .load_from_str(
                "[window]\nwidth = 640\ntarget_fps = 30\n\
                 [font]\nkey = fancy\n\
                 [label]\ntext = hello|world|!\nstyle = per_letter_loop\n\
                 font_size = 32\nsync_frame_speed = 12.5\nhorizontal_alignment = right\n",
            )
            .unwrap();

        assert_eq!(config.window_width, 640);
        assert_eq!(config.window_height, DEFAULT_WINDOW_HEIGHT);
        assert_eq!(config.target_fps, 30);
        assert_eq!(config.font_key, "fancy");
        assert_eq!(config.style, AnimationStyle::PerLetterLoop);
        assert!(approx_eq(config.font_size, 32.0));
        assert!(approx_eq(config.sync_frame_speed, 12.5));
        assert_eq!(config.horizontal_alignment, HorizontalAlignment::Right);
        assert_eq!(config.lines().collect::<Vec<_>>(), vec!["hello", "world", "!"]);
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let mut config = DemoConfig::new();
        config
            .load_from_str("[label]\nstyle = wobbly\nvertical_alignment = sideways\n")
            .unwrap();
        assert_eq!(config.style, AnimationStyle::Synchronized);
        assert_eq!(config.vertical_alignment, VerticalAlignment::Center);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let mut config = DemoConfig::with_path("does/not/exist.ini");
        assert!(config.load_from_file().is_err());
    }

    #[test]
    fn test_label_settings() {
        let config = DemoConfig::new();
        let settings = config.label_settings("abc");
        assert_eq!(settings.text, "abc");
        assert_eq!(settings.font.as_deref(), Some(DEFAULT_FONT_KEY));
        assert!(approx_eq(settings.separation, DEFAULT_SEPARATION));
    }
}
