//! Screen configuration
//!
//! Both screens are described by data instead of two copies of the loop.
//! The built-in defaults reproduce the game's menu and death screens; a
//! `screens.json` can override them:
//!
//! 1. `<user config dir>/game_screens/screens.json`
//! 2. `assets/config/screens.json`
//!
//! Top-level fields may be omitted (they fall back to the defaults). A screen
//! object that is present must name its title, message, color, font and
//! confirm policy; only `font_size` is optional inside it.

use crate::error::{ConfigError, ScreenError};
use sdl2::pixels::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_WINDOW_WIDTH: u32 = 1280;
pub const DEFAULT_WINDOW_HEIGHT: u32 = 720;
pub const DEFAULT_FONT_SIZE: u16 = 50;
pub const DEFAULT_FPS: u32 = 60;

const ASSET_CONFIG_PATH: &str = "assets/config/screens.json";

/// What ENTER does once the screen is confirmed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfirmPolicy {
    /// Hand control back so the game can continue
    ReturnToCaller,
    /// End the program
    Terminate,
}

fn default_font_size() -> u16 {
    DEFAULT_FONT_SIZE
}

/// One prompt screen: what it says, how it looks, what ENTER means
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenConfig {
    /// Window title
    pub title: String,

    /// Centered message
    pub message: String,

    /// Message color as RGB
    pub text_color: [u8; 3],

    /// TrueType font file
    pub font_path: PathBuf,

    /// Point size
    #[serde(default = "default_font_size")]
    pub font_size: u16,

    pub on_confirm: ConfirmPolicy,
}

impl ScreenConfig {
    /// Start menu: white prompt, bold font, returns to the caller
    pub fn menu() -> Self {
        ScreenConfig {
            title: "Menu".to_string(),
            message: "Press ENTER to start the game".to_string(),
            text_color: [255, 255, 255],
            font_path: PathBuf::from("assets/fonts/menu_bold.ttf"),
            font_size: DEFAULT_FONT_SIZE,
            on_confirm: ConfirmPolicy::ReturnToCaller,
        }
    }

    /// Death screen: red "YOU DIED", decorative font, ends the program
    pub fn ending() -> Self {
        ScreenConfig {
            title: "Ending".to_string(),
            message: "YOU DIED".to_string(),
            text_color: [255, 0, 0],
            font_path: PathBuf::from("assets/fonts/ending_decorative.ttf"),
            font_size: DEFAULT_FONT_SIZE,
            on_confirm: ConfirmPolicy::Terminate,
        }
    }

    pub fn color(&self) -> Color {
        let [r, g, b] = self.text_color;
        Color::RGB(r, g, b)
    }

    fn validate(&self, name: &str) -> Result<(), ConfigError> {
        if self.font_size == 0 {
            return Err(ConfigError::Invalid(format!("{}.font_size must be > 0", name)));
        }
        // SDL_ttf refuses to render zero-width text
        if self.message.is_empty() {
            return Err(ConfigError::Invalid(format!("{}.message must not be empty", name)));
        }
        Ok(())
    }
}

/// Window settings shared by both screens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreensConfig {
    pub window_width: u32,
    pub window_height: u32,
    pub frames_per_second: u32,
    pub menu: ScreenConfig,
    pub ending: ScreenConfig,
}

impl Default for ScreensConfig {
    fn default() -> Self {
        ScreensConfig {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            frames_per_second: DEFAULT_FPS,
            menu: ScreenConfig::menu(),
            ending: ScreenConfig::ending(),
        }
    }
}

impl ScreensConfig {
    /// Parse and validate a config file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ScreensConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from the first config file that exists, or use the defaults
    pub fn load() -> Result<Self, ScreenError> {
        for path in Self::search_paths() {
            if !path.exists() {
                continue;
            }

            let config = Self::load_from_file(&path).map_err(|source| ScreenError::Config {
                path: path.clone(),
                source,
            })?;
            log::info!("Loaded screen config from {}", path.display());
            return Ok(config);
        }

        log::warn!("No screens.json found, using built-in screens");
        Ok(Self::default())
    }

    fn search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("game_screens").join("screens.json"));
        }
        paths.push(PathBuf::from(ASSET_CONFIG_PATH));
        paths
    }

    /// Time to wait after each present
    pub fn frame_delay(&self) -> std::time::Duration {
        std::time::Duration::new(0, 1_000_000_000u32 / self.frames_per_second)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.window_width == 0 || self.window_height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size {}x{} must be non-zero",
                self.window_width, self.window_height
            )));
        }
        if self.frames_per_second == 0 {
            return Err(ConfigError::Invalid("frames_per_second must be > 0".to_string()));
        }
        self.menu.validate("menu")?;
        self.ending.validate("ending")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_game_screens() {
        let config = ScreensConfig::default();
        assert_eq!(config.window_width, 1280);
        assert_eq!(config.window_height, 720);

        assert_eq!(config.menu.message, "Press ENTER to start the game");
        assert_eq!(config.menu.color(), Color::RGB(255, 255, 255));
        assert_eq!(config.menu.on_confirm, ConfirmPolicy::ReturnToCaller);

        assert_eq!(config.ending.message, "YOU DIED");
        assert_eq!(config.ending.on_confirm, ConfirmPolicy::Terminate);

        // Two distinct fonts, both at size 50
        assert_ne!(config.menu.font_path, config.ending.font_path);
        assert_eq!(config.menu.font_size, 50);
        assert_eq!(config.ending.font_size, 50);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ScreensConfig::from_json(r#"{ "frames_per_second": 30 }"#).unwrap();
        assert_eq!(config.frames_per_second, 30);
        assert_eq!(config.window_width, 1280);
        assert_eq!(config.ending, ScreenConfig::ending());
    }

    #[test]
    fn test_screen_font_size_defaults_to_50() {
        let json = r#"{
            "ending": {
                "title": "Game Over",
                "message": "GAME OVER",
                "text_color": [200, 30, 30],
                "font_path": "fonts/other.ttf",
                "on_confirm": "terminate"
            }
        }"#;
        let config = ScreensConfig::from_json(json).unwrap();
        assert_eq!(config.ending.message, "GAME OVER");
        assert_eq!(config.ending.font_size, 50);
        assert_eq!(config.ending.color(), Color::RGB(200, 30, 30));
        assert_eq!(config.menu, ScreenConfig::menu());
    }

    #[test]
    fn test_rejects_invalid_values() {
        let zero_fps = ScreensConfig::from_json(r#"{ "frames_per_second": 0 }"#);
        assert!(matches!(zero_fps, Err(ConfigError::Invalid(_))));

        let zero_width = ScreensConfig::from_json(r#"{ "window_width": 0 }"#);
        assert!(matches!(zero_width, Err(ConfigError::Invalid(_))));

        let mut config = ScreensConfig::default();
        config.menu.font_size = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = ScreensConfig::default();
        config.ending.message.clear();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let result = ScreensConfig::from_json(r#"{ "menu": { "title": 5 } }"#);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_load_from_file() {
        let dir = std::env::temp_dir().join(format!("game_screens_test_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("screens.json");

        let mut expected = ScreensConfig::default();
        expected.menu.title = "Start".to_string();
        std::fs::write(&path, serde_json::to_string_pretty(&expected).unwrap()).unwrap();

        let loaded = ScreensConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded, expected);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = ScreensConfig::load_from_file("does/not/exist/screens.json");
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }

    #[test]
    fn test_frame_delay() {
        let config = ScreensConfig::default();
        assert_eq!(config.frame_delay(), std::time::Duration::new(0, 16_666_666));
    }
}
