//! Error types for the screen loop
//!
//! Every failure here is fatal: `main` logs it and exits with status 1.

use std::fmt;
use std::path::PathBuf;

/// Errors that can occur while loading `screens.json`
#[derive(Debug)]
pub enum ConfigError {
    /// File exists but couldn't be read
    IoError(std::io::Error),

    /// File isn't valid JSON for `ScreensConfig`
    ParseError(serde_json::Error),

    /// Parsed fine but holds an unusable value
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::Invalid(msg) => write!(f, "Invalid value: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError(e) => Some(e),
            ConfigError::ParseError(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::IoError(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::ParseError(err)
    }
}

/// Errors that abort a screen
#[derive(Debug)]
pub enum ScreenError {
    /// SDL call failed (init, window, canvas, texture, copy)
    Sdl(String),

    /// Font couldn't be loaded or rendered
    Font { path: PathBuf, message: String },

    /// Configuration file couldn't be used
    Config { path: PathBuf, source: ConfigError },
}

impl fmt::Display for ScreenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScreenError::Sdl(msg) => write!(f, "SDL error: {}", msg),
            ScreenError::Font { path, message } => {
                write!(f, "Font error ({}): {}", path.display(), message)
            }
            ScreenError::Config { path, source } => {
                write!(f, "Config error ({}): {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ScreenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScreenError::Config { source, .. } => Some(source),
            _ => None,
        }
    }
}

// Most sdl2 calls report failures as plain strings
impl From<String> for ScreenError {
    fn from(msg: String) -> Self {
        ScreenError::Sdl(msg)
    }
}
