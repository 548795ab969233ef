//! Engine-wide error type
//!
//! Startup paths (options file, level assets, server connection) return
//! `GameError`. Everything that can fail inside the frame loop is caught at
//! the point of use and logged instead.

use crate::settings::ConfigError;
use std::fmt;

#[derive(Debug)]
pub enum GameError {
    Io(std::io::Error),
    Image(image::ImageError),
    Json(serde_json::Error),
    Config(ConfigError),
    /// The game server could not be reached
    Connection {
        addr: String,
        source: std::io::Error,
    },
    /// SDL2 (window, renderer, mixer) reported a failure
    Platform(String),
    /// Level index has no entry in the level list
    MissingLevel(usize),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Io(e) => write!(f, "IO error: {}", e),
            GameError::Image(e) => write!(f, "Image error: {}", e),
            GameError::Json(e) => write!(f, "Serialization error: {}", e),
            GameError::Config(e) => write!(f, "Configuration error: {}", e),
            GameError::Connection { addr, source } => {
                write!(f, "Could not connect to {}: {}", addr, source)
            }
            GameError::Platform(msg) => write!(f, "Platform error: {}", msg),
            GameError::MissingLevel(index) => write!(f, "No level at index {}", index),
        }
    }
}

impl std::error::Error for GameError {}

impl From<std::io::Error> for GameError {
    fn from(err: std::io::Error) -> Self {
        GameError::Io(err)
    }
}

impl From<image::ImageError> for GameError {
    fn from(err: image::ImageError) -> Self {
        GameError::Image(err)
    }
}

impl From<serde_json::Error> for GameError {
    fn from(err: serde_json::Error) -> Self {
        GameError::Json(err)
    }
}

impl From<ConfigError> for GameError {
    fn from(err: ConfigError) -> Self {
        GameError::Config(err)
    }
}

impl From<GameError> for String {
    fn from(error: GameError) -> Self {
        error.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_error_names_address() {
        let err = GameError::Connection {
            addr: "localhost:5338".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused"),
        };
        assert!(err.to_string().contains("localhost:5338"));
    }

    #[test]
    fn test_converts_into_string() {
        let message: String = GameError::MissingLevel(4).into();
        assert_eq!(message, "No level at index 4");
    }
}
