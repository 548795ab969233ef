//! Player settings and the `options.txt` format
//!
//! The options file is line based, one `key:value` pair per line:
//!
//! ```text
//! lang:en
//! guiScale:3
//! maxFPS:60
//! showFPS:false
//! showLights:true
//! ```
//!
//! Unknown keys are ignored. A value that does not parse for its key is a
//! [`ConfigError::Malformed`], which the launchers treat as fatal.

use std::fmt;
use std::fs;
use std::path::Path;

/// Supported languages, indexed by `Settings::lang_index`
pub const LANGUAGES: [&str; 2] = ["en", "fr"];

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Malformed {
        line: usize,
        key: String,
        value: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "could not read options: {}", e),
            ConfigError::Malformed { line, key, value } => {
                write!(f, "line {}: invalid value '{}' for '{}'", line, value, key)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub lang_index: usize,
    pub scale: f32,
    pub max_fps: u32,
    pub show_fps: bool,
    pub show_lights: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            lang_index: 0,
            scale: 3.0,
            max_fps: 60,
            show_fps: false,
            show_lights: true,
        }
    }
}

impl Settings {
    /// Lines written to a fresh `options.txt`
    pub fn default_lines() -> Vec<String> {
        Settings::default().to_lines()
    }

    pub fn to_lines(&self) -> Vec<String> {
        let lang = LANGUAGES.get(self.lang_index).copied().unwrap_or("en");
        vec![
            format!("lang:{}", lang),
            format!("guiScale:{}", self.scale),
            format!("maxFPS:{}", self.max_fps),
            format!("showFPS:{}", self.show_fps),
            format!("showLights:{}", self.show_lights),
        ]
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Settings::parse(&text)
    }

    /// Parse options text on top of the defaults
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let mut settings = Settings::default();

        for (index, raw) in text.lines().enumerate() {
            let Some((key, value)) = raw.trim().split_once(':') else {
                continue;
            };
            let malformed = || ConfigError::Malformed {
                line: index + 1,
                key: key.to_string(),
                value: value.to_string(),
            };

            match key {
                "lang" => {
                    settings.lang_index = LANGUAGES.iter().position(|l| *l == value).unwrap_or(0);
                }
                "guiScale" => settings.scale = value.parse().map_err(|_| malformed())?,
                "maxFPS" => settings.max_fps = value.parse().map_err(|_| malformed())?,
                "showFPS" => settings.show_fps = parse_flag(value).ok_or_else(malformed)?,
                "showLights" => settings.show_lights = parse_flag(value).ok_or_else(malformed)?,
                _ => {}
            }
        }

        Ok(settings)
    }

    /// Localized text for a UI key, falling back to the key itself
    pub fn translate<'a>(&self, key: &'a str) -> &'a str {
        if self.lang_index != 1 {
            return key;
        }
        match key {
            "Play" => "Jouer",
            "Creative mode" => "Mode créatif",
            "Quit" => "Quitter",
            "Resume" => "Reprendre",
            "Quit to title" => "Quitter vers le titre",
            "Try again" => "Réessayer",
            "GAME OVER" => "PARTIE TERMINEE",
            "You are dead" => "Vous êtes mort",
            "New level" => "Nouveau niveau",
            "Save" => "Sauvegarder",
            "Cancel" => "Annuler",
            "Back" => "Retour",
            "Try" => "Essayer",
            "Paused" => "Pause",
            _ => key,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}
