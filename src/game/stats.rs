//! Lifetime player statistics
//!
//! Saved as pretty JSON next to `options.txt` so it stays readable when
//! debugging.

use crate::error::GameError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Per-object counters carried by every game object
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub lives: i32,
    pub coins: i32,
    pub keys: i32,
    pub skulls: i32,
}

impl Stats {
    pub fn with_lives(lives: i32) -> Self {
        Stats {
            lives,
            ..Default::default()
        }
    }
}

/// Totals across every run, persisted between sessions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerStats {
    pub deaths: u32,
    pub coins: u32,
    pub keys: u32,
    pub skulls: u32,
    pub levels_cleared: u32,
}

impl PlayerStats {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Missing or unreadable stats start from zero
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return PlayerStats::default();
        }
        PlayerStats::load(path).unwrap_or_else(|e| {
            log::warn!("Ignoring unreadable stats file {}: {}", path.display(), e);
            PlayerStats::default()
        })
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), GameError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), json)?;
        log::info!("Player stats saved to {}", path.as_ref().display());
        Ok(())
    }
}
