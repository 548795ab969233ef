//! Save-data directory
//!
//! Layout under the root, created on first run and never deleted:
//!
//! ```text
//! <root>/
//!   assets/
//!   screenshots/
//!   creative_mode/
//!   options.txt
//!   stats.json      (written on demand)
//! ```

use crate::settings::Settings;
use chrono::{DateTime, TimeZone};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Pattern for screenshot file names, `yyyy-MM-dd_HH.mm.ss`
pub const SCREENSHOT_STAMP: &str = "%Y-%m-%d_%H.%M.%S";

#[derive(Debug, Clone)]
pub struct AppData {
    root: PathBuf,
}

impl AppData {
    pub fn new(root: impl AsRef<Path>) -> Self {
        AppData {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Square Monster keeps its data in `<data dir>/.squaremonster`
    pub fn square_monster(override_dir: Option<PathBuf>) -> Self {
        let root = override_dir.unwrap_or_else(|| {
            dirs::data_dir()
                .map(|p| p.join(".squaremonster"))
                .unwrap_or_else(|| PathBuf::from("./.squaremonster"))
        });
        AppData::new(root)
    }

    /// Crusade of Ages uses AppData on Windows and the working directory elsewhere
    pub fn crusade_of_ages(override_dir: Option<PathBuf>) -> Self {
        let root = override_dir.unwrap_or_else(|| {
            if cfg!(windows) {
                dirs::data_dir().unwrap_or_else(|| PathBuf::from("."))
            } else {
                std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
            }
        });
        AppData::new(root)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn assets_dir(&self) -> PathBuf {
        self.root.join("assets")
    }

    pub fn screenshots_dir(&self) -> PathBuf {
        self.root.join("screenshots")
    }

    pub fn creative_dir(&self) -> PathBuf {
        self.root.join("creative_mode")
    }

    pub fn options_file(&self) -> PathBuf {
        self.root.join("options.txt")
    }

    pub fn stats_file(&self) -> PathBuf {
        self.root.join("stats.json")
    }

    /// Create any missing directories and a default `options.txt`
    pub fn ensure_layout(&self) -> io::Result<()> {
        for dir in [
            self.root.clone(),
            self.assets_dir(),
            self.screenshots_dir(),
            self.creative_dir(),
        ] {
            if !dir.exists() {
                fs::create_dir_all(&dir)?;
                log::debug!("created {}", dir.display());
            }
        }

        let options = self.options_file();
        if !options.exists() {
            let mut text = Settings::default_lines().join("\n");
            text.push('\n');
            fs::write(&options, text)?;
            log::info!("wrote default options to {}", options.display());
        }

        Ok(())
    }

    pub fn screenshot_name<Tz: TimeZone>(now: &DateTime<Tz>) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        format!("{}.png", now.format(SCREENSHOT_STAMP))
    }

    pub fn screenshot_path<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> PathBuf
    where
        Tz::Offset: std::fmt::Display,
    {
        self.screenshots_dir().join(AppData::screenshot_name(now))
    }
}
