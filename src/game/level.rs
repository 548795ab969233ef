//! Where level images come from
//!
//! Normally the built-in campaign under `assets/levels/`. In map-tester
//! mode a single external image is played over and over instead.

use crate::error::GameError;
use crate::gfx::Image;
use std::path::{Path, PathBuf};

/// Campaign levels, relative to the asset root, in play order
pub const LEVEL_LIST: [&str; 2] = ["levels/0.png", "levels/1.png"];

#[derive(Debug, Clone)]
pub struct LevelSource {
    asset_root: PathBuf,
    list: Vec<String>,
    current: usize,
    map_test: Option<PathBuf>,
}

impl LevelSource {
    pub fn built_in(asset_root: impl AsRef<Path>) -> Self {
        LevelSource {
            asset_root: asset_root.as_ref().to_path_buf(),
            list: LEVEL_LIST.iter().map(|s| s.to_string()).collect(),
            current: 0,
            map_test: None,
        }
    }

    /// Play only `path`; reaching the exit restarts it
    pub fn map_test(path: impl AsRef<Path>) -> Self {
        LevelSource {
            asset_root: PathBuf::new(),
            list: Vec::new(),
            current: 0,
            map_test: Some(path.as_ref().to_path_buf()),
        }
    }

    pub fn is_map_testing(&self) -> bool {
        self.map_test.is_some()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        if self.is_map_testing() { 1 } else { self.list.len() }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn current_path(&self) -> Result<PathBuf, GameError> {
        if let Some(path) = &self.map_test {
            return Ok(path.clone());
        }
        self.list
            .get(self.current)
            .map(|name| self.asset_root.join(name))
            .ok_or(GameError::MissingLevel(self.current))
    }

    pub fn load(&self) -> Result<Image, GameError> {
        let path = self.current_path()?;
        log::debug!("loading level {}", path.display());
        Image::from_path(path)
    }

    /// Move to the next level; false when the campaign is over
    pub fn advance(&mut self) -> bool {
        if self.current + 1 < self.len() {
            self.current += 1;
            true
        } else {
            false
        }
    }

    pub fn restart(&mut self) {
        self.current = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_built_in_paths() {
        let levels = LevelSource::built_in("/data/assets");
        assert_eq!(levels.current_path().unwrap(), Path::new("/data/assets/levels/0.png"));
        assert_eq!(levels.len(), 2);
    }

    #[test]
    fn test_advance_stops_at_last() {
        let mut levels = LevelSource::built_in("assets");
        assert!(levels.advance());
        assert_eq!(levels.current(), 1);
        assert!(!levels.advance());
        assert_eq!(levels.current(), 1);

        levels.restart();
        assert_eq!(levels.current(), 0);
    }

    #[test]
    fn test_map_test_never_advances() {
        let mut levels = LevelSource::map_test("/tmp/mine.png");
        assert!(levels.is_map_testing());
        assert!(!levels.advance());
        assert_eq!(levels.current_path().unwrap(), Path::new("/tmp/mine.png"));
    }

    #[test]
    fn test_load_reads_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lvl.png");
        Image::filled(3, 2, 0xff000000).save_png(&path).unwrap();

        let image = LevelSource::map_test(&path).load().unwrap();
        assert_eq!((image.width(), image.height()), (3, 2));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let levels = LevelSource::built_in("/definitely/not/here");
        assert!(matches!(levels.load(), Err(GameError::Image(_)) | Err(GameError::Io(_))));
    }

    #[test]
    fn test_bundled_levels_are_playable() {
        use crate::game::map::{GameMap, Tile};

        let mut levels = LevelSource::built_in(Path::new(env!("CARGO_MANIFEST_DIR")).join("assets"));
        loop {
            let map = GameMap::from_image(&levels.load().unwrap());
            let exits = (0..map.height())
                .flat_map(|y| (0..map.width()).map(move |x| (x, y)))
                .filter(|&(x, y)| map.tile(x, y) == Tile::Exit)
                .count();
            assert_eq!(exits, 1, "level {}", levels.current());
            assert_ne!(map.spawn(), (1, 1));
            if !levels.advance() {
                break;
            }
        }
    }
}
