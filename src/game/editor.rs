//! Creative mode level editor
//!
//! The editor paints straight into a level image, the same format the
//! game loads. Keys:
//!
//! - `1`-`9` pick a brush from [`Tile::PALETTE`], `0` picks the player spawn
//! - arrow keys scroll
//! - left click paints the tile under the pointer
//! - `Escape` opens the editor's pause menu

use super::map::{GameMap, TS, Tile};
use crate::appdata::{AppData, SCREENSHOT_STAMP};
use crate::error::GameError;
use crate::gfx::{Image, Renderer};
use crate::input::{InputState, Key};
use crate::view::{Navigator, ViewId};
use chrono::{DateTime, Local, TimeZone};
use std::fmt::Display;
use std::path::PathBuf;

/// New levels are this many tiles across
pub const LEVEL_WIDTH: u32 = 30;
/// New levels are this many tiles down
pub const LEVEL_HEIGHT: u32 = 17;

const SCROLL_SPEED: f32 = 240.0;

/// Bordered empty level with the spawn in the bottom-left corner
pub fn blank_level() -> Image {
    let mut image = Image::filled(LEVEL_WIDTH, LEVEL_HEIGHT, Tile::Empty.to_argb());
    for x in 0..LEVEL_WIDTH {
        image.set_pixel(x, 0, Tile::Wall.to_argb());
        image.set_pixel(x, LEVEL_HEIGHT - 1, Tile::Wall.to_argb());
    }
    for y in 0..LEVEL_HEIGHT {
        image.set_pixel(0, y, Tile::Wall.to_argb());
        image.set_pixel(LEVEL_WIDTH - 1, y, Tile::Wall.to_argb());
    }
    image.set_pixel(1, LEVEL_HEIGHT - 2, Tile::PlayerSpawn.to_argb());
    image
}

pub fn level_name<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    format!("level_{}", now.format(SCREENSHOT_STAMP))
}

pub struct Editor {
    image: Image,
    map: GameMap,
    name: String,
    spawn: bool,
    once: bool,
    brush: Tile,
    scroll: (f32, f32),
    view_size: (u32, u32),
    pause_view: ViewId,
}

impl Editor {
    /// `pause_view` is the menu Escape opens
    pub fn new(pause_view: ViewId) -> Self {
        let image = blank_level();
        Editor {
            map: GameMap::from_image(&image),
            image,
            name: level_name(&Local::now()),
            spawn: false,
            once: false,
            brush: Tile::Wall,
            scroll: (0.0, 0.0),
            view_size: (480, 270),
            pause_view,
        }
    }

    /// Start a fresh level the next time the editor runs
    pub fn reset(&mut self) {
        self.once = false;
    }

    pub fn is_initialised(&self) -> bool {
        self.once
    }

    /// Create the new level if `reset` was called since the last one
    pub fn ensure_level(&mut self) {
        if self.once {
            return;
        }
        self.image = blank_level();
        self.map.init(&self.image);
        self.name = level_name(&Local::now());
        self.scroll = (0.0, 0.0);
        self.brush = Tile::Wall;
        self.once = true;
        log::debug!("editing new level {}", self.name);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image(&self) -> &Image {
        &self.image
    }

    pub fn brush(&self) -> Tile {
        self.brush
    }

    pub fn spawn(&self) -> bool {
        self.spawn
    }

    pub fn set_spawn(&mut self, spawn: bool) {
        self.spawn = spawn;
    }

    /// Write the level to `creative_mode/<name>.png`
    pub fn save(&self, appdata: &AppData) -> Result<PathBuf, GameError> {
        let path = appdata.creative_dir().join(format!("{}.png", self.name));
        self.image.save_png(&path)?;
        log::info!("Level saved to {}", path.display());
        Ok(path)
    }

    /// Save, logging instead of failing
    pub fn save_logged(&self, appdata: &AppData) {
        if let Err(e) = self.save(appdata) {
            log::error!("Could not save level {}: {}", self.name, e);
        }
    }

    pub fn update(&mut self, input: &InputState, nav: &mut Navigator, dt: f32) {
        self.ensure_level();

        if input.is_key_down(Key::Escape) {
            nav.set(self.pause_view);
            return;
        }

        match input.number_down() {
            Some(0) => self.brush = Tile::PlayerSpawn,
            Some(n) if (n as usize) <= Tile::PALETTE.len() => self.brush = Tile::PALETTE[n as usize - 1],
            _ => {}
        }

        let mut dx = 0.0;
        let mut dy = 0.0;
        if input.is_key_held(Key::Left) {
            dx -= 1.0;
        }
        if input.is_key_held(Key::Right) {
            dx += 1.0;
        }
        if input.is_key_held(Key::Up) {
            dy -= 1.0;
        }
        if input.is_key_held(Key::Down) {
            dy += 1.0;
        }
        let (max_x, max_y) = self.max_scroll();
        self.scroll.0 = (self.scroll.0 + dx * SCROLL_SPEED * dt).clamp(0.0, max_x);
        self.scroll.1 = (self.scroll.1 + dy * SCROLL_SPEED * dt).clamp(0.0, max_y);

        if input.clicked() {
            let (px, py) = input.pointer();
            let cam = self.camera();
            let tx = (px + cam.0).div_euclid(TS);
            let ty = (py + cam.1).div_euclid(TS);
            self.paint(tx, ty);
        }
    }

    /// Put the current brush at a tile; out-of-level clicks are ignored
    pub fn paint(&mut self, tx: i32, ty: i32) {
        if tx < 0 || ty < 0 || tx >= self.image.width() as i32 || ty >= self.image.height() as i32 {
            return;
        }

        // only one player spawn per level
        if self.brush == Tile::PlayerSpawn {
            let spawn = Tile::PlayerSpawn.to_argb();
            for y in 0..self.image.height() {
                for x in 0..self.image.width() {
                    if self.image.pixel(x, y) == Some(spawn) {
                        self.image.set_pixel(x, y, Tile::Empty.to_argb());
                    }
                }
            }
        }

        self.image.set_pixel(tx as u32, ty as u32, self.brush.to_argb());
        match self.brush {
            Tile::PlayerSpawn => self.map.init(&self.image),
            Tile::MonsterSpawn => self.map.set_tile(tx, ty, Tile::Empty),
            tile => self.map.set_tile(tx, ty, tile),
        }
    }

    fn max_scroll(&self) -> (f32, f32) {
        let (w, h) = self.map.pixel_size();
        (
            (w - self.view_size.0 as i32).max(0) as f32,
            (h - self.view_size.1 as i32).max(0) as f32,
        )
    }

    fn camera(&self) -> (i32, i32) {
        (self.scroll.0 as i32, self.scroll.1 as i32)
    }

    pub fn render(&mut self, r: &mut dyn Renderer) -> Result<(), String> {
        self.view_size = r.size();
        let (w, h) = r.size();
        let cam = self.camera();

        r.fill_rect(0, 0, w, h, 0xff87a0b4)?;
        self.map.draw(r, cam)?;

        // spawn markers are not map tiles, outline them instead
        for ty in 0..self.image.height() {
            for tx in 0..self.image.width() {
                let tile = self.image.pixel(tx, ty).map(Tile::from_argb);
                let colour = match tile {
                    Some(Tile::PlayerSpawn) => 0xff00ff00,
                    Some(Tile::MonsterSpawn) => 0xffff00ff,
                    _ => continue,
                };
                let x = tx as i32 * TS - cam.0;
                let y = ty as i32 * TS - cam.1;
                r.draw_rect(x + 2, y + 2, TS as u32 - 4, TS as u32 - 4, colour)?;
            }
        }

        if self.spawn {
            let (sx, sy) = self.map.spawn();
            r.fill_rect(sx * TS + 4 - cam.0, sy * TS + 8 - cam.1, 24, 24, 0xaa3cb44b)?;
        }

        r.fill_rect(4, 4, 14, 14, self.brush.to_argb())?;
        r.draw_rect(4, 4, 14, 14, 0xffffffff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use crate::gfx::render::Recorder;

    fn clicked_at(x: i32, y: i32) -> InputState {
        let mut input = InputState::new();
        input.move_pointer(x, y);
        input.click();
        input
    }

    #[test]
    fn test_blank_level_is_bordered() {
        let image = blank_level();
        assert_eq!((image.width(), image.height()), (30, 17));
        assert_eq!(image.pixel(0, 5), Some(Tile::Wall.to_argb()));
        assert_eq!(image.pixel(29, 16), Some(Tile::Wall.to_argb()));
        assert_eq!(image.pixel(5, 5), Some(Tile::Empty.to_argb()));
        assert_eq!(image.pixel(1, 15), Some(Tile::PlayerSpawn.to_argb()));
    }

    #[test]
    fn test_level_name_uses_timestamp() {
        let now = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        assert_eq!(level_name(&now), "level_2024-03-09_14.05.07");
    }

    #[test]
    fn test_level_created_once_until_reset() {
        let mut editor = Editor::new(ViewId::CreaMenu);
        let mut nav = Navigator::new(ViewId::Creative);
        assert!(!editor.is_initialised());

        editor.update(&clicked_at(5 * TS + 1, 5 * TS + 1), &mut nav, 0.016);
        assert!(editor.is_initialised());
        assert_eq!(editor.image().pixel(5, 5), Some(Tile::Wall.to_argb()));

        editor.update(&InputState::new(), &mut nav, 0.016);
        assert_eq!(editor.image().pixel(5, 5), Some(Tile::Wall.to_argb()));

        editor.reset();
        editor.update(&InputState::new(), &mut nav, 0.016);
        assert_eq!(editor.image().pixel(5, 5), Some(Tile::Empty.to_argb()));
    }

    #[test]
    fn test_number_keys_pick_brush() {
        let mut editor = Editor::new(ViewId::CreaMenu);
        let mut nav = Navigator::new(ViewId::Creative);
        let mut input = InputState::new();
        input.press(Key::Num(4));

        editor.update(&input, &mut nav, 0.016);
        assert_eq!(editor.brush(), Tile::Coin);

        input.begin_frame();
        input.press(Key::Num(0));
        editor.update(&input, &mut nav, 0.016);
        assert_eq!(editor.brush(), Tile::PlayerSpawn);
    }

    #[test]
    fn test_single_player_spawn() {
        let mut editor = Editor::new(ViewId::CreaMenu);
        editor.ensure_level();
        editor.brush = Tile::PlayerSpawn;

        editor.paint(10, 3);

        assert_eq!(editor.image().pixel(1, 15), Some(Tile::Empty.to_argb()));
        assert_eq!(editor.image().pixel(10, 3), Some(Tile::PlayerSpawn.to_argb()));
        assert_eq!(editor.map.spawn(), (10, 3));
    }

    #[test]
    fn test_paint_outside_is_ignored() {
        let mut editor = Editor::new(ViewId::CreaMenu);
        editor.ensure_level();
        let before = editor.image().clone();
        editor.paint(-1, 3);
        editor.paint(30, 3);
        assert_eq!(editor.image(), &before);
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut editor = Editor::new(ViewId::CreaMenu);
        let mut nav = Navigator::new(ViewId::Creative);
        let mut input = InputState::new();
        input.press(Key::Left);
        input.press(Key::Down);

        for _ in 0..200 {
            editor.update(&input, &mut nav, 0.05);
        }

        assert_eq!(editor.camera(), (0, 17 * TS - 270));
    }

    #[test]
    fn test_escape_opens_pause_view_without_recording() {
        let mut editor = Editor::new(ViewId::PausedEdit);
        let mut nav = Navigator::new(ViewId::EditList);
        nav.go(ViewId::Creative);
        let mut input = InputState::new();
        input.press(Key::Escape);

        editor.update(&input, &mut nav, 0.016);

        assert_eq!(nav.current(), ViewId::PausedEdit);
        assert_eq!(nav.last(), ViewId::EditList);
    }

    #[test]
    fn test_save_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let appdata = AppData::new(dir.path());
        appdata.ensure_layout().unwrap();
        let mut editor = Editor::new(ViewId::CreaMenu);
        editor.ensure_level();

        let path = editor.save(&appdata).unwrap();

        assert_eq!(path, appdata.creative_dir().join(format!("{}.png", editor.name())));
        assert_eq!(Image::from_path(&path).unwrap(), *editor.image());
    }

    #[test]
    fn test_spawn_preview_only_when_enabled() {
        let mut editor = Editor::new(ViewId::PausedEdit);
        let mut r = Recorder::new(480, 270);
        editor.render(&mut r).unwrap();
        let without = r.ops.len();

        editor.set_spawn(true);
        let mut r = Recorder::new(480, 270);
        editor.render(&mut r).unwrap();
        assert_eq!(r.ops.len(), without + 1);
    }
}
