//! Per-level simulation
//!
//! `GameManager` owns the live objects, the flash notifications, the map and
//! the camera. One `update` call is one tick, always in this order:
//!
//! 1. hotkeys (Escape pauses, F12 queues a screenshot)
//! 2. notifications age, finished ones are dropped
//! 3. objects update, touch each other, dead ones are dropped
//! 4. the map animates
//! 5. the level reloads if the player is gone and we came from a respawn screen
//! 6. the camera follows its target
//!
//! Rendering draws the map, the optional light pass, objects, the HUD and
//! finally notifications on top.

use super::camera::Camera;
use super::level::LevelSource;
use super::map::{GameMap, Light, Tile};
use super::notif::FlashNotif;
use super::object::{GameObject, ObjectEvent, PLAYER_TAG};
use super::stats::PlayerStats;
use crate::appdata::AppData;
use crate::audio::{AudioOut, Sound};
use crate::error::GameError;
use crate::gfx::render::TEXT_COLOR;
use crate::gfx::{Image, Renderer};
use crate::input::{InputState, Key};
use crate::settings::Settings;
use crate::view::{Navigator, ViewId};
use chrono::{DateTime, TimeZone};
use std::fmt::Display;
use std::path::PathBuf;

/// Lives a freshly spawned player starts with
pub const START_LIVES: i32 = 1;
/// Gain applied to the game-over jingle
pub const GAME_OVER_GAIN_DB: f32 = -10.0;

const SKY_COLOR: u32 = 0xff1c2033;

/// Everything the simulation reads or changes besides its own state
pub struct GameContext<'a> {
    pub input: &'a InputState,
    pub nav: &'a mut Navigator,
    pub audio: &'a mut dyn AudioOut,
    pub stats: &'a mut PlayerStats,
}

pub struct GameManager {
    objects: Vec<GameObject>,
    notifs: Vec<FlashNotif>,
    map: GameMap,
    camera: Camera,
    levels: LevelSource,
    view: (u32, u32),
    screenshot_pending: bool,
    reloads: u32,
}

impl GameManager {
    /// Load the first level and spawn the player on it
    pub fn new(levels: LevelSource, audio: &mut dyn AudioOut) -> Result<Self, GameError> {
        let map = GameMap::from_image(&levels.load()?);
        audio.set_volume(Sound::GameOver, GAME_OVER_GAIN_DB);

        let mut manager = GameManager {
            objects: Vec::new(),
            notifs: Vec::new(),
            map,
            camera: Camera::new(PLAYER_TAG),
            levels,
            view: (480, 270),
            screenshot_pending: false,
            reloads: 0,
        };
        manager.spawn_objects(START_LIVES);
        Ok(manager)
    }

    pub fn objects(&self) -> &[GameObject] {
        &self.objects
    }

    pub fn notifs(&self) -> &[FlashNotif] {
        &self.notifs
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// How many times the reload policy has fired
    pub fn reloads(&self) -> u32 {
        self.reloads
    }

    pub fn get_object(&self, tag: &str) -> Option<&GameObject> {
        self.objects.iter().find(|o| o.tag == tag)
    }

    pub fn get_object_mut(&mut self, tag: &str) -> Option<&mut GameObject> {
        self.objects.iter_mut().find(|o| o.tag == tag)
    }

    pub fn push_notif(&mut self, notif: FlashNotif) {
        self.notifs.push(notif);
    }

    /// True once per F12 press; the caller captures the finished frame
    pub fn take_screenshot_request(&mut self) -> bool {
        std::mem::take(&mut self.screenshot_pending)
    }

    /// Write a captured frame to `screenshots/` and announce it
    pub fn save_screenshot<Tz: TimeZone>(&mut self, shot: &Image, appdata: &AppData, now: &DateTime<Tz>) -> Option<PathBuf>
    where
        Tz::Offset: Display,
    {
        let path = appdata.screenshot_path(now);
        match shot.save_png(&path) {
            Ok(()) => {
                log::info!("Screenshot saved to {}", path.display());
                self.notifs.push(FlashNotif::new(AppData::screenshot_name(now)));
                Some(path)
            }
            Err(e) => {
                log::error!("Could not save screenshot {}: {}", path.display(), e);
                None
            }
        }
    }

    pub fn update(&mut self, ctx: &mut GameContext<'_>, dt: f32) {
        if ctx.input.is_key_down(Key::Escape) {
            ctx.nav.set(ViewId::Paused);
        }
        if ctx.input.is_key_down(Key::F12) {
            self.screenshot_pending = true;
        }

        for notif in self.notifs.iter_mut() {
            notif.update(dt);
        }
        self.notifs.retain(|n| !n.is_ended());

        let mut events = Vec::new();
        for obj in self.objects.iter_mut() {
            obj.update(ctx.input, &mut self.map, dt, &mut events);
        }
        self.monster_contacts(&mut events);

        // a player who dies on the exit tile has not cleared the level
        let died = events.contains(&ObjectEvent::Died);
        let mut cleared = false;
        for event in events {
            match event {
                ObjectEvent::Collected(Tile::Coin) => ctx.stats.coins += 1,
                ObjectEvent::Collected(Tile::Key) => ctx.stats.keys += 1,
                ObjectEvent::Collected(Tile::Skull) => ctx.stats.skulls += 1,
                ObjectEvent::Collected(_) | ObjectEvent::LostLife => {}
                ObjectEvent::Died => {
                    ctx.stats.deaths += 1;
                    ctx.nav.go(ViewId::GameOver);
                }
                ObjectEvent::ReachedExit => cleared = !died,
            }
        }
        self.objects.retain(|o| !o.dead);

        if cleared {
            self.finish_level(ctx);
        }

        self.map.animate(dt * 3.0);

        if self.get_object(PLAYER_TAG).is_none() && ctx.nav.came_from_respawn_origin() {
            self.reload(ctx.audio);
        }

        self.camera.update(&self.objects, &self.map, self.view, dt);
    }

    /// Any monster touching the player costs it a life
    fn monster_contacts(&mut self, events: &mut Vec<ObjectEvent>) {
        let Some(pi) = self.objects.iter().position(|o| o.is_player() && !o.dead) else {
            return;
        };
        let player = &self.objects[pi];
        let touched = self
            .objects
            .iter()
            .any(|o| o.is_monster() && !o.dead && o.overlaps(player));
        if touched {
            self.objects[pi].hurt(events);
        }
    }

    fn finish_level(&mut self, ctx: &mut GameContext<'_>) {
        ctx.stats.levels_cleared += 1;
        let carried = self.get_object(PLAYER_TAG).map(|p| p.stats);

        if self.levels.advance() {
            log::info!("Level {} reached", self.levels.current());
            self.load_map();
            self.spawn_objects(START_LIVES);
            if let (Some(stats), Some(player)) = (carried, self.get_object_mut(PLAYER_TAG)) {
                player.stats = stats;
            }
            self.camera = Camera::new(PLAYER_TAG);
            self.notifs.push(FlashNotif::new(format!("Level {}", self.levels.current() + 1)));
        } else {
            log::info!("All levels cleared");
            self.levels.restart();
            self.objects.clear();
            ctx.nav.go(ViewId::Title);
        }
    }

    /// Put the current level back as it was and spawn a fresh player
    fn reload(&mut self, audio: &mut dyn AudioOut) {
        self.load_map();
        audio.stop(Sound::GameOver);
        self.spawn_objects(START_LIVES);
        self.camera = Camera::new(PLAYER_TAG);
        self.reloads += 1;
        log::debug!("level {} reloaded", self.levels.current());
    }

    fn load_map(&mut self) {
        match self.levels.load() {
            Ok(image) => self.map.init(&image),
            Err(e) => log::error!("Could not load level {}: {}", self.levels.current(), e),
        }
    }

    fn spawn_objects(&mut self, lives: i32) {
        self.objects.clear();
        self.objects.push(GameObject::player(PLAYER_TAG, &self.map, lives));
        for &(tx, ty) in self.map.monster_spawns() {
            self.objects.push(GameObject::monster(tx, ty));
        }
    }

    pub fn render(&mut self, r: &mut dyn Renderer, settings: &Settings) -> Result<(), String> {
        self.view = r.size();
        let (w, h) = r.size();
        let cam = self.camera.offset();

        r.fill_rect(0, 0, w, h, SKY_COLOR)?;
        self.map.draw(r, cam)?;
        if settings.show_lights {
            self.map.draw_lights(r, cam, Light::new(80, 0xffffff00))?;
        }
        for obj in &self.objects {
            obj.render(r, cam)?;
        }

        if let Some(player) = self.get_object(PLAYER_TAG) {
            let hud = format!(
                "Lives {}  Coins {}  Keys {}  Skulls {}",
                player.stats.lives, player.stats.coins, player.stats.keys, player.stats.skulls
            );
            r.draw_text(&hud, 4, h as i32 - 12, TEXT_COLOR, 1)?;
        }

        for (slot, notif) in self.notifs.iter().enumerate() {
            notif.render(r, slot)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::{AudioEvent, Recorder};
    use crate::game::object::MONSTER_TAG;
    use crate::gfx::DrawOp;
    use crate::gfx::render::Recorder as Canvas;
    use chrono::Utc;
    use std::path::Path;

    const W: u32 = 0xff000000;
    const E: u32 = 0xffffffff;
    const SPAWN: u32 = 0xff00ff00;

    /// 8x5 room, spawn at (1,3), optional extras
    fn write_level(dir: &Path, name: &str, extra: &[(u32, u32, u32)]) -> PathBuf {
        let mut img = Image::filled(8, 5, E);
        for x in 0..8 {
            img.set_pixel(x, 0, W);
            img.set_pixel(x, 4, W);
        }
        for y in 0..5 {
            img.set_pixel(0, y, W);
            img.set_pixel(7, y, W);
        }
        img.set_pixel(1, 3, SPAWN);
        for (x, y, argb) in extra {
            img.set_pixel(*x, *y, *argb);
        }
        let path = dir.join(name);
        img.save_png(&path).unwrap();
        path
    }

    struct World {
        gm: GameManager,
        nav: Navigator,
        audio: Recorder,
        stats: PlayerStats,
        _dir: tempfile::TempDir,
    }

    impl World {
        fn new(extra: &[(u32, u32, u32)], nav: Navigator) -> Self {
            let dir = tempfile::tempdir().unwrap();
            let path = write_level(dir.path(), "level.png", extra);
            let mut audio = Recorder::new();
            let gm = GameManager::new(LevelSource::map_test(&path), &mut audio).unwrap();
            World {
                gm,
                nav,
                audio,
                stats: PlayerStats::default(),
                _dir: dir,
            }
        }

        fn tick(&mut self, input: &InputState) {
            let mut ctx = GameContext {
                input,
                nav: &mut self.nav,
                audio: &mut self.audio,
                stats: &mut self.stats,
            };
            self.gm.update(&mut ctx, 1.0 / 60.0);
        }

        fn players(&self) -> usize {
            self.gm.objects().iter().filter(|o| o.tag == PLAYER_TAG).count()
        }
    }

    #[test]
    fn test_new_spawns_player_and_lowers_jingle() {
        let w = World::new(&[], Navigator::new(ViewId::Title));
        assert_eq!(w.players(), 1);
        assert_eq!(w.gm.camera().target(), PLAYER_TAG);
        assert_eq!(w.audio.events, vec![AudioEvent::Volume(Sound::GameOver, -10.0)]);
    }

    #[test]
    fn test_monsters_spawn_from_markers() {
        let w = World::new(&[(5, 3, 0xffff00ff)], Navigator::new(ViewId::Game));
        assert_eq!(w.gm.objects().iter().filter(|o| o.tag == MONSTER_TAG).count(), 1);
    }

    #[test]
    fn test_dead_player_removed_then_reloaded() {
        let mut w = World::new(&[], Navigator::new(ViewId::Game));

        w.gm.get_object_mut(PLAYER_TAG).unwrap().dead = true;
        w.tick(&InputState::new());
        assert!(w.gm.objects().is_empty());
        assert_eq!(w.gm.reloads(), 0);

        w.nav.go(ViewId::GameOver);
        w.nav.go(ViewId::Game);
        w.tick(&InputState::new());

        assert_eq!(w.players(), 1);
        assert_eq!(w.gm.reloads(), 1);
        assert!(w.audio.events.contains(&AudioEvent::Stop(Sound::GameOver)));

        w.tick(&InputState::new());
        assert_eq!(w.players(), 1);
        assert_eq!(w.gm.reloads(), 1);
    }

    #[test]
    fn test_no_dead_objects_survive_update() {
        let mut w = World::new(&[(5, 3, 0xffff00ff), (6, 3, 0xffff00ff)], Navigator::new(ViewId::Game));
        for obj in w.gm.objects.iter_mut().filter(|o| o.tag == MONSTER_TAG) {
            obj.dead = true;
        }

        w.tick(&InputState::new());

        assert!(w.gm.objects().iter().all(|o| !o.dead));
        assert_eq!(w.gm.objects().len(), 1);
    }

    #[test]
    fn test_death_goes_to_game_over() {
        let mut w = World::new(&[(2, 3, 0xffff0000)], Navigator::new(ViewId::Title));
        w.nav.go(ViewId::Game);
        let mut input = InputState::new();
        input.press(Key::Right);

        for _ in 0..30 {
            w.tick(&input);
            if w.nav.current() == ViewId::GameOver {
                break;
            }
        }

        assert_eq!(w.nav.current(), ViewId::GameOver);
        assert_eq!(w.nav.last(), ViewId::Game);
        assert_eq!(w.stats.deaths, 1);
        assert_eq!(w.players(), 0);
        assert_eq!(w.gm.reloads(), 0);
    }

    #[test]
    fn test_escape_pauses_without_recording() {
        let mut w = World::new(&[], Navigator::new(ViewId::Title));
        w.nav.go(ViewId::Game);
        let mut input = InputState::new();
        input.press(Key::Escape);

        w.tick(&input);

        assert_eq!(w.nav.current(), ViewId::Paused);
        assert_eq!(w.nav.last(), ViewId::Title);
    }

    #[test]
    fn test_f12_requests_one_screenshot() {
        let mut w = World::new(&[], Navigator::new(ViewId::Game));
        let mut input = InputState::new();
        input.press(Key::F12);

        w.tick(&input);

        assert!(w.gm.take_screenshot_request());
        assert!(!w.gm.take_screenshot_request());
    }

    #[test]
    fn test_screenshot_saved_and_announced() {
        let dir = tempfile::tempdir().unwrap();
        let appdata = AppData::new(dir.path());
        appdata.ensure_layout().unwrap();
        let mut w = World::new(&[], Navigator::new(ViewId::Game));
        let now = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();

        let path = w.gm.save_screenshot(&Image::filled(4, 4, E), &appdata, &now).unwrap();

        assert!(path.ends_with("screenshots/2024-01-02_03.04.05.png"));
        assert!(path.exists());
        assert_eq!(w.gm.notifs()[0].text(), "2024-01-02_03.04.05.png");
    }

    #[test]
    fn test_screenshot_failure_only_logged() {
        let dir = tempfile::tempdir().unwrap();
        let appdata = AppData::new(dir.path().join("missing"));
        let mut w = World::new(&[], Navigator::new(ViewId::Game));

        let saved = w.gm.save_screenshot(&Image::filled(4, 4, E), &appdata, &Utc::now());

        assert!(saved.is_none());
        assert!(w.gm.notifs().is_empty());
    }

    #[test]
    fn test_finished_notifs_dropped() {
        let mut w = World::new(&[], Navigator::new(ViewId::Game));
        w.gm.push_notif(FlashNotif::with_duration("short", 0.01));
        w.gm.push_notif(FlashNotif::with_duration("long", 10.0));

        w.tick(&InputState::new());

        let texts: Vec<&str> = w.gm.notifs().iter().map(|n| n.text()).collect();
        assert_eq!(texts, vec!["long"]);
    }

    const TORCH: u32 = 0xff00ffff;
    const WALL_FILL: u32 = 0xff4a3b2a;
    const PLAYER_FILL: u32 = 0xff3cb44b;
    const GLOW: u32 = 0x18ffff00;

    fn fill_positions(r: &Canvas, argb: u32) -> Vec<usize> {
        r.ops
            .iter()
            .enumerate()
            .filter(|(_, op)| matches!(op, DrawOp::Fill { argb: a, .. } if *a == argb))
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn test_render_order() {
        let mut w = World::new(&[(4, 2, TORCH)], Navigator::new(ViewId::Game));
        w.gm.push_notif(FlashNotif::new("hello"));
        let mut r = Canvas::new(480, 270);

        w.gm.render(&mut r, &Settings::default()).unwrap();

        let walls = fill_positions(&r, WALL_FILL);
        let glow = fill_positions(&r, GLOW);
        let player = fill_positions(&r, PLAYER_FILL);
        assert!(matches!(r.ops[0], DrawOp::Fill { argb: SKY_COLOR, .. }));
        assert!(!walls.is_empty() && !glow.is_empty() && !player.is_empty());
        assert!(walls.last() < glow.first());
        assert!(glow.last() < player.first());
        assert_eq!(r.text_index("hello"), Some(r.ops.len() - 1));
    }

    #[test]
    fn test_lights_off_skips_glow() {
        let mut w = World::new(&[(4, 2, TORCH)], Navigator::new(ViewId::Game));
        let settings = Settings {
            show_lights: false,
            ..Settings::default()
        };
        let mut r = Canvas::new(480, 270);

        w.gm.render(&mut r, &settings).unwrap();

        assert!(fill_positions(&r, GLOW).is_empty());
        assert!(!fill_positions(&r, WALL_FILL).is_empty());
        assert!(!fill_positions(&r, PLAYER_FILL).is_empty());
    }

    #[test]
    fn test_camera_follows_moved_player_same_tick() {
        let mut w = World::new(&[], Navigator::new(ViewId::Game));
        // a 64x64 view is smaller than the 256x160 room, so the camera can move
        w.gm.render(&mut Canvas::new(64, 64), &Settings::default()).unwrap();
        let start_x = w.gm.get_object(PLAYER_TAG).unwrap().x;
        let mut input = InputState::new();
        input.press(Key::Right);

        w.tick(&input);

        let player = w.gm.get_object(PLAYER_TAG).unwrap();
        assert!(player.x > start_x);
        let (cx, cy) = player.centre();
        let want = (
            (cx - 32.0).clamp(0.0, 192.0).round() as i32,
            (cy - 32.0).clamp(0.0, 96.0).round() as i32,
        );
        assert_eq!(w.gm.camera().offset(), want);
    }

    #[test]
    fn test_collecting_counts_lifetime_stats() {
        let mut w = World::new(&[(2, 3, 0xffffff00)], Navigator::new(ViewId::Game));
        let mut input = InputState::new();
        input.press(Key::Right);

        for _ in 0..30 {
            w.tick(&input);
        }

        assert_eq!(w.stats.coins, 1);
        assert_eq!(w.gm.get_object(PLAYER_TAG).unwrap().stats.coins, 1);
    }

    #[test]
    fn test_exit_on_last_level_returns_to_title() {
        let mut w = World::new(&[(2, 3, 0xff0000ff)], Navigator::new(ViewId::Title));
        w.nav.go(ViewId::Game);
        let mut input = InputState::new();
        input.press(Key::Right);

        for _ in 0..30 {
            w.tick(&input);
            if w.nav.current() == ViewId::Title {
                break;
            }
        }

        assert_eq!(w.nav.current(), ViewId::Title);
        assert_eq!(w.stats.levels_cleared, 1);
    }

    #[test]
    fn test_dying_on_exit_is_not_a_clear() {
        let mut w = World::new(&[(2, 3, 0xff0000ff), (5, 3, 0xffff00ff)], Navigator::new(ViewId::Title));
        w.nav.go(ViewId::Game);
        let (px, py) = {
            let player = w.gm.get_object_mut(PLAYER_TAG).unwrap();
            player.x = 68.0;
            (player.x, player.y)
        };
        let monster = w.gm.get_object_mut(MONSTER_TAG).unwrap();
        monster.x = px;
        monster.y = py - 2.0;

        w.tick(&InputState::new());

        assert_eq!(w.nav.current(), ViewId::GameOver);
        assert_eq!(w.nav.last(), ViewId::Game);
        assert_eq!(w.stats.deaths, 1);
        assert_eq!(w.stats.levels_cleared, 0);
        assert_eq!(w.players(), 0);
        assert_eq!(w.gm.reloads(), 0);
    }
}
