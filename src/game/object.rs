//! Game objects
//!
//! Every live entity shares one shape ([`GameObject`]): a tag, a position,
//! a size, counters and a `dead` flag. What differs between kinds lives in
//! [`ObjectKind`], matched in `update`/`render`.
//!
//! Objects never remove themselves. They set `dead` and the manager drops
//! them after the update pass.

use super::map::{GameMap, TS, Tile};
use super::stats::Stats;
use crate::gfx::Renderer;
use crate::input::{InputState, Key};

pub const PLAYER_TAG: &str = "player";
pub const MONSTER_TAG: &str = "monster";

const GRAVITY: f32 = 900.0;
const MAX_FALL: f32 = 600.0;
const JUMP_SPEED: f32 = 360.0;
const PLAYER_SPEED: f32 = 150.0;
const MONSTER_SPEED: f32 = 60.0;
const HURT_COOLDOWN: f32 = 1.0;
const PLAYER_SIZE: i32 = 24;
const MONSTER_SIZE: i32 = 26;

/// Things that happened to an object during its update
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ObjectEvent {
    Collected(Tile),
    ReachedExit,
    LostLife,
    Died,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerMotion {
    pub vx: f32,
    pub vy: f32,
    pub grounded: bool,
    pub cooldown: f32,
    spawn: (f32, f32),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonsterMotion {
    pub dir: f32,
    pub vy: f32,
    pub grounded: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ObjectKind {
    Player(PlayerMotion),
    Monster(MonsterMotion),
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameObject {
    pub tag: String,
    pub x: f32,
    pub y: f32,
    pub width: i32,
    pub height: i32,
    pub stats: Stats,
    pub dead: bool,
    pub kind: ObjectKind,
}

impl GameObject {
    /// A player standing on the map's spawn tile
    pub fn player(tag: &str, map: &GameMap, lives: i32) -> Self {
        let (tx, ty) = map.spawn();
        let x = (tx * TS + (TS - PLAYER_SIZE) / 2) as f32;
        let y = (ty * TS + TS - PLAYER_SIZE) as f32;

        GameObject {
            tag: tag.to_string(),
            x,
            y,
            width: PLAYER_SIZE,
            height: PLAYER_SIZE,
            stats: Stats::with_lives(lives),
            dead: false,
            kind: ObjectKind::Player(PlayerMotion {
                vx: 0.0,
                vy: 0.0,
                grounded: false,
                cooldown: 0.0,
                spawn: (x, y),
            }),
        }
    }

    pub fn monster(tx: i32, ty: i32) -> Self {
        GameObject {
            tag: MONSTER_TAG.to_string(),
            x: (tx * TS + (TS - MONSTER_SIZE) / 2) as f32,
            y: (ty * TS + TS - MONSTER_SIZE) as f32,
            width: MONSTER_SIZE,
            height: MONSTER_SIZE,
            stats: Stats::with_lives(1),
            dead: false,
            kind: ObjectKind::Monster(MonsterMotion {
                dir: -1.0,
                vy: 0.0,
                grounded: false,
            }),
        }
    }

    pub fn is_player(&self) -> bool {
        matches!(self.kind, ObjectKind::Player(_))
    }

    pub fn is_monster(&self) -> bool {
        matches!(self.kind, ObjectKind::Monster(_))
    }

    pub fn centre(&self) -> (f32, f32) {
        (
            self.x + self.width as f32 / 2.0,
            self.y + self.height as f32 / 2.0,
        )
    }

    pub fn overlaps(&self, other: &GameObject) -> bool {
        self.x < other.x + other.width as f32
            && other.x < self.x + self.width as f32
            && self.y < other.y + other.height as f32
            && other.y < self.y + self.height as f32
    }

    /// Advance one tick; anything noteworthy is pushed to `events`
    pub fn update(&mut self, input: &InputState, map: &mut GameMap, dt: f32, events: &mut Vec<ObjectEvent>) {
        match self.kind {
            ObjectKind::Player(_) => self.update_player(input, map, dt, events),
            ObjectKind::Monster(_) => self.update_monster(map, dt),
        }
    }

    /// Take a hit; ignored while the post-hit cooldown is running
    pub fn hurt(&mut self, events: &mut Vec<ObjectEvent>) {
        let ObjectKind::Player(motion) = &mut self.kind else {
            self.dead = true;
            return;
        };
        if motion.cooldown > 0.0 || self.dead {
            return;
        }

        self.stats.lives -= 1;
        if self.stats.lives <= 0 {
            self.dead = true;
            events.push(ObjectEvent::Died);
            return;
        }

        motion.vx = 0.0;
        motion.vy = 0.0;
        motion.cooldown = HURT_COOLDOWN;
        let (sx, sy) = motion.spawn;
        self.x = sx;
        self.y = sy;
        events.push(ObjectEvent::LostLife);
    }

    fn update_player(&mut self, input: &InputState, map: &mut GameMap, dt: f32, events: &mut Vec<ObjectEvent>) {
        let ObjectKind::Player(motion) = &mut self.kind else {
            return;
        };

        motion.cooldown = (motion.cooldown - dt).max(0.0);

        let left = input.is_key_held(Key::Left) || input.is_key_held(Key::A);
        let right = input.is_key_held(Key::Right) || input.is_key_held(Key::D);
        motion.vx = match (left, right) {
            (true, false) => -PLAYER_SPEED,
            (false, true) => PLAYER_SPEED,
            _ => 0.0,
        };

        let jump = input.is_key_down(Key::Space) || input.is_key_down(Key::Up) || input.is_key_down(Key::W);
        if jump && motion.grounded {
            motion.vy = -JUMP_SPEED;
        }
        motion.vy = (motion.vy + GRAVITY * dt).min(MAX_FALL);

        let (dx, dy) = (motion.vx * dt, motion.vy * dt);
        self.move_x(map, dx);
        let landed = self.move_y(map, dy);

        if let ObjectKind::Player(motion) = &mut self.kind {
            if landed.is_some() {
                motion.vy = 0.0;
            }
            motion.grounded = landed == Some(true);
        }

        let (tx0, ty0, tx1, ty1) = self.tile_span();
        let mut hazard = false;
        for ty in ty0..=ty1 {
            for tx in tx0..=tx1 {
                match map.tile(tx, ty) {
                    Tile::Spikes => hazard = true,
                    Tile::Exit => events.push(ObjectEvent::ReachedExit),
                    _ => {
                        if let Some(item) = map.take(tx, ty) {
                            match item {
                                Tile::Coin => self.stats.coins += 1,
                                Tile::Key => self.stats.keys += 1,
                                Tile::Skull => self.stats.skulls += 1,
                                _ => {}
                            }
                            events.push(ObjectEvent::Collected(item));
                        }
                    }
                }
            }
        }

        let fell_out = self.y > map.pixel_size().1 as f32;
        if hazard || fell_out {
            self.hurt(events);
        }
    }

    fn update_monster(&mut self, map: &GameMap, dt: f32) {
        let ObjectKind::Monster(motion) = &mut self.kind else {
            return;
        };
        motion.vy = (motion.vy + GRAVITY * dt).min(MAX_FALL);
        let (dx, dy) = (motion.dir * MONSTER_SPEED * dt, motion.vy * dt);
        let mut dir = motion.dir;

        if self.move_x(map, dx) {
            dir = -dir;
        }
        let landed = self.move_y(map, dy);

        // turn around at ledges instead of walking off
        if landed == Some(true) {
            let front = if dir > 0.0 {
                self.x + self.width as f32
            } else {
                self.x - 1.0
            };
            let below = ((self.y + self.height as f32) as i32).div_euclid(TS);
            if !map.is_solid((front as i32).div_euclid(TS), below) {
                dir = -dir;
            }
        }

        if let ObjectKind::Monster(motion) = &mut self.kind {
            motion.dir = dir;
            if landed.is_some() {
                motion.vy = 0.0;
            }
            motion.grounded = landed == Some(true);
        }

        if self.y > map.pixel_size().1 as f32 {
            self.dead = true;
        }
    }

    /// Tiles covered by the bounding box, inclusive
    fn tile_span(&self) -> (i32, i32, i32, i32) {
        let x0 = (self.x.floor() as i32).div_euclid(TS);
        let y0 = (self.y.floor() as i32).div_euclid(TS);
        let x1 = ((self.x + self.width as f32).ceil() as i32 - 1).div_euclid(TS);
        let y1 = ((self.y + self.height as f32).ceil() as i32 - 1).div_euclid(TS);
        (x0, y0, x1, y1)
    }

    fn hits_wall(&self, map: &GameMap) -> bool {
        let (tx0, ty0, tx1, ty1) = self.tile_span();
        (ty0..=ty1).any(|ty| (tx0..=tx1).any(|tx| map.is_solid(tx, ty)))
    }

    /// Returns true when a wall stopped the move
    fn move_x(&mut self, map: &GameMap, dx: f32) -> bool {
        if dx == 0.0 {
            return false;
        }
        self.x += dx;
        if !self.hits_wall(map) {
            return false;
        }
        let (tx0, _, tx1, _) = self.tile_span();
        self.x = if dx > 0.0 {
            (tx1 * TS - self.width) as f32
        } else {
            ((tx0 + 1) * TS) as f32
        };
        true
    }

    /// `Some(true)` on landing, `Some(false)` on hitting a ceiling
    fn move_y(&mut self, map: &GameMap, dy: f32) -> Option<bool> {
        if dy == 0.0 {
            return None;
        }
        self.y += dy;
        if !self.hits_wall(map) {
            return None;
        }
        let (_, ty0, _, ty1) = self.tile_span();
        if dy > 0.0 {
            self.y = (ty1 * TS - self.height) as f32;
            Some(true)
        } else {
            self.y = ((ty0 + 1) * TS) as f32;
            Some(false)
        }
    }

    pub fn render(&self, r: &mut dyn Renderer, cam: (i32, i32)) -> Result<(), String> {
        let x = self.x as i32 - cam.0;
        let y = self.y as i32 - cam.1;
        let (w, h) = (self.width as u32, self.height as u32);

        match &self.kind {
            ObjectKind::Player(motion) => {
                // blink while the hit cooldown runs
                if motion.cooldown > 0.0 && (motion.cooldown * 10.0) as i32 % 2 == 1 {
                    return Ok(());
                }
                r.fill_rect(x, y, w, h, 0xff3cb44b)?;
                let eye_y = y + 6;
                let look = if motion.vx < 0.0 { -2 } else if motion.vx > 0.0 { 2 } else { 0 };
                r.fill_rect(x + 5 + look, eye_y, 4, 6, 0xffffffff)?;
                r.fill_rect(x + 15 + look, eye_y, 4, 6, 0xffffffff)
            }
            ObjectKind::Monster(_) => {
                r.fill_rect(x, y, w, h, 0xff9b2d5a)?;
                r.fill_rect(x + 4, y + 6, 18, 4, 0xff1e1e1e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::Image;

    const W: u32 = 0xff000000;
    const E: u32 = 0xffffffff;

    /// 5x4 room with a floor, spawn at (1,2)
    fn room(extra: &[(u32, u32, u32)]) -> GameMap {
        let mut img = Image::filled(5, 4, E);
        for x in 0..5 {
            img.set_pixel(x, 3, W);
        }
        img.set_pixel(0, 2, W);
        img.set_pixel(4, 2, W);
        img.set_pixel(1, 2, 0xff00ff00);
        for (x, y, argb) in extra {
            img.set_pixel(*x, *y, *argb);
        }
        GameMap::from_image(&img)
    }

    fn settle(obj: &mut GameObject, map: &mut GameMap, input: &InputState, frames: usize) -> Vec<ObjectEvent> {
        let mut events = Vec::new();
        for _ in 0..frames {
            obj.update(input, map, 1.0 / 60.0, &mut events);
        }
        events
    }

    #[test]
    fn test_player_spawns_on_spawn_tile() {
        let map = room(&[]);
        let player = GameObject::player(PLAYER_TAG, &map, 1);
        assert_eq!(player.x, 36.0);
        assert_eq!(player.y, 72.0);
        assert_eq!(player.stats.lives, 1);
    }

    #[test]
    fn test_player_lands_on_floor() {
        let mut map = room(&[]);
        let mut player = GameObject::player(PLAYER_TAG, &map, 1);
        player.y -= 20.0;

        settle(&mut player, &mut map, &InputState::new(), 60);

        assert_eq!(player.y, 72.0);
        match &player.kind {
            ObjectKind::Player(m) => assert!(m.grounded),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_player_stopped_by_wall() {
        let mut map = room(&[]);
        let mut player = GameObject::player(PLAYER_TAG, &map, 1);
        let mut input = InputState::new();
        input.press(Key::Right);

        settle(&mut player, &mut map, &input, 120);

        assert_eq!(player.x, (4 * TS - player.width) as f32);
    }

    #[test]
    fn test_player_collects_coin() {
        let mut map = room(&[(2, 2, 0xffffff00)]);
        let mut player = GameObject::player(PLAYER_TAG, &map, 1);
        let mut input = InputState::new();
        input.press(Key::D);

        let events = settle(&mut player, &mut map, &input, 30);

        assert_eq!(player.stats.coins, 1);
        assert!(events.contains(&ObjectEvent::Collected(Tile::Coin)));
        assert_eq!(map.tile(2, 2), Tile::Empty);
    }

    #[test]
    fn test_spikes_kill_last_life() {
        let mut map = room(&[(2, 2, 0xffff0000)]);
        let mut player = GameObject::player(PLAYER_TAG, &map, 1);
        let mut input = InputState::new();
        input.press(Key::Right);

        let events = settle(&mut player, &mut map, &input, 30);

        assert!(player.dead);
        assert_eq!(events, vec![ObjectEvent::Died]);
    }

    #[test]
    fn test_extra_life_respawns() {
        let map = room(&[]);
        let mut player = GameObject::player(PLAYER_TAG, &map, 2);
        let spawn = (player.x, player.y);
        player.x += 40.0;
        let mut events = Vec::new();

        player.hurt(&mut events);
        player.hurt(&mut events);

        assert!(!player.dead);
        assert_eq!(player.stats.lives, 1);
        assert_eq!((player.x, player.y), spawn);
        assert_eq!(events, vec![ObjectEvent::LostLife]);
    }

    #[test]
    fn test_monster_turns_at_wall() {
        let mut map = room(&[]);
        let mut monster = GameObject::monster(1, 2);

        settle(&mut monster, &mut map, &InputState::new(), 60);

        match &monster.kind {
            ObjectKind::Monster(m) => assert_eq!(m.dir, 1.0),
            _ => unreachable!(),
        }
        assert!(!monster.dead);
    }

    #[test]
    fn test_overlap() {
        let map = room(&[]);
        let player = GameObject::player(PLAYER_TAG, &map, 1);
        let mut monster = GameObject::monster(1, 2);
        assert!(player.overlaps(&monster));

        monster.x += 64.0;
        assert!(!player.overlaps(&monster));
    }
}
