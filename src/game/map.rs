//! Tile map built from a level image
//!
//! One pixel of the level image is one tile. Colours are read as:
//!
//! | colour       | tile                 |
//! |--------------|----------------------|
//! | `0xff000000` | wall                 |
//! | `0xffff0000` | spikes               |
//! | `0xffffff00` | coin                 |
//! | `0xff808080` | key                  |
//! | `0xff800080` | skull                |
//! | `0xff0000ff` | exit                 |
//! | `0xff00ffff` | torch (light source) |
//! | `0xff00ff00` | player spawn         |
//! | `0xffff00ff` | monster spawn        |
//!
//! Anything else is empty. Spawn markers are recorded and then cleared.

use crate::gfx::{Image, Renderer};

/// Tile size in pixels
pub const TS: i32 = 32;
/// Number of frames in the tile animation cycle
pub const ANIM_FRAMES: f32 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Empty,
    Wall,
    Spikes,
    Coin,
    Key,
    Skull,
    Exit,
    Torch,
    PlayerSpawn,
    MonsterSpawn,
}

impl Tile {
    /// Brushes offered by the editor, in number-key order
    pub const PALETTE: [Tile; 9] = [
        Tile::Wall,
        Tile::Empty,
        Tile::Spikes,
        Tile::Coin,
        Tile::Key,
        Tile::Skull,
        Tile::Exit,
        Tile::Torch,
        Tile::MonsterSpawn,
    ];

    pub fn from_argb(argb: u32) -> Tile {
        match argb {
            0xff000000 => Tile::Wall,
            0xffff0000 => Tile::Spikes,
            0xffffff00 => Tile::Coin,
            0xff808080 => Tile::Key,
            0xff800080 => Tile::Skull,
            0xff0000ff => Tile::Exit,
            0xff00ffff => Tile::Torch,
            0xff00ff00 => Tile::PlayerSpawn,
            0xffff00ff => Tile::MonsterSpawn,
            _ => Tile::Empty,
        }
    }

    pub fn to_argb(self) -> u32 {
        match self {
            Tile::Empty => 0xffffffff,
            Tile::Wall => 0xff000000,
            Tile::Spikes => 0xffff0000,
            Tile::Coin => 0xffffff00,
            Tile::Key => 0xff808080,
            Tile::Skull => 0xff800080,
            Tile::Exit => 0xff0000ff,
            Tile::Torch => 0xff00ffff,
            Tile::PlayerSpawn => 0xff00ff00,
            Tile::MonsterSpawn => 0xffff00ff,
        }
    }

    pub fn is_solid(self) -> bool {
        self == Tile::Wall
    }

    pub fn is_collectible(self) -> bool {
        matches!(self, Tile::Coin | Tile::Key | Tile::Skull)
    }
}

/// Point light drawn over the map when lights are enabled
#[derive(Debug, Clone, Copy)]
pub struct Light {
    pub radius: u32,
    pub argb: u32,
}

impl Light {
    pub fn new(radius: u32, argb: u32) -> Self {
        Light { radius, argb }
    }
}

#[derive(Debug, Clone)]
pub struct GameMap {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
    spawn: (i32, i32),
    monster_spawns: Vec<(i32, i32)>,
    anim: f32,
}

impl GameMap {
    pub fn new() -> Self {
        GameMap {
            width: 0,
            height: 0,
            tiles: Vec::new(),
            spawn: (0, 0),
            monster_spawns: Vec::new(),
            anim: 0.0,
        }
    }

    pub fn from_image(image: &Image) -> Self {
        let mut map = GameMap::new();
        map.init(image);
        map
    }

    /// Rebuild every tile from a level image
    pub fn init(&mut self, image: &Image) {
        self.width = image.width() as i32;
        self.height = image.height() as i32;
        self.monster_spawns.clear();
        self.spawn = (1, 1);
        self.anim = 0.0;

        self.tiles = image
            .pixels()
            .iter()
            .enumerate()
            .map(|(i, argb)| {
                let (tx, ty) = (i as i32 % self.width, i as i32 / self.width);
                match Tile::from_argb(*argb) {
                    Tile::PlayerSpawn => {
                        self.spawn = (tx, ty);
                        Tile::Empty
                    }
                    Tile::MonsterSpawn => {
                        self.monster_spawns.push((tx, ty));
                        Tile::Empty
                    }
                    tile => tile,
                }
            })
            .collect();
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn pixel_size(&self) -> (i32, i32) {
        (self.width * TS, self.height * TS)
    }

    /// Player spawn, in tiles
    pub fn spawn(&self) -> (i32, i32) {
        self.spawn
    }

    pub fn monster_spawns(&self) -> &[(i32, i32)] {
        &self.monster_spawns
    }

    pub fn tile(&self, tx: i32, ty: i32) -> Tile {
        if tx < 0 || ty < 0 || tx >= self.width || ty >= self.height {
            return Tile::Empty;
        }
        self.tiles[(ty * self.width + tx) as usize]
    }

    pub fn set_tile(&mut self, tx: i32, ty: i32, tile: Tile) {
        if tx >= 0 && ty >= 0 && tx < self.width && ty < self.height {
            self.tiles[(ty * self.width + tx) as usize] = tile;
        }
    }

    /// Side walls are solid past the map edge; above and below are open
    pub fn is_solid(&self, tx: i32, ty: i32) -> bool {
        if tx < 0 || tx >= self.width {
            return true;
        }
        self.tile(tx, ty).is_solid()
    }

    /// Remove a collectible and report what it was
    pub fn take(&mut self, tx: i32, ty: i32) -> Option<Tile> {
        let tile = self.tile(tx, ty);
        if tile.is_collectible() {
            self.set_tile(tx, ty, Tile::Empty);
            Some(tile)
        } else {
            None
        }
    }

    pub fn animate(&mut self, amount: f32) {
        self.anim = (self.anim + amount) % ANIM_FRAMES;
    }

    pub fn frame(&self) -> usize {
        self.anim as usize
    }

    /// Draw the tiles visible through a camera offset
    pub fn draw(&self, r: &mut dyn Renderer, cam: (i32, i32)) -> Result<(), String> {
        let (sw, sh) = r.size();
        let frame = self.frame() as i32;
        let first = (cam.0.div_euclid(TS), cam.1.div_euclid(TS));
        let last = ((cam.0 + sw as i32) / TS + 1, (cam.1 + sh as i32) / TS + 1);

        for ty in first.1.max(0)..last.1.min(self.height) {
            for tx in first.0.max(0)..last.0.min(self.width) {
                let x = tx * TS - cam.0;
                let y = ty * TS - cam.1;
                match self.tile(tx, ty) {
                    Tile::Empty | Tile::PlayerSpawn | Tile::MonsterSpawn => {}
                    Tile::Wall => {
                        r.fill_rect(x, y, TS as u32, TS as u32, 0xff4a3b2a)?;
                        r.draw_rect(x, y, TS as u32, TS as u32, 0xff2e241a)?;
                    }
                    Tile::Spikes => {
                        for i in 0..4 {
                            r.fill_rect(x + i * 8 + 2, y + 16, 4, 16, 0xffc8c8d2)?;
                        }
                    }
                    Tile::Coin => {
                        let bob = if frame % 2 == 0 { 0 } else { 2 };
                        r.fill_rect(x + 10, y + 10 - bob, 12, 12, 0xffffd700)?;
                    }
                    Tile::Key => r.fill_rect(x + 8, y + 12, 16, 8, 0xffb0b0b0)?,
                    Tile::Skull => r.fill_rect(x + 8, y + 8, 16, 16, 0xffe8e8e8)?,
                    Tile::Exit => r.fill_rect(x + 4, y, 24, TS as u32, 0xff2040c0)?,
                    Tile::Torch => {
                        r.fill_rect(x + 14, y + 12, 4, 20, 0xff6b4226)?;
                        let flame = if frame % 2 == 0 { 0xffffa020 } else { 0xffffe060 };
                        r.fill_rect(x + 12, y + 4 + frame % 2, 8, 8, flame)?;
                    }
                }
            }
        }

        Ok(())
    }

    /// Translucent glow around every torch
    pub fn draw_lights(&self, r: &mut dyn Renderer, cam: (i32, i32), light: Light) -> Result<(), String> {
        let rgb = light.argb & 0x00ffffff;
        let rings = 3;
        for ty in 0..self.height {
            for tx in 0..self.width {
                if self.tile(tx, ty) != Tile::Torch {
                    continue;
                }
                let cx = tx * TS + TS / 2 - cam.0;
                let cy = ty * TS + TS / 2 - cam.1;
                for ring in 1..=rings {
                    let radius = (light.radius * ring / rings) as i32;
                    r.fill_rect(cx - radius, cy - radius, radius as u32 * 2, radius as u32 * 2, 0x18000000 | rgb)?;
                }
            }
        }
        Ok(())
    }
}

impl Default for GameMap {
    fn default() -> Self {
        Self::new()
    }
}
