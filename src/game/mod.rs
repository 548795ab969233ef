// Game module - the running level and the level editor
//
// This module contains:
// - map.rs: tiles decoded from a level image, map drawing and lights
// - object.rs: GameObject (player, monsters), physics and tile interaction
// - camera.rs: viewport following an object by tag
// - notif.rs: fading on-screen notifications
// - level.rs: where level images are loaded from
// - manager.rs: GameManager, the per-frame simulation
// - editor.rs: creative mode painting and saving
// - stats.rs: per-object counters and lifetime player stats

pub mod camera;
pub mod editor;
pub mod level;
pub mod manager;
pub mod map;
pub mod notif;
pub mod object;
pub mod stats;

// Re-export types for convenience
pub use camera::Camera;
pub use editor::Editor;
pub use level::LevelSource;
pub use manager::{GameContext, GameManager};
pub use map::{GameMap, Light, Tile, TS};
pub use notif::FlashNotif;
pub use object::{GameObject, ObjectKind};
pub use stats::{PlayerStats, Stats};
