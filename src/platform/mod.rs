//! SDL2 backend
//!
//! - `canvas`: the window canvas as a `Renderer`, plus frame capture
//! - `audio`: SDL2 mixer clips as an `AudioOut`
//! - `events`: SDL2 events into `InputState`
//! - `container`: window setup and the main loop

pub mod audio;
pub mod canvas;
pub mod container;
pub mod events;

pub use container::{GameContainer, GameKind, Launch, GAME_HEIGHT, GAME_WIDTH};
