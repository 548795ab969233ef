//! Shared engine behind Square Monster and Crusade of Ages
//!
//! The library holds everything that does not need a window: settings and
//! save-data layout, the menu state machine, the game simulation and the
//! editor. [`platform`] plugs SDL2 in; the two binaries only parse their
//! command line and start a [`platform::GameContainer`].

pub mod appdata;
pub mod audio;
pub mod error;
pub mod game;
pub mod gfx;
pub mod input;
pub mod launch;
pub mod platform;
pub mod settings;
pub mod view;

pub use error::GameError;
