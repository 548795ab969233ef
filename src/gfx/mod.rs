//! Graphics primitives shared by views and the game world
//!
//! - [`Image`] - decoded ARGB pixel buffers (levels, screenshots, creations)
//! - [`Button`] - menu button data
//! - [`Renderer`] - the three drawing primitives every backend provides
//! - [`text`] - the 5x7 bitmap font backends use to honour `draw_text`

pub mod button;
pub mod image;
pub mod render;
pub mod text;

pub use button::{Button, Target};
pub use image::Image;
pub use render::{DrawOp, Renderer};
