//! SDL2 canvas as a [`Renderer`]

use crate::gfx::text::lit_cells;
use crate::gfx::{Image, Renderer};
use sdl2::pixels::{Color, PixelFormatEnum};
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

fn color(argb: u32) -> Color {
    let [a, r, g, b] = argb.to_be_bytes();
    Color::RGBA(r, g, b, a)
}

impl Renderer for Canvas<Window> {
    fn size(&self) -> (u32, u32) {
        match self.logical_size() {
            (0, 0) => self.output_size().unwrap_or((0, 0)),
            size => size,
        }
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, argb: u32) -> Result<(), String> {
        self.set_draw_color(color(argb));
        Canvas::fill_rect(self, Rect::new(x, y, w, h))
    }

    fn draw_rect(&mut self, x: i32, y: i32, w: u32, h: u32, argb: u32) -> Result<(), String> {
        self.set_draw_color(color(argb));
        Canvas::draw_rect(self, Rect::new(x, y, w, h))
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, argb: u32, scale: u32) -> Result<(), String> {
        let rects: Vec<Rect> = lit_cells(text, x, y, scale)
            .into_iter()
            .map(|(cx, cy)| Rect::new(cx, cy, scale, scale))
            .collect();
        if rects.is_empty() {
            return Ok(());
        }
        self.set_draw_color(color(argb));
        self.fill_rects(&rects)
    }
}

/// Copy the finished frame back out of the renderer, at window resolution
pub fn capture(canvas: &Canvas<Window>) -> Result<Image, String> {
    let (width, height) = canvas.output_size()?;
    let bytes = canvas.read_pixels(None, PixelFormatEnum::ARGB8888)?;
    let pixels = bytes
        .chunks_exact(4)
        .map(|px| u32::from_ne_bytes([px[0], px[1], px[2], px[3]]) | 0xff000000)
        .collect::<Vec<_>>();

    if pixels.len() != (width * height) as usize {
        return Err(format!("captured {} pixels for a {}x{} window", pixels.len(), width, height));
    }
    Ok(Image::from_pixels(pixels, width, height))
}
