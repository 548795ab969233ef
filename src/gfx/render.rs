//! Drawing surface abstraction
//!
//! Everything the engine draws is built from three screen-space
//! primitives. The SDL2 canvas implements them in `platform::canvas`;
//! [`Recorder`] captures them for tests.

use super::button::Button;

/// Pixel width of one glyph at scale 1 (5 px glyph + 1 px spacing)
pub const GLYPH_ADVANCE: u32 = 6;
/// Pixel height of one glyph at scale 1
pub const GLYPH_HEIGHT: u32 = 7;

pub const BUTTON_COLOR: u32 = 0xff3a3a4a;
pub const BUTTON_HOVER_COLOR: u32 = 0xff50648c;
pub const BUTTON_BORDER_COLOR: u32 = 0xff64647a;
pub const TEXT_COLOR: u32 = 0xffdcdcf0;
pub const TITLE_COLOR: u32 = 0xffff3232;

pub trait Renderer {
    /// Logical screen size in pixels
    fn size(&self) -> (u32, u32);

    /// Fill a rectangle; colours with alpha below 255 are blended
    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, argb: u32) -> Result<(), String>;

    /// One pixel rectangle outline
    fn draw_rect(&mut self, x: i32, y: i32, w: u32, h: u32, argb: u32) -> Result<(), String>;

    /// Bitmap text with its top-left corner at `(x, y)`
    fn draw_text(&mut self, text: &str, x: i32, y: i32, argb: u32, scale: u32) -> Result<(), String>;
}

pub fn text_width(text: &str, scale: u32) -> u32 {
    text.chars().count() as u32 * GLYPH_ADVANCE * scale
}

/// Draw a button at its current layout position with a (translated) label
pub fn draw_button(r: &mut dyn Renderer, btn: &Button, label: &str) -> Result<(), String> {
    let fill = if btn.is_hovered() {
        BUTTON_HOVER_COLOR
    } else {
        BUTTON_COLOR
    };
    r.fill_rect(btn.off_x, btn.off_y, btn.width, btn.height, fill)?;
    r.draw_rect(btn.off_x, btn.off_y, btn.width, btn.height, BUTTON_BORDER_COLOR)?;

    let label_x = btn.off_x + (btn.width as i32 - text_width(label, 1) as i32) / 2;
    let label_y = btn.off_y + (btn.height as i32 - GLYPH_HEIGHT as i32) / 2;
    r.draw_text(label, label_x, label_y, TEXT_COLOR, 1)
}

/// Large centred title with a smaller line underneath, in the top eighth of the screen
pub fn draw_menu_title(r: &mut dyn Renderer, title: &str, subtitle: &str) -> Result<(), String> {
    let (w, h) = r.size();
    let top = (h / 10) as i32;

    let title_x = (w as i32 - text_width(title, 2) as i32) / 2;
    r.draw_text(title, title_x, top, TITLE_COLOR, 2)?;

    let sub_x = (w as i32 - text_width(subtitle, 1) as i32) / 2;
    r.draw_text(subtitle, sub_x, top + (GLYPH_HEIGHT * 2 + 4) as i32, TEXT_COLOR, 1)
}

/// A single recorded primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Fill { x: i32, y: i32, w: u32, h: u32, argb: u32 },
    Outline { x: i32, y: i32, w: u32, h: u32, argb: u32 },
    Text { text: String, x: i32, y: i32, argb: u32, scale: u32 },
}

/// Renderer that remembers what it was asked to draw
#[derive(Debug)]
pub struct Recorder {
    pub width: u32,
    pub height: u32,
    pub ops: Vec<DrawOp>,
}

impl Recorder {
    pub fn new(width: u32, height: u32) -> Self {
        Recorder {
            width,
            height,
            ops: Vec::new(),
        }
    }

    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Index of the first text op with this content
    pub fn text_index(&self, needle: &str) -> Option<usize> {
        self.ops
            .iter()
            .position(|op| matches!(op, DrawOp::Text { text, .. } if text == needle))
    }
}

impl Renderer for Recorder {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, argb: u32) -> Result<(), String> {
        self.ops.push(DrawOp::Fill { x, y, w, h, argb });
        Ok(())
    }

    fn draw_rect(&mut self, x: i32, y: i32, w: u32, h: u32, argb: u32) -> Result<(), String> {
        self.ops.push(DrawOp::Outline { x, y, w, h, argb });
        Ok(())
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, argb: u32, scale: u32) -> Result<(), String> {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            x,
            y,
            argb,
            scale,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::ViewId;

    #[test]
    fn test_text_width_counts_chars() {
        assert_eq!(text_width("BACK", 1), 24);
        assert_eq!(text_width("é", 2), 12);
    }

    #[test]
    fn test_button_label_centred() {
        let mut r = Recorder::new(480, 270);
        let mut btn = Button::new("Back", ViewId::Title);
        btn.off_x = 100;
        btn.off_y = 50;

        draw_button(&mut r, &btn, "Back").unwrap();

        assert_eq!(r.ops.len(), 3);
        match &r.ops[2] {
            DrawOp::Text { x, y, .. } => {
                assert_eq!(*x, 100 + (170 - 24) / 2);
                assert_eq!(*y, 50 + (20 - 7) / 2);
            }
            other => panic!("expected text, got {:?}", other),
        }
    }

    #[test]
    fn test_hovered_button_uses_highlight() {
        let mut r = Recorder::new(480, 270);
        let mut btn = Button::new("Save", ViewId::EditList);
        btn.set_hover(true);

        draw_button(&mut r, &btn, "Save").unwrap();

        assert!(matches!(r.ops[0], DrawOp::Fill { argb: BUTTON_HOVER_COLOR, .. }));
    }
}
