//! Flash notifications
//!
//! Short messages shown in the top-left corner that fade out on their own,
//! e.g. the file name after a screenshot. Alpha falls linearly with age.

use crate::gfx::Renderer;
use crate::gfx::render::{GLYPH_HEIGHT, TEXT_COLOR, text_width};

/// Seconds a notification stays on screen by default
pub const DEFAULT_DURATION: f32 = 3.0;

const LINE_HEIGHT: i32 = GLYPH_HEIGHT as i32 + 6;

#[derive(Debug, Clone)]
pub struct FlashNotif {
    text: String,
    age: f32,
    duration: f32,
}

impl FlashNotif {
    pub fn new(text: impl Into<String>) -> Self {
        FlashNotif::with_duration(text, DEFAULT_DURATION)
    }

    pub fn with_duration(text: impl Into<String>, duration: f32) -> Self {
        FlashNotif {
            text: text.into(),
            age: 0.0,
            duration,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn update(&mut self, dt: f32) {
        self.age += dt;
    }

    pub fn is_ended(&self) -> bool {
        self.age >= self.duration
    }

    fn alpha(&self) -> u32 {
        let left = (1.0 - self.age / self.duration).clamp(0.0, 1.0);
        (left * 255.0) as u32
    }

    /// Draw on line `slot`, counting down from the top of the screen
    pub fn render(&self, r: &mut dyn Renderer, slot: usize) -> Result<(), String> {
        let alpha = self.alpha();
        if alpha == 0 {
            return Ok(());
        }

        let x = 4;
        let y = 4 + slot as i32 * LINE_HEIGHT;
        let w = text_width(&self.text, 1) + 6;
        r.fill_rect(x, y, w, LINE_HEIGHT as u32 - 2, (alpha * 3 / 5) << 24)?;
        r.draw_text(&self.text, x + 3, y + 2, (alpha << 24) | (TEXT_COLOR & 0x00ffffff), 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::DrawOp;
    use crate::gfx::render::Recorder;

    #[test]
    fn test_ends_after_duration() {
        let mut notif = FlashNotif::with_duration("saved", 1.0);
        notif.update(0.6);
        assert!(!notif.is_ended());
        notif.update(0.6);
        assert!(notif.is_ended());
    }

    #[test]
    fn test_fades_with_age() {
        let mut notif = FlashNotif::with_duration("x", 2.0);
        let mut r = Recorder::new(480, 270);
        notif.render(&mut r, 0).unwrap();
        notif.update(1.0);
        notif.render(&mut r, 0).unwrap();

        let alphas: Vec<u32> = r
            .ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { argb, .. } => Some(argb >> 24),
                _ => None,
            })
            .collect();
        assert_eq!(alphas, vec![255, 127]);
    }

    #[test]
    fn test_slots_stack_downwards() {
        let notif = FlashNotif::new("a");
        let mut r = Recorder::new(480, 270);
        notif.render(&mut r, 2).unwrap();
        assert!(matches!(r.ops[0], DrawOp::Fill { y: 30, .. }));
    }
}
