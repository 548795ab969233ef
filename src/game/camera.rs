//! Camera following a tagged object
//!
//! The camera stores the tag, not the object. Each frame it looks the tag
//! up again, so removing the object never leaves it pointing at nothing;
//! it just stops moving until something with that tag exists again.

use super::map::GameMap;
use super::object::GameObject;

/// Fraction of the remaining distance covered per second
const FOLLOW_RATE: f32 = 8.0;

#[derive(Debug, Clone)]
pub struct Camera {
    target: String,
    x: f32,
    y: f32,
    snapped: bool,
}

impl Camera {
    pub fn new(target: &str) -> Self {
        Camera {
            target: target.to_string(),
            x: 0.0,
            y: 0.0,
            snapped: false,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Top-left of the viewport in world pixels
    pub fn offset(&self) -> (i32, i32) {
        (self.x.round() as i32, self.y.round() as i32)
    }

    /// Recentre on the target; the first sighting snaps, later frames ease
    pub fn update(&mut self, objects: &[GameObject], map: &GameMap, view: (u32, u32), dt: f32) {
        let Some(target) = objects.iter().find(|o| o.tag == self.target) else {
            return;
        };

        let (cx, cy) = target.centre();
        let want_x = cx - view.0 as f32 / 2.0;
        let want_y = cy - view.1 as f32 / 2.0;

        if self.snapped {
            let t = (FOLLOW_RATE * dt).min(1.0);
            self.x += (want_x - self.x) * t;
            self.y += (want_y - self.y) * t;
        } else {
            self.x = want_x;
            self.y = want_y;
            self.snapped = true;
        }

        let (mw, mh) = map.pixel_size();
        self.x = self.x.clamp(0.0, (mw - view.0 as i32).max(0) as f32);
        self.y = self.y.clamp(0.0, (mh - view.1 as i32).max(0) as f32);
    }
}
