//! Per-frame input snapshot
//!
//! The platform layer feeds raw events in; views and game objects only
//! read the snapshot. "Down" means the key went down during this frame,
//! "held" means it is currently pressed.

use std::collections::HashSet;

/// Keys the engine reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    F12,
    Left,
    Right,
    Up,
    Down,
    Space,
    A,
    D,
    W,
    S,
    Num(u8),
}

#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashSet<Key>,
    pressed: HashSet<Key>,
    pointer: (i32, i32),
    clicked: bool,
}

impl InputState {
    pub fn new() -> Self {
        InputState::default()
    }

    /// Forget the one-frame signals (key-down edges, click)
    pub fn begin_frame(&mut self) {
        self.pressed.clear();
        self.clicked = false;
    }

    pub fn press(&mut self, key: Key) {
        if self.held.insert(key) {
            self.pressed.insert(key);
        }
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn move_pointer(&mut self, x: i32, y: i32) {
        self.pointer = (x, y);
    }

    pub fn click(&mut self) {
        self.clicked = true;
    }

    /// True only on the frame the key went down
    pub fn is_key_down(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    pub fn is_key_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    pub fn pointer(&self) -> (i32, i32) {
        self.pointer
    }

    pub fn clicked(&self) -> bool {
        self.clicked
    }

    /// Number key pressed this frame, if any
    pub fn number_down(&self) -> Option<u8> {
        self.pressed.iter().find_map(|key| match key {
            Key::Num(n) => Some(*n),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_down_lasts_one_frame() {
        let mut input = InputState::new();
        input.press(Key::Escape);
        assert!(input.is_key_down(Key::Escape));

        input.begin_frame();
        assert!(!input.is_key_down(Key::Escape));
        assert!(input.is_key_held(Key::Escape));
    }

    #[test]
    fn test_repeat_press_is_not_new_edge() {
        let mut input = InputState::new();
        input.press(Key::Space);
        input.begin_frame();
        input.press(Key::Space);
        assert!(!input.is_key_down(Key::Space));

        input.release(Key::Space);
        input.press(Key::Space);
        assert!(input.is_key_down(Key::Space));
    }

    #[test]
    fn test_click_cleared_each_frame() {
        let mut input = InputState::new();
        input.move_pointer(10, 20);
        input.click();
        assert!(input.clicked());

        input.begin_frame();
        assert!(!input.clicked());
        assert_eq!(input.pointer(), (10, 20));
    }
}
