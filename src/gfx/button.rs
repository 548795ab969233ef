use crate::view::ViewId;

pub const BUTTON_WIDTH: u32 = 170;
pub const BUTTON_HEIGHT: u32 = 20;

/// Where a button leads when selected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    View(ViewId),
    /// Leave the game entirely
    Quit,
}

/// A menu button
///
/// Plain data: views decide what selecting it does. Layout (`off_x`,
/// `off_y`) is rewritten every render call, hover flags every update.
#[derive(Debug, Clone)]
pub struct Button {
    label: String,
    target: Target,
    hovered: bool,
    hover_sounded: bool,
    pub off_x: i32,
    pub off_y: i32,
    pub width: u32,
    pub height: u32,
}

impl Button {
    pub fn new(label: &str, target: ViewId) -> Self {
        Button::with_target(label, Target::View(target))
    }

    pub fn with_target(label: &str, target: Target) -> Self {
        Button {
            label: label.to_string(),
            target,
            hovered: false,
            hover_sounded: false,
            off_x: 0,
            off_y: 0,
            width: BUTTON_WIDTH,
            height: BUTTON_HEIGHT,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn target(&self) -> Target {
        self.target
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Store the hover flag and hand it back for chaining
    pub fn set_hover(&mut self, hovered: bool) -> bool {
        self.hovered = hovered;
        hovered
    }

    pub fn is_hover_sounded(&self) -> bool {
        self.hover_sounded
    }

    pub fn set_hover_sounded(&mut self, sounded: bool) {
        self.hover_sounded = sounded;
    }

    /// Pointer-over-bounds test against the current layout rectangle
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.off_x
            && x < self.off_x + self.width as i32
            && y >= self.off_y
            && y < self.off_y + self.height as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_uses_half_open_bounds() {
        let mut btn = Button::new("Back", ViewId::Title);
        btn.off_x = 10;
        btn.off_y = 20;

        assert!(btn.contains(10, 20));
        assert!(btn.contains(179, 39));
        assert!(!btn.contains(180, 20));
        assert!(!btn.contains(10, 40));
    }

    #[test]
    fn test_set_hover_returns_value() {
        let mut btn = Button::with_target("Quit", Target::Quit);
        assert!(btn.set_hover(true));
        assert!(btn.is_hovered());
        assert!(!btn.set_hover(false));
    }
}
