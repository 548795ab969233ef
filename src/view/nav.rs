//! Screen identifiers and the navigation record

/// Every screen the games can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewId {
    Title,
    Game,
    Paused,
    EditList,
    /// The level editor itself
    Creative,
    CreaMenu,
    PausedEdit,
    GameOver,
}

impl ViewId {
    /// Screens a missing player is allowed to be respawned from
    pub const RESPAWN_ORIGINS: [ViewId; 2] = [ViewId::GameOver, ViewId::Title];

    /// Screens drawn on top of the running level
    pub fn shows_world(self) -> bool {
        matches!(self, ViewId::Game | ViewId::Paused | ViewId::GameOver)
    }

    /// Screens drawn on top of the editor
    pub fn shows_editor(self) -> bool {
        matches!(self, ViewId::Creative | ViewId::CreaMenu | ViewId::PausedEdit)
    }
}

#[derive(Debug, Clone)]
pub struct Navigator {
    current: ViewId,
    last: ViewId,
    quit_requested: bool,
}

impl Navigator {
    pub fn new(initial: ViewId) -> Self {
        Navigator {
            current: initial,
            last: initial,
            quit_requested: false,
        }
    }

    pub fn current(&self) -> ViewId {
        self.current
    }

    pub fn last(&self) -> ViewId {
        self.last
    }

    /// Switch screens, remembering where we came from
    pub fn go(&mut self, to: ViewId) {
        self.last = self.current;
        self.current = to;
        log::debug!("view {:?} -> {:?}", self.last, self.current);
    }

    /// Switch screens without touching `last`
    pub fn set(&mut self, to: ViewId) {
        self.current = to;
    }

    pub fn quit(&mut self) {
        self.quit_requested = true;
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn came_from_respawn_origin(&self) -> bool {
        ViewId::RESPAWN_ORIGINS.contains(&self.last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_go_records_last() {
        let mut nav = Navigator::new(ViewId::Title);
        nav.go(ViewId::Game);
        nav.go(ViewId::GameOver);

        assert_eq!(nav.current(), ViewId::GameOver);
        assert_eq!(nav.last(), ViewId::Game);
    }

    #[test]
    fn test_set_keeps_last() {
        let mut nav = Navigator::new(ViewId::Title);
        nav.go(ViewId::Game);
        nav.set(ViewId::Paused);

        assert_eq!(nav.current(), ViewId::Paused);
        assert_eq!(nav.last(), ViewId::Title);
    }

    #[test]
    fn test_respawn_origins() {
        let mut nav = Navigator::new(ViewId::GameOver);
        nav.go(ViewId::Game);
        assert!(nav.came_from_respawn_origin());

        nav.go(ViewId::Paused);
        assert!(!nav.came_from_respawn_origin());
    }
}
