//! Menu screens and the navigation state machine
//!
//! Each screen is a concrete type wrapping a [`menu::Menu`]; [`View`] is the
//! closed set of screens a game can show and dispatches `update`/`render`
//! by matching on the variant. Screens never hold references to each other:
//! a button names the [`ViewId`] to go to and the [`Navigator`] records it.
//!
//! # Frame contract
//!
//! ```ignore
//! let mut ctx = ViewContext { input, nav, settings, audio, editor, stats, appdata };
//! views.update(&mut ctx);               // active screen only
//! views.render(nav.current(), r, settings)?;
//! ```

pub mod crea_menu;
pub mod edit_list;
pub mod game_over;
pub mod menu;
pub mod nav;
pub mod paused;
pub mod paused_edit;
pub mod title;

pub use crea_menu::CreaMenu;
pub use edit_list::EditList;
pub use game_over::GameOver;
pub use nav::{Navigator, ViewId};
pub use paused::Paused;
pub use paused_edit::PausedEdit;
pub use title::Title;

use crate::appdata::AppData;
use crate::audio::AudioOut;
use crate::game::editor::Editor;
use crate::game::stats::PlayerStats;
use crate::gfx::{Button, Renderer};
use crate::input::InputState;
use crate::settings::Settings;

/// Everything a screen may read or change during its update
pub struct ViewContext<'a> {
    pub input: &'a InputState,
    pub nav: &'a mut Navigator,
    pub settings: &'a Settings,
    pub audio: &'a mut dyn AudioOut,
    pub editor: &'a mut Editor,
    pub stats: &'a PlayerStats,
    pub appdata: &'a AppData,
}

pub enum View {
    Title(Title),
    Paused(Paused),
    GameOver(GameOver),
    EditList(EditList),
    CreaMenu(CreaMenu),
    PausedEdit(PausedEdit),
}

impl View {
    pub fn id(&self) -> ViewId {
        match self {
            View::Title(_) => ViewId::Title,
            View::Paused(_) => ViewId::Paused,
            View::GameOver(_) => ViewId::GameOver,
            View::EditList(_) => ViewId::EditList,
            View::CreaMenu(_) => ViewId::CreaMenu,
            View::PausedEdit(_) => ViewId::PausedEdit,
        }
    }

    pub fn update(&mut self, ctx: &mut ViewContext<'_>) {
        match self {
            View::Title(v) => v.update(ctx),
            View::Paused(v) => v.update(ctx),
            View::GameOver(v) => v.update(ctx),
            View::EditList(v) => v.update(ctx),
            View::CreaMenu(v) => v.update(ctx),
            View::PausedEdit(v) => v.update(ctx),
        }
    }

    pub fn render(&mut self, r: &mut dyn Renderer, settings: &Settings) -> Result<(), String> {
        match self {
            View::Title(v) => v.render(r, settings),
            View::Paused(v) => v.render(r, settings),
            View::GameOver(v) => v.render(r, settings),
            View::EditList(v) => v.render(r, settings),
            View::CreaMenu(v) => v.render(r, settings),
            View::PausedEdit(v) => v.render(r, settings),
        }
    }

    pub fn buttons(&self) -> &[Button] {
        match self {
            View::Title(v) => v.buttons(),
            View::Paused(v) => v.buttons(),
            View::GameOver(v) => v.buttons(),
            View::EditList(v) => v.buttons(),
            View::CreaMenu(v) => v.buttons(),
            View::PausedEdit(v) => v.buttons(),
        }
    }
}

/// The screens one game ships with
pub struct ViewSet {
    views: Vec<View>,
}

impl ViewSet {
    pub fn square_monster() -> Self {
        ViewSet {
            views: vec![
                View::Title(Title::new("Square Monster")),
                View::Paused(Paused::new()),
                View::GameOver(GameOver::new()),
                View::EditList(EditList::new()),
                View::CreaMenu(CreaMenu::new()),
            ],
        }
    }

    pub fn crusade_of_ages() -> Self {
        ViewSet {
            views: vec![
                View::Title(Title::new("Crusade of Ages")),
                View::Paused(Paused::new()),
                View::GameOver(GameOver::new()),
                View::EditList(EditList::new()),
                View::PausedEdit(PausedEdit::new()),
            ],
        }
    }

    pub fn get(&self, id: ViewId) -> Option<&View> {
        self.views.iter().find(|v| v.id() == id)
    }

    pub fn get_mut(&mut self, id: ViewId) -> Option<&mut View> {
        self.views.iter_mut().find(|v| v.id() == id)
    }

    /// Update the screen the navigator currently points at, if it is a menu
    pub fn update(&mut self, ctx: &mut ViewContext<'_>) {
        if let Some(view) = self.get_mut(ctx.nav.current()) {
            view.update(ctx);
        }
    }

    pub fn render(&mut self, id: ViewId, r: &mut dyn Renderer, settings: &Settings) -> Result<(), String> {
        match self.get_mut(id) {
            Some(view) => view.render(r, settings),
            None => Ok(()),
        }
    }
}
