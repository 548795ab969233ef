//! Square Monster's editor pause menu

use super::menu::Menu;
use super::{ViewContext, ViewId};
use crate::audio::Sound;
use crate::gfx::render::Renderer;
use crate::gfx::Button;
use crate::input::Key;
use crate::settings::Settings;

#[derive(Debug, Clone, Copy, PartialEq)]
enum CreaMenuAction {
    Save,
    Cancel,
    Back,
}

pub struct CreaMenu {
    menu: Menu<CreaMenuAction>,
}

impl CreaMenu {
    pub fn new() -> Self {
        // No hover sound on this screen, selection uses the softer "select" clip
        let mut menu = Menu::new(None, Sound::Select);
        menu.push(Button::new("Save", ViewId::EditList), CreaMenuAction::Save)
            .push(Button::new("Cancel", ViewId::EditList), CreaMenuAction::Cancel)
            .push(Button::new("Back", ViewId::Creative), CreaMenuAction::Back);
        CreaMenu { menu }
    }

    pub fn update(&mut self, ctx: &mut ViewContext<'_>) {
        if ctx.input.is_key_down(Key::Escape) {
            ctx.nav.set(ViewId::Creative);
            return;
        }

        let Some(index) = self.menu.update(ctx.input.pointer(), ctx.input.clicked(), ctx.audio) else {
            return;
        };
        if self.menu.action(index) == CreaMenuAction::Save {
            ctx.editor.save_logged(ctx.appdata);
            ctx.editor.reset();
        }
        self.menu.confirm(index, ctx.nav, ctx.audio);
    }

    pub fn render(&mut self, r: &mut dyn Renderer, settings: &Settings) -> Result<(), String> {
        self.menu.render_overlay(r, settings)
    }

    pub fn buttons(&self) -> &[Button] {
        self.menu.buttons()
    }
}

impl Default for CreaMenu {
    fn default() -> Self {
        Self::new()
    }
}
