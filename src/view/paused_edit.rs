//! Crusade of Ages' editor pause menu
//!
//! Same job as `CreaMenu`, plus a "Try" button that turns on the spawn
//! preview so the level can be checked before saving.

use super::menu::Menu;
use super::{ViewContext, ViewId};
use crate::audio::Sound;
use crate::gfx::render::Renderer;
use crate::gfx::Button;
use crate::input::Key;
use crate::settings::Settings;

#[derive(Debug, Clone, Copy, PartialEq)]
enum PausedEditAction {
    Try,
    Save,
    Cancel,
    Back,
}

pub struct PausedEdit {
    menu: Menu<PausedEditAction>,
}

impl PausedEdit {
    pub fn new() -> Self {
        let mut menu = Menu::new(Some(Sound::Hover), Sound::Click);
        menu.push(Button::new("Try", ViewId::Creative), PausedEditAction::Try)
            .push(Button::new("Save", ViewId::EditList), PausedEditAction::Save)
            .push(Button::new("Cancel", ViewId::EditList), PausedEditAction::Cancel)
            .push(Button::new("Back", ViewId::Creative), PausedEditAction::Back);
        PausedEdit { menu }
    }

    pub fn update(&mut self, ctx: &mut ViewContext<'_>) {
        if ctx.input.is_key_down(Key::Escape) {
            ctx.nav.set(ViewId::Creative);
            return;
        }

        let Some(index) = self.menu.update(ctx.input.pointer(), ctx.input.clicked(), ctx.audio) else {
            return;
        };
        match self.menu.action(index) {
            PausedEditAction::Save => {
                ctx.editor.save_logged(ctx.appdata);
                ctx.editor.reset();
                ctx.editor.set_spawn(false);
            }
            PausedEditAction::Try => ctx.editor.set_spawn(true),
            PausedEditAction::Cancel => ctx.editor.set_spawn(false),
            PausedEditAction::Back => {}
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

impl Default for PausedEdit {
    fn default() -> Self {
        Self::new()
    }
}
