use super::menu::Menu;
use super::{ViewContext, ViewId};
use crate::audio::Sound;
use crate::gfx::render::{self, Renderer};
use crate::gfx::Button;
use crate::input::Key;
use crate::settings::Settings;

/// Gameplay pause overlay
pub struct Paused {
    menu: Menu<()>,
}

impl Paused {
    pub fn new() -> Self {
        let mut menu = Menu::new(Some(Sound::Hover), Sound::Click);
        menu.push(Button::new("Resume", ViewId::Game), ())
            .push(Button::new("Quit to title", ViewId::Title), ());
        Paused { menu }
    }

    pub fn update(&mut self, ctx: &mut ViewContext<'_>) {
        if ctx.input.is_key_down(Key::Escape) {
            ctx.nav.set(ViewId::Game);
            return;
        }

        if let Some(index) = self.menu.update(ctx.input.pointer(), ctx.input.clicked(), ctx.audio) {
            self.menu.confirm(index, ctx.nav, ctx.audio);
        }
    }

    pub fn render(&mut self, r: &mut dyn Renderer, settings: &Settings) -> Result<(), String> {
        self.menu.render_overlay(r, settings)?;

        let label = settings.translate("Paused");
        let (w, h) = r.size();
        let x = (w as i32 - render::text_width(label, 2) as i32) / 2;
        r.draw_text(label, x, (h / 10) as i32, render::TEXT_COLOR, 2)
    }

    pub fn buttons(&self) -> &[Button] {
        self.menu.buttons()
    }
}

impl Default for Paused {
    fn default() -> Self {
        Self::new()
    }
}
