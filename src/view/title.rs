use super::menu::Menu;
use super::{ViewContext, ViewId};
use crate::audio::Sound;
use crate::gfx::render::{self, Renderer};
use crate::gfx::{Button, Target};
use crate::settings::Settings;

const BACKGROUND: u32 = 0xff1e1e28;

/// Title screen: play, open the editor list, or leave
pub struct Title {
    name: String,
    menu: Menu<()>,
}

impl Title {
    pub fn new(game_name: &str) -> Self {
        let mut menu = Menu::new(Some(Sound::Hover), Sound::Click);
        menu.push(Button::new("Play", ViewId::Game), ())
            .push(Button::new("Creative mode", ViewId::EditList), ())
            .push(Button::with_target("Quit", Target::Quit), ());

        Title {
            name: game_name.to_uppercase(),
            menu,
        }
    }

    pub fn update(&mut self, ctx: &mut ViewContext<'_>) {
        if let Some(index) = self.menu.update(ctx.input.pointer(), ctx.input.clicked(), ctx.audio) {
            self.menu.confirm(index, ctx.nav, ctx.audio);
        }
    }

    pub fn render(&mut self, r: &mut dyn Renderer, settings: &Settings) -> Result<(), String> {
        let (w, h) = r.size();
        r.fill_rect(0, 0, w, h, BACKGROUND)?;

        let x = (w as i32 - render::text_width(&self.name, 3) as i32) / 2;
        r.draw_text(&self.name, x, (h / 10) as i32, render::TEXT_COLOR, 3)?;

        self.menu.render_buttons(r, settings)
    }

    pub fn buttons(&self) -> &[Button] {
        self.menu.buttons()
    }
}
