//! Game-over screen
//!
//! Entered from gameplay when the player runs out of lives. The game-over
//! jingle plays once per visit; whichever button is picked stops it.

use super::menu::Menu;
use super::{ViewContext, ViewId};
use crate::audio::Sound;
use crate::gfx::render::{self, Renderer};
use crate::gfx::Button;
use crate::settings::Settings;

#[derive(Debug, Clone, Copy, PartialEq)]
enum GameOverAction {
    TryAgain,
    QuitToTitle,
}

pub struct GameOver {
    menu: Menu<GameOverAction>,
    once: bool,
}

impl GameOver {
    pub fn new() -> Self {
        let mut menu = Menu::new(Some(Sound::Hover), Sound::Click);
        menu.push(Button::new("Try again", ViewId::Game), GameOverAction::TryAgain)
            .push(Button::new("Quit to title", ViewId::Title), GameOverAction::QuitToTitle);

        GameOver { menu, once: false }
    }

    pub fn update(&mut self, ctx: &mut ViewContext<'_>) {
        if ctx.nav.last() == ViewId::Game && !self.once {
            ctx.audio.play(Sound::GameOver);
            self.once = true;
        }

        let Some(index) = self.menu.update(ctx.input.pointer(), ctx.input.clicked(), ctx.audio) else {
            return;
        };

        if self.menu.action(index) == GameOverAction::QuitToTitle {
            if let Err(e) = ctx.stats.save(ctx.appdata.stats_file()) {
                log::error!("Failed to save player stats: {}", e);
            }
        }
        ctx.audio.stop(Sound::GameOver);
        self.once = false;
        self.menu.confirm(index, ctx.nav, ctx.audio);
    }

    pub fn render(&mut self, r: &mut dyn Renderer, settings: &Settings) -> Result<(), String> {
        let (w, h) = r.size();
        r.fill_rect(0, 0, w, h, super::menu::OVERLAY_COLOR)?;
        render::draw_menu_title(r, settings.translate("GAME OVER"), settings.translate("You are dead"))?;
        self.menu.render_buttons(r, settings)
    }

    pub fn jingle_played(&self) -> bool {
        self.once
    }

    pub fn buttons(&self) -> &[Button] {
        self.menu.buttons()
    }
}

impl Default for GameOver {
    fn default() -> Self {
        Self::new()
    }
}
