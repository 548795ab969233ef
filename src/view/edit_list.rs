use super::menu::Menu;
use super::{ViewContext, ViewId};
use crate::audio::Sound;
use crate::gfx::render::{self, Renderer};
use crate::gfx::Button;
use crate::input::Key;
use crate::settings::Settings;

#[derive(Debug, Clone, Copy, PartialEq)]
enum EditListAction {
    NewLevel,
    Back,
}

/// Creative-mode entry screen
pub struct EditList {
    menu: Menu<EditListAction>,
}

impl EditList {
    pub fn new() -> Self {
        let mut menu = Menu::new(Some(Sound::Hover), Sound::Click);
        menu.push(Button::new("New level", ViewId::Creative), EditListAction::NewLevel)
            .push(Button::new("Back", ViewId::Title), EditListAction::Back);
        EditList { menu }
    }

    pub fn update(&mut self, ctx: &mut ViewContext<'_>) {
        if ctx.input.is_key_down(Key::Escape) {
            ctx.nav.set(ViewId::Title);
            return;
        }

        let Some(index) = self.menu.update(ctx.input.pointer(), ctx.input.clicked(), ctx.audio) else {
            return;
        };
        match self.menu.action(index) {
            EditListAction::NewLevel => {
                ctx.editor.reset();
                ctx.editor.set_spawn(false);
            }
            EditListAction::Back => {}
        }
        self.menu.confirm(index, ctx.nav, ctx.audio);
    }

    pub fn render(&mut self, r: &mut dyn Renderer, settings: &Settings) -> Result<(), String> {
        let (w, h) = r.size();
        r.fill_rect(0, 0, w, h, 0xff1e1e28)?;

        let label = settings.translate("Creative mode");
        let x = (w as i32 - render::text_width(label, 2) as i32) / 2;
        r.draw_text(label, x, (h / 10) as i32, render::TEXT_COLOR, 2)?;

        self.menu.render_buttons(r, settings)
    }

    pub fn buttons(&self) -> &[Button] {
        self.menu.buttons()
    }
}

impl Default for EditList {
    fn default() -> Self {
        Self::new()
    }
}
