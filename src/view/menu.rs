//! Shared button-list behaviour for every menu screen
//!
//! A [`Menu`] owns the ordered buttons of one screen plus the action each
//! button stands for. Per frame it:
//! - resolves hover against each button's last laid-out rectangle
//! - plays the hover sound once per hover span, never stacking two
//! - reports at most one selected button (hover + click)
//!
//! Rendering re-lays the buttons out from a fixed start every call, so the
//! layout never depends on earlier frames.

use crate::audio::{AudioOut, Sound};
use crate::gfx::render::{self, Renderer};
use crate::gfx::{Button, Target};
use crate::settings::Settings;
use crate::view::Navigator;

/// Dim overlay drawn under menu buttons
pub const OVERLAY_COLOR: u32 = 0x99000000;
/// Vertical space between stacked buttons
pub const BUTTON_GAP: u32 = 5;

pub struct Menu<A> {
    buttons: Vec<Button>,
    actions: Vec<A>,
    hover_sound: Option<Sound>,
    click_sound: Sound,
}

impl<A: Copy> Menu<A> {
    pub fn new(hover_sound: Option<Sound>, click_sound: Sound) -> Self {
        Menu {
            buttons: Vec::new(),
            actions: Vec::new(),
            hover_sound,
            click_sound,
        }
    }

    pub fn push(&mut self, button: Button, action: A) -> &mut Self {
        self.buttons.push(button);
        self.actions.push(action);
        self
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    pub fn action(&self, index: usize) -> A {
        self.actions[index]
    }

    /// Resolve hover and selection for this frame
    ///
    /// Returns the index of the selected button. Buttons after the selected
    /// one are not processed this frame.
    pub fn update(&mut self, pointer: (i32, i32), clicked: bool, audio: &mut dyn AudioOut) -> Option<usize> {
        let (px, py) = pointer;

        for (index, btn) in self.buttons.iter_mut().enumerate() {
            let hovered = btn.set_hover(btn.contains(px, py));

            if hovered && clicked {
                return Some(index);
            }

            let Some(sound) = self.hover_sound else {
                continue;
            };
            if hovered {
                if !btn.is_hover_sounded() {
                    if !audio.is_running(sound) {
                        audio.play(sound);
                    }
                    btn.set_hover_sounded(true);
                }
            } else {
                btn.set_hover_sounded(false);
            }
        }

        None
    }

    /// Click sound, then move to the button's target
    pub fn confirm(&mut self, index: usize, nav: &mut Navigator, audio: &mut dyn AudioOut) {
        audio.play(self.click_sound);
        let btn = &mut self.buttons[index];
        btn.set_hover_sounded(false);
        match btn.target() {
            Target::View(id) => nav.go(id),
            Target::Quit => nav.quit(),
        }
    }

    /// Lay buttons out top to bottom from a quarter of the screen height and draw them
    pub fn render_buttons(&mut self, r: &mut dyn Renderer, settings: &Settings) -> Result<(), String> {
        let (w, h) = r.size();
        let mut start_y = (h / 4) as i32;

        for btn in self.buttons.iter_mut() {
            btn.off_x = (w / 2) as i32 - (btn.width / 2) as i32;
            btn.off_y = start_y;
            start_y += (btn.height + BUTTON_GAP) as i32;
            render::draw_button(r, btn, settings.translate(btn.label()))?;
        }

        Ok(())
    }

    /// Full-screen dim overlay followed by the buttons
    pub fn render_overlay(&mut self, r: &mut dyn Renderer, settings: &Settings) -> Result<(), String> {
        let (w, h) = r.size();
        r.fill_rect(0, 0, w, h, OVERLAY_COLOR)?;
        self.render_buttons(r, settings)
    }
}
