//! SDL2 events into the engine's [`InputState`]

use crate::input::{InputState, Key};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use sdl2::EventPump;

pub fn map_key(keycode: Keycode) -> Option<Key> {
    let key = match keycode {
        Keycode::Escape => Key::Escape,
        Keycode::F12 => Key::F12,
        Keycode::Left => Key::Left,
        Keycode::Right => Key::Right,
        Keycode::Up => Key::Up,
        Keycode::Down => Key::Down,
        Keycode::Space => Key::Space,
        Keycode::A => Key::A,
        Keycode::D => Key::D,
        Keycode::W => Key::W,
        Keycode::S => Key::S,
        Keycode::Num0 | Keycode::Kp0 => Key::Num(0),
        Keycode::Num1 | Keycode::Kp1 => Key::Num(1),
        Keycode::Num2 | Keycode::Kp2 => Key::Num(2),
        Keycode::Num3 | Keycode::Kp3 => Key::Num(3),
        Keycode::Num4 | Keycode::Kp4 => Key::Num(4),
        Keycode::Num5 | Keycode::Kp5 => Key::Num(5),
        Keycode::Num6 | Keycode::Kp6 => Key::Num(6),
        Keycode::Num7 | Keycode::Kp7 => Key::Num(7),
        Keycode::Num8 | Keycode::Kp8 => Key::Num(8),
        Keycode::Num9 | Keycode::Kp9 => Key::Num(9),
        _ => return None,
    };
    Some(key)
}

/// Fold one event into the snapshot; returns true when the window was closed
pub fn apply(input: &mut InputState, event: &Event) -> bool {
    match event {
        Event::Quit { .. } => return true,
        Event::KeyDown {
            keycode: Some(keycode),
            repeat: false,
            ..
        } => {
            if let Some(key) = map_key(*keycode) {
                input.press(key);
            }
        }
        Event::KeyUp {
            keycode: Some(keycode),
            ..
        } => {
            if let Some(key) = map_key(*keycode) {
                input.release(key);
            }
        }
        // the renderer's logical size already maps mouse positions
        Event::MouseMotion { x, y, .. } => input.move_pointer(*x, *y),
        Event::MouseButtonDown {
            mouse_btn: MouseButton::Left,
            x,
            y,
            ..
        } => {
            input.move_pointer(*x, *y);
            input.click();
        }
        _ => {}
    }
    false
}

/// Start a new frame and drain the SDL queue into `input`
pub fn poll(pump: &mut EventPump, input: &mut InputState) -> bool {
    input.begin_frame();
    let mut closed = false;
    for event in pump.poll_iter() {
        closed |= apply(input, &event);
    }
    closed
}
