//! Sound clips
//!
//! Playback is fire-and-forget: the engine asks for a clip to start or stop
//! and never waits on it. [`AudioOut`] is implemented by the SDL2 mixer in
//! `platform::audio` and by [`Recorder`] in tests.

use std::collections::HashSet;

/// Every clip the games ship with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sound {
    Hover,
    Click,
    Select,
    GameOver,
}

impl Sound {
    pub const ALL: [Sound; 4] = [Sound::Hover, Sound::Click, Sound::Select, Sound::GameOver];

    /// Resource path relative to the asset root
    pub fn path(self) -> &'static str {
        match self {
            Sound::Hover => "audio/hover.wav",
            Sound::Click => "audio/click.wav",
            Sound::Select => "audio/select.wav",
            Sound::GameOver => "audio/gameover.wav",
        }
    }
}

pub trait AudioOut {
    fn play(&mut self, sound: Sound);
    fn stop(&mut self, sound: Sound);
    fn is_running(&self, sound: Sound) -> bool;
    /// Gain in decibels relative to the clip's recorded level
    fn set_volume(&mut self, sound: Sound, gain_db: f32);
}

/// What an [`AudioOut`] was asked to do
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AudioEvent {
    Play(Sound),
    Stop(Sound),
    Volume(Sound, f32),
}

/// Records requests instead of making noise
///
/// A played clip counts as running until it is stopped or [`Recorder::finish`]
/// is called, which stands in for the clip reaching its end.
#[derive(Debug, Default)]
pub struct Recorder {
    pub events: Vec<AudioEvent>,
    running: HashSet<Sound>,
}

impl Recorder {
    pub fn new() -> Self {
        Recorder::default()
    }

    pub fn finish(&mut self, sound: Sound) {
        self.running.remove(&sound);
    }

    pub fn play_count(&self, sound: Sound) -> usize {
        self.events
            .iter()
            .filter(|e| **e == AudioEvent::Play(sound))
            .count()
    }
}

impl AudioOut for Recorder {
    fn play(&mut self, sound: Sound) {
        self.events.push(AudioEvent::Play(sound));
        self.running.insert(sound);
    }

    fn stop(&mut self, sound: Sound) {
        self.events.push(AudioEvent::Stop(sound));
        self.running.remove(&sound);
    }

    fn is_running(&self, sound: Sound) -> bool {
        self.running.contains(&sound)
    }

    fn set_volume(&mut self, sound: Sound, gain_db: f32) {
        self.events.push(AudioEvent::Volume(sound, gain_db));
    }
}
