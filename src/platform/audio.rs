//! SDL2 mixer backend for [`AudioOut`]
//!
//! Every clip is decoded once at startup. A clip that fails to load is
//! logged and then silently skipped; the games stay playable without sound.
//!
//! Each [`Sound`] owns one reserved mixer channel, so asking whether a clip
//! is running or halting it never touches another clip.

use crate::audio::{AudioOut, Sound};
use sdl2::mixer::{self, Channel, Chunk, AUDIO_S16LSB, DEFAULT_CHANNELS, MAX_VOLUME};
use std::collections::HashMap;
use std::path::Path;

const FREQUENCY: i32 = 44_100;
const CHUNK_SIZE: i32 = 1_024;

/// Scale factor for a gain in decibels
pub fn db_to_volume(gain_db: f32) -> i32 {
    let linear = 10f32.powf(gain_db / 20.0);
    ((MAX_VOLUME as f32 * linear).round() as i32).clamp(0, MAX_VOLUME)
}

/// The mixer channel reserved for `sound`
pub fn channel_for(sound: Sound) -> Channel {
    let index = Sound::ALL.iter().position(|s| *s == sound).unwrap_or(0);
    Channel(index as i32)
}

pub struct SdlAudio {
    clips: HashMap<Sound, Chunk>,
}

impl SdlAudio {
    /// Open the mixer and load every clip from `asset_root`
    pub fn open(asset_root: &Path) -> Result<Self, String> {
        mixer::open_audio(FREQUENCY, AUDIO_S16LSB, DEFAULT_CHANNELS, CHUNK_SIZE)?;
        let channels = Sound::ALL.len() as i32;
        mixer::allocate_channels(channels);
        mixer::reserve_channels(channels);

        let mut clips = HashMap::new();
        for sound in Sound::ALL {
            let path = asset_root.join(sound.path());
            match Chunk::from_file(&path) {
                Ok(chunk) => {
                    clips.insert(sound, chunk);
                }
                Err(e) => log::warn!("Sound {} unavailable: {}", path.display(), e),
            }
        }

        Ok(SdlAudio { clips })
    }
}

impl AudioOut for SdlAudio {
    fn play(&mut self, sound: Sound) {
        let Some(chunk) = self.clips.get(&sound) else {
            return;
        };
        if let Err(e) = channel_for(sound).play(chunk, 0) {
            log::warn!("Could not play {:?}: {}", sound, e);
        }
    }

    fn stop(&mut self, sound: Sound) {
        channel_for(sound).halt();
    }

    fn is_running(&self, sound: Sound) -> bool {
        self.clips.contains_key(&sound) && channel_for(sound).is_playing()
    }

    fn set_volume(&mut self, sound: Sound, gain_db: f32) {
        if let Some(chunk) = self.clips.get_mut(&sound) {
            chunk.set_volume(db_to_volume(gain_db));
        }
    }
}

impl Drop for SdlAudio {
    fn drop(&mut self) {
        Channel::all().halt();
        self.clips.clear();
        mixer::close_audio();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_to_volume() {
        assert_eq!(db_to_volume(0.0), MAX_VOLUME);
        assert_eq!(db_to_volume(-10.0), (MAX_VOLUME as f32 * 0.316_227_77).round() as i32);
        assert_eq!(db_to_volume(12.0), MAX_VOLUME);
        assert_eq!(db_to_volume(-200.0), 0);
    }

    #[test]
    fn test_each_sound_has_its_own_channel() {
        let mut channels: Vec<i32> = Sound::ALL.iter().map(|s| channel_for(*s).0).collect();
        assert!(channels.iter().all(|c| (0..Sound::ALL.len() as i32).contains(c)));
        channels.sort();
        channels.dedup();
        assert_eq!(channels.len(), Sound::ALL.len());
    }
}
