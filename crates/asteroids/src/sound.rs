//! Sound effects
//!
//! The simulation only names the effect it wants; a [`SoundSink`] decides
//! what playing it means. Sinks are fire-and-forget and never fail the tick.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::GameError;

/// Every sound effect the game can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sound {
    /// Ship destroyed
    BangShip,
    /// Large asteroid destroyed
    BangLarge,
    /// Medium asteroid destroyed
    BangMedium,
    /// Small asteroid destroyed
    BangSmall,
    /// Player fired
    Fire,
    /// Ship thrusting
    Thrust,
    /// Alien destroyed
    BangAlienShip,
    /// Large alien appeared
    SaucerBig,
    /// Small alien appeared
    SaucerSmall,
}

impl Sound {
    /// All sounds
    pub const ALL: [Self; 9] = [
        Self::BangShip,
        Self::BangLarge,
        Self::BangMedium,
        Self::BangSmall,
        Self::Fire,
        Self::Thrust,
        Self::BangAlienShip,
        Self::SaucerBig,
        Self::SaucerSmall,
    ];

    /// Clip name, without extension
    pub fn clip_name(self) -> &'static str {
        match self {
            Self::BangShip => "bangShip",
            Self::BangLarge => "bangLarge",
            Self::BangMedium => "bangMedium",
            Self::BangSmall => "bangSmall",
            Self::Fire => "fire",
            Self::Thrust => "thrust",
            Self::BangAlienShip => "bangAlienShip",
            Self::SaucerBig => "saucerBig",
            Self::SaucerSmall => "saucerSmall",
        }
    }
}

/// Destination for sound effects
pub trait SoundSink {
    /// Start playing `sound`
    fn play(&mut self, sound: Sound);
}

/// Discards every sound
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl SoundSink for NullSink {
    fn play(&mut self, _sound: Sound) {}
}

/// Logs every sound at debug level
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl SoundSink for LogSink {
    fn play(&mut self, sound: Sound) {
        log::debug!("sound: {}", sound.clip_name());
    }
}

/// Resolves `<dir>/<clip>.wav` for every sound up front.
///
/// Only resolves clips, nothing is decoded or sent to an audio device.
/// Missing clips are reported once when the sink is built and silently
/// skipped afterwards.
#[derive(Debug, Clone)]
pub struct ClipSink {
    clips: HashMap<Sound, PathBuf>,
    resolved: u64,
}

impl ClipSink {
    /// Look for clips in `dir`
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, GameError> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(GameError::Audio(format!("clip directory {} not found", dir.display())));
        }

        let mut clips = HashMap::new();
        for sound in Sound::ALL {
            let path = dir.join(format!("{}.wav", sound.clip_name()));
            if path.is_file() {
                clips.insert(sound, path);
            } else {
                log::warn!("missing sound clip {}", path.display());
            }
        }
        log::info!("{} of {} sound clips found in {}", clips.len(), Sound::ALL.len(), dir.display());
        Ok(Self { clips, resolved: 0 })
    }

    /// Whether a clip was found for `sound`
    pub fn has_clip(&self, sound: Sound) -> bool {
        self.clips.contains_key(&sound)
    }

    /// Number of requested sounds that resolved to a clip
    pub fn resolved(&self) -> u64 {
        self.resolved
    }
}

impl SoundSink for ClipSink {
    fn play(&mut self, sound: Sound) {
        match self.clips.get(&sound) {
            Some(path) => {
                self.resolved += 1;
                log::debug!("clip {} resolved", path.display());
            }
            None => log::trace!("no clip for {}, skipped", sound.clip_name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_sink_resolves_only_present_clips() {
        let dir = std::env::temp_dir().join(format!("asteroids_clips_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("fire.wav"), b"RIFF").unwrap();

        let mut sink = ClipSink::open(&dir).unwrap();
        std::fs::remove_dir_all(&dir).ok();

        assert!(sink.has_clip(Sound::Fire));
        assert!(!sink.has_clip(Sound::Thrust));
        sink.play(Sound::Fire);
        sink.play(Sound::Thrust);
        assert_eq!(sink.resolved(), 1);
        sink.play(Sound::Fire);
        assert_eq!(sink.resolved(), 2);
    }

    #[test]
    fn test_clip_sink_needs_directory() {
        assert!(matches!(
            ClipSink::open("/nonexistent/sounds"),
            Err(GameError::Audio(_))
        ));
    }
}
