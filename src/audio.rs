//! Audible-cue seam
//!
//! The simulation raises named cues; a sound collaborator consumes them
//! fire-and-forget. Sinks are infallible by contract - an unsupported or
//! broken audio backend degrades to silence and must never error into the
//! tick loop.

use crate::sim::GameEvent;

/// Named sound triggers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Bomb entered the play-field (fuse hiss)
    BombSpawned,
    /// Fruit cut
    Slice,
    /// Slice landed inside the combo window
    Combo,
    /// Bomb cut
    BombStruck,
    /// Unsliced fruit dropped (Classic)
    LifeLost,
    /// Round over
    RoundEnded,
}

impl SoundCue {
    /// The cue a gameplay event maps to.
    pub fn for_event(event: &GameEvent) -> SoundCue {
        match event {
            GameEvent::BombSpawned => SoundCue::BombSpawned,
            GameEvent::Sliced { .. } => SoundCue::Slice,
            GameEvent::ComboExtended { .. } => SoundCue::Combo,
            GameEvent::BombStruck => SoundCue::BombStruck,
            GameEvent::LifeLost { .. } => SoundCue::LifeLost,
            GameEvent::RoundEnded { .. } => SoundCue::RoundEnded,
        }
    }
}

/// Sound collaborator seam.
pub trait AudioSink {
    /// Fire-and-forget; no return value is expected.
    fn play(&mut self, cue: SoundCue);
}

/// Silence.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _cue: SoundCue) {}
}

/// Logs each cue at debug level; stands in for a real synthesizer in the
/// headless demo.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogAudio;

impl AudioSink for LogAudio {
    fn play(&mut self, cue: SoundCue) {
        log::debug!("audio cue: {:?}", cue);
    }
}
