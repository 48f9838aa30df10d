//! Audio cue trigger
//!
//! The simulation never plays sound itself; it hands cues to an `AudioSink`
//! and ignores the outcome.

/// Sound cues fired by gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Player left the ground
    Jump,
    /// Player touched a spike or fell out of the level
    Death,
}

/// Fire-and-forget audio playback
pub trait AudioSink {
    fn play(&mut self, cue: SoundCue);
}

/// Sink that only logs cues (headless runs, tests)
#[derive(Debug, Default)]
pub struct LogAudio {
    played: Vec<SoundCue>,
}

impl LogAudio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cues received so far, oldest first
    pub fn played(&self) -> &[SoundCue] {
        &self.played
    }
}

impl AudioSink for LogAudio {
    fn play(&mut self, cue: SoundCue) {
        log::debug!("Sound cue: {:?}", cue);
        self.played.push(cue);
    }
}
