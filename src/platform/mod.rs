//! Platform abstraction layer
//!
//! Seams to the collaborators the simulation consumes but does not own:
//! - Pause menu widget (polled queries)
//! - Audio cue playback (fire-and-forget)
//! - Animation timings from the asset provider

pub mod assets;
pub mod audio;
pub mod pause;

pub use assets::{AnimationClip, AnimationTimings};
pub use audio::{AudioSink, LogAudio, SoundCue};
pub use pause::{NullPauseMenu, PauseChoice, PauseMenu, ScriptedPauseMenu};
