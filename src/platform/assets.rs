//! Animation timings exposed by the asset provider
//!
//! Only cosmetic timing flows through here; none of it affects collision.

use serde::{Deserialize, Serialize};

/// Frame count and per-frame duration of one sprite animation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationClip {
    pub frames: usize,
    /// Seconds per frame
    pub frame_duration: f32,
}

impl AnimationClip {
    pub const fn new(frames: usize, frame_duration: f32) -> Self {
        Self {
            frames,
            frame_duration,
        }
    }

    /// Total playback length in seconds
    pub fn duration(&self) -> f32 {
        self.frames as f32 * self.frame_duration
    }

    /// Frame shown after `elapsed` seconds, or None once playback is over
    pub fn frame_at(&self, elapsed: f32) -> Option<usize> {
        if self.frame_duration <= 0.0 {
            return None;
        }
        let frame = (elapsed / self.frame_duration) as usize;
        (frame < self.frames).then_some(frame)
    }

    /// Like `frame_at`, but holds the last frame instead of ending
    pub fn held_frame_at(&self, elapsed: f32) -> usize {
        self.frame_at(elapsed)
            .unwrap_or_else(|| self.frames.saturating_sub(1))
    }
}

/// Timings for every animation the simulation drives
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationTimings {
    pub run: AnimationClip,
    pub death: AnimationClip,
    pub explosion: AnimationClip,
}

impl Default for AnimationTimings {
    fn default() -> Self {
        Self {
            run: AnimationClip::new(2, 0.2),
            death: AnimationClip::new(4, 0.1),
            explosion: AnimationClip::new(5, 0.08),
        }
    }
}
