//! Game state and core simulation types
//!
//! One `GameState` is one level attempt. It owns the player, the live
//! obstacles and the event cursor; the level itself is borrowed per tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::level::EventKind;
use super::obstacle::Obstacle;
use super::rect::Rect;
use super::spawner::EventSpawner;
use crate::platform::{AnimationClip, AnimationTimings};
use crate::tuning::Tuning;

/// Current phase of an attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Alive and moving (grounded or airborne)
    Running,
    /// Death sequence playing; restarts automatically
    Dead,
    /// Reached the finish line; ticks are no-ops
    Finished,
}

/// What killed the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathCause {
    Spike,
    OutOfBounds,
}

/// Things that happened during a tick, for audio and UI
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Spawned { id: u32, kind: EventKind },
    Jumped,
    Died { cause: DeathCause },
    /// Automatic restart after death; `deaths` is the new death count
    Restarted { deaths: u32 },
    Finished { deaths: u32 },
    /// Exploding platform went off
    Detonated { id: u32 },
    BoostStarted { id: u32, duration: f32, multiplier: f32 },
    BoostEnded,
    Paused,
    Resumed,
}

/// The runner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    /// Grounded; set only by landing on a platform
    pub can_jump: bool,
    pub is_dead: bool,
    /// Cosmetic animation clock and frame
    pub anim_timer: f32,
    pub frame: usize,
}

impl Player {
    pub fn new(start: Vec2, size: f32) -> Self {
        Self {
            pos: start,
            vel: Vec2::ZERO,
            size,
            can_jump: false,
            is_dead: false,
            anim_timer: 0.0,
            frame: 0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::square_at(self.pos, self.size)
    }

    /// Cycle run frames while grounded
    pub fn animate_run(&mut self, clip: &AnimationClip, dt: f32) {
        if !self.can_jump {
            return;
        }
        self.anim_timer += dt;
        if self.anim_timer >= clip.frame_duration {
            self.anim_timer = 0.0;
            if clip.frames > 0 {
                self.frame = (self.frame + 1) % clip.frames;
            }
        }
    }

    /// Play the death sequence, holding its last frame
    pub fn animate_death(&mut self, clip: &AnimationClip, dt: f32) {
        self.anim_timer += dt;
        self.frame = clip.held_frame_at(self.anim_timer);
    }
}

/// Timed boosted running
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AutoRun {
    pub remaining: f32,
    pub multiplier: f32,
}

/// Camera follow target for the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// World point kept at `offset` on screen
    pub target: Vec2,
    /// Screen position of the target
    pub offset: Vec2,
}

/// Complete state of one level attempt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub tuning: Tuning,
    pub animations: AnimationTimings,
    pub player: Player,
    /// Live obstacles in spawn order (ascending trigger x)
    pub obstacles: Vec<Obstacle>,
    pub spawner: EventSpawner,
    pub auto_run: Option<AutoRun>,
    pub camera: Camera,
    pub phase: Phase,
    /// Suspends every tick while set
    pub paused: bool,
    /// Deaths so far in this attempt; the score
    pub death_count: u32,
    /// Seconds since death (only advances while dead)
    pub restart_timer: f32,
    /// Simulated seconds since the current run started
    pub elapsed: f32,
    /// Events produced since the last drain
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh attempt with the player at the start position
    pub fn new(tuning: Tuning, animations: AnimationTimings) -> Self {
        let player = Player::new(tuning.player_start, tuning.player_size);
        let camera = Camera {
            target: player.pos,
            offset: tuning.camera_offset(),
        };
        Self {
            tuning,
            animations,
            player,
            obstacles: Vec::new(),
            spawner: EventSpawner::new(),
            auto_run: None,
            camera,
            phase: Phase::Running,
            paused: false,
            death_count: 0,
            restart_timer: 0.0,
            elapsed: 0.0,
            events: Vec::new(),
        }
    }

    /// Start over from scratch, clearing the death count
    pub fn reset(&mut self) {
        let events = std::mem::take(&mut self.events);
        *self = Self::new(self.tuning.clone(), self.animations);
        self.events = events;
    }

    /// Start over after a death, keeping and incrementing the death count
    pub fn restart_after_death(&mut self) {
        let deaths = self.death_count + 1;
        self.reset();
        self.death_count = deaths;
        self.events.push(GameEvent::Restarted { deaths });
        log::info!("Restarting level (deaths: {})", deaths);
    }

    /// Kill the player and start the restart countdown
    pub fn kill_player(&mut self, cause: DeathCause) {
        if self.phase != Phase::Running {
            return;
        }
        self.player.is_dead = true;
        self.player.anim_timer = 0.0;
        self.player.frame = 0;
        self.phase = Phase::Dead;
        self.restart_timer = 0.0;
        self.events.push(GameEvent::Died { cause });
        log::info!(
            "Player died ({:?}) at x={:.0} after {:.2}s",
            cause,
            self.player.pos.x,
            self.elapsed
        );
    }

    /// Latch the finish. Only a living, running player can finish.
    pub fn finish(&mut self) {
        if self.phase != Phase::Running || self.player.is_dead {
            return;
        }
        self.phase = Phase::Finished;
        self.events.push(GameEvent::Finished {
            deaths: self.death_count,
        });
        log::info!(
            "Level finished in {:.2}s with {} deaths",
            self.elapsed,
            self.death_count
        );
    }

    /// Suspend or resume the simulation
    pub fn set_paused(&mut self, paused: bool) {
        if self.paused == paused {
            return;
        }
        self.paused = paused;
        log::debug!("{}", if paused { "Paused" } else { "Resumed" });
        self.events.push(if paused {
            GameEvent::Paused
        } else {
            GameEvent::Resumed
        });
    }

    pub fn level_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    pub fn is_dead(&self) -> bool {
        self.phase == Phase::Dead
    }

    pub fn is_auto_running(&self) -> bool {
        self.auto_run.is_some()
    }

    /// Take the events produced since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> GameState {
        GameState::new(Tuning::default(), AnimationTimings::default())
    }

    #[test]
    fn test_new_attempt() {
        let state = state();
        assert_eq!(state.phase, Phase::Running);
        assert_eq!(state.player.pos, Vec2::new(-200.0, 500.0));
        assert_eq!(state.player.rect(), Rect::new(-200.0, 500.0, 40.0, 40.0));
        assert!(!state.player.can_jump);
        assert_eq!(state.camera.offset, Vec2::new(300.0, 400.0));
        assert_eq!(state.spawner.cursor(), 0);
    }

    #[test]
    fn test_restart_after_death_keeps_count() {
        let mut state = state();
        state.player.pos.x = 900.0;
        state.kill_player(DeathCause::Spike);
        assert!(state.is_dead());

        state.restart_after_death();
        assert_eq!(state.death_count, 1);
        assert_eq!(state.phase, Phase::Running);
        assert_eq!(state.player.pos.x, -200.0);
        assert!(state.obstacles.is_empty());
        assert_eq!(
            state.drain_events(),
            vec![
                GameEvent::Died {
                    cause: DeathCause::Spike
                },
                GameEvent::Restarted { deaths: 1 }
            ]
        );
    }

    #[test]
    fn test_reset_clears_count() {
        let mut state = state();
        state.death_count = 4;
        state.paused = true;
        state.reset();
        assert_eq!(state.death_count, 0);
        assert!(!state.paused);
    }

    #[test]
    fn test_finish_is_a_one_shot_latch() {
        let mut state = state();
        state.finish();
        state.finish();
        assert!(state.level_finished());
        assert_eq!(state.drain_events().len(), 1);

        // Dead players cannot finish
        let mut state = self::state();
        state.kill_player(DeathCause::OutOfBounds);
        state.finish();
        assert!(!state.level_finished());
    }

    #[test]
    fn test_death_animation_holds_last_frame() {
        let clip = AnimationTimings::default().death;
        let mut player = Player::new(Vec2::ZERO, 40.0);
        player.animate_death(&clip, 0.25);
        assert_eq!(player.frame, 2);
        player.animate_death(&clip, 5.0);
        assert_eq!(player.frame, 3);
    }

    #[test]
    fn test_run_animation_only_when_grounded() {
        let clip = AnimationTimings::default().run;
        let mut player = Player::new(Vec2::ZERO, 40.0);
        player.animate_run(&clip, 0.3);
        assert_eq!(player.frame, 0);

        player.can_jump = true;
        player.animate_run(&clip, 0.21);
        assert_eq!(player.frame, 1);
        player.animate_run(&clip, 0.21);
        assert_eq!(player.frame, 0);
    }
}
