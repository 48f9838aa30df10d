//! Level session: the caller-facing controller for one loaded level
//!
//! Owns the level, the current attempt and the collaborators. The outer
//! application calls `update` once per rendered frame and polls the queries.

use std::path::Path;

use crate::consts::MAX_FRAME_DT;
use crate::error::LevelError;
use crate::platform::{AnimationTimings, AudioSink, LogAudio, NullPauseMenu, PauseMenu, SoundCue};
use crate::sim::{FrameView, GameEvent, GameState, Level, TickInput, frame_view, tick};
use crate::tuning::Tuning;

/// Runs attempts at a level and bridges the pause menu and audio collaborators
pub struct Session<P = NullPauseMenu, A = LogAudio> {
    tuning: Tuning,
    animations: AnimationTimings,
    level: Option<Level>,
    /// None until a level is loaded and initialized
    state: Option<GameState>,
    last_load_error: Option<LevelError>,
    pause_menu: P,
    audio: A,
    /// Events forwarded to the caller since the last drain
    events: Vec<GameEvent>,
}

impl Session {
    /// Session with a menu that never selects anything and log-only audio
    pub fn new(tuning: Tuning) -> Self {
        Self::with_collaborators(
            tuning,
            AnimationTimings::default(),
            NullPauseMenu,
            LogAudio::new(),
        )
    }
}

impl<P: PauseMenu, A: AudioSink> Session<P, A> {
    pub fn with_collaborators(
        tuning: Tuning,
        animations: AnimationTimings,
        pause_menu: P,
        audio: A,
    ) -> Self {
        Self {
            tuning,
            animations,
            level: None,
            state: None,
            last_load_error: None,
            pause_menu,
            audio,
            events: Vec::new(),
        }
    }

    // === Loading ===

    /// Load a level file and start a fresh attempt. Returns false if the file
    /// could not be read or parsed; the session is then left unloaded.
    pub fn load_level(&mut self, path: impl AsRef<Path>) -> bool {
        let result = Level::from_file(path);
        self.accept_level(result)
    }

    /// Like `load_level`, from JSON text
    pub fn load_level_from_str(&mut self, json: &str) -> bool {
        let result = Level::from_json_str(json);
        self.accept_level(result)
    }

    /// Use an already-built level and start a fresh attempt
    pub fn set_level(&mut self, level: Level) {
        self.level = Some(level);
        self.last_load_error = None;
        self.init();
    }

    fn accept_level(&mut self, result: Result<Level, LevelError>) -> bool {
        match result {
            Ok(level) => {
                if level.dropped_events() > 0 {
                    log::warn!(
                        "{} level events had unknown types and were dropped",
                        level.dropped_events()
                    );
                }
                self.set_level(level);
                true
            }
            Err(e) => {
                log::error!("Level load failed: {e}");
                self.unload_level();
                self.last_load_error = Some(e);
                false
            }
        }
    }

    /// Drop the level and the current attempt
    pub fn unload_level(&mut self) {
        self.level = None;
        self.state = None;
        self.events.clear();
    }

    /// Start a fresh attempt: player at the start, no obstacles, zero deaths.
    /// Does nothing if no level is loaded.
    pub fn init(&mut self) {
        if self.level.is_none() {
            log::warn!("Cannot start an attempt without a loaded level");
            return;
        }
        self.state = Some(GameState::new(self.tuning.clone(), self.animations));
        log::info!("Level attempt started");
    }

    // === Per frame ===

    /// Advance by one frame of `dt` seconds. A no-op while unloaded or finished.
    pub fn update(&mut self, input: &TickInput, dt: f32) {
        self.events.clear();
        let (Some(level), Some(state)) = (self.level.as_ref(), self.state.as_mut()) else {
            return;
        };
        if state.level_finished() {
            return;
        }

        // NaN and infinite frame times would poison every position
        let dt = if dt.is_finite() {
            dt.clamp(0.0, MAX_FRAME_DT)
        } else {
            0.0
        };
        let was_paused = state.paused;
        tick(state, level, input, dt);

        if state.paused {
            if !was_paused {
                self.pause_menu.init();
            }
            self.pause_menu.update();

            if self.pause_menu.should_resume() {
                state.set_paused(false);
            } else if self.pause_menu.should_restart() {
                state.reset();
                state.events.push(GameEvent::Restarted { deaths: 0 });
                log::info!("Level restarted from the pause menu");
            }
        }

        for event in state.drain_events() {
            match event {
                GameEvent::Jumped => self.audio.play(SoundCue::Jump),
                GameEvent::Died { .. } => self.audio.play(SoundCue::Death),
                _ => {}
            }
            self.events.push(event);
        }
    }

    // === Queries ===

    pub fn is_loaded(&self) -> bool {
        self.level.is_some()
    }

    pub fn is_level_finished(&self) -> bool {
        self.state.as_ref().is_some_and(GameState::level_finished)
    }

    /// Deaths in the current attempt
    pub fn score(&self) -> u32 {
        self.state.as_ref().map_or(0, |s| s.death_count)
    }

    pub fn is_paused(&self) -> bool {
        self.state.as_ref().is_some_and(|s| s.paused)
    }

    /// The pause menu asked to leave the level
    pub fn should_exit_to_menu(&self) -> bool {
        self.is_paused() && self.pause_menu.should_exit_to_menu()
    }

    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    pub fn level(&self) -> Option<&Level> {
        self.level.as_ref()
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Render view of the current attempt
    pub fn frame_view(&self) -> Option<FrameView> {
        let (level, state) = (self.level.as_ref()?, self.state.as_ref()?);
        Some(frame_view(state, level))
    }

    /// Take the events produced by the latest `update`. Each update
    /// replaces the previous frame's events, drained or not.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn last_load_error(&self) -> Option<&LevelError> {
        self.last_load_error.as_ref()
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn pause_menu(&self) -> &P {
        &self.pause_menu
    }

    pub fn pause_menu_mut(&mut self) -> &mut P {
        &mut self.pause_menu
    }
}
