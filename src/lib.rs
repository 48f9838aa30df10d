//! Neon Jump - An auto-runner platforming simulation
//!
//! Core modules:
//! - `sim`: Simulation (level streaming, physics, collisions, obstacle behavior)
//! - `session`: Level attempt orchestration (pause bridging, restarts, queries)
//! - `platform`: Collaborator seams (pause menu, audio cues, animation timings)
//! - `tuning`: Data-driven game balance
//! - `error`: Load errors

pub mod error;
pub mod platform;
pub mod session;
pub mod sim;
pub mod tuning;

pub use error::{LevelError, TuningError};
pub use session::Session;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Simulation timestep used by the headless runner (one tick per 60 Hz frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Longest frame the session will simulate in one update (hitches are clamped)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Default viewport (window) size
    pub const VIEWPORT_WIDTH: f32 = 1200.0;
    pub const VIEWPORT_HEIGHT: f32 = 800.0;

    /// Player physics (pixels, pixels/s, pixels/s²)
    pub const GRAVITY: f32 = 1200.0;
    pub const PLAYER_JUMP_FORCE: f32 = -600.0;
    pub const PLAYER_HORIZONTAL_SPEED: f32 = 350.0;
    pub const PLAYER_SIZE: f32 = 40.0;
    pub const PLAYER_START_X: f32 = -200.0;
    pub const PLAYER_START_Y: f32 = 500.0;

    /// Events spawn when closer than this many viewport widths ahead of the player
    pub const LOOK_AHEAD_FACTOR: f32 = 1.5;
    /// Seconds between death and automatic restart
    pub const RESTART_DELAY: f32 = 2.0;
    /// Player dies below this many viewport heights
    pub const OUT_OF_BOUNDS_FACTOR: f32 = 2.0;

    /// Finish line defaults (a tall band at `finishLineX`)
    pub const DEFAULT_FINISH_LINE_X: f32 = 10_000.0;
    pub const FINISH_LINE_TOP: f32 = -1000.0;
    pub const FINISH_LINE_WIDTH: f32 = 50.0;
    pub const FINISH_LINE_HEIGHT: f32 = 2000.0;

    /// Obstacle geometry
    pub const PLATFORM_THICKNESS: f32 = 20.0;
    pub const STATIC_PLATFORM_DEFAULT_WIDTH: f32 = 200.0;
    pub const MOVING_PLATFORM_WIDTH: f32 = 180.0;
    pub const EXPLODING_PLATFORM_WIDTH: f32 = 150.0;
    pub const SPIKE_SIZE: f32 = 40.0;
    pub const BOOST_GATE_WIDTH: f32 = 20.0;
    pub const BOOST_GATE_HEIGHT: f32 = 200.0;

    /// Obstacle behavior defaults
    pub const EXPLODE_TIMER_DEFAULT: f32 = 1.0;
    pub const AUTO_RUN_DURATION_DEFAULT: f32 = 3.0;
    pub const AUTO_RUN_MULTIPLIER_DEFAULT: f32 = 1.5;
}

/// Replace a non-positive parameter with its default
#[inline]
pub fn positive_or(value: f32, default: f32) -> f32 {
    if value > 0.0 { value } else { default }
}
