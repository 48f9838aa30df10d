//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering,
//! audio and input devices:
//! - Levels are loaded once and shared read-only across attempts
//! - One `GameState` per attempt, advanced only through `tick`
//! - Obstacles are processed in spawn order

pub mod collision;
pub mod level;
pub mod obstacle;
pub mod physics;
pub mod rect;
pub mod spawner;
pub mod state;
pub mod tick;
pub mod view;

pub use collision::{GateTrigger, VerticalContact};
pub use level::{EventKind, Level, LevelEvent};
pub use obstacle::{Fuse, Obstacle, ObstacleKind};
pub use rect::Rect;
pub use spawner::EventSpawner;
pub use state::{AutoRun, Camera, DeathCause, GameEvent, GameState, Phase, Player};
pub use tick::{TickInput, tick};
pub use view::{FrameView, ObstacleSprite, PlayerPose, frame_view};
