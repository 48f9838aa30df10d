//! Read-only render export
//!
//! A renderer draws from a `FrameView` and never touches `GameState`
//! directly. Obstacle sprites are chosen here, in one match over the
//! obstacle type.

use glam::Vec2;
use serde::Serialize;

use super::level::Level;
use super::obstacle::{Fuse, Obstacle, ObstacleKind};
use super::rect::Rect;
use super::state::{Camera, GameState};
use crate::platform::AnimationTimings;

/// What to draw for one obstacle
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum ObstacleSprite {
    Platform { rect: Rect },
    MovingPlatform { rect: Rect },
    Spike { rect: Rect },
    /// Exploding platform; `heat` rises from 0 when lit to 1 at detonation
    FusingPlatform { rect: Rect, heat: f32 },
    BoostGate { rect: Rect },
    Explosion { center: Vec2, frame: usize },
}

/// Player sprite selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlayerPose {
    Running { frame: usize },
    JumpUp,
    JumpDown,
    Dying { frame: usize },
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameView {
    pub camera: Camera,
    pub player_rect: Rect,
    pub pose: PlayerPose,
    /// Back to front, in spawn order
    pub obstacles: Vec<ObstacleSprite>,
    pub finish_line: Rect,
    pub deaths: u32,
    pub paused: bool,
    /// Show the "game over" overlay while the death sequence plays
    pub game_over_overlay: bool,
    pub auto_running: bool,
}

/// Build the render view of the current attempt
pub fn frame_view(state: &GameState, level: &Level) -> FrameView {
    FrameView {
        camera: state.camera,
        player_rect: state.player.rect(),
        pose: player_pose(state),
        obstacles: state
            .obstacles
            .iter()
            .filter_map(|o| obstacle_sprite(o, &state.animations))
            .collect(),
        finish_line: level.finish_line(),
        deaths: state.death_count,
        paused: state.paused,
        game_over_overlay: state.is_dead(),
        auto_running: state.is_auto_running(),
    }
}

fn player_pose(state: &GameState) -> PlayerPose {
    let player = &state.player;
    if player.is_dead {
        PlayerPose::Dying {
            frame: player.frame,
        }
    } else if player.can_jump {
        PlayerPose::Running {
            frame: player.frame,
        }
    } else if player.vel.y < 0.0 {
        PlayerPose::JumpUp
    } else {
        PlayerPose::JumpDown
    }
}

/// Sprite for one obstacle, or None once it has nothing left to show
fn obstacle_sprite(obstacle: &Obstacle, animations: &AnimationTimings) -> Option<ObstacleSprite> {
    let rect = obstacle.rect;
    match obstacle.kind {
        ObstacleKind::StaticPlatform => Some(ObstacleSprite::Platform { rect }),
        ObstacleKind::MovingPlatform { .. } => Some(ObstacleSprite::MovingPlatform { rect }),
        ObstacleKind::Spike => Some(ObstacleSprite::Spike { rect }),
        ObstacleKind::BoostGate { .. } => {
            obstacle.active.then_some(ObstacleSprite::BoostGate { rect })
        }
        ObstacleKind::ExplodingPlatform { fuse, fuse_length } => match fuse {
            Fuse::Armed => Some(ObstacleSprite::FusingPlatform { rect, heat: 0.0 }),
            Fuse::Burning { remaining } => Some(ObstacleSprite::FusingPlatform {
                rect,
                heat: (1.0 - remaining / fuse_length).clamp(0.0, 1.0),
            }),
            Fuse::Exploding { elapsed } => {
                animations
                    .explosion
                    .frame_at(elapsed)
                    .map(|frame| ObstacleSprite::Explosion {
                        center: rect.center(),
                        frame,
                    })
            }
            Fuse::Spent => None,
        },
    }
}
