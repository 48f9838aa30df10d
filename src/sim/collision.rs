//! Collision detection and response for the runner
//!
//! Resolution runs per axis, mirroring the split integration:
//! 1. Horizontal pass after the x move: push out of solid obstacles sideways.
//! 2. Vertical pass after gravity: land on, bump under, or die on obstacles.
//! 3. Boost gates last, so sensors never interfere with solid resolution.

use super::obstacle::Obstacle;
use super::rect::Rect;
use super::state::Player;

/// Result of the vertical pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VerticalContact {
    /// Spike that killed the player; later obstacles were not processed
    pub lethal: Option<u32>,
    /// Player came to rest on top of a platform
    pub landed: bool,
    /// Exploding platform whose fuse was lit by this landing
    pub lit_fuse: Option<u32>,
}

/// A boost gate the player just passed through
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GateTrigger {
    pub id: u32,
    pub duration: f32,
    pub multiplier: f32,
}

/// Push the player out of every active solid obstacle along x, against the direction of travel
pub fn resolve_horizontal(player: &mut Player, obstacles: &[Obstacle]) {
    let direction = player.vel.x;
    if direction == 0.0 {
        return;
    }

    // Each push moves the player strictly one way, so this settles within one push per obstacle
    for _ in 0..obstacles.len() {
        let rect = player.rect();
        let Some(obstacle) = obstacles
            .iter()
            .find(|o| o.is_solid() && rect.overlaps(&o.rect))
        else {
            return;
        };

        player.pos.x = if direction > 0.0 {
            obstacle.rect.left() - rect.w
        } else {
            obstacle.rect.right()
        };
    }
}

/// Resolve vertical overlaps in spawn order
pub fn resolve_vertical(player: &mut Player, obstacles: &mut [Obstacle]) -> VerticalContact {
    let mut contact = VerticalContact::default();

    for obstacle in obstacles.iter_mut() {
        if !obstacle.active {
            continue;
        }
        let rect = player.rect();
        if !rect.overlaps(&obstacle.rect) {
            continue;
        }
        if obstacle.is_lethal() {
            contact.lethal = Some(obstacle.id);
            return contact;
        }
        if obstacle.is_signal() {
            continue;
        }

        if player.vel.y > 0.0 {
            // Falling: rest on top
            player.pos.y = obstacle.rect.top() - rect.h;
            player.vel.y = 0.0;
            player.can_jump = true;
            contact.landed = true;
            if obstacle.touch() {
                contact.lit_fuse = Some(obstacle.id);
            }
        } else if player.vel.y < 0.0 {
            // Rising: bump the underside
            player.pos.y = obstacle.rect.bottom();
            player.vel.y = 0.0;
        }
    }

    contact
}

/// Consume every active boost gate the player overlaps. Returns the last one triggered.
pub fn trigger_boost_gates(player: &Player, obstacles: &mut [Obstacle]) -> Option<GateTrigger> {
    let rect = player.rect();
    let mut triggered = None;

    for obstacle in obstacles.iter_mut() {
        if !obstacle.is_signal() || !rect.overlaps(&obstacle.rect) {
            continue;
        }
        if let Some((duration, multiplier)) = obstacle.consume_gate() {
            triggered = Some(GateTrigger {
                id: obstacle.id,
                duration,
                multiplier,
            });
        }
    }

    triggered
}

/// Player has touched the finish band
pub fn reached_finish(player: &Player, finish_line: &Rect) -> bool {
    player.rect().overlaps(finish_line)
}

/// Player has fallen below the level floor
pub fn out_of_bounds(player: &Player, floor_y: f32) -> bool {
    player.pos.y > floor_y
}
