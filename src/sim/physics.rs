//! Player physics integration
//!
//! Semi-implicit Euler, split per axis so collisions can be resolved between
//! the horizontal and vertical moves.

use super::state::{AutoRun, Player};

/// Horizontal speed for this tick: boosted while auto-running, else the base run speed
pub fn run_speed(base: f32, auto_run: Option<&AutoRun>) -> f32 {
    match auto_run {
        Some(boost) => base * boost.multiplier,
        None => base,
    }
}

/// Count down auto-run. Returns true on the tick it runs out.
pub fn advance_auto_run(auto_run: &mut Option<AutoRun>, dt: f32) -> bool {
    let Some(boost) = auto_run else {
        return false;
    };
    boost.remaining -= dt;
    if boost.remaining <= 0.0 {
        *auto_run = None;
        return true;
    }
    false
}

/// Jump if grounded. Returns true if the jump happened.
pub fn try_jump(player: &mut Player, jump_force: f32) -> bool {
    if !player.can_jump {
        return false;
    }
    player.vel.y = jump_force;
    player.can_jump = false;
    true
}

/// Move along x with the current horizontal velocity
pub fn integrate_horizontal(player: &mut Player, dt: f32) {
    player.pos.x += player.vel.x * dt;
}

/// Apply gravity, then move along y. Clears grounded until a landing restores it.
pub fn integrate_vertical(player: &mut Player, gravity: f32, dt: f32) {
    player.vel.y += gravity * dt;
    player.pos.y += player.vel.y * dt;
    player.can_jump = false;
}
