//! Per-frame simulation tick
//!
//! Core game loop that advances one level attempt by `dt` seconds.

use super::collision::{
    out_of_bounds, reached_finish, resolve_horizontal, resolve_vertical, trigger_boost_gates,
};
use super::level::Level;
use super::physics;
use super::state::{AutoRun, DeathCause, GameEvent, GameState};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Jump (space/click); ignored while airborne
    pub jump: bool,
    /// Pause toggle
    pub pause: bool,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, level: &Level, input: &TickInput, dt: f32) {
    // Finished attempts stay frozen until the level is unloaded
    if state.level_finished() {
        return;
    }

    if input.pause {
        state.set_paused(!state.paused);
    }
    if state.paused {
        return;
    }

    if state.is_dead() {
        tick_dead(state, dt);
        return;
    }

    state.elapsed += dt;

    // === Spawn due events ===
    let look_ahead = state.tuning.look_ahead_distance();
    let spawned = state.spawner.spawn_due(
        level.events(),
        state.player.pos.x,
        look_ahead,
        &mut state.obstacles,
    );
    for index in spawned {
        state.events.push(GameEvent::Spawned {
            id: index as u32,
            kind: level.events()[index].kind,
        });
    }

    // === Player physics, horizontal ===
    state.player.vel.x = physics::run_speed(state.tuning.run_speed, state.auto_run.as_ref());
    if physics::advance_auto_run(&mut state.auto_run, dt) {
        state.events.push(GameEvent::BoostEnded);
        log::debug!("Auto-run ended at x={:.0}", state.player.pos.x);
    }

    if input.jump && physics::try_jump(&mut state.player, state.tuning.jump_force) {
        state.events.push(GameEvent::Jumped);
    }

    physics::integrate_horizontal(&mut state.player, dt);
    resolve_horizontal(&mut state.player, &state.obstacles);

    // === Player physics, vertical ===
    physics::integrate_vertical(&mut state.player, state.tuning.gravity, dt);
    let contact = resolve_vertical(&mut state.player, &mut state.obstacles);
    if let Some(id) = contact.lethal {
        log::debug!("Spike {} hit", id);
        state.kill_player(DeathCause::Spike);
        return;
    }
    if let Some(id) = contact.lit_fuse {
        log::debug!("Fuse lit on platform {}", id);
    }

    // === Boost gates ===
    if let Some(gate) = trigger_boost_gates(&state.player, &mut state.obstacles) {
        log::debug!(
            "Boost gate {} hit: {:.1}s at {:.2}x",
            gate.id,
            gate.duration,
            gate.multiplier
        );
        state.auto_run = Some(AutoRun {
            remaining: gate.duration,
            multiplier: gate.multiplier,
        });
        state.events.push(GameEvent::BoostStarted {
            id: gate.id,
            duration: gate.duration,
            multiplier: gate.multiplier,
        });
    }

    // === Obstacle behavior ===
    let explosion = state.animations.explosion;
    for obstacle in state.obstacles.iter_mut() {
        if obstacle.update(dt, &explosion) {
            log::debug!("Platform {} exploded", obstacle.id);
            state.events.push(GameEvent::Detonated { id: obstacle.id });
        }
    }

    let run = state.animations.run;
    state.player.animate_run(&run, dt);

    // === Death, finish, camera ===
    if out_of_bounds(&state.player, state.tuning.out_of_bounds_y()) {
        state.kill_player(DeathCause::OutOfBounds);
        return;
    }

    if reached_finish(&state.player, &level.finish_line()) {
        state.finish();
    }

    state.camera.target.x = state.player.pos.x;
}

/// Play the death sequence and restart once the delay has passed
fn tick_dead(state: &mut GameState, dt: f32) {
    let death = state.animations.death;
    state.player.animate_death(&death, dt);

    state.restart_timer += dt;
    if state.restart_timer > state.tuning.restart_delay {
        state.restart_after_death();
    }
}
