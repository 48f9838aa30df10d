//! Live obstacles and their per-type behavior
//!
//! The obstacle type is fixed at spawn; each variant carries only the state
//! its behavior needs. Spawning (`Obstacle::from_event`) and the per-tick
//! behavior (`Obstacle::update`) each match on the type in exactly one place.

use serde::{Deserialize, Serialize};

use super::level::{EventKind, LevelEvent};
use super::rect::Rect;
use crate::consts::*;
use crate::platform::AnimationClip;
use crate::positive_or;

/// Detonation state of an exploding platform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Fuse {
    /// Waiting for the player to land on it
    Armed,
    /// Counting down after the first landing
    Burning { remaining: f32 },
    /// Detonated; explosion animation playing
    Exploding { elapsed: f32 },
    /// Animation finished; permanently inert
    Spent,
}

/// Obstacle type with type-specific state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ObstacleKind {
    StaticPlatform,
    /// Oscillates horizontally within `range` of `initial_x`
    MovingPlatform {
        velocity: f32,
        range: f32,
        initial_x: f32,
    },
    /// Kills on any overlap
    Spike,
    ExplodingPlatform { fuse: Fuse, fuse_length: f32 },
    /// Non-solid sensor granting timed auto-run
    BoostGate { duration: f32, multiplier: f32 },
}

/// A live obstacle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    /// Index of the spawning event in the level's sorted event list
    pub id: u32,
    pub rect: Rect,
    /// Collidable / triggerable; never set back to true once cleared
    pub active: bool,
    pub kind: ObstacleKind,
}

impl Obstacle {
    /// Materialize a level event
    pub fn from_event(id: u32, event: &LevelEvent) -> Self {
        let pos = event.position;
        let (param1, param2) = (event.params.x, event.params.y);

        let (rect, kind) = match event.kind {
            EventKind::StaticPlatform => (
                Rect::new(
                    pos.x,
                    pos.y,
                    positive_or(param1, STATIC_PLATFORM_DEFAULT_WIDTH),
                    PLATFORM_THICKNESS,
                ),
                ObstacleKind::StaticPlatform,
            ),
            EventKind::MovingPlatform => (
                Rect::new(pos.x, pos.y, MOVING_PLATFORM_WIDTH, PLATFORM_THICKNESS),
                ObstacleKind::MovingPlatform {
                    velocity: param2,
                    range: param1.abs(),
                    initial_x: pos.x,
                },
            ),
            EventKind::Spike => (
                Rect::new(pos.x, pos.y, SPIKE_SIZE, SPIKE_SIZE),
                ObstacleKind::Spike,
            ),
            EventKind::ExplodingPlatform => (
                Rect::new(pos.x, pos.y, EXPLODING_PLATFORM_WIDTH, PLATFORM_THICKNESS),
                ObstacleKind::ExplodingPlatform {
                    fuse: Fuse::Armed,
                    fuse_length: positive_or(param1, EXPLODE_TIMER_DEFAULT),
                },
            ),
            // The sensor hangs above the event position; the event carries its parameters
            EventKind::BoostGate => (
                Rect::new(
                    pos.x,
                    pos.y - BOOST_GATE_HEIGHT,
                    BOOST_GATE_WIDTH,
                    BOOST_GATE_HEIGHT,
                ),
                ObstacleKind::BoostGate {
                    duration: positive_or(param1, AUTO_RUN_DURATION_DEFAULT),
                    multiplier: positive_or(param2, AUTO_RUN_MULTIPLIER_DEFAULT),
                },
            ),
        };

        Self {
            id,
            rect,
            active: true,
            kind,
        }
    }

    /// Kills the player on contact
    pub fn is_lethal(&self) -> bool {
        matches!(self.kind, ObstacleKind::Spike)
    }

    /// Triggers an effect but never blocks the player
    pub fn is_signal(&self) -> bool {
        matches!(self.kind, ObstacleKind::BoostGate { .. })
    }

    /// Takes part in push-out resolution
    pub fn is_solid(&self) -> bool {
        self.active && !self.is_lethal() && !self.is_signal()
    }

    /// Player landed on top; lights an armed fuse. Returns true if it was lit.
    pub fn touch(&mut self) -> bool {
        match &mut self.kind {
            ObstacleKind::ExplodingPlatform { fuse, fuse_length } if *fuse == Fuse::Armed => {
                *fuse = Fuse::Burning {
                    remaining: *fuse_length,
                };
                true
            }
            _ => false,
        }
    }

    /// Exploding platform landed on at least once
    pub fn is_touched(&self) -> bool {
        matches!(
            self.kind,
            ObstacleKind::ExplodingPlatform { fuse, .. } if fuse != Fuse::Armed
        )
    }

    /// Disable a boost gate after use. Returns the auto-run it grants.
    pub fn consume_gate(&mut self) -> Option<(f32, f32)> {
        match self.kind {
            ObstacleKind::BoostGate {
                duration,
                multiplier,
            } if self.active => {
                self.active = false;
                Some((duration, multiplier))
            }
            _ => None,
        }
    }

    /// Advance per-type behavior by `dt`. Returns true on the tick the obstacle detonates.
    pub fn update(&mut self, dt: f32, explosion: &AnimationClip) -> bool {
        match self.kind {
            ObstacleKind::StaticPlatform | ObstacleKind::Spike | ObstacleKind::BoostGate { .. } => {
                false
            }

            ObstacleKind::MovingPlatform {
                ref mut velocity,
                range,
                initial_x,
            } => {
                if !self.active {
                    return false;
                }
                self.rect.x += *velocity * dt;
                let offset = self.rect.x - initial_x;
                // Reflect at the ends, never leaving [initial_x - range, initial_x + range]
                if offset >= range {
                    self.rect.x = initial_x + range;
                    *velocity = -velocity.abs();
                } else if offset <= -range {
                    self.rect.x = initial_x - range;
                    *velocity = velocity.abs();
                }
                false
            }

            ObstacleKind::ExplodingPlatform { ref mut fuse, .. } => match *fuse {
                Fuse::Armed | Fuse::Spent => false,
                Fuse::Burning { remaining } => {
                    let remaining = remaining - dt;
                    if remaining <= 0.0 {
                        self.active = false;
                        *fuse = Fuse::Exploding { elapsed: 0.0 };
                        true
                    } else {
                        *fuse = Fuse::Burning { remaining };
                        false
                    }
                }
                Fuse::Exploding { elapsed } => {
                    let elapsed = elapsed + dt;
                    *fuse = if explosion.frame_at(elapsed).is_some() {
                        Fuse::Exploding { elapsed }
                    } else {
                        Fuse::Spent
                    };
                    false
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::AnimationTimings;
    use proptest::prelude::*;

    const DT: f32 = 1.0 / 60.0;

    fn spawn(kind: EventKind, x: f32, y: f32, p1: f32, p2: f32) -> Obstacle {
        Obstacle::from_event(0, &LevelEvent::new(kind, x, y).with_params(p1, p2))
    }

    #[test]
    fn test_spawn_geometry_and_defaults() {
        let platform = spawn(EventKind::StaticPlatform, 100.0, 500.0, 0.0, 0.0);
        assert_eq!(platform.rect, Rect::new(100.0, 500.0, 200.0, 20.0));

        let wide = spawn(EventKind::StaticPlatform, 100.0, 500.0, 640.0, 0.0);
        assert_eq!(wide.rect.w, 640.0);

        let spike = spawn(EventKind::Spike, 300.0, 500.0, 0.0, 0.0);
        assert_eq!(spike.rect, Rect::new(300.0, 500.0, 40.0, 40.0));
        assert!(spike.is_lethal() && !spike.is_solid());

        let gate = spawn(EventKind::BoostGate, 50.0, 500.0, 0.0, 0.0);
        assert_eq!(gate.rect, Rect::new(50.0, 300.0, 20.0, 200.0));
        assert!(gate.is_signal() && !gate.is_solid());
        assert_eq!(
            gate.kind,
            ObstacleKind::BoostGate {
                duration: 3.0,
                multiplier: 1.5
            }
        );

        let exploding = spawn(EventKind::ExplodingPlatform, 0.0, 0.0, 0.0, 0.0);
        assert_eq!(exploding.rect.w, 150.0);
        assert_eq!(
            exploding.kind,
            ObstacleKind::ExplodingPlatform {
                fuse: Fuse::Armed,
                fuse_length: 1.0
            }
        );
    }

    #[test]
    fn test_moving_platform_reflects_at_range() {
        let mut platform = spawn(EventKind::MovingPlatform, 1000.0, 400.0, 100.0, 240.0);
        let explosion = AnimationTimings::default().explosion;
        let mut flips = 0;
        let mut last_sign = 1.0;

        for _ in 0..600 {
            platform.update(DT, &explosion);
            assert!(platform.rect.x >= 900.0 && platform.rect.x <= 1100.0);
            if let ObstacleKind::MovingPlatform { velocity, .. } = platform.kind {
                if velocity.signum() != last_sign {
                    flips += 1;
                    last_sign = velocity.signum();
                }
            }
        }
        // 10 s at 240 px/s over a 400 px round trip
        assert!(flips >= 10, "only {flips} direction changes");
    }

    #[test]
    fn test_moving_platform_with_zero_range_stays_put() {
        let mut platform = spawn(EventKind::MovingPlatform, 10.0, 0.0, 0.0, 50.0);
        let explosion = AnimationTimings::default().explosion;
        for _ in 0..10 {
            platform.update(DT, &explosion);
            assert_eq!(platform.rect.x, 10.0);
        }
    }

    #[test]
    fn test_exploding_platform_lifecycle() {
        let explosion = AnimationTimings::default().explosion;
        let mut platform = spawn(EventKind::ExplodingPlatform, 0.0, 0.0, 0.5, 0.0);

        // Untouched platforms never count down
        for _ in 0..120 {
            assert!(!platform.update(DT, &explosion));
        }
        assert!(platform.active && !platform.is_touched());

        assert!(platform.touch());
        assert!(!platform.touch(), "fuse is only lit once");

        let mut ticks = 0;
        while !platform.update(DT, &explosion) {
            ticks += 1;
            assert!(platform.active);
            assert!(ticks < 100);
        }
        assert!(!platform.active);
        assert!((29..=31).contains(&ticks), "detonated after {ticks} ticks");

        // Explosion plays for 5 × 0.08 s, then the platform is spent
        for _ in 0..30 {
            platform.update(DT, &explosion);
            assert!(!platform.active);
        }
        assert!(matches!(
            platform.kind,
            ObstacleKind::ExplodingPlatform {
                fuse: Fuse::Spent,
                ..
            }
        ));
        assert!(!platform.touch());
    }

    #[test]
    fn test_gate_is_single_use() {
        let mut gate = spawn(EventKind::BoostGate, 0.0, 0.0, 2.0, 2.5);
        assert_eq!(gate.consume_gate(), Some((2.0, 2.5)));
        assert!(!gate.active);
        assert_eq!(gate.consume_gate(), None);
    }

    proptest! {
        #[test]
        fn prop_moving_platform_stays_in_range(
            x in -5000.0f32..5000.0,
            range in -400.0f32..400.0,
            speed in -900.0f32..900.0,
            steps in prop::collection::vec(0.0f32..0.1, 1..300),
        ) {
            let explosion = AnimationTimings::default().explosion;
            let mut platform = spawn(EventKind::MovingPlatform, x, 0.0, range, speed);
            let bound = range.abs() + 0.01;

            for dt in steps {
                platform.update(dt, &explosion);
                prop_assert!((platform.rect.x - x).abs() <= bound, "x={} start={}", platform.rect.x, x);
            }
        }
    }
}
