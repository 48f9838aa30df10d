//! Event spawner: streams level events into live obstacles
//!
//! Events are consumed strictly in list order through a cursor that only moves
//! forward, so each event is materialized at most once.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use super::level::LevelEvent;
use super::obstacle::Obstacle;

/// Cursor into a level's sorted event list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSpawner {
    next_event: usize,
}

impl EventSpawner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the next event to materialize
    pub fn cursor(&self) -> usize {
        self.next_event
    }

    /// All events consumed
    pub fn is_exhausted(&self, events: &[LevelEvent]) -> bool {
        self.next_event >= events.len()
    }

    /// Spawn every pending event whose trigger x is less than `player_x + look_ahead`.
    ///
    /// Returns the range of event indices materialized this call.
    pub fn spawn_due(
        &mut self,
        events: &[LevelEvent],
        player_x: f32,
        look_ahead: f32,
        obstacles: &mut Vec<Obstacle>,
    ) -> Range<usize> {
        let start = self.next_event;
        let horizon = player_x + look_ahead;

        while let Some(event) = events.get(self.next_event) {
            if event.position.x >= horizon {
                break;
            }
            obstacles.push(Obstacle::from_event(self.next_event as u32, event));
            self.next_event += 1;
        }

        start..self.next_event
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::level::{EventKind, Level};
    use proptest::prelude::*;

    fn spikes_at(xs: &[f32]) -> Level {
        Level::new(
            10_000.0,
            xs.iter()
                .map(|&x| LevelEvent::new(EventKind::Spike, x, 0.0))
                .collect(),
        )
    }

    #[test]
    fn test_spawns_only_within_look_ahead() {
        let level = spikes_at(&[100.0, 1500.0, 1799.0, 1800.0, 5000.0]);
        let mut spawner = EventSpawner::new();
        let mut obstacles = Vec::new();

        let spawned = spawner.spawn_due(level.events(), 0.0, 1800.0, &mut obstacles);
        assert_eq!(spawned, 0..3);
        assert_eq!(obstacles.len(), 3);

        // Nothing new until the player moves
        let spawned = spawner.spawn_due(level.events(), 0.0, 1800.0, &mut obstacles);
        assert!(spawned.is_empty());

        let spawned = spawner.spawn_due(level.events(), 10.0, 1800.0, &mut obstacles);
        assert_eq!(spawned, 3..4);
        assert_eq!(obstacles[3].rect.x, 1800.0);
        assert_eq!(obstacles[3].id, 3);
        assert!(!spawner.is_exhausted(level.events()));
    }

    #[test]
    fn test_empty_level_spawns_nothing() {
        let level = spikes_at(&[]);
        let mut spawner = EventSpawner::new();
        let mut obstacles = Vec::new();
        assert!(spawner.spawn_due(level.events(), 0.0, 1800.0, &mut obstacles).is_empty());
        assert!(spawner.is_exhausted(level.events()));
    }

    proptest! {
        #[test]
        fn prop_each_event_spawned_once_in_order(
            xs in prop::collection::vec(-2000.0f32..20_000.0, 0..60),
            steps in prop::collection::vec(0.0f32..600.0, 1..80),
        ) {
            let level = spikes_at(&xs);
            let mut spawner = EventSpawner::new();
            let mut obstacles = Vec::new();
            let mut player_x = -200.0;
            let mut last_cursor = 0;

            for step in steps {
                player_x += step;
                let spawned = spawner.spawn_due(level.events(), player_x, 1800.0, &mut obstacles);
                prop_assert_eq!(spawned.start, last_cursor);
                prop_assert!(spawner.cursor() >= last_cursor);
                last_cursor = spawner.cursor();
            }

            // Ids are consecutive event indices, trigger x non-decreasing
            for (i, obstacle) in obstacles.iter().enumerate() {
                prop_assert_eq!(obstacle.id as usize, i);
            }
            for pair in obstacles.windows(2) {
                prop_assert!(pair[0].rect.x <= pair[1].rect.x);
            }
            // Every event behind the horizon has been spawned
            let horizon = player_x + 1800.0;
            let due = level.events().iter().filter(|e| e.position.x < horizon).count();
            prop_assert_eq!(obstacles.len(), due);
        }
    }
}
