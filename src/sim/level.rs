//! Level descriptions and the level file loader
//!
//! A level is a finish line plus a list of spawn events sorted by trigger x.
//! Level files are JSON:
//!
//! ```json
//! {
//!   "finishLineX": 4000,
//!   "events": [
//!     { "type": "STATIC_PLATFORM", "position": { "x": 100, "y": 500 }, "param1": 300 },
//!     { "type": "SPIKE", "position": { "x": 900, "y": 460 } }
//!   ]
//! }
//! ```

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;
use crate::error::{LevelError, LevelResult};

/// Obstacle type named by a level event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// param1 = width (default 200)
    StaticPlatform,
    /// param1 = oscillation range, param2 = initial horizontal speed
    MovingPlatform,
    Spike,
    /// param1 = fuse seconds after first landing (default 1.0)
    ExplodingPlatform,
    /// param1 = auto-run seconds (default 3.0), param2 = speed multiplier (default 1.5)
    BoostGate,
}

impl EventKind {
    /// Map a level-file type name to a kind (case-sensitive)
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "STATIC_PLATFORM" => Some(EventKind::StaticPlatform),
            "MOVING_PLATFORM" => Some(EventKind::MovingPlatform),
            "SPIKE" => Some(EventKind::Spike),
            "EXPLODING_PLATFORM" => Some(EventKind::ExplodingPlatform),
            "BOOST_GATE" => Some(EventKind::BoostGate),
            _ => None,
        }
    }

    pub fn as_tag(&self) -> &'static str {
        match self {
            EventKind::StaticPlatform => "STATIC_PLATFORM",
            EventKind::MovingPlatform => "MOVING_PLATFORM",
            EventKind::Spike => "SPIKE",
            EventKind::ExplodingPlatform => "EXPLODING_PLATFORM",
            EventKind::BoostGate => "BOOST_GATE",
        }
    }
}

/// One spawn event; immutable once loaded
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelEvent {
    pub kind: EventKind,
    /// Trigger position; also the obstacle's anchor
    pub position: Vec2,
    /// Type-dependent parameters (param1, param2)
    pub params: Vec2,
}

impl LevelEvent {
    pub fn new(kind: EventKind, x: f32, y: f32) -> Self {
        Self {
            kind,
            position: Vec2::new(x, y),
            params: Vec2::ZERO,
        }
    }

    pub fn with_params(mut self, param1: f32, param2: f32) -> Self {
        self.params = Vec2::new(param1, param2);
        self
    }
}

/// A loaded level, shared read-only by every attempt
#[derive(Debug, Clone)]
pub struct Level {
    finish_line: Rect,
    /// Sorted ascending by trigger x
    events: Vec<LevelEvent>,
    /// Records skipped because their type name was not recognized
    dropped_events: usize,
}

impl Level {
    /// Build a level from events in any order
    pub fn new(finish_line_x: f32, mut events: Vec<LevelEvent>) -> Self {
        // Stable sort: equal trigger x keeps file order
        events.sort_by(|a, b| a.position.x.total_cmp(&b.position.x));
        Self {
            finish_line: Rect::new(
                finish_line_x,
                FINISH_LINE_TOP,
                FINISH_LINE_WIDTH,
                FINISH_LINE_HEIGHT,
            ),
            events,
            dropped_events: 0,
        }
    }

    /// Parse a level from JSON text
    pub fn from_json_str(json: &str) -> LevelResult<Self> {
        let file: LevelFile = serde_json::from_str(json)?;
        if !file.finish_line_x.is_finite() {
            return Err(LevelError::InvalidFinishLine(file.finish_line_x));
        }

        let total = file.events.len();
        let mut events = Vec::with_capacity(total);
        for record in file.events {
            match EventKind::from_tag(&record.kind) {
                Some(kind) => events.push(LevelEvent {
                    kind,
                    position: Vec2::new(record.position.x, record.position.y),
                    params: Vec2::new(record.param1, record.param2),
                }),
                None => log::warn!(
                    "Dropping level event with unknown type {:?} at x={}",
                    record.kind,
                    record.position.x
                ),
            }
        }

        let mut level = Self::new(file.finish_line_x, events);
        level.dropped_events = total - level.events.len();
        Ok(level)
    }

    /// Read and parse a level file
    pub fn from_file(path: impl AsRef<Path>) -> LevelResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| LevelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let level = Self::from_json_str(&json)?;
        log::info!(
            "Loaded level {}: {} events, finish at x={}",
            path.display(),
            level.events.len(),
            level.finish_line.x
        );
        Ok(level)
    }

    pub fn finish_line(&self) -> Rect {
        self.finish_line
    }

    pub fn events(&self) -> &[LevelEvent] {
        &self.events
    }

    pub fn dropped_events(&self) -> usize {
        self.dropped_events
    }
}

// === File format ===

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LevelFile {
    #[serde(default = "default_finish_line_x")]
    finish_line_x: f32,
    #[serde(default)]
    events: Vec<EventRecord>,
}

fn default_finish_line_x() -> f32 {
    DEFAULT_FINISH_LINE_X
}

#[derive(Debug, Deserialize)]
struct EventRecord {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    position: PositionRecord,
    #[serde(default)]
    param1: f32,
    #[serde(default)]
    param2: f32,
}

#[derive(Debug, Default, Deserialize)]
struct PositionRecord {
    #[serde(default)]
    x: f32,
    #[serde(default)]
    y: f32,
}
