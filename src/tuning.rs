//! Data-driven game balance
//!
//! Every field has a default, so a tuning file only needs the values it
//! overrides. Missing or unreadable tuning files fall back to defaults.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::TuningError;

/// Simulation tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Viewport ===
    /// Visible width; drives the spawn look-ahead
    pub viewport_width: f32,
    /// Visible height; drives the out-of-bounds floor and camera offset
    pub viewport_height: f32,

    // === Player ===
    pub gravity: f32,
    /// Vertical velocity applied on jump (negative is up)
    pub jump_force: f32,
    /// Base rightward run speed
    pub run_speed: f32,
    pub player_size: f32,
    pub player_start: Vec2,

    // === Level flow ===
    pub look_ahead_factor: f32,
    pub restart_delay: f32,
    pub out_of_bounds_factor: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,

            gravity: GRAVITY,
            jump_force: PLAYER_JUMP_FORCE,
            run_speed: PLAYER_HORIZONTAL_SPEED,
            player_size: PLAYER_SIZE,
            player_start: Vec2::new(PLAYER_START_X, PLAYER_START_Y),

            look_ahead_factor: LOOK_AHEAD_FACTOR,
            restart_delay: RESTART_DELAY,
            out_of_bounds_factor: OUT_OF_BOUNDS_FACTOR,
        }
    }
}

impl Tuning {
    /// Distance ahead of the player within which events are spawned
    pub fn look_ahead_distance(&self) -> f32 {
        self.viewport_width * self.look_ahead_factor
    }

    /// Player y below which the player counts as fallen out of the level
    pub fn out_of_bounds_y(&self) -> f32 {
        self.viewport_height * self.out_of_bounds_factor
    }

    /// Camera offset that keeps the player a quarter of the way across the screen
    pub fn camera_offset(&self) -> Vec2 {
        Vec2::new(self.viewport_width / 4.0, self.viewport_height / 2.0)
    }

    /// Parse tuning from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, TuningError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read tuning from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| TuningError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Load tuning from a file, falling back to defaults on any error
    pub fn load(path: impl AsRef<Path>) -> Self {
        match Self::from_file(path) {
            Ok(tuning) => {
                log::info!("Loaded tuning overrides");
                tuning
            }
            Err(e) => {
                log::warn!("{e}; using default tuning");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let tuning = Tuning::from_json_str(r#"{ "run_speed": 500.0 }"#).unwrap();
        assert_eq!(tuning.run_speed, 500.0);
        assert_eq!(tuning.gravity, GRAVITY);
        assert_eq!(tuning.player_start, Vec2::new(PLAYER_START_X, PLAYER_START_Y));
    }

    #[test]
    fn test_derived_distances() {
        let tuning = Tuning::default();
        assert_eq!(tuning.look_ahead_distance(), 1800.0);
        assert_eq!(tuning.out_of_bounds_y(), 1600.0);
        assert_eq!(tuning.camera_offset(), Vec2::new(300.0, 400.0));
    }

    #[test]
    fn test_malformed_tuning_is_an_error() {
        assert!(matches!(
            Tuning::from_json_str("{ run_speed: "),
            Err(TuningError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let tuning = Tuning::load("/definitely/not/here/tuning.json");
        assert_eq!(tuning, Tuning::default());
    }
}
