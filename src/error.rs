//! Error types for loading level files and tuning data.
//!
//! Nothing in the simulation itself fails: deaths and dropped events are game
//! states, not errors. Only the one-shot reads at load time can go wrong.

use std::io;
use std::path::PathBuf;

/// Failure to load a level description.
#[derive(thiserror::Error, Debug)]
pub enum LevelError {
    #[error("Failed to read level file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed level data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Finish line x must be finite, found {0}")]
    InvalidFinishLine(f32),
}

/// Failure to load tuning data.
#[derive(thiserror::Error, Debug)]
pub enum TuningError {
    #[error("Failed to read tuning file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed tuning data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for level loading.
pub type LevelResult<T> = Result<T, LevelError>;
