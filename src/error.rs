//! Errors raised while loading and validating tracks.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building a track.
#[derive(Debug, Error)]
pub enum TrackError {
    /// The level file could not be read.
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The level file is not valid JSON or is missing required keys.
    #[error("malformed level: {0}")]
    Json(#[from] serde_json::Error),

    /// A track needs exactly an outer and an inner wall.
    #[error("expected 2 wall polygons, got {0}")]
    WallCount(usize),

    /// A wall polygon has too few vertices to enclose anything.
    #[error("wall polygon {polygon} has {vertices} vertices, at least 3 are needed")]
    TooFewVertices { polygon: usize, vertices: usize },

    /// A coordinate is infinite or NaN.
    #[error("non-finite coordinate in {0}")]
    NonFinite(&'static str),

    /// A track needs at least one checkpoint.
    #[error("the track has no checkpoints")]
    NoCheckpoints,

    /// A wall path command could not be understood.
    #[error("bad wall path command {index}: {command}")]
    PathCommand { index: usize, command: String },
}
