//! Level files.
//!
//! A level is a JSON object of the form
//! ```json
//! {
//!     "walls": [[[x, y], ...], [[x, y], ...]],
//!     "checkpoints": [[[x, y], [x, y]], ...],
//!     "start": [x, y],
//!     "startangle": 0
//! }
//! ```
//! where the first wall is the outer boundary and the second the inner one.

pub use self::import::{parse_checkpoint_layer, parse_wall_path};
use crate::car::Pose;
use crate::error::TrackError;
use crate::math::{Point2d, Polygon, Segment};
use crate::track::{Track, Traversal};
use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;

mod import;

/// The contents of a level file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Level {
    /// The outer and inner wall polygons.
    pub walls: Vec<Vec<[f64; 2]>>,
    /// The checkpoint gates.
    pub checkpoints: Vec<Segment>,
    /// The car's starting position.
    pub start: [f64; 2],
    /// The car's starting heading in degrees.
    #[serde(rename = "startangle")]
    pub start_angle: f64,
    /// The order in which the checkpoints are visited.
    #[serde(default)]
    pub traversal: Traversal,
    /// The size of the playing field.
    #[serde(default = "default_dimensions")]
    pub dimensions: [u32; 2],
}

fn default_dimensions() -> [u32; 2] {
    [1366, 768]
}

impl Level {
    /// Parses a level from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, TrackError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a level from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TrackError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| TrackError::Io {
            path: path.to_owned(),
            source,
        })?;
        let level = Self::from_json_str(&json)?;
        info!(
            "Loaded level {} ({} checkpoints)",
            path.display(),
            level.checkpoints.len()
        );
        Ok(level)
    }

    /// The car's starting pose.
    pub fn start_pose(&self) -> Pose {
        Pose {
            position: Point2d::new(self.start[0], self.start[1]),
            heading: self.start_angle,
        }
    }

    /// Builds the track described by this level.
    pub fn to_track(&self) -> Result<Track, TrackError> {
        let [outer, inner] = match self.walls.as_slice() {
            [outer, inner] => [outer, inner].map(|w| Polygon::from(w.clone())),
            walls => return Err(TrackError::WallCount(walls.len())),
        };
        Track::new(
            outer,
            inner,
            self.checkpoints.clone(),
            self.traversal,
            self.start_pose(),
        )
    }
}
