//! Conversion of vector drawings into levels.
//!
//! Walls are drawn as a single path, `{"level": [["M", x, y], ["l", dx, dy], ...]}`,
//! where `M` and `L` give absolute points, `l` a point relative to the previous one,
//! and any command without arguments ends the outer wall and starts the inner one.
//! Checkpoints are drawn as two-point paths in the first layer of a drawing,
//! `{"layers": [{"paths": [{"points": [[x, y], [x, y]]}, ...]}]}`.

use super::{default_dimensions, Level};
use crate::error::TrackError;
use crate::math::Segment;
use crate::track::Traversal;
use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize)]
struct WallDrawing {
    level: Vec<Vec<Value>>,
}

#[derive(Deserialize)]
struct CheckpointDrawing {
    layers: Vec<Layer>,
}

#[derive(Deserialize)]
struct Layer {
    paths: Vec<Path>,
}

#[derive(Deserialize)]
struct Path {
    points: Segment,
}

/// Parses a wall drawing into the outer and inner wall polygons.
pub fn parse_wall_path(json: &str) -> Result<Vec<Vec<[f64; 2]>>, TrackError> {
    let drawing: WallDrawing = serde_json::from_str(json)?;
    let mut walls = vec![vec![], vec![]];
    let mut wall = 0;
    let mut cursor: Option<[f64; 2]> = None;

    for (index, command) in drawing.level.iter().enumerate() {
        let bad_command = || TrackError::PathCommand {
            index,
            command: Value::Array(command.clone()).to_string(),
        };

        if command.len() == 1 {
            wall = 1;
            continue;
        }
        let (op, x, y) = match command.as_slice() {
            [Value::String(op), x, y] => (op.as_str(), x.as_f64(), y.as_f64()),
            _ => return Err(bad_command()),
        };
        let (x, y) = x.zip(y).ok_or_else(bad_command)?;
        let point = match (op, cursor) {
            ("M" | "L", _) => [x, y],
            ("l", Some([cx, cy])) => [cx + x, cy + y],
            _ => return Err(bad_command()),
        };
        walls[wall].push(point);
        cursor = Some(point);
    }

    Ok(walls)
}

/// Parses the checkpoint gates from the first layer of a drawing.
pub fn parse_checkpoint_layer(json: &str) -> Result<Vec<Segment>, TrackError> {
    let drawing: CheckpointDrawing = serde_json::from_str(json)?;
    Ok(drawing
        .layers
        .into_iter()
        .next()
        .map(|layer| layer.paths.into_iter().map(|path| path.points).collect())
        .unwrap_or_default())
}

impl Level {
    /// Builds a level from a wall drawing and a checkpoint drawing.
    pub fn from_drawings(
        walls_json: &str,
        checkpoints_json: &str,
        start: [f64; 2],
        start_angle: f64,
    ) -> Result<Self, TrackError> {
        Ok(Self {
            walls: parse_wall_path(walls_json)?,
            checkpoints: parse_checkpoint_layer(checkpoints_json)?,
            start,
            start_angle,
            traversal: Traversal::default(),
            dimensions: default_dimensions(),
        })
    }
}
