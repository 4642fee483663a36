use super::{Point2d, Transform, Vector2d};
use crate::util::Interval;
use cgmath::prelude::*;
use serde::{Deserialize, Serialize};

/// A finite line between two points.
///
/// Direction only matters for rays, whose origin is `first`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[[f64; 2]; 2]", into = "[[f64; 2]; 2]")]
pub struct Segment {
    pub first: Point2d,
    pub second: Point2d,
}

impl Segment {
    /// Creates a segment between two points.
    pub const fn new(first: Point2d, second: Point2d) -> Self {
        Self { first, second }
    }

    /// The vector from the first point to the second.
    pub fn vector(&self) -> Vector2d {
        self.second - self.first
    }

    /// The length of the segment.
    pub fn length(&self) -> f64 {
        self.vector().magnitude()
    }

    /// The point halfway along the segment.
    pub fn midpoint(&self) -> Point2d {
        self.first.midpoint(self.second)
    }

    /// Whether both end points share an x-coordinate.
    pub fn is_vertical(&self) -> bool {
        self.first.x == self.second.x
    }

    /// Whether every coordinate is finite.
    pub fn is_finite(&self) -> bool {
        [self.first, self.second]
            .iter()
            .all(|p| p.x.is_finite() && p.y.is_finite())
    }

    /// The extent of the segment along the x-axis.
    pub fn x_extent(&self) -> Interval<f64> {
        Interval::spanning(self.first.x, self.second.x)
    }

    /// The extent of the segment along the y-axis.
    pub fn y_extent(&self) -> Interval<f64> {
        Interval::spanning(self.first.y, self.second.y)
    }
}

impl Transform for Segment {
    fn translate(&self, by: Vector2d) -> Self {
        Self::new(self.first + by, self.second + by)
    }

    fn rotate(&self, anchor: Point2d, angle: f64) -> Self {
        Self::new(
            self.first.rotate(anchor, angle),
            self.second.rotate(anchor, angle),
        )
    }
}

impl From<[[f64; 2]; 2]> for Segment {
    fn from([a, b]: [[f64; 2]; 2]) -> Self {
        Self::new(Point2d::new(a[0], a[1]), Point2d::new(b[0], b[1]))
    }
}

impl From<Segment> for [[f64; 2]; 2] {
    fn from(seg: Segment) -> Self {
        [
            [seg.first.x, seg.first.y],
            [seg.second.x, seg.second.y],
        ]
    }
}
