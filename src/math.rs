//! Geometric primitives and the segment intersection engine.

use cgmath::{Point2, Vector2};
pub use intersect::{segment_intersection, segment_intersections, IntersectParams};
pub use polygon::Polygon;
pub use segment::Segment;
pub use util::*;

mod intersect;
mod polygon;
mod segment;
mod util;

/// A 2D point
pub type Point2d = Point2<f64>;

/// A 2D vector
pub type Vector2d = Vector2<f64>;
