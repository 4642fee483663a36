use super::{Point2d, Vector2d};
use cgmath::prelude::*;
use cgmath::{Basis2, Deg};

/// Rotates a vector by `angle` degrees.
///
/// Positive angles rotate from the x-axis towards the y-axis, which on a
/// screen with y pointing down appears clockwise.
pub fn rotate_vector(vec: Vector2d, angle: f64) -> Vector2d {
    let rot: Basis2<f64> = Rotation2::from_angle(Deg(angle));
    rot.rotate_vector(vec)
}

/// Rotates a point about an anchor by `angle` degrees.
pub fn rotate_point(point: Point2d, anchor: Point2d, angle: f64) -> Point2d {
    anchor + rotate_vector(point - anchor, angle)
}

/// A unit vector pointing along the given heading in degrees.
pub fn heading_vector(angle: f64) -> Vector2d {
    rotate_vector(Vector2d::unit_x(), angle)
}

/// Things that can be moved around the plane.
pub trait Transform: Sized {
    /// Returns a copy offset by `by`.
    fn translate(&self, by: Vector2d) -> Self;

    /// Returns a copy rotated about `anchor` by `angle` degrees.
    fn rotate(&self, anchor: Point2d, angle: f64) -> Self;
}

impl Transform for Point2d {
    fn translate(&self, by: Vector2d) -> Self {
        *self + by
    }

    fn rotate(&self, anchor: Point2d, angle: f64) -> Self {
        rotate_point(*self, anchor, angle)
    }
}
