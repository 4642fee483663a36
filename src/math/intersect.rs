//! Intersection of finite line segments.
//!
//! Both segments are first treated as infinite lines in slope/intercept form,
//! and the crossing point is then clipped against the axis-aligned bounding
//! rectangles of the two segments. Parallel, coincident and numerically
//! absurd cases all report no intersection.

use super::{Point2d, Segment};
use serde::{Deserialize, Serialize};

/// Intersections with a coordinate larger than this are discarded.
pub const MAX_COORDINATE: f64 = 1e5;

/// The minimum side length of a segment's bounding rectangle.
pub const MIN_BOX_SIZE: f64 = 3.0;

/// Tunable constants of the intersection engine.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntersectParams {
    /// Crossings with any coordinate magnitude above this are treated
    /// as being at infinity, i.e. no intersection.
    pub max_coordinate: f64,
    /// Bounding rectangles are widened to at least this size on each axis,
    /// so that points lying on horizontal or vertical segments are accepted.
    pub min_box_size: f64,
}

/// An infinite line through a segment.
#[derive(Clone, Copy, Debug)]
enum Line {
    Sloped { slope: f64, intercept: f64 },
    Vertical { x: f64 },
}

impl Default for IntersectParams {
    fn default() -> Self {
        Self {
            max_coordinate: MAX_COORDINATE,
            min_box_size: MIN_BOX_SIZE,
        }
    }
}

impl IntersectParams {
    /// Finds the point where two segments cross, if there is one.
    pub fn intersect(&self, a: &Segment, b: &Segment) -> Option<Point2d> {
        let point = Line::through(a).crossing(&Line::through(b))?;
        if !self.is_reasonable(point) {
            return None;
        }
        if self.bounds_contain(a, point) && self.bounds_contain(b, point) {
            Some(point)
        } else {
            None
        }
    }

    /// Intersects one segment against many, preserving the order of `others`.
    pub fn intersect_all(&self, line: &Segment, others: &[Segment]) -> Vec<Option<Point2d>> {
        others
            .iter()
            .map(|other| self.intersect(line, other))
            .collect()
    }

    /// Whether the point is within the coordinate limit. NaNs are rejected.
    fn is_reasonable(&self, point: Point2d) -> bool {
        point.x.abs() <= self.max_coordinate && point.y.abs() <= self.max_coordinate
    }

    /// Whether the point lies within the (widened) bounding rectangle of the segment.
    fn bounds_contain(&self, seg: &Segment, point: Point2d) -> bool {
        let x = seg.x_extent().widen_to(self.min_box_size);
        let y = seg.y_extent().widen_to(self.min_box_size);
        x.contains(point.x) && y.contains(point.y)
    }
}

impl Line {
    fn through(seg: &Segment) -> Self {
        let (p, q) = (seg.first, seg.second);
        if seg.is_vertical() {
            Line::Vertical { x: p.x }
        } else {
            let slope = (q.y - p.y) / (q.x - p.x);
            Line::Sloped {
                slope,
                intercept: p.y - slope * p.x,
            }
        }
    }

    /// The crossing point of two infinite lines.
    /// Parallel lines, including two vertical ones, never cross.
    fn crossing(&self, other: &Line) -> Option<Point2d> {
        match (*self, *other) {
            (Line::Vertical { .. }, Line::Vertical { .. }) => None,
            (
                Line::Sloped {
                    slope: s1,
                    intercept: i1,
                },
                Line::Sloped {
                    slope: s2,
                    intercept: i2,
                },
            ) => {
                if s1 == s2 {
                    return None;
                }
                let x = (i2 - i1) / (s1 - s2);
                // A steep line's intercept is too coarse to evaluate y on
                let y = if s1.abs() <= s2.abs() {
                    s1 * x + i1
                } else {
                    s2 * x + i2
                };
                Some(Point2d::new(x, y))
            }
            (Line::Vertical { x }, Line::Sloped { slope, intercept })
            | (Line::Sloped { slope, intercept }, Line::Vertical { x }) => {
                Some(Point2d::new(x, slope * x + intercept))
            }
        }
    }
}

/// Finds the point where two segments cross, using the default parameters.
pub fn segment_intersection(a: &Segment, b: &Segment) -> Option<Point2d> {
    IntersectParams::default().intersect(a, b)
}

/// Intersects one segment against many using the default parameters.
/// The result has one entry per candidate, `None` where they don't cross.
pub fn segment_intersections(line: &Segment, others: &[Segment]) -> Vec<Option<Point2d>> {
    IntersectParams::default().intersect_all(line, others)
}

#[cfg(test)]
mod test {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use proptest::prelude::*;

    fn seg(a: [f64; 2], b: [f64; 2]) -> Segment {
        Segment::from([a, b])
    }

    #[test]
    fn crossing_diagonals() {
        let a = seg([0.0, 0.0], [10.0, 10.0]);
        let b = seg([0.0, 10.0], [10.0, 0.0]);
        let p = segment_intersection(&a, &b).unwrap();
        assert_approx_eq!(p.x, 5.0);
        assert_approx_eq!(p.y, 5.0);
    }

    #[test]
    fn crossing_outside_first_segment() {
        let a = seg([0.0, 0.0], [10.0, 0.0]);
        let b = seg([20.0, 1.0], [20.0, -1.0]);
        assert_eq!(segment_intersection(&a, &b), None);
        assert_eq!(segment_intersection(&b, &a), None);
    }

    #[test]
    fn crossing_outside_second_segment() {
        let a = seg([0.0, 0.0], [10.0, 10.0]);
        let b = seg([0.0, 10.0], [2.0, 8.0]);
        assert_eq!(segment_intersection(&a, &b), None);
    }

    #[test]
    fn both_vertical() {
        let a = seg([3.0, 0.0], [3.0, 5.0]);
        let b = seg([3.0, -5.0], [3.0, 10.0]);
        assert_eq!(segment_intersection(&a, &b), None);
    }

    #[test]
    fn parallel_and_coincident() {
        let a = seg([0.0, 0.0], [10.0, 5.0]);
        let b = seg([0.0, 1.0], [10.0, 6.0]);
        assert_eq!(segment_intersection(&a, &b), None);
        assert_eq!(segment_intersection(&a, &a), None);
    }

    #[test]
    fn one_vertical_uses_intercept() {
        let a = seg([0.0, 3.0], [10.0, 3.0]);
        let b = seg([4.0, -10.0], [4.0, 10.0]);
        for p in [segment_intersection(&a, &b), segment_intersection(&b, &a)] {
            let p = p.unwrap();
            assert_approx_eq!(p.x, 4.0);
            assert_approx_eq!(p.y, 3.0);
        }

        let c = seg([0.0, 5.0], [10.0, 15.0]);
        let p = segment_intersection(&c, &b).unwrap();
        assert_approx_eq!(p.y, 9.0);
    }

    #[test]
    fn touching_horizontal_segment() {
        // The crossing lies exactly on a horizontal segment's line
        let a = seg([0.0, 2.0], [10.0, 2.0]);
        let b = seg([5.0, 0.0], [5.0, 2.0]);
        assert!(segment_intersection(&a, &b).is_some());
    }

    #[test]
    fn zero_length_segment() {
        let dot = seg([5.0, 5.0], [5.0, 5.0]);
        let a = seg([0.0, 0.0], [10.0, 10.0]);
        let p = segment_intersection(&dot, &a).unwrap();
        assert_approx_eq!(p.x, 5.0);
        assert_approx_eq!(p.y, 5.0);

        let far = seg([0.0, 50.0], [10.0, 60.0]);
        assert_eq!(segment_intersection(&dot, &far), None);
        assert_eq!(segment_intersection(&dot, &dot), None);
    }

    #[test]
    fn huge_coordinates_rejected() {
        let a = seg([2e5, 0.0], [4e5, 2e5]);
        let b = seg([2e5, 2e5], [4e5, 0.0]);
        assert_eq!(segment_intersection(&a, &b), None);

        let relaxed = IntersectParams {
            max_coordinate: 1e6,
            ..Default::default()
        };
        let p = relaxed.intersect(&a, &b).unwrap();
        assert_approx_eq!(p.x, 3e5);
    }

    #[test]
    fn nearly_vertical_against_horizontal() {
        // Rotating by 90 degrees may leave a tiny x offset between the end points
        let a = Segment::new(
            Point2d::new(698.0, 142.5),
            Point2d::new(698.0, 142.5) + 300.0 * crate::math::heading_vector(-90.0),
        );
        let b = seg([50.0, 50.0], [1316.0, 50.0]);
        let p = segment_intersection(&a, &b).unwrap();
        assert_approx_eq!(p.x, 698.0);
        assert_approx_eq!(p.y, 50.0);

        let c = seg([0.0, 0.0], [1e-9, 100.0]);
        let d = seg([-10.0, 50.0], [10.0, 50.0]);
        let p = segment_intersection(&c, &d).unwrap();
        assert_approx_eq!(p.y, 50.0);
        assert_eq!(segment_intersection(&d, &c), Some(p));
    }

    #[test]
    fn nan_input_is_not_an_intersection() {
        let a = seg([f64::NAN, 0.0], [10.0, 10.0]);
        let b = seg([0.0, 10.0], [10.0, 0.0]);
        assert_eq!(segment_intersection(&a, &b), None);
    }

    #[test]
    fn batch_preserves_order() {
        let line = seg([0.0, 0.0], [10.0, 0.0]);
        let others = [
            seg([5.0, -1.0], [5.0, 1.0]),
            seg([0.0, 1.0], [10.0, 1.0]),
            seg([20.0, -1.0], [20.0, 1.0]),
            seg([2.0, -2.0], [4.0, 2.0]),
        ];
        let hits = segment_intersections(&line, &others);
        assert_eq!(hits.len(), 4);
        assert_approx_eq!(hits[0].unwrap().x, 5.0);
        assert_eq!(hits[1], None);
        assert_eq!(hits[2], None);
        assert_approx_eq!(hits[3].unwrap().x, 3.0);
        for (hit, other) in hits.iter().zip(&others) {
            assert_eq!(*hit, segment_intersection(&line, other));
        }
    }

    proptest! {
        #[test]
        fn symmetric_for_crossing_segments(
            cx in -500.0..500.0f64,
            cy in -500.0..500.0f64,
            angle_a in -80.0..80.0f64,
            angle_b in -80.0..80.0f64,
            len_a in 5.0..200.0f64,
            len_b in 5.0..200.0f64,
        ) {
            // Steep lines are ill-conditioned in slope/intercept form
            prop_assume!((angle_a - angle_b).abs() >= 15.0);
            let centre = Point2d::new(cx, cy);
            let through = |angle: f64, half: f64| {
                let dir = crate::math::heading_vector(angle) * half;
                Segment::new(centre - dir, centre + dir)
            };
            let a = through(angle_a, len_a);
            let b = through(angle_b, len_b);

            let ab = segment_intersection(&a, &b);
            let ba = segment_intersection(&b, &a);
            prop_assert!(ab.is_some());
            prop_assert!(ba.is_some());
            let (ab, ba) = (ab.unwrap(), ba.unwrap());
            prop_assert!((ab.x - ba.x).abs() < 1e-6 && (ab.y - ba.y).abs() < 1e-6);
            prop_assert!((ab.x - cx).abs() < 1e-6 && (ab.y - cy).abs() < 1e-6);
        }

        #[test]
        fn parallel_segments_never_intersect(
            x0 in -100i32..100, y0 in -100i32..100,
            dx in -50i32..50, dy in -50i32..50,
            ox in -20i32..20, oy in -20i32..20,
        ) {
            prop_assume!(dx != 0 || dy != 0);
            // Offsets along the direction would make the segments collinear
            prop_assume!(ox * dy - oy * dx != 0);
            let a = Segment::from([
                [x0 as f64, y0 as f64],
                [(x0 + dx) as f64, (y0 + dy) as f64],
            ]);
            let b = Segment::from([
                [(x0 + ox) as f64, (y0 + oy) as f64],
                [(x0 + ox + dx) as f64, (y0 + oy + dy) as f64],
            ]);
            prop_assert_eq!(segment_intersection(&a, &b), None);
        }
    }
}
