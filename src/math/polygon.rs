use super::{Point2d, Segment, Transform, Vector2d};
use itertools::Itertools;

/// A closed polygon; the last point connects back to the first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    points: Vec<Point2d>,
}

impl Polygon {
    /// Creates a polygon from its vertices.
    pub fn new(points: Vec<Point2d>) -> Self {
        Self { points }
    }

    /// The vertices of the polygon.
    pub fn points(&self) -> &[Point2d] {
        &self.points
    }

    /// The number of vertices.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the polygon has no vertices.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns an iterator over the edges of the polygon,
    /// including the edge from the last vertex back to the first.
    ///
    /// A polygon with `n >= 2` vertices has exactly `n` edges.
    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        let wrap = self.points.len() >= 2;
        self.points
            .iter()
            .copied()
            .circular_tuple_windows()
            .filter(move |_| wrap)
            .map(|(a, b)| Segment::new(a, b))
    }
}

impl Transform for Polygon {
    fn translate(&self, by: Vector2d) -> Self {
        Self::new(self.points.iter().map(|p| p.translate(by)).collect())
    }

    fn rotate(&self, anchor: Point2d, angle: f64) -> Self {
        Self::new(self.points.iter().map(|p| p.rotate(anchor, angle)).collect())
    }
}

impl From<Vec<[f64; 2]>> for Polygon {
    fn from(points: Vec<[f64; 2]>) -> Self {
        Self::new(points.into_iter().map(|[x, y]| Point2d::new(x, y)).collect())
    }
}
