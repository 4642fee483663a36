//! The walls and checkpoints of a race track.

pub use self::checkpoint::{CheckpointSequence, Traversal};
use crate::car::Pose;
use crate::error::TrackError;
use crate::math::{IntersectParams, Polygon, Segment};
use log::trace;
use smallvec::SmallVec;

mod checkpoint;

/// A race track: two wall polygons and a sequence of checkpoints.
#[derive(Clone, Debug)]
pub struct Track {
    /// The outer boundary.
    outer: Polygon,
    /// The inner boundary, i.e. the island in the middle of the track.
    inner: Polygon,
    /// Every edge of both polygons.
    walls: Vec<Segment>,
    /// The gates the car must pass through.
    checkpoints: CheckpointSequence,
    /// Where the car starts.
    start: Pose,
}

impl Track {
    /// Creates a new track.
    ///
    /// # Parameters
    /// * `outer` - The outer wall; must have at least 3 vertices
    /// * `inner` - The inner wall; must have at least 3 vertices
    /// * `checkpoints` - The gates, in their stored order; must not be empty
    /// * `traversal` - The order in which the gates are visited
    /// * `start` - The car's starting pose
    pub fn new(
        outer: Polygon,
        inner: Polygon,
        checkpoints: Vec<Segment>,
        traversal: Traversal,
        start: Pose,
    ) -> Result<Self, TrackError> {
        for (polygon, wall) in [&outer, &inner].into_iter().enumerate() {
            if wall.len() < 3 {
                return Err(TrackError::TooFewVertices {
                    polygon,
                    vertices: wall.len(),
                });
            }
            if !wall.points().iter().all(|p| p.x.is_finite() && p.y.is_finite()) {
                return Err(TrackError::NonFinite("walls"));
            }
        }
        if !checkpoints.iter().all(Segment::is_finite) {
            return Err(TrackError::NonFinite("checkpoints"));
        }
        let start_ok = [start.position.x, start.position.y, start.heading]
            .iter()
            .all(|v| v.is_finite());
        if !start_ok {
            return Err(TrackError::NonFinite("start"));
        }

        let checkpoints =
            CheckpointSequence::new(checkpoints, traversal).ok_or(TrackError::NoCheckpoints)?;
        let walls = outer.edges().chain(inner.edges()).collect();

        Ok(Self {
            outer,
            inner,
            walls,
            checkpoints,
            start,
        })
    }

    /// The outer boundary.
    pub fn outer(&self) -> &Polygon {
        &self.outer
    }

    /// The inner boundary.
    pub fn inner(&self) -> &Polygon {
        &self.inner
    }

    /// Every wall segment, outer polygon first.
    pub fn wall_segments(&self) -> &[Segment] {
        &self.walls
    }

    /// The checkpoints.
    pub fn checkpoints(&self) -> &CheckpointSequence {
        &self.checkpoints
    }

    /// The checkpoints, mutably.
    pub fn checkpoints_mut(&mut self) -> &mut CheckpointSequence {
        &mut self.checkpoints
    }

    /// The car's starting pose.
    pub fn start(&self) -> Pose {
        self.start
    }

    /// Whether any of the edges touches a wall.
    pub fn collides(&self, edges: &[Segment], params: &IntersectParams) -> bool {
        let colliding = edges.iter().any(|edge| {
            self.walls
                .iter()
                .any(|wall| params.intersect(edge, wall).is_some())
        });
        if colliding {
            trace!("Collision with wall");
        }
        colliding
    }

    /// The indices of the walls touched by any of the edges, in ascending order.
    pub fn colliding_walls(
        &self,
        edges: &[Segment],
        params: &IntersectParams,
    ) -> SmallVec<[usize; 4]> {
        self.walls
            .iter()
            .enumerate()
            .filter(|(_, wall)| {
                edges
                    .iter()
                    .any(|edge| params.intersect(edge, wall).is_some())
            })
            .map(|(idx, _)| idx)
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::Point2d;

    fn square(min: f64, max: f64) -> Polygon {
        Polygon::from(vec![[min, min], [max, min], [max, max], [min, max]])
    }

    fn start() -> Pose {
        Pose {
            position: Point2d::new(50.0, 10.0),
            heading: 0.0,
        }
    }

    fn track() -> Track {
        let gate = Segment::from([[50.0, 0.0], [50.0, 20.0]]);
        let (outer, inner) = (square(0.0, 100.0), square(20.0, 80.0));
        Track::new(outer, inner, vec![gate], Traversal::Reversed, start()).unwrap()
    }

    #[test]
    fn wall_set_has_one_segment_per_vertex() {
        let track = track();
        assert_eq!(track.wall_segments().len(), 8);
        assert_eq!(track.wall_segments()[3], Segment::from([[0.0, 100.0], [0.0, 0.0]]));
    }

    #[test]
    fn collision_is_idempotent() {
        let track = track();
        let params = IntersectParams::default();
        let touching = [Segment::from([[95.0, 50.0], [105.0, 50.0]])];
        assert!(track.collides(&touching, &params));
        assert!(track.collides(&touching, &params));
        assert_eq!(track.colliding_walls(&touching, &params).as_slice(), &[1]);

        let clear = [Segment::from([[5.0, 5.0], [15.0, 5.0]])];
        assert!(!track.collides(&clear, &params));
        assert!(!track.collides(&clear, &params));
        assert!(track.colliding_walls(&clear, &params).is_empty());
    }

    #[test]
    fn rejects_bad_tracks() {
        let tiny = Polygon::from(vec![[0.0, 0.0], [1.0, 1.0]]);
        let gate = Segment::from([[0.0, 0.0], [1.0, 0.0]]);
        let outer = square(0.0, 9.0);
        let err = Track::new(outer, tiny, vec![gate], Traversal::Forward, start());
        assert!(matches!(
            err,
            Err(TrackError::TooFewVertices { polygon: 1, vertices: 2 })
        ));

        let (outer, inner) = (square(0.0, 9.0), square(2.0, 3.0));
        let err = Track::new(outer, inner, vec![], Traversal::Forward, start());
        assert!(matches!(err, Err(TrackError::NoCheckpoints)));

        let nan = Polygon::from(vec![[0.0, 0.0], [f64::NAN, 0.0], [1.0, 1.0]]);
        let inner = square(2.0, 3.0);
        let err = Track::new(nan, inner, vec![gate], Traversal::Forward, start());
        assert!(matches!(err, Err(TrackError::NonFinite("walls"))));
    }
}
