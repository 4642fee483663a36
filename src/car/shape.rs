//! The car's bounding rectangle and sensor rays, and their placement in the world.

use super::Pose;
use crate::math::{heading_vector, Point2d, Segment, Transform, Vector2d};
use arrayvec::ArrayVec;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// The default shape used when none is configured.
static STANDARD_SHAPE: Lazy<CarShape> = Lazy::new(|| CarShape::new(30.0, 15.0, 300.0));

/// The named rays cast from the car.
///
/// "Left" is the `-y` side of the car's local frame, which is screen-up
/// for a car facing screen-right on a y-down display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RayKind {
    Front,
    FrontLeft,
    FrontLeftDiagonal,
    FrontLeftPerpendicular,
    FrontRight,
    FrontRightDiagonal,
    FrontRightPerpendicular,
    Back,
    BackLeftDiagonal,
    BackRightDiagonal,
}

/// A probe from a point on the car, used to measure open space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub kind: RayKind,
    /// The ray, starting at its origin and ending at its maximum reach.
    pub segment: Segment,
    /// The maximum distance the ray can measure.
    pub max_length: f64,
}

/// The car's outline and rays in its local frame.
#[derive(Clone, Debug, PartialEq)]
pub struct CarShape {
    /// The four sides of the car's bounding rectangle.
    edges: [Segment; 4],
    /// The sensor rays.
    rays: [Ray; RayKind::COUNT],
    /// The point the shape rotates about.
    centre: Point2d,
}

/// A car shape placed at a pose in the world.
#[derive(Clone, Debug)]
pub struct Placement {
    pub edges: [Segment; 4],
    pub rays: ArrayVec<Ray, { RayKind::COUNT }>,
}

impl RayKind {
    /// The number of ray kinds.
    pub const COUNT: usize = 10;

    /// Every ray kind.
    pub const ALL: [RayKind; RayKind::COUNT] = [
        RayKind::Front,
        RayKind::FrontLeft,
        RayKind::FrontLeftDiagonal,
        RayKind::FrontLeftPerpendicular,
        RayKind::FrontRight,
        RayKind::FrontRightDiagonal,
        RayKind::FrontRightPerpendicular,
        RayKind::Back,
        RayKind::BackLeftDiagonal,
        RayKind::BackRightDiagonal,
    ];

    /// The ray's name as reported to consumers.
    pub fn name(&self) -> &'static str {
        match self {
            RayKind::Front => "front",
            RayKind::FrontLeft => "front_left",
            RayKind::FrontLeftDiagonal => "front_left_diagonal",
            RayKind::FrontLeftPerpendicular => "front_left_perpendicular",
            RayKind::FrontRight => "front_right",
            RayKind::FrontRightDiagonal => "front_right_diagonal",
            RayKind::FrontRightPerpendicular => "front_right_perpendicular",
            RayKind::Back => "back",
            RayKind::BackLeftDiagonal => "back_left_diagonal",
            RayKind::BackRightDiagonal => "back_right_diagonal",
        }
    }

    /// The direction of the ray relative to the car's heading, in degrees.
    fn angle(&self) -> f64 {
        match self {
            RayKind::Front | RayKind::FrontLeft | RayKind::FrontRight => 0.0,
            RayKind::FrontLeftDiagonal => -45.0,
            RayKind::FrontRightDiagonal => 45.0,
            RayKind::FrontLeftPerpendicular => -90.0,
            RayKind::FrontRightPerpendicular => 90.0,
            RayKind::Back => 180.0,
            RayKind::BackLeftDiagonal => -135.0,
            RayKind::BackRightDiagonal => 135.0,
        }
    }

    /// Where the ray starts on a car with the given dimensions,
    /// in the local frame where the car spans `(0, 0)` to `(length, width)`.
    fn origin(&self, length: f64, width: f64) -> Point2d {
        match self {
            RayKind::Front => Point2d::new(length, 0.5 * width),
            RayKind::FrontLeft | RayKind::FrontLeftDiagonal | RayKind::FrontLeftPerpendicular => {
                Point2d::new(length, 0.0)
            }
            RayKind::FrontRight
            | RayKind::FrontRightDiagonal
            | RayKind::FrontRightPerpendicular => Point2d::new(length, width),
            RayKind::Back => Point2d::new(0.0, 0.5 * width),
            RayKind::BackLeftDiagonal => Point2d::new(0.0, 0.0),
            RayKind::BackRightDiagonal => Point2d::new(0.0, width),
        }
    }
}

impl Ray {
    /// Creates a ray from an origin in a direction given in degrees.
    pub fn new(kind: RayKind, origin: Point2d, angle: f64, max_length: f64) -> Self {
        let end = origin + max_length * heading_vector(angle);
        Self {
            kind,
            segment: Segment::new(origin, end),
            max_length,
        }
    }

    /// The point the ray is cast from.
    pub fn origin(&self) -> Point2d {
        self.segment.first
    }
}

impl Transform for Ray {
    fn translate(&self, by: Vector2d) -> Self {
        Self {
            segment: self.segment.translate(by),
            ..*self
        }
    }

    fn rotate(&self, anchor: Point2d, angle: f64) -> Self {
        Self {
            segment: self.segment.rotate(anchor, angle),
            ..*self
        }
    }
}

impl CarShape {
    /// Creates the shape of a car.
    ///
    /// # Parameters
    /// * `length` - The extent of the car along its heading
    /// * `width` - The extent of the car across its heading
    /// * `ray_length` - The maximum reach of every sensor ray
    pub fn new(length: f64, width: f64, ray_length: f64) -> Self {
        let corner = |x: f64, y: f64| Point2d::new(x, y);
        let edges = [
            Segment::new(corner(0.0, 0.0), corner(length, 0.0)),
            Segment::new(corner(0.0, width), corner(length, width)),
            Segment::new(corner(0.0, 0.0), corner(0.0, width)),
            Segment::new(corner(length, 0.0), corner(length, width)),
        ];
        let rays = RayKind::ALL
            .map(|kind| Ray::new(kind, kind.origin(length, width), kind.angle(), ray_length));
        Self {
            edges,
            rays,
            centre: Point2d::new(0.5 * length, 0.5 * width),
        }
    }

    /// The standard car: 30 by 15 with rays reaching 300.
    pub fn standard() -> &'static CarShape {
        &STANDARD_SHAPE
    }

    /// The sides of the bounding rectangle in the local frame.
    pub fn edges(&self) -> &[Segment; 4] {
        &self.edges
    }

    /// The sensor rays in the local frame.
    pub fn rays(&self) -> &[Ray] {
        &self.rays
    }

    /// The point the shape rotates about in the local frame.
    pub fn centre(&self) -> Point2d {
        self.centre
    }

    /// Places the shape in the world so its centre sits at the pose's position,
    /// rotated by the pose's heading.
    pub fn place(&self, pose: &Pose) -> Placement {
        let offset = pose.position - self.centre;
        let edges = self
            .edges
            .map(|edge| edge.rotate(self.centre, pose.heading).translate(offset));
        let rays = self
            .rays
            .iter()
            .map(|ray| ray.rotate(self.centre, pose.heading).translate(offset))
            .collect();
        Placement { edges, rays }
    }
}
