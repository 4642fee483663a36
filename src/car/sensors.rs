//! Distance readings from the car's rays to the nearest wall.

use super::shape::{Ray, RayKind};
use crate::debug::debug_point;
use crate::math::{IntersectParams, Point2d, Segment};
use cgmath::prelude::*;
use serde::ser::{Serialize, Serializer};

/// The result of casting a single ray.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayReading {
    /// Which ray this reading came from.
    pub kind: RayKind,
    /// Distance to the nearest wall, or the ray's maximum length if nothing was hit.
    pub distance: f64,
    /// Where the ray hit a wall, if it did.
    pub hit: Option<Point2d>,
    /// The index of the wall segment that was hit, if any.
    pub wall: Option<usize>,
}

/// The readings of every ray for one tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SensorReadings {
    readings: Vec<RayReading>,
}

impl RayReading {
    /// A reading where the ray reached its full length.
    pub fn clear(ray: &Ray) -> Self {
        Self {
            kind: ray.kind,
            distance: ray.max_length,
            hit: None,
            wall: None,
        }
    }

    /// Whether the ray hit anything.
    pub fn is_hit(&self) -> bool {
        self.hit.is_some()
    }
}

impl SensorReadings {
    /// Casts each ray against the walls.
    pub fn sense(rays: &[Ray], walls: &[Segment], params: &IntersectParams) -> Self {
        let readings = rays
            .iter()
            .map(|ray| cast_ray(ray, walls, params))
            .collect();
        Self { readings }
    }

    /// Gets the distance measured by the given ray.
    pub fn get(&self, kind: RayKind) -> Option<f64> {
        self.reading(kind).map(|r| r.distance)
    }

    /// Gets the full reading for the given ray.
    pub fn reading(&self, kind: RayKind) -> Option<&RayReading> {
        self.readings.iter().find(|r| r.kind == kind)
    }

    /// Returns an iterator over the readings.
    pub fn iter(&self) -> impl Iterator<Item = &RayReading> {
        self.readings.iter()
    }

    /// The number of readings.
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// Whether there are no readings.
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}

impl Serialize for SensorReadings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.readings.iter().map(|r| (r.kind.name(), r.distance)))
    }
}

/// Finds the nearest wall along a ray.
///
/// If several walls are hit at exactly the same distance,
/// the first of them in `walls` is reported.
pub fn cast_ray(ray: &Ray, walls: &[Segment], params: &IntersectParams) -> RayReading {
    let origin = ray.origin();
    let nearest = walls
        .iter()
        .enumerate()
        .filter_map(|(idx, wall)| {
            params
                .intersect(&ray.segment, wall)
                .map(|point| (idx, point, origin.distance(point)))
        })
        .min_by(|a, b| a.2.total_cmp(&b.2));

    match nearest {
        Some((idx, point, distance)) => {
            debug_point(ray.kind.name(), point);
            RayReading {
                kind: ray.kind,
                distance: distance.min(ray.max_length),
                hit: Some(point),
                wall: Some(idx),
            }
        }
        None => RayReading::clear(ray),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    fn forward_ray() -> Ray {
        Ray::new(RayKind::Front, Point2d::new(0.0, 0.0), 0.0, 300.0)
    }

    #[test]
    fn perpendicular_wall() {
        let walls = [Segment::from([[50.0, -10.0], [50.0, 10.0]])];
        let reading = cast_ray(&forward_ray(), &walls, &Default::default());
        assert_approx_eq!(reading.distance, 50.0);
        assert_eq!(reading.wall, Some(0));
        assert_eq!(reading.hit, Some(Point2d::new(50.0, 0.0)));
    }

    #[test]
    fn no_walls_reads_max_length() {
        let reading = cast_ray(&forward_ray(), &[], &Default::default());
        assert_eq!(reading.distance, 300.0);
        assert!(!reading.is_hit());

        let behind = [Segment::from([[-50.0, -10.0], [-50.0, 10.0]])];
        let reading = cast_ray(&forward_ray(), &behind, &Default::default());
        assert_eq!(reading.distance, 300.0);
    }

    #[test]
    fn nearest_wall_wins() {
        let walls = [
            Segment::from([[200.0, -10.0], [200.0, 10.0]]),
            Segment::from([[80.0, -10.0], [90.0, 10.0]]),
            Segment::from([[120.0, -10.0], [120.0, 10.0]]),
        ];
        let reading = cast_ray(&forward_ray(), &walls, &Default::default());
        assert_approx_eq!(reading.distance, 85.0);
        assert_eq!(reading.wall, Some(1));
    }

    #[test]
    fn ties_go_to_first_wall() {
        let walls = [
            Segment::from([[60.0, -10.0], [60.0, 10.0]]),
            Segment::from([[60.0, 10.0], [60.0, -10.0]]),
        ];
        let reading = cast_ray(&forward_ray(), &walls, &Default::default());
        assert_eq!(reading.wall, Some(0));
        assert_approx_eq!(reading.distance, 60.0);
    }

    #[test]
    fn readings_by_name() {
        let rays = [
            forward_ray(),
            Ray::new(RayKind::Back, Point2d::new(0.0, 0.0), 180.0, 100.0),
        ];
        let walls = [Segment::from([[-40.0, -5.0], [-40.0, 5.0]])];
        let readings = SensorReadings::sense(&rays, &walls, &Default::default());
        assert_eq!(readings.len(), 2);
        assert_eq!(readings.get(RayKind::Front), Some(300.0));
        assert_approx_eq!(readings.get(RayKind::Back).unwrap(), 40.0);
        assert_eq!(readings.get(RayKind::FrontLeft), None);

        let json = serde_json::to_value(&readings).unwrap();
        assert_eq!(json["front"], 300.0);
        assert!(json["back"].as_f64().unwrap() < 40.0001);
    }
}
