pub use self::sensors::{cast_ray, RayReading, SensorReadings};
pub use self::shape::{CarShape, Placement, Ray, RayKind};
use crate::math::{heading_vector, Point2d, Vector2d};
use cgmath::prelude::*;
use serde::{Deserialize, Serialize};

mod sensors;
mod shape;

/// The position and heading of the car.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// The world coordinates of the centre of the car.
    pub position: Point2d,
    /// The heading in degrees.
    pub heading: f64,
}

/// A control signal from the player or an agent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Control {
    Accelerate,
    Brake,
    Left,
    Right,
}

/// The attributes of the simulated car.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarAttributes {
    /// The extent of the car along its heading.
    pub length: f64,
    /// The extent of the car across its heading.
    pub width: f64,
    /// The maximum speed in units/s.
    pub max_vel: f64,
    /// The acceleration when accelerating or braking, in units/s^2.
    pub acceleration: f64,
    /// The turning rate in degrees/s.
    pub turn_speed: f64,
    /// The fraction of sideways velocity removed each tick.
    pub friction: f64,
    /// Velocity is multiplied by this each tick the car isn't accelerating.
    pub idle_brake: f64,
    /// The maximum reach of the sensor rays.
    pub ray_length: f64,
}

/// The simulated car.
#[derive(Clone, Debug)]
pub struct Car {
    attributes: CarAttributes,
    /// The current pose.
    pose: Pose,
    /// The velocity in units/s.
    vel: Vector2d,
    /// The time since the car last crossed a checkpoint in s.
    since_checkpoint: f64,
}

impl Default for CarAttributes {
    fn default() -> Self {
        Self {
            length: 30.0,
            width: 15.0,
            max_vel: 300.0,
            acceleration: 200.0,
            turn_speed: 200.0,
            friction: 0.03,
            idle_brake: 0.97,
            ray_length: 300.0,
        }
    }
}

impl CarAttributes {
    /// The car's outline and rays.
    pub fn shape(&self) -> CarShape {
        CarShape::new(self.length, self.width, self.ray_length)
    }
}

impl Car {
    /// Creates a stationary car at the given pose.
    pub fn new(attributes: &CarAttributes, pose: Pose) -> Self {
        Self {
            attributes: *attributes,
            pose,
            vel: Vector2d::zero(),
            since_checkpoint: 0.0,
        }
    }

    /// The car's attributes.
    pub fn attributes(&self) -> &CarAttributes {
        &self.attributes
    }

    /// The current pose.
    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// The coordinates of the centre of the car.
    pub fn position(&self) -> Point2d {
        self.pose.position
    }

    /// The velocity vector in units/s.
    pub fn vel(&self) -> Vector2d {
        self.vel
    }

    /// The speed in units/s.
    pub fn speed(&self) -> f64 {
        self.vel.magnitude()
    }

    /// The time since the car last crossed a checkpoint in s.
    pub fn since_checkpoint(&self) -> f64 {
        self.since_checkpoint
    }

    /// Restarts the checkpoint timer.
    pub(crate) fn checkpoint_crossed(&mut self) {
        self.since_checkpoint = 0.0;
    }

    /// Integrates the car's heading, velocity and position.
    ///
    /// # Parameters
    /// * `controls` - The controls held down during this tick
    /// * `dt` - The time step in seconds
    pub fn integrate(&mut self, controls: &[Control], dt: f64) {
        let attribs = &self.attributes;
        let dir = heading_vector(self.pose.heading);

        if !controls.contains(&Control::Accelerate) {
            self.vel *= attribs.idle_brake;
        }
        for control in controls {
            match control {
                Control::Accelerate => self.vel += dir * attribs.acceleration * dt,
                Control::Brake => self.vel -= dir * attribs.acceleration * dt,
                Control::Left => self.pose.heading -= attribs.turn_speed * dt,
                Control::Right => self.pose.heading += attribs.turn_speed * dt,
            }
        }

        if self.vel.magnitude() > attribs.max_vel {
            self.vel = self.vel.normalize_to(attribs.max_vel);
        }

        // Sideways friction
        let lateral = self.vel - dir * dir.dot(self.vel);
        self.vel -= lateral * attribs.friction;

        self.pose.position += self.vel * dt;
        self.since_checkpoint += dt;
    }
}
