//! Collision detection, ray sensing and checkpoint tracking for a top-down racing game.
//!
//! A [Simulation] moves a [Car] around a [Track] and reports, every tick, whether
//! the car touches a wall, whether it crossed the next checkpoint, and how far each
//! of its sensor rays reaches before hitting a wall.

pub use car::{Car, CarAttributes, CarShape, Control, Pose, RayKind, RayReading, SensorReadings};
pub use cgmath;
pub use error::TrackError;
pub use level::Level;
pub use simulation::{Simulation, SimulationConfig, TickReport};
pub use track::{CheckpointSequence, Track, Traversal};
pub use util::Interval;

pub mod car;
mod debug;
pub mod error;
pub mod level;
pub mod math;
mod simulation;
pub mod track;
mod util;
