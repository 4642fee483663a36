use crate::car::{Car, CarAttributes, CarShape, Control, Placement, Pose, SensorReadings};
#[cfg(feature = "debug")]
use crate::debug::take_debug_frame;
use crate::debug::debug_line;
use crate::error::TrackError;
use crate::math::IntersectParams;
use crate::track::Track;
use serde::{Deserialize, Serialize};

/// Settings for a [Simulation].
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// The car's attributes.
    pub car: CarAttributes,
    /// The intersection engine's tolerances.
    pub intersect: IntersectParams,
}

/// What happened during one tick of the simulation.
#[derive(Clone, Debug, Serialize)]
pub struct TickReport {
    /// The frame this report describes.
    pub frame: usize,
    /// Whether the car touches a wall; the episode should end.
    pub colliding: bool,
    /// Whether the car crossed the current checkpoint this tick.
    pub checkpoint_crossed: bool,
    /// The index of the checkpoint the car must cross next.
    pub checkpoint: usize,
    /// The car's speed in units/s.
    pub speed: f64,
    /// The car's pose.
    pub pose: Pose,
    /// The distance to the nearest wall along each ray.
    pub sensors: SensorReadings,
}

/// A car racing around a track.
pub struct Simulation {
    /// The track being raced on.
    track: Track,
    /// The car.
    car: Car,
    /// The car's outline and rays.
    shape: CarShape,
    /// The intersection engine's tolerances.
    params: IntersectParams,
    /// The current frame of simulation.
    frame: usize,
    /// Debugging information from the previously simulated frame.
    #[cfg(feature = "debug")]
    debug: serde_json::Value,
}

impl SimulationConfig {
    /// Parses a configuration from a JSON string; missing keys take default values.
    pub fn from_json_str(json: &str) -> Result<Self, TrackError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Simulation {
    /// Creates a new simulation with the car at the track's start.
    pub fn new(track: Track, config: &SimulationConfig) -> Self {
        Self {
            car: Car::new(&config.car, track.start()),
            shape: config.car.shape(),
            params: config.intersect,
            track,
            frame: 0,
            #[cfg(feature = "debug")]
            debug: Default::default(),
        }
    }

    /// Advances the simulation by `dt` seconds.
    ///
    /// Collisions are reported but not acted on; call [Self::reset] to restart the episode.
    pub fn step(&mut self, controls: &[Control], dt: f64) -> TickReport {
        self.car.integrate(controls, dt);
        let placement = self.shape.place(&self.car.pose());

        let checkpoint_crossed = self
            .track
            .checkpoints_mut()
            .update(&placement.edges, &self.params);
        if checkpoint_crossed {
            self.car.checkpoint_crossed();
        }

        self.frame += 1;
        let report = self.report(&placement, checkpoint_crossed);

        #[cfg(feature = "debug")]
        {
            self.debug = take_debug_frame();
        }

        report
    }

    /// Reports on the car's current pose without advancing the simulation.
    pub fn observe(&self) -> TickReport {
        let placement = self.shape.place(&self.car.pose());
        let report = self.report(&placement, false);

        // Observations don't belong to any simulated frame
        #[cfg(feature = "debug")]
        take_debug_frame();

        report
    }

    /// Puts the car back at the start and resets the checkpoints.
    pub fn reset(&mut self) {
        self.car = Car::new(self.car.attributes(), self.track.start());
        self.track.checkpoints_mut().reset();
    }

    /// Gets the current simulation frame index.
    pub fn frame(&self) -> usize {
        self.frame
    }

    /// The track being raced on.
    pub fn track(&self) -> &Track {
        &self.track
    }

    /// The car.
    pub fn car(&self) -> &Car {
        &self.car
    }

    /// Gets the debugging information for the previously simulated frame as JSON array.
    #[cfg(feature = "debug")]
    pub fn debug(&mut self) -> serde_json::Value {
        self.debug.clone()
    }

    /// Tests the placed car against the track.
    fn report(&self, placement: &Placement, checkpoint_crossed: bool) -> TickReport {
        for edge in &placement.edges {
            debug_line("car", edge);
        }
        let walls = self.track.wall_segments();
        TickReport {
            frame: self.frame,
            colliding: self.track.collides(&placement.edges, &self.params),
            checkpoint_crossed,
            checkpoint: self.track.checkpoints().current_index(),
            speed: self.car.speed(),
            pose: self.car.pose(),
            sensors: SensorReadings::sense(&placement.rays, walls, &self.params),
        }
    }
}
