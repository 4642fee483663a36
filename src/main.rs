use std::time::{Duration, Instant};

use log::{info, warn};
use qracing::{Control, Level, RayKind, Simulation, SimulationConfig, TickReport, TrackError};
use rand::Rng;

/// Simulated time per frame in s.
const FRAME_SEC: f64 = 1.0 / 60.0;

/// Slow down when the wall ahead is closer than this.
const BRAKE_DISTANCE: f64 = 80.0;

/// Chance of replacing the steering decision with a random one.
const EXPLORATION: f64 = 0.05;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), TrackError> {
    let mut args = std::env::args().skip(1);
    let Some(level_path) = args.next() else {
        eprintln!("usage: qracing <level.json> [frames] [config.json]");
        std::process::exit(2);
    };
    let frames = args
        .next()
        .and_then(|n| n.parse::<usize>().ok())
        .unwrap_or(10_000);
    let config = match args.next() {
        Some(path) => {
            let json = std::fs::read_to_string(&path).map_err(|source| TrackError::Io {
                path: path.into(),
                source,
            })?;
            SimulationConfig::from_json_str(&json)?
        }
        None => SimulationConfig::default(),
    };

    let track = Level::load(&level_path)?.to_track()?;
    let mut sim = Simulation::new(track, &config);
    let mut rng = rand::thread_rng();
    let mut report = sim.observe();
    let mut episodes = 1;
    let mut checkpoints = 0;

    println!("Simulating...");
    let start = Instant::now();
    for _ in 0..frames {
        let controls = choose_controls(&report, &mut rng);
        report = sim.step(&controls, FRAME_SEC);
        if report.checkpoint_crossed {
            checkpoints += 1;
            info!(
                "Frame {}: checkpoint crossed, next is {}",
                report.frame, report.checkpoint
            );
        }
        if report.colliding {
            warn!(
                "Frame {}: hit a wall after {:.1}s without a checkpoint",
                report.frame,
                sim.car().since_checkpoint()
            );
            sim.reset();
            report = sim.observe();
            episodes += 1;
        }
    }

    let frame = average_frame(start.elapsed(), frames);
    println!(
        "Avg. frame: {:?} ({} episodes, {} checkpoints)",
        frame, episodes, checkpoints
    );
    Ok(())
}

/// The mean wall-clock time of a frame.
fn average_frame(elapsed: Duration, frames: usize) -> Duration {
    elapsed.div_f64(frames.max(1) as f64)
}

/// A simple agent: accelerate unless a wall is close ahead, and steer towards open space.
fn choose_controls(report: &TickReport, rng: &mut impl Rng) -> Vec<Control> {
    let sensor = |kind| report.sensors.get(kind).unwrap_or(0.0);
    let mut controls = vec![];

    if sensor(RayKind::Front) > BRAKE_DISTANCE || report.speed < 50.0 {
        controls.push(Control::Accelerate);
    }

    let left = sensor(RayKind::FrontLeftDiagonal) + sensor(RayKind::FrontLeftPerpendicular);
    let right = sensor(RayKind::FrontRightDiagonal) + sensor(RayKind::FrontRightPerpendicular);
    let steer = if rng.gen_bool(EXPLORATION) {
        if rng.gen_bool(0.5) {
            Control::Left
        } else {
            Control::Right
        }
    } else if left > right {
        Control::Left
    } else {
        Control::Right
    };
    if (left - right).abs() > 10.0 {
        controls.push(steer);
    }

    controls
}
