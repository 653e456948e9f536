//! Demo frame driver: scripted attitude sweep through the tracker.
//!
//! The host application owns the frame loop; the tracker only consumes
//! samples. This driver fakes a device slowly yawing right while bobbing
//! in pitch, recenters halfway through, and logs the tracked yaw/pitch.
//!
//! Usage: `gyrolook-demo [options.toml]`

use std::path::Path;

use glam::{EulerRot, Quat};
use gyrolook::input::{AttitudeSource, ScriptedSource};
use gyrolook::options::Options;
use gyrolook::tracker::{pitch_degrees, AxisConvention, OrientationTracker};

const FRAMES: usize = 300;
const DT: f32 = 1.0 / 60.0;

fn scripted_sweep() -> Vec<Quat> {
    (0..FRAMES)
        .map(|frame| {
            let t = frame as f32 * DT;
            let yaw = 0.4 * t;
            let pitch = 0.3 * (t * 2.0).sin();
            Quat::from_euler(EulerRot::YXZ, yaw, pitch, 0.0)
        })
        .collect()
}

fn main() {
    env_logger::init();

    let mut options = match std::env::args().nth(1) {
        Some(path) => match Options::load(Path::new(&path)) {
            Ok(options) => {
                log::info!("loaded options from {path}");
                options
            }
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };
    // The sweep is generated in render space already
    options.tracker.convention = AxisConvention::RenderSpace;

    let mut source = ScriptedSource::new(scripted_sweep());
    let mut tracker =
        OrientationTracker::new(options.tracker, options.pointer);
    let mode = tracker.initialize(&mut source, Quat::IDENTITY);
    log::info!("tracking mode: {mode:?}");

    for frame in 0..FRAMES {
        tracker.tick(DT);
        if frame == FRAMES / 2 {
            log::info!("recentering at frame {frame}");
            tracker.recenter();
        }
        let Some(raw) = source.attitude() else { break };
        let orientation = tracker.update(raw, DT);
        if frame % 30 == 0 {
            let (yaw, _, _) = orientation.to_euler(EulerRot::YXZ);
            log::info!(
                "frame {frame:3}  yaw {:7.2}  pitch {:7.2}",
                yaw.to_degrees(),
                pitch_degrees(orientation)
            );
        }
    }

    tracker.dispose();
    log::info!("demo complete");
}
