use glam::Vec3;

use super::score::ScoreBoard;
use crate::options::WeaponOptions;
use crate::util::timer::CountdownTimer;

/// A shootable target approximated by a bounding sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    /// Caller-assigned identifier, echoed back on a hit.
    pub id: u32,
    /// Sphere center in world space.
    pub center: Vec3,
    /// Sphere radius in world units.
    pub radius: f32,
}

/// Result of a trigger pull.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FireOutcome {
    /// The fire-rate gate has not elapsed yet; nothing happened.
    NotReady,
    /// The ray hit nothing within range; the laser ends at `end`.
    Miss {
        /// World-space end point of the laser line.
        end: Vec3,
    },
    /// The nearest target along the ray was hit.
    Hit {
        /// Identifier of the destroyed target.
        target_id: u32,
        /// World-space impact point (laser end).
        point: Vec3,
    },
}

/// Hitscan weapon: fire-rate gate, ray-vs-sphere hit test, laser
/// visibility window.
///
/// The weapon owns no world state. Targets are passed in per shot and
/// score is awarded through the injected [`ScoreBoard`]; the caller
/// removes destroyed targets from its own world.
pub struct HitscanWeapon {
    options: WeaponOptions,
    /// Seconds since the last shot, saturating at the fire-rate gate.
    fire_timer: f32,
    laser: CountdownTimer,
}

impl HitscanWeapon {
    /// A weapon ready to fire immediately.
    #[must_use]
    pub fn new(options: WeaponOptions) -> Self {
        let fire_timer = options.fire_rate;
        Self {
            options,
            fire_timer,
            laser: CountdownTimer::idle(),
        }
    }

    /// Advance the fire-rate gate and the laser visibility window. Call
    /// once per frame.
    pub fn tick(&mut self, dt: f32) {
        self.fire_timer =
            (self.fire_timer + dt.max(0.0)).min(self.options.fire_rate);
        let _expired = self.laser.tick(dt);
    }

    /// Whether the laser line should be rendered this frame.
    #[must_use]
    pub fn laser_visible(&self) -> bool {
        self.laser.is_running()
    }

    /// Pull the trigger.
    ///
    /// Gated by the fire rate. On a hit the nearest target along the ray
    /// is reported and `score_per_hit` is added to the injected
    /// scoreboard. `direction` need not be normalized; a zero direction
    /// misses at the origin.
    pub fn fire(
        &mut self,
        origin: Vec3,
        direction: Vec3,
        targets: &[Target],
        score: &mut ScoreBoard,
    ) -> FireOutcome {
        if self.fire_timer < self.options.fire_rate {
            return FireOutcome::NotReady;
        }
        self.fire_timer = 0.0;
        self.laser.start(self.options.laser_duration);

        let dir = direction.normalize_or_zero();
        if dir == Vec3::ZERO {
            return FireOutcome::Miss { end: origin };
        }

        let mut nearest: Option<(f32, u32)> = None;
        for target in targets {
            if let Some(t) =
                ray_sphere(origin, dir, target.center, target.radius)
            {
                if t <= self.options.range
                    && nearest.map_or(true, |(best, _)| t < best)
                {
                    nearest = Some((t, target.id));
                }
            }
        }

        match nearest {
            Some((t, target_id)) => {
                let _event = score.add(self.options.score_per_hit);
                FireOutcome::Hit {
                    target_id,
                    point: origin + dir * t,
                }
            }
            None => FireOutcome::Miss {
                end: origin + dir * self.options.range,
            },
        }
    }
}

/// Distance along the ray to the first intersection with a sphere, if
/// any. The ray direction must be unit length.
fn ray_sphere(origin: Vec3, dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let to_center = center - origin;
    let proj = to_center.dot(dir);
    let closest_sq = to_center.length_squared() - proj * proj;
    let radius_sq = radius * radius;
    if closest_sq > radius_sq {
        return None;
    }
    let half_chord = (radius_sq - closest_sq).sqrt();
    let near = proj - half_chord;
    if near >= 0.0 {
        Some(near)
    } else if proj + half_chord >= 0.0 {
        // Ray starts inside the sphere
        Some(0.0)
    } else {
        None
    }
}
