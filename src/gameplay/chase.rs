use glam::{Quat, Vec3};

use super::health::{Health, HealthEvent};
use crate::options::EnemyOptions;

/// One frame of pursuit: where the pursuer ends up, which way it faces,
/// and whether it reached the player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PursuitStep {
    /// Pursuer position after this frame.
    pub position: Vec3,
    /// Facing rotation (forward is -Z), turned toward the player.
    pub facing: Quat,
    /// Whether the pursuer is within contact radius of the player.
    pub contact: bool,
}

/// Straight-line chase toward the player at constant speed.
///
/// Stateless between frames: the caller owns positions and feeds them in
/// each step, and applies contact damage to its own [`Health`] via
/// [`strike`](Self::strike). A missing player makes the step a no-op for
/// that frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ChasePursuit {
    options: EnemyOptions,
}

impl ChasePursuit {
    /// Pursuit behavior with the given tuning.
    #[must_use]
    pub fn new(options: EnemyOptions) -> Self {
        Self { options }
    }

    /// Advance the pursuer one frame toward `player`.
    ///
    /// With no player reference the pursuer holds position and facing.
    /// Contact does not consume the pursuer; the caller decides what a
    /// strike does (see [`strike`](Self::strike)) and whether the
    /// pursuer despawns.
    #[must_use]
    pub fn step(
        &self,
        position: Vec3,
        player: Option<Vec3>,
        dt: f32,
    ) -> PursuitStep {
        let Some(player) = player else {
            return PursuitStep {
                position,
                facing: Quat::IDENTITY,
                contact: false,
            };
        };

        let offset = player - position;
        let distance = offset.length();
        if distance <= self.options.contact_radius {
            let facing = facing_toward(offset);
            return PursuitStep {
                position,
                facing,
                contact: true,
            };
        }

        let direction = offset / distance;
        let travel = (self.options.speed * dt.max(0.0)).min(distance);
        let position = position + direction * travel;
        PursuitStep {
            position,
            facing: facing_toward(direction),
            contact: distance - travel <= self.options.contact_radius,
        }
    }

    /// Land one contact strike on the injected health pool.
    pub fn strike(&self, health: &mut Health) -> HealthEvent {
        health.take_damage(self.options.attack_damage)
    }
}

/// Rotation turning -Z toward `direction`. Identity for a zero vector.
fn facing_toward(direction: Vec3) -> Quat {
    let dir = direction.normalize_or_zero();
    if dir == Vec3::ZERO {
        return Quat::IDENTITY;
    }
    Quat::from_rotation_arc(Vec3::NEG_Z, dir)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn pursuit() -> ChasePursuit {
        ChasePursuit::new(EnemyOptions::default())
    }

    #[test]
    fn steps_straight_toward_player() {
        let step = pursuit().step(
            Vec3::new(0.0, 0.0, -10.0),
            Some(Vec3::ZERO),
            0.1,
        );
        // Default speed 5.0 for 0.1s moves 0.5 units along +Z
        assert_relative_eq!(step.position.z, -9.5, epsilon = 1e-4);
        assert!(!step.contact);
    }

    #[test]
    fn faces_the_player() {
        let step = pursuit().step(
            Vec3::new(10.0, 0.0, 0.0),
            Some(Vec3::ZERO),
            0.016,
        );
        let forward = step.facing * Vec3::NEG_Z;
        assert_relative_eq!(forward.x, -1.0, epsilon = 1e-4);
        assert_relative_eq!(forward.y, 0.0, epsilon = 1e-4);
    }

    #[test]
    fn contact_within_radius() {
        let step = pursuit().step(
            Vec3::new(0.0, 0.0, -0.5),
            Some(Vec3::ZERO),
            0.016,
        );
        assert!(step.contact);
        // Holds position once touching
        assert_relative_eq!(step.position.z, -0.5, epsilon = 1e-6);
    }

    #[test]
    fn missing_player_is_a_noop() {
        let start = Vec3::new(3.0, 0.0, 4.0);
        let step = pursuit().step(start, None, 1.0);
        assert_eq!(step.position, start);
        assert!(!step.contact);
    }

    #[test]
    fn never_overshoots_the_player() {
        let step = pursuit().step(
            Vec3::new(0.0, 0.0, -2.0),
            Some(Vec3::ZERO),
            10.0,
        );
        assert!(step.position.z <= 0.0);
        assert!(step.contact);
    }

    #[test]
    fn strike_applies_attack_damage() {
        let mut health = Health::new(100);
        let event = pursuit().strike(&mut health);
        assert_eq!(event, HealthEvent::Damaged { remaining: 90 });
    }
}
