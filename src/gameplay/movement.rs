use glam::{Quat, Vec2, Vec3};

/// Joystick dead zone below which input is treated as centered.
const DEAD_ZONE: f32 = 0.01;

/// World-space displacement for one frame of camera-relative movement.
///
/// `input` is the joystick vector (`x` strafe, `y` forward, each in
/// `[-1, 1]`); `camera` is the current look rotation. The camera's
/// forward and right axes are flattened onto the ground plane and
/// renormalized, so looking up or down never changes movement speed.
/// Returns zero inside the dead zone and when the camera points straight
/// up or down.
#[must_use]
pub fn camera_relative_step(
    input: Vec2,
    camera: Quat,
    speed: f32,
    dt: f32,
) -> Vec3 {
    if input.length() < DEAD_ZONE {
        return Vec3::ZERO;
    }

    let mut forward = camera * Vec3::NEG_Z;
    let mut right = camera * Vec3::X;
    forward.y = 0.0;
    right.y = 0.0;
    forward = forward.normalize_or_zero();
    right = right.normalize_or_zero();

    let direction = forward * input.y + right * input.x;
    direction * speed * dt.max(0.0)
}
