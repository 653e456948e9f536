//! Degree-based angle helpers.
//!
//! Euler components coming out of quaternion decomposition live in
//! `[-180, 180]`; accumulated pointer look angles can wander anywhere.
//! These helpers keep the two comparable and interpolate along the
//! shortest arc.

/// Wrap an angle in degrees into `[-180, 180]`.
#[inline]
#[must_use]
pub fn normalize_degrees(angle: f32) -> f32 {
    let mut a = angle % 360.0;
    if a > 180.0 {
        a -= 360.0;
    }
    if a < -180.0 {
        a += 360.0;
    }
    a
}

/// Interpolate between two angles in degrees along the shortest arc.
///
/// `t` is clamped to `[0, 1]`. The result is wrapped into `[-180, 180]`.
#[inline]
#[must_use]
pub fn lerp_degrees(from: f32, to: f32, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let delta = normalize_degrees(to - from);
    normalize_degrees(from + delta * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_wraps_into_range() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(190.0), -170.0);
        assert_eq!(normalize_degrees(-190.0), 170.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(725.0), 5.0);
    }

    #[test]
    fn lerp_takes_shortest_arc() {
        // 170 -> -170 is 20 degrees through the wrap, not 340 back
        let half = lerp_degrees(170.0, -170.0, 0.5);
        assert!((half - 180.0).abs() < 1e-4 || (half + 180.0).abs() < 1e-4);
        assert!((lerp_degrees(170.0, -170.0, 1.0) + 170.0).abs() < 1e-4);
    }

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp_degrees(-40.0, 60.0, 0.0), -40.0);
        assert_eq!(lerp_degrees(-40.0, 60.0, 1.0), 60.0);
    }

    #[test]
    fn lerp_clamps_t() {
        assert_eq!(lerp_degrees(0.0, 10.0, 2.0), 10.0);
        assert_eq!(lerp_degrees(0.0, 10.0, -1.0), 0.0);
    }
}
