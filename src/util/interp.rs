//! Exponential approach and linear blend primitives.
//!
//! Every smoothed quantity in the rig (FOV, offsets, rotations, recoil)
//! goes through these functions, so they share one convergence rule:
//!
//! `result = current + (target - current) * clamp(dt * speed, 0, 1)`
//!
//! A step factor of 1 or more lands exactly on the target, as does a
//! non-positive speed or a remaining distance below [`NEARLY_ZERO`].

use glam::Vec3;

use crate::camera::pose::Rotator;

/// Remaining distance under which an approach snaps to its target.
pub const NEARLY_ZERO: f32 = 1e-4;

/// Step factor for one approach, or `None` when the approach completes
/// this step.
#[inline]
fn step_factor(dt: f32, speed: f32) -> Option<f32> {
    if speed <= 0.0 {
        return None;
    }
    let step = (dt * speed).clamp(0.0, 1.0);
    (step < 1.0).then_some(step)
}

/// Move a scalar toward `target`.
#[inline]
#[must_use]
pub fn interp_f32(current: f32, target: f32, dt: f32, speed: f32) -> f32 {
    let dist = target - current;
    if dist.abs() < NEARLY_ZERO {
        return target;
    }
    match step_factor(dt, speed) {
        Some(step) => current + dist * step,
        None => target,
    }
}

/// Move a vector toward `target`.
#[inline]
#[must_use]
pub fn interp_vec3(current: Vec3, target: Vec3, dt: f32, speed: f32) -> Vec3 {
    let dist = target - current;
    if dist.length_squared() < NEARLY_ZERO * NEARLY_ZERO {
        return target;
    }
    match step_factor(dt, speed) {
        Some(step) => current + dist * step,
        None => target,
    }
}

/// Move a rotation toward `target` along the shortest path per axis.
///
/// The result is normalized to (-180, 180] on every axis.
#[must_use]
pub fn interp_rotator(
    current: Rotator,
    target: Rotator,
    dt: f32,
    speed: f32,
) -> Rotator {
    let delta = (target - current).normalized();
    if delta.is_nearly_zero(NEARLY_ZERO) {
        return target;
    }
    match step_factor(dt, speed) {
        Some(step) => (current + delta * step).normalized(),
        None => target,
    }
}

/// Linear blend between two scalars. Exact at `t = 0` and `t = 1`.
#[inline]
#[must_use]
pub fn lerp_f32(start: f32, end: f32, t: f32) -> f32 {
    start * (1.0 - t) + end * t
}

/// Linear blend between two positions.
#[inline]
#[must_use]
pub fn lerp_vec3(start: Vec3, end: Vec3, t: f32) -> Vec3 {
    start.lerp(end, t)
}

/// Normalized progress of a timed blend, with a non-positive duration
/// treated as already complete.
#[inline]
#[must_use]
pub fn progress(elapsed: f32, duration: f32) -> f32 {
    if duration <= 0.0 {
        return 1.0;
    }
    (elapsed / duration).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_step_lands_on_target() {
        assert_eq!(interp_f32(90.0, 60.0, 0.5, 2.0), 60.0);
        assert_eq!(interp_f32(90.0, 60.0, 1.0, 10.0), 60.0);
        let v = interp_vec3(Vec3::ZERO, Vec3::new(3.0, -1.0, 7.0), 0.2, 5.0);
        assert_eq!(v, Vec3::new(3.0, -1.0, 7.0));
    }

    #[test]
    fn partial_step_lies_strictly_between() {
        for &(dt, speed) in &[(0.016, 5.0), (0.1, 2.0), (0.3, 3.0)] {
            let r = interp_f32(90.0, 60.0, dt, speed);
            assert!(r < 90.0 && r > 60.0, "dt={dt} speed={speed} r={r}");
            let r = interp_f32(-10.0, 10.0, dt, speed);
            assert!(r > -10.0 && r < 10.0);
        }
    }

    #[test]
    fn sub_tolerance_gap_snaps_even_on_partial_step() {
        let target = 60.0;
        let current = target + NEARLY_ZERO * 0.5;
        assert_eq!(interp_f32(current, target, 0.016, 5.0), target);

        let current = target + NEARLY_ZERO * 2.0;
        let r = interp_f32(current, target, 0.016, 5.0);
        assert!(r > target && r < current, "r = {r}");
    }

    #[test]
    fn repeated_steps_converge_monotonically() {
        let mut fov = 90.0;
        let mut last_gap = f32::MAX;
        for _ in 0..240 {
            fov = interp_f32(fov, 60.0, 1.0 / 60.0, 5.0);
            let gap = fov - 60.0;
            assert!(gap >= 0.0, "overshoot: {fov}");
            assert!(gap <= last_gap);
            last_gap = gap;
        }
        assert_eq!(fov, 60.0);
    }

    #[test]
    fn non_positive_speed_snaps() {
        assert_eq!(interp_f32(1.0, 5.0, 0.01, 0.0), 5.0);
        assert_eq!(interp_f32(1.0, 5.0, 0.01, -1.0), 5.0);
    }

    #[test]
    fn rotator_takes_shortest_path() {
        let current = Rotator::new(0.0, 170.0, 0.0);
        let target = Rotator::new(0.0, -170.0, 0.0);
        let r = interp_rotator(current, target, 0.25, 2.0);
        // Halfway along the 20 degree arc through 180.
        assert!((r.yaw.abs() - 180.0).abs() < 1e-3, "yaw = {}", r.yaw);
    }

    #[test]
    fn rotator_snaps_when_close() {
        let target = Rotator::new(1.0, 2.0, 3.0);
        let near = Rotator::new(1.0, 2.0 + 1e-5, 3.0);
        assert_eq!(interp_rotator(near, target, 0.01, 1.0), target);
    }

    #[test]
    fn lerp_endpoints_are_exact() {
        assert_eq!(lerp_f32(90.0, 120.0, 0.0), 90.0);
        assert_eq!(lerp_f32(90.0, 120.0, 1.0), 120.0);
        assert_eq!(lerp_f32(90.0, 120.0, 0.5), 105.0);
    }

    #[test]
    fn progress_handles_degenerate_duration() {
        assert_eq!(progress(0.0, 0.0), 1.0);
        assert_eq!(progress(0.0, -2.0), 1.0);
        assert_eq!(progress(0.5, 2.0), 0.25);
        assert_eq!(progress(5.0, 2.0), 1.0);
    }
}
