//! Timed position/FOV blend used for mode switches.

use glam::Vec3;

use super::pose::CameraPose;
use crate::util::interp::{lerp_f32, lerp_vec3, progress};

/// Snapshot of an in-flight or finished transition.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TransitionState {
    /// Whether the blend is still running.
    pub active: bool,
    /// Seconds since the blend began.
    pub elapsed: f32,
    /// Total blend length in seconds.
    pub duration: f32,
    /// Position when the blend began.
    pub start_position: Vec3,
    /// Position the blend ends on.
    pub target_position: Vec3,
    /// FOV when the blend began.
    pub start_fov: f32,
    /// FOV the blend ends on.
    pub target_fov: f32,
}

/// Linear blend of pose position and FOV over a fixed duration.
///
/// When the blend completes, the pose is set exactly to the target
/// values rather than to the last interpolated sample.
#[derive(Debug, Clone, Default)]
pub struct TransitionEngine {
    state: TransitionState,
}

impl TransitionEngine {
    /// Idle engine.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current blend state.
    #[must_use]
    pub fn state(&self) -> &TransitionState {
        &self.state
    }

    /// Whether a blend is running.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state.active
    }

    /// Progress of the current blend in [0, 1].
    #[must_use]
    pub fn alpha(&self) -> f32 {
        progress(self.state.elapsed, self.state.duration)
    }

    /// Start blending from `pose` toward the target values, replacing any
    /// blend already running.
    ///
    /// A non-positive duration completes on the next [`tick`](Self::tick).
    pub fn begin(
        &mut self,
        pose: &CameraPose,
        target_position: Vec3,
        target_fov: f32,
        duration: f32,
    ) {
        self.state = TransitionState {
            active: true,
            elapsed: 0.0,
            duration,
            start_position: pose.position,
            target_position,
            start_fov: pose.fov,
            target_fov,
        };
    }

    /// Advance the blend and write the pose. Returns whether the pose was
    /// written.
    pub fn tick(&mut self, dt: f32, pose: &mut CameraPose) -> bool {
        if !self.state.active {
            return false;
        }
        self.state.elapsed += dt.max(0.0);
        let alpha = self.alpha();
        let s = &self.state;
        if alpha >= 1.0 {
            pose.position = s.target_position;
            pose.fov = s.target_fov;
            self.state.active = false;
        } else {
            pose.position =
                lerp_vec3(s.start_position, s.target_position, alpha);
            pose.fov = lerp_f32(s.start_fov, s.target_fov, alpha);
        }
        true
    }

    /// Jump straight to the target values and stop any running blend.
    pub fn instant(
        &mut self,
        pose: &mut CameraPose,
        target_position: Vec3,
        target_fov: f32,
    ) {
        pose.position = target_position;
        pose.fov = target_fov;
        self.state.active = false;
    }

    /// Stop the running blend where it is.
    pub fn cancel(&mut self) {
        self.state.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pose() -> CameraPose {
        CameraPose::new(Vec3::ZERO, 90.0)
    }

    #[test]
    fn blends_linearly_then_lands_exactly() {
        let mut engine = TransitionEngine::new();
        let mut p = pose();
        let target = Vec3::new(-300.0, 0.0, 100.0);
        engine.begin(&p, target, 60.0, 1.0);

        assert!(engine.tick(0.5, &mut p));
        assert!((p.position - Vec3::new(-150.0, 0.0, 50.0)).length() < 1e-3);
        assert!((p.fov - 75.0).abs() < 1e-4);
        assert!(engine.is_active());

        assert!(engine.tick(0.7, &mut p));
        assert_eq!(p.position, target);
        assert_eq!(p.fov, 60.0);
        assert!(!engine.is_active());
        assert!(!engine.tick(0.1, &mut p));
    }

    #[test]
    fn zero_duration_completes_on_first_tick() {
        let mut engine = TransitionEngine::new();
        let mut p = pose();
        engine.begin(&p, Vec3::X, 70.0, 0.0);
        assert!(engine.tick(0.0, &mut p));
        assert_eq!(p.position, Vec3::X);
        assert_eq!(p.fov, 70.0);
        assert!(!engine.is_active());
    }

    #[test]
    fn restart_blends_from_current_pose() {
        let mut engine = TransitionEngine::new();
        let mut p = pose();
        engine.begin(&p, Vec3::new(100.0, 0.0, 0.0), 90.0, 1.0);
        let _ = engine.tick(0.5, &mut p);
        engine.begin(&p, Vec3::ZERO, 90.0, 1.0);
        assert_eq!(engine.state().start_position, Vec3::new(50.0, 0.0, 0.0));
        assert_eq!(engine.alpha(), 0.0);
    }

    #[test]
    fn instant_stops_blend() {
        let mut engine = TransitionEngine::new();
        let mut p = pose();
        engine.begin(&p, Vec3::X, 60.0, 5.0);
        engine.instant(&mut p, Vec3::Y, 80.0);
        assert!(!engine.is_active());
        assert_eq!(p.position, Vec3::Y);
        assert_eq!(p.fov, 80.0);
    }
}
