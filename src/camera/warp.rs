//! Two-phase FOV/vignette/motion-blur ramp driven by its own timer.

use super::pose::CameraPose;
use crate::options::WarpOptions;
use crate::post::PostProcessSettings;
use crate::timer::{TimerHandle, TimerQueue, TimerTask};
use crate::util::interp::{lerp_f32, progress};

/// Where the warp is in its ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WarpPhase {
    /// Not running.
    #[default]
    Idle,
    /// FOV widening toward its peak while vignette and blur build up.
    RampUp,
    /// FOV returning to where it started.
    RampDown,
}

/// Outcome of one warp step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarpStep {
    /// Nothing was running.
    Idle,
    /// The ramp advanced within its current phase.
    Running,
    /// The ramp-up finished and the ramp-down began.
    PhaseSwapped,
    /// The sequence ended and its timer was cancelled.
    Finished,
}

/// Timer-driven warp state.
#[derive(Debug, Clone, Default)]
pub struct WarpSequence {
    phase: WarpPhase,
    elapsed: f32,
    duration: f32,
    origin_fov: f32,
    start_fov: f32,
    end_fov: f32,
    timer: Option<TimerHandle>,
}

impl WarpSequence {
    /// Idle sequence.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> WarpPhase {
        self.phase
    }

    /// Whether a ramp is running.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase != WarpPhase::Idle
    }

    /// FOV the sequence returns to.
    #[must_use]
    pub fn origin_fov(&self) -> f32 {
        self.origin_fov
    }

    /// Handle of the running update timer.
    #[must_use]
    pub fn timer(&self) -> Option<TimerHandle> {
        self.timer
    }

    /// Start ramping up from `current_fov`, restarting any running warp.
    ///
    /// Returns `false` when the update timer could not be scheduled; the
    /// sequence stays idle in that case.
    pub fn begin(
        &mut self,
        current_fov: f32,
        options: &WarpOptions,
        timers: &mut TimerQueue,
    ) -> bool {
        timers.cancel_slot(&mut self.timer);
        self.timer =
            timers.schedule_repeating(TimerTask::Warp, options.callback_period);
        if self.timer.is_none() {
            self.phase = WarpPhase::Idle;
            return false;
        }
        self.phase = WarpPhase::RampUp;
        self.elapsed = 0.0;
        self.duration = options.duration;
        self.origin_fov = current_fov;
        self.start_fov = current_fov;
        self.end_fov = current_fov + options.max_fov_increase;
        log::debug!(
            "warp {} -> {} over {}s",
            self.start_fov,
            self.end_fov,
            self.duration
        );
        true
    }

    /// Advance the ramp by one timer period.
    pub fn step(
        &mut self,
        period: f32,
        pose: &mut CameraPose,
        post: Option<&mut PostProcessSettings>,
        options: &WarpOptions,
        timers: &mut TimerQueue,
    ) -> WarpStep {
        if self.phase == WarpPhase::Idle {
            return WarpStep::Idle;
        }
        self.elapsed += period;
        let alpha = progress(self.elapsed, self.duration);
        pose.fov = lerp_f32(self.start_fov, self.end_fov, alpha);

        let mut post = post;
        if self.phase == WarpPhase::RampUp {
            if let Some(post) = post.as_deref_mut() {
                post.vignette_intensity =
                    lerp_f32(0.0, options.vignette_intensity, alpha);
                post.motion_blur_amount =
                    lerp_f32(0.0, options.motion_blur_amount, alpha);
            }
        }
        if alpha < 1.0 {
            return WarpStep::Running;
        }

        if let Some(post) = post {
            post.vignette_intensity = 0.0;
            post.motion_blur_amount = 0.0;
        }
        match self.phase {
            WarpPhase::RampUp => {
                self.start_fov = self.end_fov;
                self.end_fov = self.origin_fov;
                self.elapsed = 0.0;
                self.phase = WarpPhase::RampDown;
                WarpStep::PhaseSwapped
            }
            WarpPhase::RampDown | WarpPhase::Idle => {
                pose.fov = self.origin_fov;
                self.finish(timers);
                log::debug!("warp finished at fov {}", pose.fov);
                WarpStep::Finished
            }
        }
    }

    /// Stop the sequence where it is and cancel its timer.
    pub fn cancel(&mut self, timers: &mut TimerQueue) {
        self.finish(timers);
    }

    fn finish(&mut self, timers: &mut TimerQueue) {
        self.phase = WarpPhase::Idle;
        self.elapsed = 0.0;
        timers.cancel_slot(&mut self.timer);
    }
}
