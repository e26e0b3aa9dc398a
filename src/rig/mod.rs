//! The camera rig: owns the pose and runs the per-frame sequence.
//!
//! [`CameraRig::tick`] runs once per simulation frame. It walks the fixed
//! stage sequence in [`sequence`], letting the transition engine and each
//! enabled effect adjust the pose, then commits the result to the host
//! camera. [`CameraRig::run_timers`] drives the warp, fade and obstacle
//! probe at their own cadence on the same thread; the host chooses how the
//! two calls interleave.

mod actions;
mod context;
mod input;
pub mod sequence;
mod timers;

use glam::Vec3;

pub use context::RigContext;

use crate::camera::{
    CameraMode, CameraPose, FadeSequence, ModeController, TransitionEngine,
    WarpSequence,
};
use crate::effects::{ControlState, EffectSet};
use crate::options::RigOptions;
use crate::post::{BlendableId, MaterialInstance, PostProcessSettings};
use crate::scene::{AudioSink, ShakeSink};
use crate::timer::{TimerHandle, TimerQueue};

/// Per-frame camera state blender.
pub struct CameraRig {
    options: RigOptions,
    pose: CameraPose,
    committed: CameraPose,
    controls: ControlState,
    modes: ModeController,
    transition: TransitionEngine,
    warp: WarpSequence,
    fade: FadeSequence,
    effects: EffectSet,
    timers: TimerQueue,
    obstacle_timer: Option<TimerHandle>,
    post: Option<PostProcessSettings>,
    occlusion_overlay: Option<BlendableId>,
    base_material: Option<BlendableId>,
    audio: Option<Box<dyn AudioSink>>,
    shakes: Option<Box<dyn ShakeSink>>,
    last_dt: f32,
    frames: u64,
}

impl CameraRig {
    /// Third-person rig at its configured offset and default FOV.
    ///
    /// Configuration problems are logged and otherwise tolerated.
    #[must_use]
    pub fn new(options: RigOptions) -> Self {
        for problem in options.problems() {
            log::warn!("camera options: {problem}");
        }
        let mode = CameraMode::ThirdPerson;
        let position =
            options.positions.mode_position(mode).unwrap_or(Vec3::ZERO);
        let pose = CameraPose::new(position, options.fov.default_fov);
        Self {
            options,
            pose,
            committed: pose,
            controls: ControlState::default(),
            modes: ModeController::new(mode),
            transition: TransitionEngine::new(),
            warp: WarpSequence::new(),
            fade: FadeSequence::new(),
            effects: EffectSet::new(),
            timers: TimerQueue::new(),
            obstacle_timer: None,
            post: None,
            occlusion_overlay: None,
            base_material: None,
            audio: None,
            shakes: None,
            last_dt: 0.0,
            frames: 0,
        }
    }

    /// Attach a post-process block. Without one, post-process writes are
    /// skipped.
    #[must_use]
    pub fn with_post_process(mut self, post: PostProcessSettings) -> Self {
        self.post = Some(post);
        self
    }

    /// Attach the audio sink used for the warp cue.
    #[must_use]
    pub fn with_audio(mut self, audio: Box<dyn AudioSink>) -> Self {
        self.audio = Some(audio);
        self
    }

    /// Attach the camera shake sink.
    #[must_use]
    pub fn with_shake_sink(mut self, shakes: Box<dyn ShakeSink>) -> Self {
        self.shakes = Some(shakes);
        self
    }

    /// Reset to the third-person rest pose, attach the configured base
    /// post-process material once and start the obstacle probe timer.
    pub fn initialize(&mut self) {
        let position = self
            .options
            .positions
            .mode_position(CameraMode::ThirdPerson)
            .unwrap_or(Vec3::ZERO);
        self.transition
            .instant(&mut self.pose, position, self.options.fov.default_fov);
        self.controls.look_target = self.pose.rotation;
        self.committed = self.pose;

        if self.base_material.is_none() {
            if let (Some(post), Some(material)) = (
                self.post.as_mut(),
                self.options.post_processing.post_process_material.as_deref(),
            ) {
                let instance = MaterialInstance::new(material);
                self.base_material = Some(post.add_blendable(instance, 1.0));
            }
        }
        self.sync_obstacle_timer();
        log::info!("camera rig initialized at {position}");
    }

    /// Active options.
    #[must_use]
    pub fn options(&self) -> &RigOptions {
        &self.options
    }

    /// Replace the options. Takes effect from the next frame; the obstacle
    /// probe timer is rescheduled at the new interval.
    pub fn set_options(&mut self, options: RigOptions) {
        for problem in options.problems() {
            log::warn!("camera options: {problem}");
        }
        self.options = options;
        self.timers.cancel_slot(&mut self.obstacle_timer);
        self.sync_obstacle_timer();
    }

    /// Pose being built, including changes made since the last commit.
    #[must_use]
    pub fn pose(&self) -> &CameraPose {
        &self.pose
    }

    /// Pose written by the last completed frame.
    #[must_use]
    pub fn committed_pose(&self) -> &CameraPose {
        &self.committed
    }

    /// Post-process block, when attached.
    #[must_use]
    pub fn post_process(&self) -> Option<&PostProcessSettings> {
        self.post.as_ref()
    }

    /// Aim/run/look/recoil state.
    #[must_use]
    pub fn controls(&self) -> &ControlState {
        &self.controls
    }

    /// Effect instances and their carried state.
    #[must_use]
    pub fn effects(&self) -> &EffectSet {
        &self.effects
    }

    /// Mode transition engine.
    #[must_use]
    pub fn transition(&self) -> &TransitionEngine {
        &self.transition
    }

    /// Warp sequence.
    #[must_use]
    pub fn warp(&self) -> &WarpSequence {
        &self.warp
    }

    /// Fade sequence.
    #[must_use]
    pub fn fade(&self) -> &FadeSequence {
        &self.fade
    }

    /// Scheduled periodic tasks.
    #[must_use]
    pub fn timers(&self) -> &TimerQueue {
        &self.timers
    }

    /// Frames ticked so far.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Active camera mode.
    #[must_use]
    pub fn mode(&self) -> CameraMode {
        self.modes.mode()
    }

    /// Whether the last first/third-person switch went to first person.
    #[must_use]
    pub fn is_first_person(&self) -> bool {
        self.modes.is_first_person()
    }

    /// Switch mode, blending to the mode's offset where it has one.
    /// Returns `false` when `mode` is already active.
    pub fn set_mode(&mut self, mode: CameraMode) -> bool {
        self.modes
            .set_mode(mode, &self.options, &self.pose, &mut self.transition)
    }

    /// Switch to first person.
    pub fn switch_to_first_person(&mut self) -> bool {
        self.set_mode(CameraMode::FirstPerson)
    }

    /// Switch to third person.
    pub fn switch_to_third_person(&mut self) -> bool {
        self.set_mode(CameraMode::ThirdPerson)
    }

    /// Switch to the free camera.
    pub fn switch_to_free_camera(&mut self) -> bool {
        self.set_mode(CameraMode::FreeCamera)
    }

    /// Switch to the cinematic camera.
    pub fn switch_to_cinematic(&mut self) -> bool {
        self.set_mode(CameraMode::Cinematic)
    }

    /// Blend position and FOV to a target over `duration` seconds.
    pub fn smooth_transition_to(
        &mut self,
        position: Vec3,
        fov: f32,
        duration: f32,
    ) {
        self.transition.begin(&self.pose, position, fov, duration);
    }

    /// Jump to a position and FOV, cancelling any running blend.
    pub fn instant_transition_to(&mut self, position: Vec3, fov: f32) {
        self.transition.instant(&mut self.pose, position, fov);
    }

    /// Override the FOV directly.
    pub fn set_fov(&mut self, fov: f32) {
        self.pose.fov = fov;
    }
}
