//! One-shot actions: warp, fade, overlays, post-process presets, shakes.

use glam::Vec3;

use super::CameraRig;
use crate::effects::{fstop_for, FOCAL_REGION};
use crate::options::ShakeAction;
use crate::post::MaterialInstance;
use crate::scene::OwnerProvider;

/// Scalar parameter the occlusion overlay reads.
pub const OCCLUSION_INTENSITY: &str = "OcclusionIntensity";

impl CameraRig {
    /// Start the warp from the current FOV and play its cue.
    ///
    /// Restarts from the current FOV when a warp is already running.
    pub fn begin_warp(&mut self) -> bool {
        if !self
            .warp
            .begin(self.pose.fov, &self.options.warp, &mut self.timers)
        {
            return false;
        }
        if let (Some(audio), Some(sound)) =
            (self.audio.as_deref_mut(), self.options.warp.sound.as_deref())
        {
            let warp = &self.options.warp;
            audio.play(sound, warp.sound_volume, warp.sound_pitch);
        }
        log::info!("warp started from fov {}", self.pose.fov);
        true
    }

    /// Fade the overlay in over `duration` seconds. Needs a post-process
    /// block and a configured fade material.
    pub fn apply_fade(&mut self, duration: f32) -> bool {
        let Some(post) = self.post.as_mut() else {
            return false;
        };
        self.fade
            .begin(duration, &self.options.fade, post, &mut self.timers)
    }

    /// Detach the fade overlay and stop its timer.
    pub fn clear_fade(&mut self) {
        if let Some(post) = self.post.as_mut() {
            self.fade.clear(post, &mut self.timers);
        }
    }

    /// Attach the occlusion overlay, replacing any earlier one.
    pub fn apply_occlusion_overlay(&mut self) -> bool {
        let (Some(post), Some(material)) = (
            self.post.as_mut(),
            self.options.post_processing.occlusion_material.as_deref(),
        ) else {
            return false;
        };
        if let Some(id) = self.occlusion_overlay.take() {
            let _ = post.remove_blendable(id);
        }
        let instance = MaterialInstance::new(material)
            .with_scalar(OCCLUSION_INTENSITY, 1.0);
        self.occlusion_overlay = Some(post.add_blendable(instance, 1.0));
        true
    }

    /// Detach the occlusion overlay.
    pub fn remove_occlusion_overlay(&mut self) {
        if let (Some(post), Some(id)) =
            (self.post.as_mut(), self.occlusion_overlay.take())
        {
            let _ = post.remove_blendable(id);
        }
    }

    /// Write the configured depth of field.
    pub fn apply_depth_of_field(&mut self) {
        let focus =
            self.options.effects.adaptive_depth_of_field.focus_distance;
        let settings = &self.options.post_processing;
        if let Some(post) = self.post.as_mut() {
            post.depth_of_field_distance = settings.depth_of_field;
            post.depth_of_field_region = settings.focal_region;
            post.depth_of_field_fstop = fstop_for(focus);
        }
    }

    /// Write the configured motion blur amount.
    pub fn apply_motion_blur(&mut self) {
        if let Some(post) = self.post.as_mut() {
            post.motion_blur_amount =
                self.options.post_processing.motion_blur_amount;
        }
    }

    /// Write the configured color grading intensity.
    pub fn apply_color_grading(&mut self) {
        if let Some(post) = self.post.as_mut() {
            post.color_grading_intensity =
                self.options.post_processing.color_grading_intensity;
        }
    }

    /// Write the configured vignette intensity.
    pub fn apply_vignette(&mut self) {
        if let Some(post) = self.post.as_mut() {
            post.vignette_intensity =
                self.options.post_processing.vignette_intensity;
        }
    }

    /// Play `class` as a world shake at the owner's location.
    pub fn trigger_shake(
        &mut self,
        class: &str,
        scale: f32,
        owner: Option<&dyn OwnerProvider>,
    ) {
        let Some(shakes) = self.shakes.as_deref_mut() else {
            return;
        };
        let epicenter =
            owner.map_or(Vec3::ZERO, |owner| owner.kinematics().location);
        shakes.play_world_shake(class, epicenter, scale);
    }

    /// Play the configured shake for `action`, scaled by its mapping.
    ///
    /// Returns `false` when the action has no mapping or no shake class is
    /// configured.
    pub fn trigger_shake_action(
        &mut self,
        action: ShakeAction,
        owner: Option<&dyn OwnerProvider>,
    ) -> bool {
        let shake = &self.options.shake;
        let (Some(class), Some(mapping)) =
            (shake.shake_class.clone(), shake.mapping(action))
        else {
            return false;
        };
        let scale = mapping.intensity;
        self.trigger_shake(&class, scale, owner);
        true
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::camera::fade::FADE_AMOUNT;
    use crate::options::{RigOptions, ShakeMapping};
    use crate::post::PostProcessSettings;
    use crate::scene::{AudioSink, ShakeSink};

    type Log = Rc<RefCell<Vec<String>>>;

    struct Recorder(Log);

    impl AudioSink for Recorder {
        fn play(&mut self, sound: &str, _volume: f32, _pitch: f32) {
            self.0.borrow_mut().push(format!("play {sound}"));
        }

        fn is_playing(&self) -> bool {
            true
        }

        fn stop(&mut self) {
            self.0.borrow_mut().push("stop".to_owned());
        }
    }

    impl ShakeSink for Recorder {
        fn play_world_shake(
            &mut self,
            class: &str,
            _epicenter: Vec3,
            scale: f32,
        ) {
            self.0.borrow_mut().push(format!("shake {class} {scale}"));
        }
    }

    fn options() -> RigOptions {
        let mut options = RigOptions::default();
        options.fade.material = Some("M_Fade".to_owned());
        let post = &mut options.post_processing;
        post.occlusion_material = Some("M_Occlusion".to_owned());
        post.post_process_material = Some("M_Base".to_owned());
        options.warp.sound = Some("S_Warp".to_owned());
        options
    }

    #[test]
    fn post_actions_are_no_ops_without_post_block() {
        let mut rig = CameraRig::new(options());
        rig.apply_depth_of_field();
        rig.apply_vignette();
        assert!(!rig.apply_fade(1.0));
        assert!(!rig.apply_occlusion_overlay());
        assert!(rig.post_process().is_none());
    }

    #[test]
    fn depth_of_field_uses_configured_values() {
        let mut opts = options();
        opts.effects.adaptive_depth_of_field.focus_distance = 3000.0;
        let mut rig = CameraRig::new(opts)
            .with_post_process(PostProcessSettings::default());
        rig.apply_depth_of_field();
        rig.apply_color_grading();
        let post = rig.post_process().unwrap();
        assert_eq!(post.depth_of_field_distance, 1000.0);
        assert_eq!(post.depth_of_field_region, FOCAL_REGION);
        assert_eq!(post.depth_of_field_fstop, 3.0);
        assert_eq!(post.color_grading_intensity, 1.0);
    }

    #[test]
    fn overlays_are_replaced_not_stacked() {
        let mut rig = CameraRig::new(options())
            .with_post_process(PostProcessSettings::default());
        rig.initialize();
        rig.initialize();
        assert_eq!(rig.post_process().unwrap().blendables().len(), 1);

        assert!(rig.apply_occlusion_overlay());
        assert!(rig.apply_occlusion_overlay());
        assert!(rig.apply_fade(0.5));
        assert!(rig.apply_fade(0.5));
        let post = rig.post_process().unwrap();
        assert_eq!(post.blendables().len(), 3);
        assert_eq!(rig.fade().amount(post), Some(0.0));

        rig.remove_occlusion_overlay();
        rig.remove_occlusion_overlay();
        rig.clear_fade();
        let post = rig.post_process().unwrap();
        assert_eq!(post.blendables().len(), 1);
        assert_eq!(post.blendables()[0].material.parent(), "M_Base");
        assert!(post.blendables()[0].material.scalar(FADE_AMOUNT).is_none());
    }

    #[test]
    fn warp_plays_cue_and_schedules_timer() {
        let log = Log::default();
        let mut rig = CameraRig::new(options())
            .with_audio(Box::new(Recorder(Rc::clone(&log))));
        assert!(rig.begin_warp());
        assert_eq!(*log.borrow(), ["play S_Warp"]);
        assert_eq!(rig.timers().len(), 1);
        assert!(rig.warp().is_active());
    }

    #[test]
    fn shake_action_uses_first_mapping() {
        let log = Log::default();
        let mut opts = options();
        opts.shake.shake_class = Some("CS_Hit".to_owned());
        opts.shake.mappings = vec![
            ShakeMapping {
                action: ShakeAction::Damage,
                intensity: 2.5,
                ..ShakeMapping::default()
            },
            ShakeMapping {
                action: ShakeAction::Damage,
                intensity: 9.0,
                ..ShakeMapping::default()
            },
        ];
        let mut rig = CameraRig::new(opts)
            .with_shake_sink(Box::new(Recorder(Rc::clone(&log))));
        assert!(rig.trigger_shake_action(ShakeAction::Damage, None));
        assert!(!rig.trigger_shake_action(ShakeAction::Jump, None));
        assert_eq!(*log.borrow(), ["shake CS_Hit 2.5"]);
    }
}
