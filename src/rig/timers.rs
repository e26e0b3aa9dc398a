//! Dispatch of periodic tasks scheduled on the rig's timer queue.

use super::context::materials_of;
use super::{CameraRig, RigContext};
use crate::camera::WarpStep;
use crate::effects::{CameraEffect, Frame};
use crate::timer::{FiredTimer, TimerTask};

impl CameraRig {
    /// Advance the timer queue by `elapsed` seconds and run whatever came
    /// due, in due order.
    ///
    /// Each firing consumes its timer's period as its time step. A firing
    /// whose timer was cancelled by an earlier firing in the same batch is
    /// skipped.
    pub fn run_timers(&mut self, elapsed: f32, ctx: &mut RigContext<'_>) {
        self.sync_obstacle_timer();
        for fired in self.timers.advance(elapsed) {
            if !self.timers.is_active(fired.handle) {
                continue;
            }
            match fired.task {
                TimerTask::Warp => self.step_warp(fired),
                TimerTask::Fade => self.step_fade(fired),
                TimerTask::ObstacleDetection => {
                    self.detect_obstacles(fired, ctx);
                }
            }
        }
    }

    /// Keep the obstacle probe timer in line with its toggle.
    pub(super) fn sync_obstacle_timer(&mut self) {
        let settings = &self.options.effects.obstacle_detection;
        let scheduled = self
            .obstacle_timer
            .is_some_and(|handle| self.timers.is_active(handle));
        if settings.enabled && !scheduled && settings.interval > 0.0 {
            self.obstacle_timer = self.timers.schedule_repeating(
                TimerTask::ObstacleDetection,
                settings.interval,
            );
        } else if !settings.enabled && self.obstacle_timer.is_some() {
            self.timers.cancel_slot(&mut self.obstacle_timer);
        }
    }

    fn step_warp(&mut self, fired: FiredTimer) {
        if self.warp.timer() != Some(fired.handle) {
            return;
        }
        let step = self.warp.step(
            fired.period,
            &mut self.pose,
            self.post.as_mut(),
            &self.options.warp,
            &mut self.timers,
        );
        match step {
            WarpStep::PhaseSwapped => {
                if let Some(audio) = self.audio.as_deref_mut() {
                    if audio.is_playing() {
                        audio.stop();
                    }
                }
            }
            WarpStep::Finished => log::info!("warp finished"),
            WarpStep::Running | WarpStep::Idle => {}
        }
    }

    fn step_fade(&mut self, fired: FiredTimer) {
        let _ = self
            .fade
            .step(fired.period, self.post.as_mut(), &mut self.timers);
    }

    fn detect_obstacles(
        &mut self,
        fired: FiredTimer,
        ctx: &mut RigContext<'_>,
    ) {
        if Some(fired.handle) != self.obstacle_timer {
            return;
        }
        let owner = ctx.owner.as_deref().map(|owner| owner.kinematics());
        let owner_actor =
            ctx.owner.as_deref().and_then(|owner| owner.actor_id());
        let mut frame = Frame {
            dt: fired.period,
            world_time: ctx.world_time,
            mode: self.modes.mode(),
            pose: &mut self.pose,
            post: self.post.as_mut(),
            controls: &mut self.controls,
            options: &self.options,
            owner,
            owner_actor,
            probe: ctx.probe,
            materials: materials_of(&mut ctx.materials),
        };
        let effect = &mut self.effects.obstacle_detection;
        if effect.enabled(frame.options) {
            effect.apply(&mut frame);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec3;

    use super::*;
    use crate::camera::WarpPhase;
    use crate::options::RigOptions;
    use crate::post::PostProcessSettings;
    use crate::scene::{AudioSink, EmptyScene, SceneShape, StaticScene};

    struct Cue(Rc<RefCell<Vec<&'static str>>>);

    impl AudioSink for Cue {
        fn play(&mut self, _sound: &str, _volume: f32, _pitch: f32) {
            self.0.borrow_mut().push("play");
        }

        fn is_playing(&self) -> bool {
            self.0.borrow().last() == Some(&"play")
        }

        fn stop(&mut self) {
            self.0.borrow_mut().push("stop");
        }
    }

    #[test]
    fn warp_stops_cue_at_phase_swap() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut options = RigOptions::default();
        options.warp.duration = 0.05;
        options.warp.sound = Some("S_Warp".to_owned());
        let mut rig = CameraRig::new(options)
            .with_post_process(PostProcessSettings::default())
            .with_audio(Box::new(Cue(Rc::clone(&events))));
        let mut ctx = RigContext::new(&EmptyScene);
        assert!(rig.begin_warp());
        for _ in 0..6 {
            rig.run_timers(0.01, &mut ctx);
        }
        assert_eq!(rig.warp().phase(), WarpPhase::RampDown);
        assert_eq!(*events.borrow(), ["play", "stop"]);
        for _ in 0..10 {
            rig.run_timers(0.01, &mut ctx);
        }
        assert!(!rig.warp().is_active());
        assert_eq!(rig.pose().fov, 90.0);
        assert!(rig.timers().is_empty());
    }

    #[test]
    fn obstacle_timer_follows_toggle() {
        let mut options = RigOptions::default();
        options.effects.obstacle_detection.enabled = true;
        let mut rig = CameraRig::new(options.clone());
        let mut ctx = RigContext::new(&EmptyScene);
        rig.run_timers(0.0, &mut ctx);
        assert_eq!(rig.timers().len(), 1);

        options.effects.obstacle_detection.enabled = false;
        rig.set_options(options);
        assert!(rig.timers().is_empty());
    }

    #[test]
    fn obstacle_probe_runs_on_interval() {
        let scene = StaticScene::new().with(
            SceneShape::Plane {
                point: Vec3::new(-220.0, 0.0, 0.0),
                normal: -Vec3::X,
            },
            1,
            1,
        );
        let mut options = RigOptions::default();
        options.effects.obstacle_detection.enabled = true;
        options.effects.obstacle_detection.interval = 0.5;
        let mut rig = CameraRig::new(options);
        rig.initialize();
        let mut ctx = RigContext::new(&scene);

        rig.run_timers(0.4, &mut ctx);
        assert_eq!(rig.effects().obstacle_detection.last_offset(), None);
        rig.run_timers(0.2, &mut ctx);
        let offset = rig.effects().obstacle_detection.last_offset().unwrap();
        assert!((offset - 30.0).abs() < 1e-3);
        assert!((rig.pose().position.x + 270.0).abs() < 1e-3);
    }
}
