//! Scripted headless session for the camera rig.
//!
//! Walks a pawn through a small static scene at 60 Hz for ten simulated
//! seconds, exercising aiming, running, warp, recoil, mode switches and a
//! fade. Run with `RUST_LOG=debug` for per-event detail. An optional first
//! argument names a TOML preset to load.

use std::path::PathBuf;

use camrig::post::{Material, PostProcessSettings};
use camrig::scene::{
    ActorId, AudioSink, CameraSink, Kinematics, MaterialTable, OwnerProvider,
    SceneShape, StaticScene,
};
use camrig::{CamRigError, CameraRig, RigContext, RigOptions, Rotator};
use glam::Vec3;
use rand::Rng;
use web_time::Instant;

const STEP: f32 = 1.0 / 60.0;
const DURATION: f32 = 10.0;
const WALK_SPEED: f32 = 300.0;
const PAWN: ActorId = 1;

struct Pawn {
    location: Vec3,
    velocity: Vec3,
    input: Vec3,
}

impl Pawn {
    fn new() -> Self {
        Self {
            location: Vec3::new(0.0, 0.0, 90.0),
            velocity: Vec3::ZERO,
            input: Vec3::ZERO,
        }
    }

    fn integrate(&mut self, dt: f32) {
        self.velocity = self.input.clamp_length_max(1.0) * WALK_SPEED;
        self.location += self.velocity * dt;
        self.input = Vec3::ZERO;
    }
}

impl OwnerProvider for Pawn {
    fn kinematics(&self) -> Kinematics {
        Kinematics {
            location: self.location,
            velocity: self.velocity,
            ..Kinematics::default()
        }
    }

    fn actor_id(&self) -> Option<ActorId> {
        Some(PAWN)
    }

    fn add_movement_input(&mut self, direction: Vec3, scale: f32) {
        self.input += direction * scale;
    }
}

#[derive(Default)]
struct HeadlessCamera {
    location: Vec3,
    rotation: Rotator,
    fov: f32,
}

impl CameraSink for HeadlessCamera {
    fn set_relative_location(&mut self, location: Vec3) {
        self.location = location;
    }

    fn set_relative_rotation(&mut self, rotation: Rotator) {
        self.rotation = rotation;
    }

    fn set_field_of_view(&mut self, fov: f32) {
        self.fov = fov;
    }
}

#[derive(Default)]
struct LogAudio {
    playing: Option<String>,
}

impl AudioSink for LogAudio {
    fn play(&mut self, sound: &str, volume: f32, pitch: f32) {
        log::info!("audio: play {sound} (volume {volume}, pitch {pitch})");
        self.playing = Some(sound.to_owned());
    }

    fn is_playing(&self) -> bool {
        self.playing.is_some()
    }

    fn stop(&mut self) {
        if let Some(sound) = self.playing.take() {
            log::info!("audio: stop {sound}");
        }
    }
}

fn build_scene() -> StaticScene {
    StaticScene::new()
        .with(
            SceneShape::Plane {
                point: Vec3::ZERO,
                normal: Vec3::Z,
            },
            10,
            10,
        )
        .with(
            SceneShape::Box {
                min: Vec3::new(1500.0, -400.0, 0.0),
                max: Vec3::new(1600.0, 400.0, 400.0),
            },
            20,
            20,
        )
        .with(
            SceneShape::Sphere {
                center: Vec3::new(600.0, 250.0, 150.0),
                radius: 60.0,
            },
            30,
            30,
        )
}

/// Scripted action for the frame that crosses `second`.
fn run_script(rig: &mut CameraRig, second: u32) {
    match second {
        2 => rig.start_aiming(),
        3 => rig.stop_aiming(),
        4 => rig.start_running(),
        5 => {
            let _ = rig.begin_warp();
        }
        6 => {
            rig.stop_running();
            rig.trigger_recoil();
        }
        7 => {
            let _ = rig.switch_to_first_person();
        }
        8 => {
            let _ = rig.switch_to_third_person();
        }
        9 => {
            let _ = rig.apply_fade(1.0);
        }
        _ => {}
    }
}

fn main() -> Result<(), CamRigError> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let options = match std::env::args().nth(1) {
        Some(path) => RigOptions::load(&PathBuf::from(path))?,
        None => RigOptions::default(),
    };

    let scene = build_scene();
    let mut materials = MaterialTable::new()
        .with(20, Material::Asset("M_Wall".to_owned()))
        .with(30, Material::Asset("M_Pillar".to_owned()));
    let mut camera = HeadlessCamera::default();
    let mut pawn = Pawn::new();
    let mut rng = rand::rng();

    let mut rig = CameraRig::new(options)
        .with_post_process(PostProcessSettings::default())
        .with_audio(Box::new(LogAudio::default()));
    rig.initialize();

    let started = Instant::now();
    let mut world_time = 0.0_f32;
    let mut last_second = 0_u32;

    while world_time < DURATION {
        let second = world_time as u32;
        if second != last_second {
            last_second = second;
            run_script(&mut rig, second);
            log::info!(
                "t={second}s mode {:?} pos {} rot {:?} fov {:.1} (camera fov {:.1})",
                rig.mode(),
                rig.committed_pose().position,
                rig.committed_pose().rotation,
                rig.committed_pose().fov,
                camera.fov,
            );
        }

        rig.look(rng.random_range(-0.5..0.5), rng.random_range(-0.2..0.2));
        rig.move_input(0.0, 1.0, Some(&mut pawn));
        pawn.integrate(STEP);

        let mut ctx = RigContext::new(&scene)
            .with_owner(&mut pawn)
            .with_materials(&mut materials)
            .with_camera(&mut camera)
            .at_time(world_time);
        rig.tick(STEP, &mut ctx);
        rig.run_timers(STEP, &mut ctx);

        world_time += STEP;
    }

    log::info!(
        "simulated {} frames in {:.2?}; camera at {} fov {:.1}",
        rig.frame_count(),
        started.elapsed(),
        camera.location,
        camera.fov,
    );
    Ok(())
}
