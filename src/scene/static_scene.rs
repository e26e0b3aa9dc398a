use glam::Vec3;

use super::{ActorId, ComponentId, SceneProbe, TraceChannel, TraceHit};

const PARALLEL_EPSILON: f32 = 1e-6;

/// Blocking primitive in a [`StaticScene`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneShape {
    /// Infinite plane through `point` with unit `normal`.
    Plane {
        /// Any point on the plane.
        point: Vec3,
        /// Unit normal.
        normal: Vec3,
    },
    /// Solid sphere.
    Sphere {
        /// Centre.
        center: Vec3,
        /// Radius.
        radius: f32,
    },
    /// Axis-aligned box.
    Box {
        /// Minimum corner.
        min: Vec3,
        /// Maximum corner.
        max: Vec3,
    },
}

#[derive(Debug, Clone, Copy)]
struct SceneObject {
    shape: SceneShape,
    actor: ActorId,
    component: ComponentId,
}

/// Probe over a fixed list of planes, spheres and boxes.
///
/// Every object blocks every channel. Traces that start inside a solid
/// shape pass through it.
#[derive(Debug, Clone, Default)]
pub struct StaticScene {
    objects: Vec<SceneObject>,
}

impl StaticScene {
    /// Empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a shape owned by `actor`, rendered by `component`.
    #[must_use]
    pub fn with(
        mut self,
        shape: SceneShape,
        actor: ActorId,
        component: ComponentId,
    ) -> Self {
        self.add(shape, actor, component);
        self
    }

    /// Add a shape owned by `actor`, rendered by `component`.
    pub fn add(
        &mut self,
        shape: SceneShape,
        actor: ActorId,
        component: ComponentId,
    ) {
        let shape = match shape {
            SceneShape::Plane { point, normal } => SceneShape::Plane {
                point,
                normal: normal.normalize_or_zero(),
            },
            other => other,
        };
        self.objects.push(SceneObject {
            shape,
            actor,
            component,
        });
    }

    /// Number of objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the scene has no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

/// Distance along the unit ray `origin + dir * t` and the hit normal.
fn intersect(
    shape: &SceneShape,
    origin: Vec3,
    dir: Vec3,
) -> Option<(f32, Vec3)> {
    match *shape {
        SceneShape::Plane { point, normal } => {
            let denom = normal.dot(dir);
            if denom.abs() < PARALLEL_EPSILON {
                return None;
            }
            let t = normal.dot(point - origin) / denom;
            let facing = if denom > 0.0 { -normal } else { normal };
            (t >= 0.0).then_some((t, facing))
        }
        SceneShape::Sphere { center, radius } => {
            let oc = origin - center;
            let c = oc.length_squared() - radius * radius;
            if c <= 0.0 {
                return None;
            }
            let b = oc.dot(dir);
            let disc = b * b - c;
            if disc < 0.0 {
                return None;
            }
            let t = -b - disc.sqrt();
            if t < 0.0 {
                return None;
            }
            let normal = (origin + dir * t - center) / radius;
            Some((t, normal))
        }
        SceneShape::Box { min, max } => {
            let mut t_near = f32::NEG_INFINITY;
            let mut t_far = f32::INFINITY;
            let mut normal = Vec3::ZERO;
            for axis in 0..3 {
                let (o, d) = (origin[axis], dir[axis]);
                if d.abs() < PARALLEL_EPSILON {
                    if o < min[axis] || o > max[axis] {
                        return None;
                    }
                    continue;
                }
                let (mut t0, mut t1) =
                    ((min[axis] - o) / d, (max[axis] - o) / d);
                let mut face = Vec3::ZERO;
                face[axis] = -d.signum();
                if t0 > t1 {
                    std::mem::swap(&mut t0, &mut t1);
                }
                if t0 > t_near {
                    t_near = t0;
                    normal = face;
                }
                t_far = t_far.min(t1);
                if t_near > t_far {
                    return None;
                }
            }
            (t_near >= 0.0).then_some((t_near, normal))
        }
    }
}

impl SceneProbe for StaticScene {
    fn line_trace(
        &self,
        start: Vec3,
        end: Vec3,
        channel: TraceChannel,
        ignore: &[ActorId],
    ) -> Option<TraceHit> {
        let delta = end - start;
        let length = delta.length();
        if length <= f32::EPSILON {
            return None;
        }
        let dir = delta / length;
        let hit = self
            .objects
            .iter()
            .filter(|obj| !ignore.contains(&obj.actor))
            .filter_map(|obj| {
                let (t, normal) = intersect(&obj.shape, start, dir)?;
                (t <= length).then_some((t, normal, obj))
            })
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(t, normal, obj)| TraceHit {
                point: start + dir * t,
                normal,
                distance: t,
                actor: Some(obj.actor),
                component: Some(obj.component),
            });
        if let Some(hit) = &hit {
            log::trace!(
                "{channel:?} trace hit actor {:?} at {:.1}",
                hit.actor,
                hit.distance
            );
        }
        hit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ground() -> SceneShape {
        SceneShape::Plane {
            point: Vec3::ZERO,
            normal: Vec3::Z,
        }
    }

    #[test]
    fn downward_trace_hits_ground() {
        let scene = StaticScene::new().with(ground(), 1, 10);
        let hit = scene
            .line_trace(
                Vec3::new(0.0, 0.0, 50.0),
                Vec3::new(0.0, 0.0, -50.0),
                TraceChannel::Visibility,
                &[],
            )
            .unwrap();
        assert!((hit.distance - 50.0).abs() < 1e-4);
        assert_eq!(hit.normal, Vec3::Z);
        assert_eq!(hit.component, Some(10));
    }

    #[test]
    fn segment_stops_short_of_far_geometry() {
        let scene = StaticScene::new().with(ground(), 1, 10);
        let hit = scene.line_trace(
            Vec3::new(0.0, 0.0, 200.0),
            Vec3::new(0.0, 0.0, 100.0),
            TraceChannel::Visibility,
            &[],
        );
        assert!(hit.is_none());
    }

    #[test]
    fn nearest_object_wins_and_ignored_actor_is_skipped() {
        let scene = StaticScene::new()
            .with(
                SceneShape::Sphere {
                    center: Vec3::new(40.0, 0.0, 0.0),
                    radius: 10.0,
                },
                2,
                20,
            )
            .with(
                SceneShape::Box {
                    min: Vec3::new(60.0, -50.0, -50.0),
                    max: Vec3::new(70.0, 50.0, 50.0),
                },
                3,
                30,
            );
        let hit = scene
            .line_trace(Vec3::ZERO, Vec3::X * 100.0, TraceChannel::Camera, &[])
            .unwrap();
        assert_eq!(hit.actor, Some(2));
        assert!((hit.distance - 30.0).abs() < 1e-4);
        assert!((hit.normal + Vec3::X).length() < 1e-5);

        let hit = scene
            .line_trace(Vec3::ZERO, Vec3::X * 100.0, TraceChannel::Camera, &[2])
            .unwrap();
        assert_eq!(hit.actor, Some(3));
        assert!((hit.distance - 60.0).abs() < 1e-4);
        assert_eq!(hit.normal, -Vec3::X);
    }

    #[test]
    fn trace_from_inside_sphere_passes_through() {
        let scene = StaticScene::new().with(
            SceneShape::Sphere {
                center: Vec3::ZERO,
                radius: 10.0,
            },
            1,
            1,
        );
        assert!(scene
            .line_trace(Vec3::ZERO, Vec3::X * 100.0, TraceChannel::Camera, &[])
            .is_none());
    }
}
