//! Camera pose and Euler rotation types.
//!
//! Axis convention: X forward, Y right, Z up. Angles are in degrees.

use std::ops::{Add, AddAssign, Mul, Sub};

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Euler rotation in degrees.
///
/// Yaw turns about Z, pitch about Y, roll about X.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rotator {
    /// Rotation about the right axis (look up/down).
    pub pitch: f32,
    /// Rotation about the up axis (look left/right).
    pub yaw: f32,
    /// Rotation about the forward axis.
    pub roll: f32,
}

impl Rotator {
    /// No rotation.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Rotation from pitch, yaw and roll in degrees.
    #[must_use]
    pub const fn new(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self { pitch, yaw, roll }
    }

    /// Wrap a single angle into (-180, 180].
    #[must_use]
    pub fn normalize_axis(angle: f32) -> f32 {
        let wrapped = angle.rem_euclid(360.0);
        if wrapped > 180.0 {
            wrapped - 360.0
        } else {
            wrapped
        }
    }

    /// Copy with every axis wrapped into (-180, 180].
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            pitch: Self::normalize_axis(self.pitch),
            yaw: Self::normalize_axis(self.yaw),
            roll: Self::normalize_axis(self.roll),
        }
    }

    /// Whether every axis is within `tolerance` of zero after wrapping.
    #[must_use]
    pub fn is_nearly_zero(self, tolerance: f32) -> bool {
        let n = self.normalized();
        n.pitch.abs() <= tolerance
            && n.yaw.abs() <= tolerance
            && n.roll.abs() <= tolerance
    }

    /// Unit forward direction of this rotation.
    #[must_use]
    pub fn forward(self) -> Vec3 {
        let (sp, cp) = self.pitch.to_radians().sin_cos();
        let (sy, cy) = self.yaw.to_radians().sin_cos();
        Vec3::new(cp * cy, cp * sy, sp)
    }

    /// Unit right direction of this rotation, including roll.
    #[must_use]
    pub fn right(self) -> Vec3 {
        let (sp, cp) = self.pitch.to_radians().sin_cos();
        let (sy, cy) = self.yaw.to_radians().sin_cos();
        let (sr, cr) = self.roll.to_radians().sin_cos();
        Vec3::new(sr * sp * cy - cr * sy, sr * sp * sy + cr * cy, -sr * cp)
    }

    /// Rotation whose forward axis points along `direction` (roll is 0).
    ///
    /// A zero vector yields [`Rotator::ZERO`].
    #[must_use]
    pub fn from_direction(direction: Vec3) -> Self {
        if direction.length_squared() <= f32::EPSILON {
            return Self::ZERO;
        }
        let yaw = direction.y.atan2(direction.x).to_degrees();
        let horizontal = direction.x.hypot(direction.y);
        let pitch = direction.z.atan2(horizontal).to_degrees();
        Self::new(pitch, yaw, 0.0)
    }
}

impl Add for Rotator {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.pitch + rhs.pitch,
            self.yaw + rhs.yaw,
            self.roll + rhs.roll,
        )
    }
}

impl AddAssign for Rotator {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Rotator {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.pitch - rhs.pitch,
            self.yaw - rhs.yaw,
            self.roll - rhs.roll,
        )
    }
}

impl Mul<f32> for Rotator {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.pitch * rhs, self.yaw * rhs, self.roll * rhs)
    }
}

/// Placement of the camera for one frame.
///
/// `position` and `rotation` are relative to the owner; `fov` is the
/// horizontal field of view in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Offset from the owner, in the owner's local frame.
    pub position: Vec3,
    /// Rotation relative to the owner.
    pub rotation: Rotator,
    /// Field of view in degrees.
    pub fov: f32,
}

impl CameraPose {
    /// Pose at `position` with no rotation.
    #[must_use]
    pub fn new(position: Vec3, fov: f32) -> Self {
        Self {
            position,
            rotation: Rotator::ZERO,
            fov,
        }
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        Self::new(Vec3::ZERO, 90.0)
    }
}
