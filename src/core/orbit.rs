use glam::{Quat, Vec2};

use crate::math::{orbit_rotation, slerp_toward, step_fraction, yaw_rotation};

/// Lowest allowed camera pitch, in degrees above the horizon.
pub const MIN_PITCH_DEG: f32 = 15.0;
/// Highest allowed camera pitch. Stops just short of looking straight down.
pub const MAX_PITCH_DEG: f32 = 89.0;

/// Residual angle (radians) under which the camera snaps onto its target orientation.
const SETTLE_EPSILON: f32 = 1e-5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitSettings {
    /// Degrees per unit of look input
    pub speed: f32,
    /// Rate at which the camera orientation catches up with the target, per second
    pub smoothing: f32,
}

/// Target orbit angles plus the smoothed camera orientation chasing them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitController {
    target_pitch: f32,
    target_yaw: f32,
    camera_rotation: Quat,
}

impl OrbitController {
    /// Starts settled: the camera already faces the target angles.
    pub fn new(pitch_deg: f32, yaw_deg: f32) -> Self {
        let target_pitch = pitch_deg.clamp(MIN_PITCH_DEG, MAX_PITCH_DEG);
        Self {
            target_pitch,
            target_yaw: yaw_deg,
            camera_rotation: orbit_rotation(target_pitch, yaw_deg),
        }
    }

    pub fn target_pitch(&self) -> f32 {
        self.target_pitch
    }

    pub fn target_yaw(&self) -> f32 {
        self.target_yaw
    }

    pub fn camera_rotation(&self) -> Quat {
        self.camera_rotation
    }

    /// Rig body orientation: yaw only, with no smoothing lag.
    pub fn body_rotation(&self) -> Quat {
        yaw_rotation(self.target_yaw)
    }

    pub fn target_rotation(&self) -> Quat {
        orbit_rotation(self.target_pitch, self.target_yaw)
    }

    /// Accumulate look input while `held`, then step the camera toward the target.
    pub fn advance(
        &mut self,
        look: Vec2,
        held: bool,
        multiplier: f32,
        elapsed: f32,
        settings: &OrbitSettings,
    ) {
        if held {
            let delta = look * (settings.speed * multiplier);
            self.target_pitch = (self.target_pitch - delta.y).clamp(MIN_PITCH_DEG, MAX_PITCH_DEG);
            self.target_yaw += delta.x;
        }

        self.camera_rotation = slerp_toward(
            self.camera_rotation,
            self.target_rotation(),
            step_fraction(settings.smoothing, elapsed),
            SETTLE_EPSILON,
        );
    }

    /// Jump to new angles with the camera already settled on them.
    pub fn snap_to(&mut self, pitch_deg: f32, yaw_deg: f32) {
        *self = Self::new(pitch_deg, yaw_deg);
    }
}
