use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Smallest per-axis size a bounding volume may have and still constrain the rig.
pub const MIN_EXTENT: f32 = 1e-4;

/// Axis-aligned box in world space, used as the rig's bounding volume.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AABB {
    pub min: Vec3,
    pub max: Vec3,
}

impl AABB {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Build from two arbitrary corners, ordering them per axis.
    pub fn from_corners(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size.abs() * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// No usable ground-plane area. Height does not count: a flat region still confines
    /// movement on X and Z.
    pub fn is_degenerate(&self) -> bool {
        let size = self.size();
        !(size.x > MIN_EXTENT && size.z > MIN_EXTENT)
    }

    /// No usable height; floor and ceiling carry no meaning.
    pub fn is_flat(&self) -> bool {
        !(self.size().y > MIN_EXTENT)
    }

    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    pub fn clamp(&self, point: Vec3) -> Vec3 {
        point.clamp(self.min, self.max)
    }

    /// Clamp only the ground-plane (X/Z) components, leaving height untouched.
    pub fn clamp_ground(&self, point: Vec3) -> Vec3 {
        Vec3::new(
            point.x.clamp(self.min.x, self.max.x),
            point.y,
            point.z.clamp(self.min.z, self.max.z),
        )
    }
}
