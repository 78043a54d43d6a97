//! Frustum cross-sections.
//!
//! The footprint of a camera at some depth is the rectangle its view volume cuts out of the
//! plane perpendicular to the forward axis at that depth, expressed in camera-local
//! right/up coordinates and centred on the view axis.

use glam::{Mat4, Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle given by its minimum corner and size.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Smallest rectangle enclosing every point.
    pub fn enclosing(points: &[Vec2]) -> Self {
        let Some(first) = points.first() else {
            return Self::default();
        };
        let (min, max) = points
            .iter()
            .fold((*first, *first), |(lo, hi), p| (lo.min(*p), hi.max(*p)));
        Self::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x + self.width, self.y + self.height)
    }

    pub fn center(&self) -> Vec2 {
        (self.min() + self.max()) * 0.5
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Camera lens. Field of view is vertical, in degrees.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Projection {
    Perspective { fov_y_deg: f32, aspect: f32 },
    Orthographic { half_height: f32, aspect: f32 },
}

impl Default for Projection {
    fn default() -> Self {
        Projection::Perspective {
            fov_y_deg: 60.0,
            aspect: 16.0 / 9.0,
        }
    }
}

impl Projection {
    pub fn set_aspect(&mut self, value: f32) {
        match self {
            Projection::Perspective { aspect, .. } | Projection::Orthographic { aspect, .. } => {
                *aspect = value
            }
        }
    }

    /// Returns false for orthographic lenses, which have no field of view.
    pub fn set_fov(&mut self, degrees: f32) -> bool {
        match self {
            Projection::Perspective { fov_y_deg, .. } => {
                *fov_y_deg = degrees;
                true
            }
            Projection::Orthographic { .. } => false,
        }
    }

    pub fn matrix(&self, near: f32, far: f32) -> Mat4 {
        match *self {
            Projection::Perspective { fov_y_deg, aspect } => {
                Mat4::perspective_rh(fov_y_deg.to_radians(), aspect, near, far)
            }
            Projection::Orthographic {
                half_height,
                aspect,
            } => {
                let half_width = half_height * aspect;
                Mat4::orthographic_rh(-half_width, half_width, -half_height, half_height, near, far)
            }
        }
    }
}

/// Footprint of the frustum at a signed depth along the forward axis.
pub fn frustum_rect_at_depth(projection: &Projection, depth: f32) -> Rect {
    match *projection {
        Projection::Orthographic {
            half_height,
            aspect,
        } => {
            let height = 2.0 * half_height;
            let width = height * aspect;
            Rect::new(-width / 2.0, -height / 2.0, width, height)
        }
        Projection::Perspective { fov_y_deg, aspect } => {
            let half_height = depth * (fov_y_deg.to_radians() * 0.5).tan();
            let half_width = half_height * aspect;
            Rect::enclosing(&[
                Vec2::new(-half_width, -half_height),
                Vec2::new(-half_width, half_height),
                Vec2::new(half_width, half_height),
                Vec2::new(half_width, -half_height),
            ])
        }
    }
}

/// Distance from `eye` to `target` measured along `forward`.
pub fn view_depth(target: Vec3, eye: Vec3, forward: Vec3) -> f32 {
    (target - eye).dot(forward).abs()
}

/// Where a camera sits and how it looks.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CameraView {
    pub eye: Vec3,
    pub forward: Vec3,
    pub projection: Projection,
}

/// Footprint at the depth of `target`; empty when either reference is missing.
pub fn camera_rect_for(target: Option<Vec3>, view: Option<&CameraView>) -> Rect {
    let (Some(target), Some(view)) = (target, view) else {
        return Rect::default();
    };

    match view.projection {
        Projection::Orthographic { .. } => frustum_rect_at_depth(&view.projection, 0.0),
        Projection::Perspective { .. } => {
            let depth = view_depth(target, view.eye, view.forward);
            frustum_rect_at_depth(&view.projection, depth)
        }
    }
}
