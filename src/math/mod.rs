mod aabb;
mod frustum;
mod smoothing;

pub use aabb::{AABB, MIN_EXTENT};
pub use frustum::{camera_rect_for, frustum_rect_at_depth, view_depth, CameraView, Projection, Rect};
pub use smoothing::{lerp, orbit_rotation, slerp_toward, step_fraction, yaw_rotation};
