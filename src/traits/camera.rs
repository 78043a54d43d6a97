use glam::{Mat4, Vec3};

use super::input::InputSource;

/// Camera movement and control abstraction
pub trait CameraController {
    /// Advance one frame, pulling input from `input`
    fn advance(&mut self, elapsed: f32, input: &dyn InputSource);

    /// World-to-view matrix for rendering
    fn view_matrix(&self) -> Mat4;

    /// View-to-clip matrix for the current lens
    fn projection_matrix(&self) -> Mat4;

    /// Camera viewpoint in world space
    fn eye_position(&self) -> Vec3;

    /// Camera look direction
    fn forward(&self) -> Vec3;
}
