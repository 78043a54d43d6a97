use glam::Vec2;

/// Per-frame input pull. Every channel defaults to neutral so an unbound action reads as idle.
pub trait InputSource {
    /// Planar movement, x = strafe, y = forward
    fn move_axis(&self) -> Vec2 {
        Vec2::ZERO
    }

    /// Zoom; only `y` is consumed, positive zooms in
    fn zoom_axis(&self) -> Vec2 {
        Vec2::ZERO
    }

    /// Orbit look delta, before inversion
    fn look_axis(&self) -> Vec2 {
        Vec2::ZERO
    }

    /// Pointer position in screen space, used for drag panning
    fn pointer_position(&self) -> Vec2 {
        Vec2::ZERO
    }

    fn pan_pressed_this_frame(&self) -> bool {
        false
    }

    fn pan_released_this_frame(&self) -> bool {
        false
    }

    fn orbit_held(&self) -> bool {
        false
    }

    fn recenter_triggered(&self) -> bool {
        false
    }
}

/// Source with nothing bound.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInput;

impl InputSource for NoInput {}
