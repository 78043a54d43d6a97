use glam::Vec2;

use super::input::InputFrame;

/// Drag-pan state. The last pointer position only lives while a drag is in progress.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanDrag {
    last_pointer: Option<Vec2>,
}

impl PanDrag {
    pub fn is_active(&self) -> bool {
        self.last_pointer.is_some()
    }

    /// Pan delta for this frame in screen units, already scaled by `speed`.
    /// Dragging the pointer right moves the rig left, as if pulling the ground.
    pub fn resolve(&mut self, input: &InputFrame, speed: f32) -> Vec2 {
        if input.pan_pressed {
            self.last_pointer = Some(input.pointer);
        }
        if input.pan_released {
            self.last_pointer = None;
        }

        let Some(last) = self.last_pointer else {
            return Vec2::ZERO;
        };

        self.last_pointer = Some(input.pointer);
        -(input.pointer - last) * speed
    }

    pub fn cancel(&mut self) {
        self.last_pointer = None;
    }
}
