use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::traits::InputSource;

/// Everything the rig reads from input in one frame.
///
/// Also usable directly as an [`InputSource`] for scripted playback and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputFrame {
    pub move_axis: Vec2,
    pub zoom_axis: Vec2,
    pub look_axis: Vec2,
    pub pointer: Vec2,
    pub pan_pressed: bool,
    pub pan_released: bool,
    pub orbit_held: bool,
    pub recenter: bool,
}

impl InputFrame {
    pub fn moving(axis: Vec2) -> Self {
        Self {
            move_axis: axis,
            ..Default::default()
        }
    }

    pub fn zooming(amount: f32) -> Self {
        Self {
            zoom_axis: Vec2::new(0.0, amount),
            ..Default::default()
        }
    }

    pub fn orbiting(look: Vec2) -> Self {
        Self {
            look_axis: look,
            orbit_held: true,
            ..Default::default()
        }
    }

    pub fn recentering() -> Self {
        Self {
            recenter: true,
            ..Default::default()
        }
    }
}

impl InputSource for InputFrame {
    fn move_axis(&self) -> Vec2 {
        self.move_axis
    }

    fn zoom_axis(&self) -> Vec2 {
        self.zoom_axis
    }

    fn look_axis(&self) -> Vec2 {
        self.look_axis
    }

    fn pointer_position(&self) -> Vec2 {
        self.pointer
    }

    fn pan_pressed_this_frame(&self) -> bool {
        self.pan_pressed
    }

    fn pan_released_this_frame(&self) -> bool {
        self.pan_released
    }

    fn orbit_held(&self) -> bool {
        self.orbit_held
    }

    fn recenter_triggered(&self) -> bool {
        self.recenter
    }
}

/// Reads a fresh [`InputFrame`] each frame and applies look inversion.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSampler {
    pub invert_x: bool,
    pub invert_y: bool,
}

impl InputSampler {
    /// Non-finite axis components read as zero so one bad reading cannot poison rig state.
    pub fn sample(&self, source: &dyn InputSource) -> InputFrame {
        let mut look = finite_or_zero(source.look_axis());
        if self.invert_x {
            look.x = -look.x;
        }
        if self.invert_y {
            look.y = -look.y;
        }

        InputFrame {
            move_axis: finite_or_zero(source.move_axis()),
            zoom_axis: finite_or_zero(source.zoom_axis()),
            look_axis: look,
            pointer: finite_or_zero(source.pointer_position()),
            pan_pressed: source.pan_pressed_this_frame(),
            pan_released: source.pan_released_this_frame(),
            orbit_held: source.orbit_held(),
            recenter: source.recenter_triggered(),
        }
    }
}

fn finite_or_zero(axis: Vec2) -> Vec2 {
    Vec2::new(
        if axis.x.is_finite() { axis.x } else { 0.0 },
        if axis.y.is_finite() { axis.y } else { 0.0 },
    )
}
