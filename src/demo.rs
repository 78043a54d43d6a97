//! Scripted input sequences for driving a rig without a window.

use clap::ValueEnum;
use glam::{Vec2, Vec3};

use crate::camera::CameraRig;
use crate::config::RigConfig;
use crate::core::input::InputFrame;
use crate::math::AABB;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Scenario {
    /// No input at all
    Idle,
    /// Hold strafe-right until well past the wall on that side
    EdgePush,
    /// Orbit-hold with a steady horizontal look
    Orbit,
    /// Zoom out to the limit, then back in
    Zoom,
    /// Drag the pointer to the left for the whole run
    Pan,
    /// Push to the wall, orbit there, zoom, then recenter
    Tour,
}

impl Scenario {
    /// Input for `frame` out of `total` frames.
    pub fn input(self, frame: u32, total: u32) -> InputFrame {
        let progress = if total == 0 {
            0.0
        } else {
            frame as f32 / total as f32
        };

        match self {
            Scenario::Idle => InputFrame::default(),
            Scenario::EdgePush => InputFrame::moving(Vec2::X),
            Scenario::Orbit => InputFrame::orbiting(Vec2::new(4.0, 0.5)),
            Scenario::Zoom if progress < 0.5 => InputFrame::zooming(-1.0),
            Scenario::Zoom => InputFrame::zooming(1.0),
            Scenario::Pan => pan_input(frame, total),
            Scenario::Tour => tour_input(frame, total, progress),
        }
    }
}

fn pan_input(frame: u32, total: u32) -> InputFrame {
    InputFrame {
        pointer: Vec2::new(-(frame as f32) * 2.0, 0.0),
        pan_pressed: frame == 0,
        pan_released: frame + 1 >= total,
        ..Default::default()
    }
}

fn tour_input(frame: u32, total: u32, progress: f32) -> InputFrame {
    if frame + 1 == total {
        return InputFrame::recentering();
    }
    if progress < 0.4 {
        InputFrame::moving(Vec2::X)
    } else if progress < 0.7 {
        InputFrame::orbiting(Vec2::new(6.0, 0.0))
    } else {
        InputFrame::zooming(-1.0)
    }
}

/// Bounded playground used when no config file is given.
pub fn demo_config() -> RigConfig {
    RigConfig {
        orbit_speed: 0.25,
        orbit_smoothing: 8.0,
        zoom_step: 2.0,
        bounds: Some(AABB::from_center_size(
            Vec3::new(0.0, 15.0, 0.0),
            Vec3::new(100.0, 50.0, 100.0),
        )),
        ..Default::default()
    }
}

/// Drive `rig` through `frames` fixed steps of `dt`, calling `on_frame` after each.
pub fn run_scenario(
    rig: &mut CameraRig,
    scenario: Scenario,
    frames: u32,
    dt: f32,
    mut on_frame: impl FnMut(u32, &CameraRig),
) {
    for frame in 0..frames {
        let input = scenario.input(frame, frames);
        rig.advance(dt, &input);
        on_frame(frame, rig);
    }
}
