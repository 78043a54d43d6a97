use log::trace;

use super::boundary::Contact;
use crate::math::{lerp, step_fraction};

/// Dolly limits and feel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomSettings {
    /// Distance change per unit of zoom input
    pub step: f32,
    /// Smoothing rate of the live distance toward the target, per second
    pub speed: f32,
    pub min: f32,
    pub max: f32,
}

impl ZoomSettings {
    pub fn clamp(&self, distance: f32) -> f32 {
        distance.clamp(self.min, self.max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomOutcome {
    Applied,
    /// An external block or global suppression was active.
    Blocked,
    /// Zooming out was refused because the camera is pressed against the bounds.
    HeldAtBoundary,
}

/// Target and live dolly distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomController {
    target: f32,
    live: f32,
}

impl ZoomController {
    pub fn new(distance: f32, settings: &ZoomSettings) -> Self {
        let distance = settings.clamp(distance);
        Self {
            target: distance,
            live: distance,
        }
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn live(&self) -> f32 {
        self.live
    }

    /// Positive `zoom_input` moves the camera in.
    pub fn advance(
        &mut self,
        zoom_input: f32,
        settings: &ZoomSettings,
        elapsed: f32,
        contact: &Contact,
        blocked: bool,
    ) -> ZoomOutcome {
        if blocked {
            return ZoomOutcome::Blocked;
        }

        if zoom_input < 0.0 && contact.is_touching() {
            trace!("zoom out held at boundary {:?}", contact);
            return ZoomOutcome::HeldAtBoundary;
        }

        self.target = settings.clamp(self.target - zoom_input * settings.step);
        self.live = lerp(self.live, self.target, step_fraction(settings.speed, elapsed));
        ZoomOutcome::Applied
    }

    /// Jump both target and live distance, no glide.
    pub fn snap_to(&mut self, distance: f32, settings: &ZoomSettings) {
        self.target = settings.clamp(distance);
        self.live = self.target;
    }
}
