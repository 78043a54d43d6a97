use glam::{Vec2, Vec3};
use log::trace;

use super::boundary::BoundaryGuard;

/// Per-frame movement parameters.
#[derive(Debug, Clone, Copy)]
pub struct MotionStep {
    pub move_axis: Vec2,
    pub elapsed: f32,
    pub speed: f32,
    pub multiplier: f32,
}

/// Advances the rig's ground position from move input and queued pan drag.
#[derive(Debug, Clone, Copy, Default)]
pub struct MotionIntegrator {
    pending_pan: Vec2,
}

impl MotionIntegrator {
    /// Queue a pan delta for the next integration. Replaces any unconsumed delta.
    pub fn queue_pan(&mut self, delta: Vec2) {
        self.pending_pan = delta;
    }

    pub fn pending_pan(&self) -> Vec2 {
        self.pending_pan
    }

    /// Integrate one frame. `forward`/`right` are the rig body axes.
    ///
    /// The queued pan delta is consumed even when `blocked` is set, so a block never
    /// stores up drag to release later.
    pub fn advance(
        &mut self,
        position: Vec3,
        forward: Vec3,
        right: Vec3,
        step: &MotionStep,
        guard: &BoundaryGuard,
        blocked: bool,
    ) -> Vec3 {
        let pan = std::mem::take(&mut self.pending_pan);
        if blocked {
            return position;
        }

        let mut displacement = ground_displacement(forward, right, step, pan);
        if displacement == Vec3::ZERO {
            return position;
        }

        let contact = guard.classify_ground(position);
        if let Some(correction) = guard.redirect(&contact, displacement) {
            trace!("movement redirected at {:?}: removing {:?}", contact, correction);
            displacement -= correction;
        }

        guard.confine_ground(position + displacement)
    }
}

/// Horizontal displacement for one frame. Vertical components are discarded.
fn ground_displacement(forward: Vec3, right: Vec3, step: &MotionStep, pan: Vec2) -> Vec3 {
    let forward = flatten(forward);
    let right = flatten(right);

    let moved = (forward * step.move_axis.y + right * step.move_axis.x)
        * (step.speed * step.multiplier * step.elapsed);
    let panned = (right * pan.x + forward * pan.y) * step.elapsed;

    flatten_vector(moved + panned)
}

fn flatten(axis: Vec3) -> Vec3 {
    Vec3::new(axis.x, 0.0, axis.z).normalize_or_zero()
}

fn flatten_vector(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z)
}
