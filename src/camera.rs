//! The orbit/pan/zoom camera rig.
//!
//! [`CameraRig`] owns every piece of mutable camera state. Hosts call [`CameraRig::advance`]
//! once per frame; each call runs, in order: input sampling, drag pan, zoom, orbit, movement
//! and recenter. Zoom and orbit run before movement so the movement guard sees the camera
//! where it actually is this frame.

use anyhow::Result;
use glam::{Mat4, Quat, Vec2, Vec3};
use log::{debug, trace, warn};
use serde::Serialize;

use crate::config::{HomePose, RigConfig};
use crate::core::blocking::BlockingContext;
use crate::core::boundary::{BoundaryGuard, Contact};
use crate::core::input::{InputFrame, InputSampler};
use crate::core::motion::{MotionIntegrator, MotionStep};
use crate::core::orbit::OrbitController;
use crate::core::pan::PanDrag;
use crate::core::zoom::{ZoomController, ZoomOutcome};
use crate::math::{camera_rect_for, CameraView, Projection, Rect, AABB};
use crate::traits::{CameraController, InputSource};

pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 1000.0;

/// Serializable view of the rig after a frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RigSnapshot {
    pub position: Vec3,
    pub yaw_deg: f32,
    pub pitch_deg: f32,
    pub target_distance: f32,
    pub distance: f32,
    pub eye: Vec3,
    pub contact: Contact,
    pub footprint: Rect,
}

pub struct CameraRig {
    config: RigConfig,
    position: Vec3,
    zoom: ZoomController,
    orbit: OrbitController,
    motion: MotionIntegrator,
    pan: PanDrag,
    guard: BoundaryGuard,
    sampler: InputSampler,
    blocking: BlockingContext,
    lens: Projection,
    rotation_multiplier: f32,
    movement_multiplier: f32,
}

impl CameraRig {
    /// Activate a rig at its home pose.
    pub fn new(config: RigConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: RigConfig) -> Self {
        let guard = BoundaryGuard::new(config.bounds, config.contact_tolerance);
        let zoom = ZoomController::new(config.default_zoom, &config.zoom_settings());
        let orbit = OrbitController::new(config.base_pitch_deg, config.home.yaw_deg);

        Self {
            position: guard.confine_ground(config.home.position),
            lens: config.lens,
            zoom,
            orbit,
            motion: MotionIntegrator::default(),
            pan: PanDrag::default(),
            guard,
            sampler: InputSampler::default(),
            blocking: BlockingContext::new(),
            rotation_multiplier: 1.0,
            movement_multiplier: 1.0,
            config,
        }
    }

    /// Share a blocking context with whatever systems may veto movement or zoom.
    pub fn with_blocking(mut self, blocking: BlockingContext) -> Self {
        self.blocking = blocking;
        self
    }

    pub fn blocking(&self) -> &BlockingContext {
        &self.blocking
    }

    pub fn config(&self) -> &RigConfig {
        &self.config
    }

    /// Run one frame.
    pub fn advance(&mut self, elapsed: f32, source: &dyn InputSource) {
        let elapsed = if elapsed.is_finite() { elapsed.max(0.0) } else { 0.0 };
        let input = self.sampler.sample(source);

        self.resolve_pan(&input);
        self.resolve_zoom(&input, elapsed);
        self.resolve_orbit(&input, elapsed);
        self.resolve_movement(&input, elapsed);

        if input.recenter {
            self.reset();
        }
    }

    fn resolve_pan(&mut self, input: &InputFrame) {
        let speed = self.config.drag_pan_speed * self.movement_multiplier;
        let delta = self.pan.resolve(input, speed);
        self.motion.queue_pan(delta);
    }

    fn resolve_zoom(&mut self, input: &InputFrame, elapsed: f32) {
        let contact = self.contact();
        let outcome = self.zoom.advance(
            input.zoom_axis.y,
            &self.config.zoom_settings(),
            elapsed,
            &contact,
            self.blocking.zoom_blocked(),
        );
        if outcome != ZoomOutcome::Applied {
            trace!("zoom skipped: {:?}", outcome);
        }
    }

    fn resolve_orbit(&mut self, input: &InputFrame, elapsed: f32) {
        self.orbit.advance(
            input.look_axis,
            input.orbit_held,
            self.rotation_multiplier,
            elapsed,
            &self.config.orbit_settings(),
        );

        if input.orbit_held && self.contact().touches_wall() {
            self.resync_with_eye();
        }
    }

    /// Put the rig back on the camera's line of sight after the bounds have pinned the eye,
    /// so that the next translation starts where the camera actually looks.
    fn resync_with_eye(&mut self) {
        let eye = self.eye_position();
        let anchor = eye + self.camera_forward() * self.zoom.live();

        let resynced = Vec3::new(anchor.x, self.position.y, anchor.z);
        self.position = self.guard.confine_ground(resynced);
    }

    fn resolve_movement(&mut self, input: &InputFrame, elapsed: f32) {
        let step = MotionStep {
            move_axis: input.move_axis,
            elapsed,
            speed: self.config.movement_speed,
            multiplier: self.movement_multiplier,
        };
        let body = self.orbit.body_rotation();

        self.position = self.motion.advance(
            self.position,
            body * Vec3::NEG_Z,
            body * Vec3::X,
            &step,
            &self.guard,
            self.blocking.movement_blocked(),
        );
    }

    /// Snap back to the home pose, default pitch and default zoom. No glide.
    pub fn reset(&mut self) {
        let home = self.config.home;
        self.position = self.guard.confine_ground(home.position);
        self.orbit.snap_to(self.config.base_pitch_deg, home.yaw_deg);
        self.zoom.snap_to(self.config.default_zoom, &self.config.zoom_settings());
        self.pan.cancel();
        self.motion.queue_pan(Vec2::ZERO);
        debug!("camera reset to {:?}, yaw {}", self.position, home.yaw_deg);
    }

    /// Replace the bounding volume. `None` or a zero-extent box disables the constraint.
    pub fn set_bounds(&mut self, bounds: Option<AABB>) {
        self.guard = BoundaryGuard::new(bounds, self.config.contact_tolerance);
        self.config.bounds = self.guard.volume().copied();
        self.position = self.guard.confine_ground(self.position);
    }

    pub fn set_home(&mut self, home: HomePose) {
        self.config.home = home;
    }

    /// Non-finite values are ignored.
    pub fn set_rotation_speed_multiplier(&mut self, multiplier: f32) {
        if !multiplier.is_finite() {
            warn!("ignoring rotation speed multiplier {multiplier}");
            return;
        }
        self.rotation_multiplier = multiplier;
    }

    /// Non-finite values are ignored.
    pub fn set_movement_speed_multiplier(&mut self, multiplier: f32) {
        if !multiplier.is_finite() {
            warn!("ignoring movement speed multiplier {multiplier}");
            return;
        }
        self.movement_multiplier = multiplier;
    }

    pub fn set_invert_x(&mut self, invert: bool) {
        self.sampler.invert_x = invert;
    }

    pub fn set_invert_y(&mut self, invert: bool) {
        self.sampler.invert_y = invert;
    }

    /// Vertical field of view in degrees. Out-of-range values are ignored.
    pub fn set_fov(&mut self, degrees: f32) {
        if !degrees.is_finite() || degrees <= 0.0 || degrees >= 180.0 {
            warn!("ignoring field of view {degrees}; expected (0, 180) degrees");
            return;
        }
        if !self.lens.set_fov(degrees) {
            warn!("ignoring field of view {degrees} for an orthographic lens");
        }
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.lens.set_aspect(aspect);
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn target_yaw(&self) -> f32 {
        self.orbit.target_yaw()
    }

    pub fn target_pitch(&self) -> f32 {
        self.orbit.target_pitch()
    }

    pub fn target_distance(&self) -> f32 {
        self.zoom.target()
    }

    /// Live, smoothed dolly distance.
    pub fn distance(&self) -> f32 {
        self.zoom.live()
    }

    pub fn body_rotation(&self) -> Quat {
        self.orbit.body_rotation()
    }

    pub fn camera_rotation(&self) -> Quat {
        self.orbit.camera_rotation()
    }

    pub fn lens(&self) -> &Projection {
        &self.lens
    }

    pub fn bounds(&self) -> Option<&AABB> {
        self.guard.volume()
    }

    fn camera_forward(&self) -> Vec3 {
        self.orbit.camera_rotation() * Vec3::NEG_Z
    }

    /// Contact state of the camera viewpoint against the bounds.
    pub fn contact(&self) -> Contact {
        self.guard.classify(self.eye_position())
    }

    /// Frustum footprint at the depth of the rig, seen from the camera.
    pub fn footprint(&self) -> Rect {
        let view = CameraView {
            eye: self.eye_position(),
            forward: self.camera_forward(),
            projection: self.lens,
        };
        camera_rect_for(Some(self.position), Some(&view))
    }

    pub fn snapshot(&self) -> RigSnapshot {
        RigSnapshot {
            position: self.position,
            yaw_deg: self.orbit.target_yaw(),
            pitch_deg: self.orbit.target_pitch(),
            target_distance: self.zoom.target(),
            distance: self.zoom.live(),
            eye: self.eye_position(),
            contact: self.contact(),
            footprint: self.footprint(),
        }
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::from_valid(RigConfig::default())
    }
}

impl CameraController for CameraRig {
    fn advance(&mut self, elapsed: f32, input: &dyn InputSource) {
        CameraRig::advance(self, elapsed, input);
    }

    fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.eye_position(), self.camera_forward(), Vec3::Y)
    }

    fn projection_matrix(&self) -> Mat4 {
        self.lens.matrix(NEAR_PLANE, FAR_PLANE)
    }

    /// Dolly point behind the rig, held inside the bounds.
    fn eye_position(&self) -> Vec3 {
        let unconfined = self.position - self.camera_forward() * self.zoom.live();
        self.guard.confine(unconfined)
    }

    fn forward(&self) -> Vec3 {
        self.camera_forward()
    }
}
