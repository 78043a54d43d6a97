use std::path::Path;

use anyhow::{bail, Context, Result};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::core::boundary::CONTACT_TOLERANCE;
use crate::core::orbit::OrbitSettings;
use crate::core::zoom::ZoomSettings;
use crate::math::{Projection, AABB};

/// Dolly distance used at start-up and on recenter.
pub const DEFAULT_ZOOM: f32 = 25.0;
/// Pitch restored on recenter, degrees.
pub const BASE_PITCH_DEG: f32 = 45.0;
/// Default home heading, degrees. Looks down -X.
pub const BASE_YAW_DEG: f32 = -90.0;

/// Where recentering sends the rig.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HomePose {
    pub position: Vec3,
    pub yaw_deg: f32,
}

impl Default for HomePose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            yaw_deg: BASE_YAW_DEG,
        }
    }
}

/// Designer tunables for a camera rig.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RigConfig {
    /// World units per second at full move input
    pub movement_speed: f32,
    /// World units per second per pointer pixel while drag panning
    pub drag_pan_speed: f32,
    pub zoom_speed: f32,
    pub zoom_step: f32,
    pub min_zoom: f32,
    pub max_zoom: f32,
    pub default_zoom: f32,
    /// Degrees per unit of look input
    pub orbit_speed: f32,
    pub orbit_smoothing: f32,
    pub base_pitch_deg: f32,
    pub home: HomePose,
    pub bounds: Option<AABB>,
    pub contact_tolerance: f32,
    pub lens: Projection,
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            movement_speed: 2.5,
            drag_pan_speed: 2.5,
            zoom_speed: 10.0,
            zoom_step: 0.25,
            min_zoom: 0.5,
            max_zoom: 40.0,
            default_zoom: DEFAULT_ZOOM,
            orbit_speed: 0.01,
            orbit_smoothing: 0.1,
            base_pitch_deg: BASE_PITCH_DEG,
            home: HomePose::default(),
            bounds: None,
            contact_tolerance: CONTACT_TOLERANCE,
            lens: Projection::default(),
        }
    }
}

impl RigConfig {
    /// Load a JSON config file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read rig config {}", path.display()))?;
        let config: RigConfig = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse rig config {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid rig config {}", path.display()))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("movement_speed", self.movement_speed),
            ("drag_pan_speed", self.drag_pan_speed),
            ("zoom_speed", self.zoom_speed),
            ("zoom_step", self.zoom_step),
            ("min_zoom", self.min_zoom),
            ("max_zoom", self.max_zoom),
            ("orbit_speed", self.orbit_speed),
            ("orbit_smoothing", self.orbit_smoothing),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                bail!("{name} must be a positive number, got {value}");
            }
        }

        if self.min_zoom > self.max_zoom {
            bail!("min_zoom ({}) exceeds max_zoom ({})", self.min_zoom, self.max_zoom);
        }
        if !(self.min_zoom..=self.max_zoom).contains(&self.default_zoom) {
            bail!(
                "default_zoom ({}) lies outside [{}, {}]",
                self.default_zoom,
                self.min_zoom,
                self.max_zoom
            );
        }
        if !self.contact_tolerance.is_finite() || self.contact_tolerance < 0.0 {
            bail!("contact_tolerance must be non-negative, got {}", self.contact_tolerance);
        }
        if !self.home.position.is_finite() || !self.home.yaw_deg.is_finite() {
            bail!("home pose must be finite");
        }
        Ok(())
    }

    pub fn zoom_settings(&self) -> ZoomSettings {
        ZoomSettings {
            step: self.zoom_step,
            speed: self.zoom_speed,
            min: self.min_zoom,
            max: self.max_zoom,
        }
    }

    pub fn orbit_settings(&self) -> OrbitSettings {
        OrbitSettings {
            speed: self.orbit_speed,
            smoothing: self.orbit_smoothing,
        }
    }
}
