//! Contact classification against the rig's bounding volume.
//!
//! A point is *touching* when it lies within tolerance of at least one face while still being
//! contained; *outside* when it is beyond tolerance past any face. Faces are reported so
//! callers can cancel only the part of a motion that pushes through them.

use glam::Vec3;
use log::{debug, warn};
use serde::Serialize;

use crate::math::AABB;

/// Default contact tolerance in world units.
pub const CONTACT_TOLERANCE: f32 = 1e-3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Face {
    MinX,
    MaxX,
    MinY,
    MaxY,
    MinZ,
    MaxZ,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::MinX,
        Face::MaxX,
        Face::MinY,
        Face::MaxY,
        Face::MinZ,
        Face::MaxZ,
    ];

    /// Unit normal pointing out of the volume.
    pub fn outward_normal(self) -> Vec3 {
        match self {
            Face::MinX => Vec3::NEG_X,
            Face::MaxX => Vec3::X,
            Face::MinY => Vec3::NEG_Y,
            Face::MaxY => Vec3::Y,
            Face::MinZ => Vec3::NEG_Z,
            Face::MaxZ => Vec3::Z,
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }

    fn is_floor_or_ceiling(self) -> bool {
        matches!(self, Face::MinY | Face::MaxY)
    }
}

/// Small set of faces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FaceSet(u8);

impl FaceSet {
    pub fn insert(&mut self, face: Face) {
        self.0 |= face.bit();
    }

    pub fn contains(&self, face: Face) -> bool {
        self.0 & face.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Face> + '_ {
        Face::ALL.into_iter().filter(|f| self.contains(*f))
    }
}

impl Serialize for FaceSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "faces", rename_all = "snake_case")]
pub enum Contact {
    /// No usable volume; nothing is ever corrected.
    Unconstrained,
    Inside,
    Touching(FaceSet),
    Outside(FaceSet),
}

impl Contact {
    pub fn is_touching(&self) -> bool {
        matches!(self, Contact::Touching(_))
    }

    /// Touching one of the four vertical walls, as opposed to only the floor or ceiling.
    pub fn touches_wall(&self) -> bool {
        match self {
            Contact::Touching(faces) => faces.iter().any(|f| !f.is_floor_or_ceiling()),
            _ => false,
        }
    }

    fn faces(&self) -> Option<&FaceSet> {
        match self {
            Contact::Touching(faces) | Contact::Outside(faces) => Some(faces),
            Contact::Unconstrained | Contact::Inside => None,
        }
    }
}

/// Keeps points inside the designer-supplied volume.
#[derive(Debug, Clone, Copy)]
pub struct BoundaryGuard {
    volume: Option<AABB>,
    tolerance: f32,
}

impl Default for BoundaryGuard {
    fn default() -> Self {
        Self::unconstrained()
    }
}

impl BoundaryGuard {
    /// A missing volume, or one with zero X or Z extent, disables the constraint rather than
    /// failing. A volume with zero height still confines the ground plane.
    pub fn new(volume: Option<AABB>, tolerance: f32) -> Self {
        let volume = match volume {
            Some(aabb) if aabb.is_degenerate() => {
                warn!(
                    "bounding volume {:?}..{:?} has no ground-plane area; camera movement will be unconfined",
                    aabb.min, aabb.max
                );
                None
            }
            Some(aabb) => {
                debug!(
                    "camera bounds set to {:?}..{:?} (center {:?})",
                    aabb.min,
                    aabb.max,
                    aabb.center()
                );
                Some(aabb)
            }
            None => None,
        };

        Self {
            volume,
            tolerance: tolerance.abs(),
        }
    }

    pub fn unconstrained() -> Self {
        Self {
            volume: None,
            tolerance: CONTACT_TOLERANCE,
        }
    }

    pub fn volume(&self) -> Option<&AABB> {
        self.volume.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.volume.is_some()
    }

    /// Classify against all six faces, or only the walls when the volume is flat.
    pub fn classify(&self, point: Vec3) -> Contact {
        if self.is_flat() {
            return self.classify_ground(point);
        }
        self.classify_faces(point, |_| true)
    }

    fn is_flat(&self) -> bool {
        self.volume.is_some_and(|v| v.is_flat())
    }

    /// Classify against the four vertical walls only; height is ignored.
    pub fn classify_ground(&self, point: Vec3) -> Contact {
        self.classify_faces(point, |face| !face.is_floor_or_ceiling())
    }

    fn classify_faces(&self, point: Vec3, include: impl Fn(Face) -> bool) -> Contact {
        let Some(volume) = self.volume else {
            return Contact::Unconstrained;
        };

        let mut touching = FaceSet::default();
        let mut outside = FaceSet::default();

        for face in Face::ALL.into_iter().filter(|f| include(*f)) {
            let normal = face.outward_normal();
            let plane = if normal.max_element() > 0.0 {
                volume.max.dot(normal)
            } else {
                volume.min.dot(normal)
            };
            // Signed distance past the face, positive outside.
            let past = point.dot(normal) - plane;

            if past > self.tolerance {
                outside.insert(face);
            } else if past >= -self.tolerance {
                touching.insert(face);
            }
        }

        if !outside.is_empty() {
            Contact::Outside(outside)
        } else if !touching.is_empty() {
            Contact::Touching(touching)
        } else {
            Contact::Inside
        }
    }

    /// The part of `motion` that pushes outward through the faces in `contact`.
    /// Subtracting it leaves only the motion that slides along or away from them.
    pub fn redirect(&self, contact: &Contact, motion: Vec3) -> Option<Vec3> {
        let faces = contact.faces()?;

        let correction = faces.iter().fold(Vec3::ZERO, |acc, face| {
            let normal = face.outward_normal();
            acc + normal * motion.dot(normal).max(0.0)
        });

        (correction != Vec3::ZERO).then_some(correction)
    }

    /// Clamp a point into the volume on every axis. Height is left alone for a flat volume.
    pub fn confine(&self, point: Vec3) -> Vec3 {
        match &self.volume {
            Some(volume) if volume.is_flat() => volume.clamp_ground(point),
            Some(volume) => volume.clamp(point),
            None => point,
        }
    }

    /// Clamp a point into the volume on the ground plane only.
    pub fn confine_ground(&self, point: Vec3) -> Vec3 {
        match &self.volume {
            Some(volume) => volume.clamp_ground(point),
            None => point,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guard() -> BoundaryGuard {
        BoundaryGuard::new(
            Some(AABB::new(Vec3::new(-50.0, -10.0, -50.0), Vec3::new(50.0, 40.0, 50.0))),
            CONTACT_TOLERANCE,
        )
    }

    #[test]
    fn test_inside_point() {
        assert_eq!(guard().classify(Vec3::new(0.0, 5.0, 0.0)), Contact::Inside);
    }

    #[test]
    fn test_touching_within_tolerance() {
        let contact = guard().classify(Vec3::new(50.0 - 0.0005, 5.0, 0.0));
        let Contact::Touching(faces) = contact else {
            panic!("expected touching, got {:?}", contact);
        };
        assert!(faces.contains(Face::MaxX));
        assert_eq!(faces.iter().count(), 1);
    }

    #[test]
    fn test_corner_touches_two_faces() {
        let contact = guard().classify_ground(Vec3::new(-50.0, 5.0, 50.0));
        let Contact::Touching(faces) = contact else {
            panic!("expected touching, got {:?}", contact);
        };
        assert!(faces.contains(Face::MinX));
        assert!(faces.contains(Face::MaxZ));
    }

    #[test]
    fn test_ceiling_contact_is_not_a_wall() {
        let contact = guard().classify(Vec3::new(0.0, 40.0, 0.0));
        assert!(contact.is_touching());
        assert!(!contact.touches_wall());
        assert!(guard().classify(Vec3::new(0.0, 40.0, 50.0)).touches_wall());
    }

    #[test]
    fn test_outside_point() {
        let contact = guard().classify(Vec3::new(0.0, 5.0, -51.0));
        assert!(matches!(contact, Contact::Outside(faces) if faces.contains(Face::MinZ)));
    }

    #[test]
    fn test_ground_classification_ignores_height() {
        assert_eq!(guard().classify_ground(Vec3::new(0.0, 1000.0, 0.0)), Contact::Inside);
        assert!(matches!(
            guard().classify(Vec3::new(0.0, 1000.0, 0.0)),
            Contact::Outside(_)
        ));
    }

    #[test]
    fn test_degenerate_volume_is_unconstrained() {
        let guard = BoundaryGuard::new(Some(AABB::new(Vec3::ONE, Vec3::ONE)), CONTACT_TOLERANCE);
        assert!(!guard.is_active());
        assert_eq!(guard.classify(Vec3::splat(100.0)), Contact::Unconstrained);
        assert_eq!(guard.redirect(&Contact::Unconstrained, Vec3::X), None);
        assert_eq!(guard.confine(Vec3::splat(100.0)), Vec3::splat(100.0));
    }

    #[test]
    fn test_flat_volume_confines_ground_only() {
        let flat = BoundaryGuard::new(
            Some(AABB::new(Vec3::new(-50.0, 0.0, -50.0), Vec3::new(50.0, 0.0, 50.0))),
            CONTACT_TOLERANCE,
        );
        assert!(flat.is_active());
        assert_eq!(flat.classify(Vec3::new(0.0, 17.0, 0.0)), Contact::Inside);
        assert!(flat.classify(Vec3::new(50.0, 17.0, 0.0)).touches_wall());
        assert_eq!(
            flat.confine(Vec3::new(80.0, 17.0, -3.0)),
            Vec3::new(50.0, 17.0, -3.0)
        );
    }

    #[test]
    fn test_redirect_removes_outward_component_only() {
        let g = guard();
        let contact = g.classify_ground(Vec3::new(50.0, 0.0, 0.0));
        let correction = g.redirect(&contact, Vec3::new(2.0, 0.0, 1.0));
        assert_eq!(correction, Some(Vec3::new(2.0, 0.0, 0.0)));
    }

    #[test]
    fn test_redirect_ignores_inward_motion() {
        let g = guard();
        let contact = g.classify_ground(Vec3::new(50.0, 0.0, 0.0));
        assert_eq!(g.redirect(&contact, Vec3::new(-2.0, 0.0, 1.0)), None);
    }

    #[test]
    fn test_redirect_inside_is_none() {
        let g = guard();
        assert_eq!(g.redirect(&Contact::Inside, Vec3::X), None);
    }
}
