use glam::{EulerRot, Quat};

/// Fraction of the remaining gap to close this frame, clamped to `[0, 1]`.
pub fn step_fraction(speed: f32, elapsed: f32) -> f32 {
    (speed * elapsed).clamp(0.0, 1.0)
}

pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Orientation for the given pitch and yaw in degrees. Positive pitch looks down; positive
/// yaw turns right (clockwise seen from above).
pub fn orbit_rotation(pitch_deg: f32, yaw_deg: f32) -> Quat {
    Quat::from_euler(
        EulerRot::YXZ,
        -yaw_deg.to_radians(),
        -pitch_deg.to_radians(),
        0.0,
    )
}

/// Yaw-only orientation used by the rig body.
pub fn yaw_rotation(yaw_deg: f32) -> Quat {
    Quat::from_rotation_y(-yaw_deg.to_radians())
}

/// Spherical step from `current` toward `target`. Snaps once the residual angle is below
/// `epsilon` radians so that a settled orientation stays bit-identical.
pub fn slerp_toward(current: Quat, target: Quat, t: f32, epsilon: f32) -> Quat {
    if current.angle_between(target) <= epsilon {
        return target;
    }
    let next = current.slerp(target, t);
    if next.angle_between(target) <= epsilon {
        target
    } else {
        next
    }
}
