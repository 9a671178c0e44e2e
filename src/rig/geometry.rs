//! Rig geometry helpers: bound disk, pivot rotation and pitch clamping

use glam::{Quat, Vec3};

/// Tolerance (degrees) under which a clamped pitch counts as unchanged
pub const PITCH_TOLERANCE: f32 = 1e-4;

/// Project `point` onto the ground plane and pull it back inside the disk
/// of `radius` around the origin.
pub fn constrain_to_disk(point: Vec3, radius: f32) -> Vec3 {
    Vec3::new(point.x, 0.0, point.z).clamp_length_max(radius)
}

/// Rotate `point` around `pivot` about `axis` by `degrees`
pub fn rotate_around(point: Vec3, pivot: Vec3, axis: Vec3, degrees: f32) -> Vec3 {
    let rotation = Quat::from_axis_angle(axis.normalize_or_zero(), degrees.to_radians());
    pivot + rotation * (point - pivot)
}

/// Orientation of a rig with the given yaw (about +Y) and pitch (about the
/// yawed +X axis), both in degrees.
pub fn rig_rotation(yaw: f32, pitch: f32) -> Quat {
    Quat::from_rotation_y(yaw.to_radians()) * Quat::from_rotation_x(pitch.to_radians())
}

/// Result of clamping the pitch encoded in a rotation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PitchClamp {
    pub unclamped: f32,
    pub clamped: f32,
}

impl PitchClamp {
    /// Whether clamping left the pitch unchanged
    pub fn is_within_range(&self) -> bool {
        (self.clamped - self.unclamped).abs() <= PITCH_TOLERANCE
    }
}

/// Clamp the pitch of a rotation built as `R_y(yaw) * R_x(pitch)`.
///
/// The yaw is divided out first, leaving a pure pitch rotation whose
/// half-angle tangent is `x / w`. The angle is recovered from it and
/// clamped. Returns `None` when the pitch is at a half turn and the
/// tangent is unbounded.
pub fn clamp_pitch(
    rotation: Quat,
    yaw_degrees: f32,
    min_degrees: f32,
    max_degrees: f32,
) -> Option<PitchClamp> {
    let local = Quat::from_rotation_y(-yaw_degrees.to_radians()) * rotation;
    if local.w.abs() < 1e-6 {
        return None;
    }
    let tangent = local.x / local.w;
    let unclamped = 2.0 * tangent.atan().to_degrees();
    Some(PitchClamp {
        unclamped,
        clamped: unclamped.clamp(min_degrees, max_degrees),
    })
}
