use glam::{vec2, vec3, Mat3, Quat, Vec2, Vec3};

/// Rotate a vector about an axis.
///
/// Both `v` and `axis` are normalized before rotating, so the result is a
/// unit vector (or zero if `v` is zero). Positive angles turn +Z towards +X
/// when rotating about +Y.
pub fn rotate_about(v: Vec3, axis: Vec3, angle: f32) -> Vec3 {
    let v = v.normalize_or_zero();
    let Some(axis) = axis.try_normalize() else {
        return v;
    };
    Quat::from_axis_angle(axis, angle) * v
}

/// Rotation that points local +Z along `forward` and keeps local +Y as close
/// to `up` as possible.
///
/// Returns identity if `forward` is degenerate or parallel to `up`.
pub fn look_rotation(forward: Vec3, up: Vec3) -> Quat {
    let Some(forward) = forward.try_normalize() else {
        return Quat::IDENTITY;
    };
    let Some(right) = up.cross(forward).try_normalize() else {
        return Quat::IDENTITY;
    };
    let up = forward.cross(right);
    Quat::from_mat3(&Mat3::from_cols(right, up, forward))
}

/// Project a world point onto the ground plane, `(x, z)`.
pub fn planar(v: Vec3) -> Vec2 {
    vec2(v.x, v.z)
}

/// Lift a ground plane point into the world at height `y`.
pub fn lift(p: Vec2, y: f32) -> Vec3 {
    vec3(p.x, y, p.y)
}
