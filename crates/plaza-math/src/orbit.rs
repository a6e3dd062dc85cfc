use glam::Vec3;

/// Position on a circular orbit of `radius` in the XY plane.
///
/// Angle 0 lies on +X, π/2 is straight up (+Y). Z is always zero.
#[must_use]
pub fn orbit_position(angle: f32, radius: f32) -> Vec3 {
    Vec3::new(angle.cos() * radius, angle.sin() * radius, 0.0)
}
