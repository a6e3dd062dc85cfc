//! Scalar easing functions.

/// Hermite smoothstep: maps `x` between `edge0` and `edge1` to `[0.0, 1.0]`
/// with zero slope at both ends. Values outside the band clamp.
///
/// `edge0` must differ from `edge1`.
#[must_use]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Linear interpolation from `a` to `b`. `t` is not clamped.
#[must_use]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
