//! Random sampling helpers. Callers own the RNG so results are reproducible
//! from a seed.

use glam::Vec3;
use rand::Rng;

/// Uniform sample in `[min, max)`.
pub fn random_between<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    min + rng.random::<f32>() * (max - min)
}

/// Random point on a sphere of `radius` centered at the origin.
///
/// With `upper_half`, the polar angle is drawn from `acos(u * 0.8 + 0.1)` and
/// the result is folded to `y >= 0`, which keeps points away from both the
/// zenith and the horizon.
pub fn random_sphere_position<R: Rng + ?Sized>(rng: &mut R, radius: f32, upper_half: bool) -> Vec3 {
    let theta = rng.random::<f32>() * std::f32::consts::TAU;
    let phi = if upper_half {
        (rng.random::<f32>() * 0.8 + 0.1).acos()
    } else {
        (rng.random::<f32>() * 2.0 - 1.0).acos()
    };

    let x = radius * phi.sin() * theta.cos();
    let y = radius * phi.cos();
    let z = radius * phi.sin() * theta.sin();

    Vec3::new(x, if upper_half { y.abs() } else { y }, z)
}
