//! Easing, orbit, sampling and color helpers shared by the plaza simulation crates.

mod color;
mod easing;
mod orbit;
mod sampling;

pub use color::{Hsl, Rgb};
pub use easing::{lerp, smoothstep};
pub use orbit::orbit_position;
pub use sampling::{random_between, random_sphere_position};
