//! Day/night environment: celestial clock, lighting curves, clouds and stars.
//!
//! Nothing here renders. Each type owns its per-frame state and exposes plain
//! values (positions, colors, intensities, opacities) for a renderer to bind.

pub mod clock;
pub mod clouds;
pub mod cycle;
pub mod lighting;
pub mod stars;

pub use clock::{CelestialBody, CelestialClock, LunarPhase};
pub use clouds::{Cloud, CloudField, CloudPuff, cloud_appearance};
pub use cycle::SkyCycle;
pub use lighting::{LightingState, SkyColors, ambient_intensity, interpolate_colors};
pub use stars::{Star, StarField, star_opacity};
