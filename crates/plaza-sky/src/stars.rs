//! Starfield: fixed points on the upper sky shell that fade with daylight.

use glam::Vec3;
use plaza_config::StarConfig;
use plaza_math::{Rgb, random_sphere_position};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Below this opacity the starfield is hidden outright.
const VISIBILITY_THRESHOLD: f32 = 0.1;

const BLUE_WHITE: Rgb = Rgb::new(0.8, 0.9, 1.0);
const WARM_WHITE: Rgb = Rgb::new(1.0, 1.0, 0.8);

/// A single star.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub position: Vec3,
    pub color: Rgb,
}

/// `max(0, 1 - day_intensity * 2)`: stars are gone once the sun is half way up.
pub fn star_opacity(day_intensity: f32) -> f32 {
    (1.0 - day_intensity * 2.0).max(0.0)
}

/// All stars, rendered as one point cloud with a shared opacity.
pub struct StarField {
    stars: Vec<Star>,
    opacity: f32,
    visible: bool,
}

impl StarField {
    /// Scatter `config.count` stars over the upper hemisphere at a radius in
    /// `[base_distance, base_distance + depth)`. Starts hidden.
    pub fn new(config: &StarConfig, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let stars = (0..config.count)
            .map(|_| {
                let radius = config.base_distance + rng.random::<f32>() * config.depth;
                let position = random_sphere_position(&mut rng, radius, true);
                let variation: f32 = rng.random();
                let color = if variation < 0.7 {
                    Rgb::WHITE
                } else if variation < 0.85 {
                    BLUE_WHITE
                } else {
                    WARM_WHITE
                };
                Star { position, color }
            })
            .collect();

        Self {
            stars,
            opacity: 0.0,
            visible: false,
        }
    }

    /// Fade the field for the current day intensity. Star positions never change.
    pub fn update(&mut self, day_intensity: f32) {
        self.opacity = star_opacity(day_intensity);
        self.visible = self.opacity > VISIBILITY_THRESHOLD;
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn visible(&self) -> bool {
        self.visible
    }
}
