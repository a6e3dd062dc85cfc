//! Drifting cloud field.
//!
//! A fixed number of clouds is spawned once and lives for the whole session.
//! Clouds drift on x/z at a constant velocity, spin slowly around Y, and
//! teleport to the opposite edge when they pass the wrap distance. Tint and
//! opacity follow the sun in three bands:
//!
//! | sun height      | color                             | opacity   |
//! |-----------------|-----------------------------------|-----------|
//! | `> 0.1`         | white                             | 0.9       |
//! | `(-0.1, 0.1]`   | warm HSL(0.05, 0.3, 0.7..1.0)     | 0.8..0.9  |
//! | `<= -0.1`       | `#333366`                         | 0.3       |
//!
//! The bands do not meet continuously at ±0.1.

use glam::{Vec2, Vec3};
use plaza_config::CloudConfig;
use plaza_math::{Hsl, Rgb, random_between, smoothstep};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

const DAY_BAND: f32 = 0.1;
const NIGHT_CLOUD_HEX: u32 = 0x333366;
const SPAWN_OPACITY: f32 = 0.8;

/// One sphere of a procedural cloud, relative to the cloud's origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CloudPuff {
    pub offset: Vec3,
    pub radius: f32,
}

/// A single drifting cloud.
#[derive(Clone, Debug)]
pub struct Cloud {
    pub position: Vec3,
    /// Horizontal velocity on (x, z), each component in `[-1, 1)`.
    pub velocity: Vec2,
    pub rotation_y: f32,
    pub scale: f32,
    /// Sphere layout for renderers without a cloud model.
    pub puffs: Vec<CloudPuff>,
    pub color: Rgb,
    pub opacity: f32,
}

impl Cloud {
    fn spawn<R: Rng + ?Sized>(rng: &mut R, config: &CloudConfig) -> Self {
        let extent = config.spawn_extent;
        let position = Vec3::new(
            random_between(rng, -extent, extent),
            random_between(rng, config.min_altitude, config.max_altitude),
            random_between(rng, -extent, extent),
        );
        let scale = random_between(rng, 1.5, 2.5);
        let rotation_y = rng.random::<f32>() * std::f32::consts::TAU;
        let velocity = Vec2::new(random_between(rng, -1.0, 1.0), random_between(rng, -1.0, 1.0));

        let puff_count = rng.random_range(8..=14usize);
        let puffs = (0..puff_count)
            .map(|_| CloudPuff {
                radius: random_between(rng, 8.0, 20.0),
                offset: Vec3::new(
                    random_between(rng, -20.0, 20.0),
                    random_between(rng, -6.0, 6.0),
                    random_between(rng, -20.0, 20.0),
                ),
            })
            .collect();

        Self {
            position,
            velocity,
            rotation_y,
            scale,
            puffs,
            color: Rgb::WHITE,
            opacity: SPAWN_OPACITY,
        }
    }
}

/// Cloud tint and opacity for a sun height.
pub fn cloud_appearance(sun_height: f32) -> (Rgb, f32) {
    if sun_height > DAY_BAND {
        (Rgb::WHITE, 0.9)
    } else if sun_height > -DAY_BAND {
        let t = smoothstep(-DAY_BAND, DAY_BAND, sun_height);
        (Hsl::new(0.05, 0.3, 0.7 + t * 0.3).to_rgb(), 0.8 + t * 0.1)
    } else {
        (Rgb::from_hex(NIGHT_CLOUD_HEX), 0.3)
    }
}

/// Teleport `value` to the opposite edge once it passes `max`.
fn wrap_axis(value: f32, max: f32) -> f32 {
    if value.abs() > max {
        -value.signum() * max
    } else {
        value
    }
}

/// The full set of clouds.
pub struct CloudField {
    clouds: Vec<Cloud>,
    speed_factor: f32,
    spin_rate: f32,
    max_distance: f32,
}

impl CloudField {
    /// Spawn `config.count` clouds from a seeded RNG.
    pub fn new(config: &CloudConfig, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let clouds: Vec<Cloud> = (0..config.count)
            .map(|_| Cloud::spawn(&mut rng, config))
            .collect();
        debug!(count = clouds.len(), seed, "Spawned cloud field");

        Self {
            clouds,
            speed_factor: config.speed_factor,
            spin_rate: config.spin_rate,
            max_distance: config.max_distance,
        }
    }

    /// Drift, wrap, spin and recolor every cloud.
    pub fn update(&mut self, delta: f32, day_time: f64) {
        let sun_height = (day_time * std::f64::consts::TAU).sin() as f32;
        let (color, opacity) = cloud_appearance(sun_height);

        for cloud in &mut self.clouds {
            cloud.position.x += cloud.velocity.x * delta * self.speed_factor;
            cloud.position.z += cloud.velocity.y * delta * self.speed_factor;

            cloud.position.x = wrap_axis(cloud.position.x, self.max_distance);
            cloud.position.z = wrap_axis(cloud.position.z, self.max_distance);

            cloud.rotation_y += delta * self.spin_rate;

            cloud.color = color;
            cloud.opacity = opacity;
        }
    }

    pub fn clouds(&self) -> &[Cloud] {
        &self.clouds
    }

    pub fn len(&self) -> usize {
        self.clouds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clouds.is_empty()
    }

    pub fn max_distance(&self) -> f32 {
        self.max_distance
    }
}
