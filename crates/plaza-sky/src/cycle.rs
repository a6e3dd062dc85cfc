//! Aggregate day/night state: the clock plus everything derived from it.

use plaza_config::{LightingConfig, SkyConfig};

use crate::clock::{CelestialBody, CelestialClock};
use crate::lighting::LightingState;

/// Clock, sun, moon and lighting, recomputed together each tick.
#[derive(Clone, Debug)]
pub struct SkyCycle {
    pub clock: CelestialClock,
    orbit_radius: f32,
    lighting_config: LightingConfig,
    sun: CelestialBody,
    moon: CelestialBody,
    lighting: LightingState,
}

impl SkyCycle {
    pub fn new(sky: &SkyConfig, lighting: &LightingConfig) -> Self {
        let clock = CelestialClock::new(sky.day_duration_seconds, sky.start_time_of_day);
        let sun = clock.sun(sky.orbit_radius);
        let moon = clock.moon(sky.orbit_radius);
        let state = LightingState::evaluate(&clock, lighting, moon.visible);
        Self {
            clock,
            orbit_radius: sky.orbit_radius,
            lighting_config: lighting.clone(),
            sun,
            moon,
            lighting: state,
        }
    }

    /// Advance the clock by `delta_seconds` and recompute all derived values.
    pub fn update(&mut self, delta_seconds: f64) {
        self.clock.advance(delta_seconds);
        self.refresh();
    }

    /// Jump to `time_of_day` and recompute.
    pub fn set_time_of_day(&mut self, time_of_day: f64) {
        self.clock.set_time_of_day(time_of_day);
        self.refresh();
    }

    fn refresh(&mut self) {
        self.sun = self.clock.sun(self.orbit_radius);
        self.moon = self.clock.moon(self.orbit_radius);
        self.lighting = LightingState::evaluate(&self.clock, &self.lighting_config, self.moon.visible);
    }

    pub fn day_time(&self) -> f64 {
        self.clock.day_time()
    }

    pub fn sun_height(&self) -> f32 {
        self.clock.sun_height()
    }

    pub fn day_intensity(&self) -> f32 {
        self.clock.day_intensity()
    }

    pub fn sun(&self) -> &CelestialBody {
        &self.sun
    }

    pub fn moon(&self) -> &CelestialBody {
        &self.moon
    }

    pub fn lighting(&self) -> &LightingState {
        &self.lighting
    }
}
