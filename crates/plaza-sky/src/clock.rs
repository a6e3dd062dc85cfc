//! Celestial clock: normalized time of day and the sun/moon it implies.
//!
//! Time of day is a fraction in `[0.0, 1.0)`. The sun angle is
//! `time_of_day * 2π`, so 0.0 is sunrise on +X, 0.25 is noon (straight up),
//! 0.5 is sunset and 0.75 is midnight. The moon rides the same orbit exactly
//! π behind the sun, which makes its height the negation of the sun's.

use std::f64::consts::{PI, TAU};

use glam::Vec3;
use plaza_math::orbit_position;

/// Number of lunar cycles per in-game day.
const LUNAR_CYCLES_PER_DAY: f64 = 28.0;

/// Bodies whose orbit height drops below this are hidden.
const BELOW_HORIZON_CUTOFF: f32 = -10.0;

/// The moon also hides once its normalized height drops below this.
const MOON_MIN_HEIGHT: f32 = -0.2;

/// In-game time tracking for the day/night cycle.
#[derive(Clone, Debug)]
pub struct CelestialClock {
    time_of_day: f64,
    day_duration_seconds: f64,
    /// A paused clock ignores [`advance`](Self::advance).
    pub paused: bool,
}

impl CelestialClock {
    /// Create a clock at `start_time_of_day` (wrapped into `[0, 1)`).
    pub fn new(day_duration_seconds: f64, start_time_of_day: f64) -> Self {
        Self {
            time_of_day: start_time_of_day.rem_euclid(1.0),
            day_duration_seconds,
            paused: false,
        }
    }

    /// Advance by `delta_seconds` of real time. Callers clamp negative deltas.
    pub fn advance(&mut self, delta_seconds: f64) {
        if self.paused {
            return;
        }
        let next = (self.time_of_day + delta_seconds / self.day_duration_seconds) % 1.0;
        // `%` can round up to exactly 1.0 for values a hair below it.
        self.time_of_day = if next >= 1.0 { 0.0 } else { next };
    }

    /// Jump to a specific time of day, wrapped into `[0, 1)`.
    pub fn set_time_of_day(&mut self, time_of_day: f64) {
        self.time_of_day = time_of_day.rem_euclid(1.0);
        if self.time_of_day >= 1.0 {
            self.time_of_day = 0.0;
        }
    }

    pub fn day_time(&self) -> f64 {
        self.time_of_day
    }

    pub fn day_duration_seconds(&self) -> f64 {
        self.day_duration_seconds
    }

    /// Hours on a 24h dial, with 0h at sunrise.
    pub fn hours(&self) -> f64 {
        self.time_of_day * 24.0
    }

    pub fn sun_angle(&self) -> f64 {
        self.time_of_day * TAU
    }

    pub fn moon_angle(&self) -> f64 {
        self.sun_angle() + PI
    }

    /// `sin(sun_angle)`: 1.0 at noon, -1.0 at midnight.
    pub fn sun_height(&self) -> f32 {
        self.sun_angle().sin() as f32
    }

    /// `sin(moon_angle)`, always `-sun_height()`.
    pub fn moon_height(&self) -> f32 {
        self.moon_angle().sin() as f32
    }

    /// How much sun there is: `max(0, sun_height)`.
    pub fn day_intensity(&self) -> f32 {
        self.sun_height().max(0.0)
    }

    pub fn lunar_phase(&self) -> LunarPhase {
        LunarPhase::at(self.time_of_day)
    }

    /// Sun position and visibility on an orbit of `radius`.
    pub fn sun(&self, radius: f32) -> CelestialBody {
        let position = orbit_position(self.sun_angle() as f32, radius);
        CelestialBody {
            position,
            height: self.sun_height(),
            visible: position.y > BELOW_HORIZON_CUTOFF,
        }
    }

    /// Moon position and visibility on an orbit of `radius`.
    pub fn moon(&self, radius: f32) -> CelestialBody {
        let position = orbit_position(self.moon_angle() as f32, radius);
        let height = self.moon_height();
        CelestialBody {
            position,
            height,
            visible: position.y > BELOW_HORIZON_CUTOFF && height > MOON_MIN_HEIGHT,
        }
    }
}

/// A sun or moon snapshot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CelestialBody {
    /// Position on the orbit; the light points from here to the origin.
    pub position: Vec3,
    /// Normalized height, `sin` of the body's angle.
    pub height: f32,
    pub visible: bool,
}

/// Lunar phase derived from the time of day. Purely cosmetic.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LunarPhase {
    /// Position in the lunar cycle, `[0.0, 1.0)`.
    pub phase: f32,
}

impl LunarPhase {
    pub fn at(time_of_day: f64) -> Self {
        let phase = ((time_of_day * LUNAR_CYCLES_PER_DAY) % 1.0) as f32;
        Self {
            phase: if phase >= 1.0 { 0.0 } else { phase },
        }
    }

    /// Sine wave over the cycle remapped to `[0.0, 1.0]`.
    pub fn intensity(&self) -> f32 {
        (self.phase * std::f32::consts::TAU).sin() * 0.5 + 0.5
    }

    /// Multiplier applied to the moon's emissive brightness, `[0.6, 1.0]`.
    pub fn brightness_factor(&self) -> f32 {
        0.6 + self.intensity() * 0.4
    }
}
