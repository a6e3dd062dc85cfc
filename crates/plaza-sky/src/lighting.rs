//! Lighting curves keyed on sun height.
//!
//! Colors blend night → sunset below the horizon and sunset → day above it.
//! Sun and ambient colors transition within ±0.3 of the horizon; the sky uses
//! a wider ±0.4 band so it keeps some dusk color longer before going dark.

use plaza_config::{ColorKeyframes, LightingConfig};
use plaza_math::{Hsl, smoothstep};

use crate::clock::CelestialClock;

const LIGHT_BAND: f32 = 0.3;
const SKY_BAND: f32 = 0.4;

/// Ambient intensity never drops below this.
pub const AMBIENT_FLOOR: f32 = 0.05;
const AMBIENT_DAY_SCALE: f32 = 0.4;
const AMBIENT_NIGHT_SCALE: f32 = 0.1;

/// The moon lights the scene only while the sun is below this height.
const MOON_SUN_CUTOFF: f32 = 0.1;
const MOON_LIGHT_SCALE: f32 = 0.25;

const MOON_HUE: f32 = 0.65;

/// Interpolated sun, ambient and sky colors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkyColors {
    pub sun: Hsl,
    pub ambient: Hsl,
    pub sky: Hsl,
}

/// Blend the three keyframe sets for the given sun height.
pub fn interpolate_colors(sun_height: f32, config: &LightingConfig) -> SkyColors {
    if sun_height < 0.0 {
        let t = smoothstep(-LIGHT_BAND, 0.0, sun_height);
        let t_sky = smoothstep(-SKY_BAND, 0.0, sun_height);
        SkyColors {
            sun: below_horizon(&config.sun_colors, t),
            ambient: below_horizon(&config.ambient_colors, t),
            sky: below_horizon(&config.sky_colors, t_sky),
        }
    } else {
        let t = smoothstep(0.0, LIGHT_BAND, sun_height);
        let t_sky = smoothstep(0.0, SKY_BAND, sun_height);
        SkyColors {
            sun: above_horizon(&config.sun_colors, t),
            ambient: above_horizon(&config.ambient_colors, t),
            sky: above_horizon(&config.sky_colors, t_sky),
        }
    }
}

fn below_horizon(keys: &ColorKeyframes, t: f32) -> Hsl {
    keys.night.lerp(keys.sunset, t)
}

fn above_horizon(keys: &ColorKeyframes, t: f32) -> Hsl {
    keys.sunset.lerp(keys.day, t)
}

/// `max(0.05, day_intensity * 0.4 + max(0, -sun_height * 0.1))`.
pub fn ambient_intensity(sun_height: f32) -> f32 {
    let day = sun_height.max(0.0);
    let night = (-sun_height * AMBIENT_NIGHT_SCALE).max(0.0);
    (day * AMBIENT_DAY_SCALE + night).max(AMBIENT_FLOOR)
}

/// Every light and color value the renderer needs for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightingState {
    pub colors: SkyColors,
    pub sun_intensity: f32,
    pub ambient_intensity: f32,
    pub moon_intensity: f32,
    /// Emissive brightness of the moon sphere, lunar phase applied.
    pub moon_emissive: f32,
    /// Surface color of the moon sphere.
    pub moon_color: Hsl,
}

impl LightingState {
    /// Evaluate all curves for the clock's current time.
    ///
    /// `moon_visible` gates the lunar-phase modulation, which only touches
    /// the moon's emissive brightness and never its light intensity.
    pub fn evaluate(clock: &CelestialClock, config: &LightingConfig, moon_visible: bool) -> Self {
        let sun_height = clock.sun_height();
        let moon_height = clock.moon_height();

        let (moon_intensity, mut moon_emissive, moon_color) =
            if sun_height < MOON_SUN_CUTOFF && moon_height > 0.0 {
                (
                    moon_height * MOON_LIGHT_SCALE,
                    0.3 + moon_height * 0.3,
                    Hsl::new(MOON_HUE, 0.1, 0.7 + moon_height * 0.3),
                )
            } else {
                (0.0, 0.1, Hsl::new(MOON_HUE, 0.05, 0.8))
            };

        if moon_visible {
            moon_emissive *= clock.lunar_phase().brightness_factor();
        }

        Self {
            colors: interpolate_colors(sun_height, config),
            sun_intensity: clock.day_intensity() * config.sun_base_intensity,
            ambient_intensity: ambient_intensity(sun_height),
            moon_intensity,
            moon_emissive,
            moon_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hsl_close(a: Hsl, b: Hsl) -> bool {
        (a.h - b.h).abs() < 1e-5 && (a.s - b.s).abs() < 1e-5 && (a.l - b.l).abs() < 1e-5
    }

    #[test]
    fn test_full_day_uses_day_keyframes() {
        let config = LightingConfig::default();
        let colors = interpolate_colors(1.0, &config);
        assert!(hsl_close(colors.sun, config.sun_colors.day));
        assert!(hsl_close(colors.ambient, config.ambient_colors.day));
        assert!(hsl_close(colors.sky, config.sky_colors.day));
    }

    #[test]
    fn test_deep_night_uses_night_keyframes() {
        let config = LightingConfig::default();
        let colors = interpolate_colors(-1.0, &config);
        assert!(hsl_close(colors.sun, config.sun_colors.night));
        assert!(hsl_close(colors.sky, config.sky_colors.night));
    }

    #[test]
    fn test_horizon_is_sunset_from_both_sides() {
        let config = LightingConfig::default();
        let at = interpolate_colors(0.0, &config);
        let just_below = interpolate_colors(-1e-4, &config);
        assert!(hsl_close(at.sun, config.sun_colors.sunset));
        assert!(hsl_close(at.sky, config.sky_colors.sunset));
        assert!((just_below.sun.l - at.sun.l).abs() < 1e-3);
    }

    #[test]
    fn test_sky_band_is_wider_than_light_band() {
        let config = LightingConfig::default();
        // At h = 0.3 the sun color has reached day, the sky has not.
        let colors = interpolate_colors(LIGHT_BAND, &config);
        assert!(hsl_close(colors.sun, config.sun_colors.day));
        assert!(!hsl_close(colors.sky, config.sky_colors.day));
        let colors = interpolate_colors(-LIGHT_BAND, &config);
        assert!(hsl_close(colors.ambient, config.ambient_colors.night));
        assert!(!hsl_close(colors.sky, config.sky_colors.night));
    }

    #[test]
    fn test_ambient_floor_holds_everywhere() {
        for i in -100..=100 {
            let h = i as f32 / 100.0;
            assert!(ambient_intensity(h) >= AMBIENT_FLOOR, "h={h}");
        }
        assert_eq!(ambient_intensity(0.0), AMBIENT_FLOOR);
        assert!((ambient_intensity(1.0) - 0.4).abs() < 1e-6);
        assert!((ambient_intensity(-1.0) - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_noon_state() {
        let clock = CelestialClock::new(60.0, 0.25);
        let state = LightingState::evaluate(&clock, &LightingConfig::default(), false);
        assert!((state.sun_intensity - 1.2).abs() < 1e-5);
        assert_eq!(state.moon_intensity, 0.0);
        assert_eq!(state.moon_emissive, 0.1);
    }

    #[test]
    fn test_midnight_moon_light() {
        let clock = CelestialClock::new(60.0, 0.75);
        let state = LightingState::evaluate(&clock, &LightingConfig::default(), false);
        assert_eq!(state.sun_intensity, 0.0);
        assert!((state.moon_intensity - 0.25).abs() < 1e-5);
        assert!((state.moon_emissive - 0.6).abs() < 1e-5);
    }

    #[test]
    fn test_phase_modulates_emissive_only() {
        let clock = CelestialClock::new(60.0, 0.75);
        let config = LightingConfig::default();
        let hidden = LightingState::evaluate(&clock, &config, false);
        let shown = LightingState::evaluate(&clock, &config, true);
        assert_eq!(hidden.moon_intensity, shown.moon_intensity);
        let factor = clock.lunar_phase().brightness_factor();
        assert!((shown.moon_emissive - hidden.moon_emissive * factor).abs() < 1e-6);
    }

    #[test]
    fn test_moon_lights_in_overlap_window() {
        // Sun just above the horizon (h ≈ 0.05), moon just below: no light.
        let clock = CelestialClock::new(60.0, 0.05 / std::f64::consts::TAU);
        let state = LightingState::evaluate(&clock, &LightingConfig::default(), true);
        assert_eq!(state.moon_intensity, 0.0);

        // Sun just below (h ≈ -0.05), moon just above: dim moon light.
        let clock = CelestialClock::new(60.0, 0.5 + 0.05 / std::f64::consts::TAU);
        let state = LightingState::evaluate(&clock, &LightingConfig::default(), true);
        assert!(state.moon_intensity > 0.0 && state.moon_intensity < 0.02);
    }
}
