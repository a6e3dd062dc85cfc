//! Configuration structs with scene defaults and RON persistence.

use std::path::{Path, PathBuf};

use plaza_math::Hsl;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ConfigError;

const CONFIG_FILE: &str = "config.ron";

/// Top-level simulation configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Day/night clock and celestial orbit.
    pub sky: SkyConfig,
    /// Light intensities and color keyframes.
    pub lighting: LightingConfig,
    /// Drifting cloud field.
    pub clouds: CloudConfig,
    /// Starfield.
    pub stars: StarConfig,
    /// Walk, jump and collision constants.
    pub player: PlayerConfig,
    /// Ground and prop placement.
    pub world: WorldConfig,
    /// Background music.
    pub audio: AudioConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Day/night clock configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SkyConfig {
    /// Real-time seconds for one full day.
    pub day_duration_seconds: f64,
    /// Normalized time of day at startup. 0.0 is sunrise, 0.25 noon.
    pub start_time_of_day: f64,
    /// Radius of the shared sun/moon orbit.
    pub orbit_radius: f32,
}

/// Three HSL keyframes blended by sun height.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ColorKeyframes {
    pub night: Hsl,
    pub sunset: Hsl,
    pub day: Hsl,
}

/// Lighting configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LightingConfig {
    /// Sun light intensity with the sun straight overhead.
    pub sun_base_intensity: f32,
    /// Sun light color keyframes.
    pub sun_colors: ColorKeyframes,
    /// Ambient light color keyframes.
    pub ambient_colors: ColorKeyframes,
    /// Sky background color keyframes.
    pub sky_colors: ColorKeyframes,
}

/// Cloud field configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CloudConfig {
    /// Number of clouds created at startup.
    pub count: usize,
    /// Multiplier applied to each cloud's unit velocity.
    pub speed_factor: f32,
    /// Constant Y spin in radians per second.
    pub spin_rate: f32,
    /// Absolute x/z coordinate past which a cloud wraps to the far edge.
    pub max_distance: f32,
    /// Half-width of the square spawn area on x/z.
    pub spawn_extent: f32,
    /// Minimum spawn altitude.
    pub min_altitude: f32,
    /// Maximum spawn altitude.
    pub max_altitude: f32,
}

/// Starfield configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StarConfig {
    /// Number of stars.
    pub count: usize,
    /// Inner radius of the star shell.
    pub base_distance: f32,
    /// Thickness of the star shell.
    pub depth: f32,
}

/// Player movement configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlayerConfig {
    /// Acceleration applied along the input direction.
    pub walk_speed: f32,
    /// Exponential velocity decay rate per second.
    pub damping: f32,
    /// Radius added to every collision box half-extent.
    pub radius: f32,
    /// Eye height when standing on the ground.
    pub ground_height: f32,
    /// Upward velocity given by a jump.
    pub jump_strength: f32,
    /// Vertical acceleration while airborne (negative is down).
    pub gravity: f32,
    /// Clearance added past the larger half-extent when escaping a box.
    pub escape_margin: f32,
    /// Offset tried on each axis when the primary escape point collides.
    pub escape_step: f32,
}

/// World configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    /// Side length of the square ground plane.
    pub ground_size: f32,
    /// Seed for every random draw (clouds, stars, lantern flicker).
    pub seed: u64,
}

/// Audio configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AudioConfig {
    /// Music tracks in playback order.
    pub music_tracks: Vec<String>,
    /// Music volume (0.0 - 1.0).
    pub music_volume: f32,
    /// Loop the current track.
    pub looping: bool,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log collision boxes after the world is populated.
    pub show_colliders: bool,
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for SkyConfig {
    fn default() -> Self {
        Self {
            day_duration_seconds: 60.0,
            start_time_of_day: 0.0,
            orbit_radius: 200.0,
        }
    }
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            sun_base_intensity: 1.2,
            sun_colors: ColorKeyframes {
                night: Hsl::new(0.6, 0.8, 0.2),
                sunset: Hsl::new(0.08, 0.9, 0.8),
                day: Hsl::new(0.12, 0.15, 1.0),
            },
            ambient_colors: ColorKeyframes {
                night: Hsl::new(0.65, 0.7, 0.3),
                sunset: Hsl::new(0.08, 0.4, 0.6),
                day: Hsl::new(0.6, 0.1, 0.9),
            },
            sky_colors: ColorKeyframes {
                night: Hsl::new(0.65, 0.9, 0.05),
                sunset: Hsl::new(0.08, 0.8, 0.4),
                day: Hsl::new(0.58, 0.7, 0.8),
            },
        }
    }
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            count: 15,
            speed_factor: 5.0,
            spin_rate: 0.02,
            max_distance: 450.0,
            spawn_extent: 400.0,
            min_altitude: 60.0,
            max_altitude: 140.0,
        }
    }
}

impl Default for StarConfig {
    fn default() -> Self {
        Self {
            count: 2000,
            base_distance: 400.0,
            depth: 100.0,
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            walk_speed: 50.0,
            damping: 10.0,
            radius: 0.5,
            ground_height: 1.7,
            jump_strength: 8.0,
            gravity: -20.0,
            escape_margin: 0.6,
            escape_step: 0.5,
        }
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            ground_size: 500.0,
            seed: 0x5eed,
        }
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            music_tracks: vec![
                "assets/theme.mp3".to_string(),
                "assets/theme2.mp3".to_string(),
            ],
            music_volume: 0.3,
            looping: true,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            show_colliders: false,
            log_level: "info".to_string(),
        }
    }
}

/// Platform config directory for plaza, e.g. `~/.config/plaza` on Linux.
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("plaza")
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let config = Self::read(&config_path)?;
            info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(|source| ConfigError::Write {
            path: config_dir.to_path_buf(),
            source,
        })?;

        let config_path = config_dir.join(CONFIG_FILE);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized = ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::Serialize)?;

        std::fs::write(&config_path, serialized).map_err(|source| ConfigError::Write {
            path: config_path.clone(),
            source,
        })
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let new_config = Self::read(&config_dir.join(CONFIG_FILE))?;

        if &new_config != self {
            info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sky.day_duration_seconds.is_nan() || self.sky.day_duration_seconds <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "sky.day_duration_seconds",
                reason: "must be positive",
            });
        }
        if !(0.0..1.0).contains(&self.sky.start_time_of_day) {
            return Err(ConfigError::Invalid {
                field: "sky.start_time_of_day",
                reason: "must be in [0, 1)",
            });
        }
        if self.clouds.max_altitude < self.clouds.min_altitude {
            return Err(ConfigError::Invalid {
                field: "clouds.max_altitude",
                reason: "must not be below clouds.min_altitude",
            });
        }
        if self.clouds.spawn_extent > self.clouds.max_distance {
            return Err(ConfigError::Invalid {
                field: "clouds.spawn_extent",
                reason: "must not exceed clouds.max_distance",
            });
        }
        if self.player.radius < 0.0 {
            return Err(ConfigError::Invalid {
                field: "player.radius",
                reason: "must not be negative",
            });
        }
        Ok(())
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = ron::from_str(&contents).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }
}
