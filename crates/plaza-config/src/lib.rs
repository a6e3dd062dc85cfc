//! Configuration for the plaza walking simulation.
//!
//! Every tunable the simulation uses (day length, orbit radius, light
//! intensities, color keyframes, cloud and star counts, walk and jump
//! constants) is a field here with a default matching the shipped scene.
//! Settings persist as RON and can be overridden from the command line.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    AudioConfig, CloudConfig, ColorKeyframes, Config, DebugConfig, LightingConfig, PlayerConfig,
    SkyConfig, StarConfig, WorldConfig, default_config_dir,
};
pub use error::ConfigError;
