//! Command-line argument parsing for the plaza simulation.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Headless run length when `--seconds` is not given.
const DEFAULT_RUN_SECONDS: f64 = 120.0;

/// Plaza command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "plaza", about = "Plaza walking simulation")]
pub struct CliArgs {
    /// Real-time seconds per in-game day.
    #[arg(long)]
    pub day_duration: Option<f64>,

    /// Number of clouds.
    #[arg(long)]
    pub clouds: Option<usize>,

    /// Number of stars.
    #[arg(long)]
    pub stars: Option<usize>,

    /// Seed for clouds, stars and lantern flicker.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Simulated seconds to run before exiting.
    #[arg(long, default_value_t = DEFAULT_RUN_SECONDS)]
    pub seconds: f64,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            day_duration: None,
            clouds: None,
            stars: None,
            seed: None,
            seconds: DEFAULT_RUN_SECONDS,
            log_level: None,
            config: None,
        }
    }
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(duration) = args.day_duration {
            self.sky.day_duration_seconds = duration;
        }
        if let Some(count) = args.clouds {
            self.clouds.count = count;
        }
        if let Some(count) = args.stars {
            self.stars.count = count;
        }
        if let Some(seed) = args.seed {
            self.world.seed = seed;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
