//! Headless plaza runner.
//!
//! Loads `config.ron`, places the default plaza, and runs the simulation at
//! a fixed 60 Hz for `--seconds` of simulated time, as fast as the machine
//! allows. A summary of the sky is logged every in-game quarter day.
//!
//! Run with: `cargo run -p plaza-app -- --seconds 240`

use clap::Parser;
use plaza_app::{FIXED_DT, GameLoop, Simulation};
use plaza_config::{CliArgs, Config, ConfigError, default_config_dir};
use plaza_world::{HeadlessLoader, default_layout};
use tracing::info;

const QUARTER_NAMES: [&str; 4] = ["sunrise", "noon", "sunset", "midnight"];

fn main() -> Result<(), ConfigError> {
    let args = CliArgs::parse();

    let config_dir = args.config.clone().unwrap_or_else(default_config_dir);
    let mut config = Config::load_or_create(&config_dir)?;
    config.apply_cli_overrides(&args);
    config.validate()?;

    plaza_log::init_logging(
        Some(&config_dir.join("logs")),
        cfg!(debug_assertions),
        Some(&config),
    );

    info!("Plaza headless run");
    info!("Config: {}", config_dir.display());
    info!(
        "Day: {:.0}s | Clouds: {} | Stars: {} | Seed: {}",
        config.sky.day_duration_seconds, config.clouds.count, config.stars.count, config.world.seed,
    );

    let mut sim = Simulation::new(&config);
    let placed = sim.populate(&default_layout(), &mut HeadlessLoader::default());
    let ground = sim.snapshot().ground_size;
    info!("Plaza: {placed} props on a {ground:.0}x{ground:.0} ground plane");

    if config.debug.show_colliders {
        let colliders = sim.world().collision_debug_info();
        info!("Colliders: {}", colliders.total_objects);
        for b in &colliders.objects {
            info!(
                "  {} at ({:.1}, {:.1}) size {:.1}x{:.1}",
                b.name, b.center.x, b.center.y, b.size.x, b.size.z
            );
        }
    }

    let mut game_loop = GameLoop::new();
    let mut last_quarter: Option<usize> = None;
    let mut day = 1u64;
    while game_loop.total_sim_time() < args.seconds {
        game_loop.advance(FIXED_DT, |dt, _| {
            let snap = sim.tick(dt);
            let quarter = ((snap.day_time * 4.0) as usize).min(3);
            if last_quarter != Some(quarter) {
                if last_quarter.is_some_and(|q| quarter < q) {
                    day += 1;
                }
                last_quarter = Some(quarter);
                info!(
                    "Day {} {}: sun {:.2} | sun light {:.2} | ambient {:.2} | moon light {:.2} | stars {:.2}",
                    day,
                    QUARTER_NAMES[quarter],
                    snap.sun.height,
                    snap.lighting.sun_intensity,
                    snap.lighting.ambient_intensity,
                    snap.lighting.moon_intensity,
                    snap.star_opacity,
                );
            }
        });
    }

    info!(
        "Finished: {} steps, {:.1}s simulated",
        game_loop.update_count(),
        game_loop.total_sim_time()
    );
    Ok(())
}
