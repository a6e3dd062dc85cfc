//! Multi-day runs of a full session, checking properties that span crates.

use std::f64::consts::TAU;

use plaza_app::{FIXED_DT, GameLoop, Simulation};
use plaza_config::Config;
use plaza_input::{KeyCode, RawKeyEvent};
use plaza_world::{CollisionQuery, HeadlessLoader, default_layout};

fn session(config: &Config) -> Simulation {
    let mut sim = Simulation::new(config);
    sim.populate(&default_layout(), &mut HeadlessLoader::default());
    sim
}

#[test]
fn test_three_days_hold_sky_invariants() {
    let config = Config::default();
    let mut sim = session(&config);
    let mut game_loop = GameLoop::new();
    let days = 3.0 * config.sky.day_duration_seconds;

    while game_loop.total_sim_time() < days {
        game_loop.advance(FIXED_DT, |dt, _| {
            let snap = sim.tick(dt);
            assert!((0.0..1.0).contains(&snap.day_time), "day_time {}", snap.day_time);

            let sun_height = (snap.day_time * TAU).sin() as f32;
            assert!((snap.sun.height - sun_height).abs() < 1e-5);
            assert!(
                (snap.moon.height + snap.sun.height).abs() < 1e-5,
                "moon must stay antipodal"
            );
            assert!(snap.lighting.ambient_intensity >= 0.05);
            assert!(snap.lighting.sun_intensity >= 0.0);
            assert!(snap.lighting.moon_intensity >= 0.0);
            if snap.moon.height <= 0.0 {
                assert_eq!(snap.lighting.moon_intensity, 0.0);
            }

            let expected_stars = (1.0 - sun_height.max(0.0) * 2.0).max(0.0);
            assert!((snap.star_opacity - expected_stars).abs() < 1e-5);
            assert_eq!(snap.stars_visible, snap.star_opacity > 0.1);

            for cloud in snap.clouds {
                assert!(cloud.position.x.abs() <= 450.0);
                assert!(cloud.position.z.abs() <= 450.0);
            }
        });
    }

    assert!(game_loop.update_count() >= 3 * 3600);
}

#[test]
fn test_same_seed_same_sky() {
    let config = Config::default();
    let mut a = session(&config);
    let mut b = session(&config);
    for _ in 0..600 {
        a.tick(FIXED_DT);
        b.tick(FIXED_DT);
    }
    let (sa, sb) = (a.snapshot(), b.snapshot());
    for (ca, cb) in sa.clouds.iter().zip(sb.clouds) {
        assert_eq!(ca.position, cb.position);
    }
    assert_eq!(a.stars().stars()[0].position, b.stars().stars()[0].position);
    for (la, lb) in sa.lanterns.iter().zip(sb.lanterns) {
        assert_eq!(la.intensity, lb.intensity);
    }
}

#[test]
fn test_walking_into_fountain_slides_without_entering() {
    let config = Config::default();
    let mut sim = session(&config);
    // Fountain occupies x, z in [6, 14]; start on its +z side and walk forward (-z).
    sim.movement_mut().teleport(8.0, 20.0);
    sim.keyboard_mut().process_raw(RawKeyEvent::press(KeyCode::KeyW));

    let radius = config.player.radius;
    for _ in 0..240 {
        let snap = sim.tick(FIXED_DT);
        let p = snap.player.position;
        assert!(
            !sim.world().check_collision(p.x, p.z, radius),
            "player entered geometry at ({}, {})",
            p.x,
            p.z
        );
    }
    let p = sim.movement().position();
    assert!(p.z >= 14.5, "stopped at the fountain edge, z = {}", p.z);
    assert!(p.z < 20.0, "moved forward");
}

#[test]
fn test_jump_lands_during_full_session() {
    let config = Config::default();
    let mut sim = session(&config);
    sim.keyboard_mut().process_raw(RawKeyEvent::press(KeyCode::Space));
    sim.tick(FIXED_DT);
    sim.keyboard_mut().process_raw(RawKeyEvent::release(KeyCode::Space));

    let mut landed_after = None;
    for frame in 0..120 {
        let snap = sim.tick(FIXED_DT);
        if snap.player.grounded {
            landed_after = Some(frame);
            break;
        }
    }
    assert!(landed_after.is_some(), "player never landed");
    assert_eq!(sim.movement().position().y, config.player.ground_height);
}

#[test]
fn test_custom_day_length() {
    let mut config = Config::default();
    config.sky.day_duration_seconds = 4.0;
    config.clouds.count = 3;
    config.stars.count = 50;
    let mut sim = session(&config);
    let mut game_loop = GameLoop::new();
    while game_loop.total_sim_time() < 3.0 {
        game_loop.advance(FIXED_DT, |dt, _| {
            sim.tick(dt);
        });
    }
    // Three quarters of a day: midnight.
    assert!((sim.sky().sun_height() + 1.0).abs() < 1e-3);
    assert_eq!(sim.clouds().len(), 3);
    assert_eq!(sim.stars().stars().len(), 50);
    assert!(sim.snapshot().stars_visible);
}
