//! One plaza session: input, movement, world animation and sky, ticked in a
//! fixed order.

use plaza_config::Config;
use plaza_input::{InputMap, KeyboardState};
use plaza_player::{MovementController, PlayerKinematics};
use plaza_sky::{CelestialBody, Cloud, CloudField, LightingState, SkyCycle, StarField};
use plaza_world::{
    CollisionQuery, LanternLight, MusicPlaylist, PropLoader, PropPlacement, World,
};
use tracing::trace;

/// Seed offsets so stars and clouds do not share the world's random stream.
const STAR_SEED_OFFSET: u64 = 1;
const CLOUD_SEED_OFFSET: u64 = 2;

/// Everything a renderer binds after a tick.
#[derive(Clone, Copy, Debug)]
pub struct FrameSnapshot<'a> {
    pub frame: u64,
    pub elapsed_seconds: f64,
    pub day_time: f64,
    pub player: PlayerKinematics,
    /// Side length of the square ground plane.
    pub ground_size: f32,
    pub sun: CelestialBody,
    pub moon: CelestialBody,
    pub lighting: LightingState,
    pub star_opacity: f32,
    pub stars_visible: bool,
    pub clouds: &'a [Cloud],
    pub lanterns: &'a [LanternLight],
    /// Blade rotation of the windmill, if one was placed.
    pub windmill_rotation: Option<f32>,
}

/// Owns every per-frame component of a session.
pub struct Simulation {
    keyboard: KeyboardState,
    input_map: InputMap,
    movement: MovementController,
    world: World,
    playlist: MusicPlaylist,
    sky: SkyCycle,
    stars: StarField,
    clouds: CloudField,
    elapsed_seconds: f64,
    frame: u64,
}

impl Simulation {
    /// Build a session with an empty world. Call [`populate`](Self::populate)
    /// to place props.
    pub fn new(config: &Config) -> Self {
        let seed = config.world.seed;
        Self {
            keyboard: KeyboardState::new(),
            input_map: InputMap::default(),
            movement: MovementController::new(&config.player),
            world: World::new(&config.world),
            playlist: MusicPlaylist::new(&config.audio),
            sky: SkyCycle::new(&config.sky, &config.lighting),
            stars: StarField::new(&config.stars, seed.wrapping_add(STAR_SEED_OFFSET)),
            clouds: CloudField::new(&config.clouds, seed.wrapping_add(CLOUD_SEED_OFFSET)),
            elapsed_seconds: 0.0,
            frame: 0,
        }
    }

    pub fn populate(&mut self, layout: &[PropPlacement], loader: &mut dyn PropLoader) -> usize {
        self.world.populate(layout, loader)
    }

    /// Advance every component by `delta` seconds.
    ///
    /// Order: input, movement, world, sky, stars, clouds. Stars and clouds
    /// read the sky values of this same tick.
    pub fn tick(&mut self, delta: f64) -> FrameSnapshot<'_> {
        let dt = delta as f32;

        let input = self.input_map.resolve(&self.keyboard);
        if input.interacted {
            self.playlist.notify_interaction();
        }
        if input.next_track {
            self.playlist.next_track();
        }
        self.movement.set_intent(input.intent);
        if input.jump {
            self.movement.jump();
        }
        self.keyboard.end_frame();

        let collisions: &dyn CollisionQuery = &self.world;
        self.movement.update(dt, Some(collisions));

        self.elapsed_seconds += delta;
        self.frame += 1;
        self.world.update(dt, self.elapsed_seconds);

        self.sky.update(delta);
        self.stars.update(self.sky.day_intensity());
        self.clouds.update(dt, self.sky.day_time());

        trace!(frame = self.frame, day_time = self.sky.day_time(), "Tick");

        self.snapshot()
    }

    /// Current state without advancing.
    pub fn snapshot(&self) -> FrameSnapshot<'_> {
        FrameSnapshot {
            frame: self.frame,
            elapsed_seconds: self.elapsed_seconds,
            day_time: self.sky.day_time(),
            player: *self.movement.state(),
            ground_size: self.world.ground_size(),
            sun: *self.sky.sun(),
            moon: *self.sky.moon(),
            lighting: *self.sky.lighting(),
            star_opacity: self.stars.opacity(),
            stars_visible: self.stars.visible(),
            clouds: self.clouds.clouds(),
            lanterns: self.world.lantern_lights(),
            windmill_rotation: self.world.windmill().map(|prop| prop.rotation.x),
        }
    }

    /// Feed key events here between ticks.
    pub fn keyboard_mut(&mut self) -> &mut KeyboardState {
        &mut self.keyboard
    }

    pub fn input_map_mut(&mut self) -> &mut InputMap {
        &mut self.input_map
    }

    pub fn movement(&self) -> &MovementController {
        &self.movement
    }

    pub fn movement_mut(&mut self) -> &mut MovementController {
        &mut self.movement
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn playlist(&self) -> &MusicPlaylist {
        &self.playlist
    }

    pub fn sky(&self) -> &SkyCycle {
        &self.sky
    }

    pub fn stars(&self) -> &StarField {
        &self.stars
    }

    pub fn clouds(&self) -> &CloudField {
        &self.clouds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plaza_input::{KeyCode, RawKeyEvent};
    use plaza_world::{HeadlessLoader, default_layout};

    fn session() -> Simulation {
        let mut sim = Simulation::new(&Config::default());
        sim.populate(&default_layout(), &mut HeadlessLoader::default());
        sim
    }

    #[test]
    fn test_new_session_starts_at_sunrise() {
        let sim = session();
        let snap = sim.snapshot();
        assert_eq!(snap.frame, 0);
        assert_eq!(snap.day_time, 0.0);
        assert_eq!(snap.star_opacity, 0.0);
        assert!(!snap.stars_visible);
        assert_eq!(snap.clouds.len(), 15);
        assert_eq!(snap.lanterns.len(), 5);
        assert_eq!(snap.windmill_rotation, Some(0.0));
        assert_eq!(snap.ground_size, 500.0);
    }

    #[test]
    fn test_tick_advances_everything() {
        let mut sim = session();
        let snap = sim.tick(5.0);
        assert_eq!(snap.frame, 1);
        assert!((snap.day_time - 5.0 / 60.0).abs() < 1e-12);
        assert!((snap.windmill_rotation.unwrap_or_default() - 2.5).abs() < 1e-6);
        assert!(snap.clouds.iter().all(|c| c.opacity == 0.9), "daytime clouds");
    }

    #[test]
    fn test_stars_follow_same_tick_sky() {
        let mut sim = session();
        sim.tick(45.0);
        let snap = sim.snapshot();
        let expected = (1.0 - sim.sky().day_intensity() * 2.0).max(0.0);
        assert_eq!(snap.star_opacity, expected);
        assert!(snap.stars_visible);
    }

    #[test]
    fn test_key_press_starts_music_and_walks() {
        let mut sim = session();
        assert!(!sim.playlist().is_playing());
        sim.keyboard_mut().process_raw(RawKeyEvent::press(KeyCode::KeyS));
        for _ in 0..30 {
            sim.tick(1.0 / 60.0);
        }
        assert!(sim.playlist().is_playing());
        assert!(sim.movement().position().z > 0.5, "S walks backwards (+z)");
    }

    #[test]
    fn test_digit1_switches_track_once() {
        let mut sim = session();
        sim.keyboard_mut().process_raw(RawKeyEvent::press(KeyCode::Digit1));
        sim.tick(1.0 / 60.0);
        sim.tick(1.0 / 60.0);
        assert_eq!(sim.playlist().current_index(), 1);
    }

    #[test]
    fn test_space_jumps() {
        let mut sim = session();
        sim.keyboard_mut().process_raw(RawKeyEvent::press(KeyCode::Space));
        let snap = sim.tick(1.0 / 60.0);
        assert!(!snap.player.grounded);
        assert!(snap.player.position.y > 1.7);
    }

    #[test]
    fn test_zero_delta_tick_keeps_environment() {
        let mut sim = session();
        sim.tick(10.0);
        let before = sim.snapshot();
        let (day_time, lighting, sun, player) =
            (before.day_time, before.lighting, before.sun, before.player);
        let clouds: Vec<_> = before.clouds.iter().map(|c| c.position).collect();

        let after = sim.tick(0.0);
        assert_eq!(after.day_time, day_time);
        assert_eq!(after.lighting, lighting);
        assert_eq!(after.sun, sun);
        assert_eq!(after.player, player);
        let moved: Vec<_> = after.clouds.iter().map(|c| c.position).collect();
        assert_eq!(moved, clouds);
    }
}
