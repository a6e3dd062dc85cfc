//! Collision-aware first-person movement controller.
//!
//! Horizontal velocity lives in the camera frame: `velocity.x` is strafe and
//! `velocity.y` is forward/back, both with the sign convention that a held
//! key drives the component negative and the displacement for a frame is
//! `-velocity * delta` along the matching camera axis. Each axis is tested
//! against the collision set on its own, which gives sliding along walls.

use glam::{Quat, Vec2, Vec3};
use plaza_config::PlayerConfig;
use plaza_input::MoveIntent;
use plaza_world::CollisionQuery;
use tracing::{debug, warn};

/// Fixed escape offsets tried from the current position when the primary
/// escape point is also blocked. Scaled by `escape_step`.
const FALLBACK_OFFSETS: [Vec2; 4] = [
    Vec2::new(1.0, 0.0),
    Vec2::new(-1.0, 0.0),
    Vec2::new(0.0, 1.0),
    Vec2::new(0.0, -1.0),
];

/// Everything the controller mutates per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayerKinematics {
    /// Eye position; `y` is the current height.
    pub position: Vec3,
    pub vertical_velocity: f32,
    pub grounded: bool,
    /// Camera-frame velocity as (strafe, forward).
    pub velocity: Vec2,
    pub intent: MoveIntent,
}

impl PlayerKinematics {
    /// Standing still on the ground at (x, z).
    pub fn standing_at(x: f32, z: f32, ground_height: f32) -> Self {
        Self {
            position: Vec3::new(x, ground_height, z),
            vertical_velocity: 0.0,
            grounded: true,
            velocity: Vec2::ZERO,
            intent: MoveIntent::default(),
        }
    }
}

/// Owns the player's kinematic state and advances it once per frame.
#[derive(Clone, Debug)]
pub struct MovementController {
    config: PlayerConfig,
    state: PlayerKinematics,
    /// Horizontal look angle in radians. Zero looks down -Z with +X to the right.
    pub yaw: f32,
    /// An inactive controller (pointer not captured) ignores `update`.
    pub active: bool,
    stuck: bool,
}

impl MovementController {
    /// A controller standing at the origin.
    pub fn new(config: &PlayerConfig) -> Self {
        Self {
            config: config.clone(),
            state: PlayerKinematics::standing_at(0.0, 0.0, config.ground_height),
            yaw: 0.0,
            active: true,
            stuck: false,
        }
    }

    pub fn state(&self) -> &PlayerKinematics {
        &self.state
    }

    pub fn position(&self) -> Vec3 {
        self.state.position
    }

    /// Move to (x, z) without any collision check, e.g. a respawn.
    pub fn teleport(&mut self, x: f32, z: f32) {
        self.state.position.x = x;
        self.state.position.z = z;
    }

    pub fn set_intent(&mut self, intent: MoveIntent) {
        self.state.intent = intent;
    }

    /// Start a jump. Ignored while airborne.
    pub fn jump(&mut self) {
        if self.state.grounded {
            self.state.vertical_velocity = self.config.jump_strength;
            self.state.grounded = false;
        }
    }

    /// Horizontal forward and right unit vectors for the current yaw.
    pub fn basis(&self) -> (Vec3, Vec3) {
        let rotation = Quat::from_rotation_y(-self.yaw);
        let forward = rotation * Vec3::NEG_Z;
        let right = rotation * Vec3::X;
        (
            Vec3::new(forward.x, 0.0, forward.z).normalize_or_zero(),
            Vec3::new(right.x, 0.0, right.z).normalize_or_zero(),
        )
    }

    /// Advance one frame.
    ///
    /// With `collisions` set to `None` motion is unconstrained. A `delta` of
    /// zero or less leaves the state untouched, collision escape included.
    pub fn update(&mut self, delta: f32, collisions: Option<&dyn CollisionQuery>) {
        if !self.active || delta <= 0.0 {
            return;
        }

        let PlayerConfig {
            walk_speed,
            damping,
            radius,
            ..
        } = self.config;

        self.state.velocity -= self.state.velocity * damping * delta;

        let intent = self.state.intent;
        let direction = Vec2::new(
            axis(intent.right, intent.left),
            axis(intent.forward, intent.back),
        )
        .normalize_or_zero();
        if intent.left || intent.right {
            self.state.velocity.x -= direction.x * walk_speed * delta;
        }
        if intent.forward || intent.back {
            self.state.velocity.y -= direction.y * walk_speed * delta;
        }

        let (forward, right) = self.basis();
        let strafe_step = horizontal(right * (-self.state.velocity.x * delta));
        let forward_step = horizontal(forward * (-self.state.velocity.y * delta));
        let current = horizontal(self.state.position);

        match collisions {
            None => self.shift(strafe_step + forward_step),
            Some(query) if query.check_collision(current.x, current.y, radius) => {
                self.escape_from_collision(query);
            }
            Some(query) => {
                self.stuck = false;
                let mut step = Vec2::ZERO;
                let strafe_target = current + strafe_step;
                if query.check_collision(strafe_target.x, strafe_target.y, radius) {
                    self.state.velocity.x = 0.0;
                } else {
                    step += strafe_step;
                }
                let forward_target = current + forward_step;
                if query.check_collision(forward_target.x, forward_target.y, radius) {
                    self.state.velocity.y = 0.0;
                } else {
                    step += forward_step;
                }
                self.shift(step);
            }
        }

        self.integrate_jump(delta);
    }

    /// Push the player out of the box it currently overlaps.
    ///
    /// The primary target sits on the line from the box center through the
    /// player, just past the larger half-extent plus `escape_margin`. If that
    /// is blocked, four offsets of `escape_step` from the current position are
    /// tried in order. When nothing is free the player stays put.
    pub fn escape_from_collision(&mut self, collisions: &dyn CollisionQuery) {
        let radius = self.config.radius;
        let current = horizontal(self.state.position);
        let Some(hit) = collisions.colliding_box(current.x, current.y, radius) else {
            return;
        };

        let away = current - hit.center;
        let direction = if away.length_squared() > 0.0 {
            away.normalize()
        } else {
            Vec2::X
        };
        let half = hit.half_extents();
        let distance = half.x.max(half.y) + self.config.escape_margin;
        let target = hit.center + direction * distance;

        debug!(
            collider = %hit.name,
            x = current.x,
            z = current.y,
            "Escaping collision"
        );

        if !collisions.check_collision(target.x, target.y, radius) {
            self.place(target);
            self.stuck = false;
            return;
        }

        let fallback = FALLBACK_OFFSETS
            .iter()
            .map(|&offset| current + offset * self.config.escape_step)
            .find(|candidate| !collisions.check_collision(candidate.x, candidate.y, radius));

        match fallback {
            Some(candidate) => {
                self.place(candidate);
                self.stuck = false;
            }
            None => {
                if !self.stuck {
                    warn!(x = current.x, z = current.y, "Player stuck inside collision geometry");
                }
                self.stuck = true;
            }
        }
    }

    fn integrate_jump(&mut self, delta: f32) {
        if !self.state.grounded {
            self.state.vertical_velocity += self.config.gravity * delta;
        }
        self.state.position.y += self.state.vertical_velocity * delta;
        if self.state.position.y <= self.config.ground_height {
            self.state.position.y = self.config.ground_height;
            self.state.vertical_velocity = 0.0;
            self.state.grounded = true;
        }
    }

    fn shift(&mut self, step: Vec2) {
        self.state.position.x += step.x;
        self.state.position.z += step.y;
    }

    fn place(&mut self, at: Vec2) {
        self.state.position.x = at.x;
        self.state.position.z = at.y;
    }
}

fn axis(positive: bool, negative: bool) -> f32 {
    f32::from(u8::from(positive)) - f32::from(u8::from(negative))
}

/// (x, z) of a world-space vector.
fn horizontal(v: Vec3) -> Vec2 {
    Vec2::new(v.x, v.z)
}
