//! Ground-plane collision boxes.
//!
//! Every prop collides as an axis-aligned rectangle on (x, z) no matter what
//! its mesh looks like. Queries expand each rectangle by the caller's radius
//! and are inclusive on the boundary. When boxes overlap, the first one added
//! wins.

use glam::{Vec2, Vec3};
use serde::Serialize;

/// An immutable collision rectangle for one placed prop.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CollisionBox {
    pub name: String,
    /// Center on the ground plane as (x, z).
    pub center: Vec2,
    /// Full (width, height, depth) of the box.
    pub size: Vec3,
}

impl CollisionBox {
    pub fn new(name: impl Into<String>, center: Vec2, size: Vec3) -> Self {
        Self {
            name: name.into(),
            center,
            size,
        }
    }

    /// Half of (width, depth).
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.size.x * 0.5, self.size.z * 0.5)
    }

    /// Whether (x, z) lies inside the box grown by `radius` on every side.
    pub fn contains(&self, x: f32, z: f32, radius: f32) -> bool {
        let half = self.half_extents() + Vec2::splat(radius);
        x >= self.center.x - half.x
            && x <= self.center.x + half.x
            && z >= self.center.y - half.y
            && z <= self.center.y + half.y
    }
}

/// Read-only collision queries used by the movement controller.
pub trait CollisionQuery {
    /// True if (x, z) is inside any box expanded by `radius`.
    fn check_collision(&self, x: f32, z: f32, radius: f32) -> bool {
        self.colliding_box(x, z, radius).is_some()
    }

    /// The first box, in insertion order, containing (x, z) expanded by `radius`.
    fn colliding_box(&self, x: f32, z: f32, radius: f32) -> Option<&CollisionBox>;
}

/// Append-only list of collision boxes.
#[derive(Clone, Debug, Default)]
pub struct CollisionIndex {
    boxes: Vec<CollisionBox>,
}

impl CollisionIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, collision_box: CollisionBox) {
        self.boxes.push(collision_box);
    }

    pub fn boxes(&self) -> &[CollisionBox] {
        &self.boxes
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    pub fn debug_info(&self) -> CollisionDebugInfo {
        CollisionDebugInfo {
            total_objects: self.boxes.len(),
            objects: self.boxes.clone(),
        }
    }
}

impl CollisionQuery for CollisionIndex {
    fn colliding_box(&self, x: f32, z: f32, radius: f32) -> Option<&CollisionBox> {
        self.boxes.iter().find(|b| b.contains(x, z, radius))
    }
}

/// Snapshot of the collision set for debug overlays and logs.
#[derive(Clone, Debug, Serialize)]
pub struct CollisionDebugInfo {
    pub total_objects: usize,
    pub objects: Vec<CollisionBox>,
}
