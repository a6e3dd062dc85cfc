//! World population and per-frame prop animation.

use glam::{Vec2, Vec3};
use plaza_config::WorldConfig;
use plaza_math::Rgb;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, error, info};

use crate::collision::{CollisionBox, CollisionDebugInfo, CollisionIndex, CollisionQuery};
use crate::error::AssetError;
use crate::props::{FallbackMaterial, PropKind, PropPlacement, fallback_material};

const LANTERN_LIGHT_HEIGHT: f32 = 3.0;
const LANTERN_BASE_INTENSITY: f32 = 15.0;
const LANTERN_RANGE: f32 = 60.0;
const LANTERN_COLOR: u32 = 0xFFB366;
/// Phase offset between neighbouring lanterns, in milliseconds.
const LANTERN_PHASE_MS: f64 = 500.0;
const WINDMILL_SPIN_RATE: f32 = 0.5;

/// Opaque renderer-side handle for a loaded prop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PropHandle(pub u64);

/// What a loader hands back for one prop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoadedProp {
    pub handle: PropHandle,
    /// False when the mesh loaded but its material library did not.
    pub has_materials: bool,
}

/// Capability to turn a prop name into a ready-to-render handle.
pub trait PropLoader {
    fn load(&mut self, name: &str) -> Result<LoadedProp, AssetError>;
}

/// Loader for runs without a renderer: every prop loads, with materials.
#[derive(Debug, Default)]
pub struct HeadlessLoader {
    next_id: u64,
}

impl PropLoader for HeadlessLoader {
    fn load(&mut self, _name: &str) -> Result<LoadedProp, AssetError> {
        self.next_id += 1;
        Ok(LoadedProp {
            handle: PropHandle(self.next_id),
            has_materials: true,
        })
    }
}

/// A prop that made it into the world.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedProp {
    pub name: String,
    pub kind: PropKind,
    pub handle: PropHandle,
    pub position: Vec3,
    pub scale: f32,
    /// Euler rotation in radians; the windmill spins around x.
    pub rotation: Vec3,
    /// Set when the prop has to be drawn without its own materials.
    pub fallback_material: Option<FallbackMaterial>,
}

/// A flickering point light above a lantern.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LanternLight {
    pub position: Vec3,
    pub intensity: f32,
    pub range: f32,
    pub color: Rgb,
}

/// The static plaza and the few things in it that move.
pub struct World {
    ground_size: f32,
    collisions: CollisionIndex,
    props: Vec<PlacedProp>,
    lanterns: Vec<LanternLight>,
    windmill: Option<usize>,
    rng: ChaCha8Rng,
}

impl World {
    pub fn new(config: &WorldConfig) -> Self {
        Self {
            ground_size: config.ground_size,
            collisions: CollisionIndex::new(),
            props: Vec::new(),
            lanterns: Vec::new(),
            windmill: None,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
        }
    }

    /// Load and place every entry of `layout` in order.
    ///
    /// A prop whose load fails is logged and skipped: it gets no collision box
    /// and no light. Returns the number of props placed.
    pub fn populate(&mut self, layout: &[PropPlacement], loader: &mut dyn PropLoader) -> usize {
        let mut placed = 0;
        for placement in layout {
            match loader.load(&placement.name) {
                Ok(loaded) => {
                    self.place(placement, loaded);
                    placed += 1;
                }
                Err(err) => error!("Failed to load prop {}: {err}", placement.name),
            }
        }
        info!(
            placed,
            requested = layout.len(),
            colliders = self.collisions.len(),
            "World populated"
        );
        placed
    }

    /// Record a loaded prop, its collision box, and any light or animation it owns.
    pub fn place(&mut self, placement: &PropPlacement, loaded: LoadedProp) {
        let kind = PropKind::from_name(&placement.name);
        let size = kind.collision_size() * placement.scale;
        self.collisions.push(CollisionBox::new(
            placement.name.clone(),
            Vec2::new(placement.position.x, placement.position.z),
            size,
        ));

        match kind {
            PropKind::Lantern => self.lanterns.push(LanternLight {
                position: placement.position + Vec3::Y * LANTERN_LIGHT_HEIGHT,
                intensity: LANTERN_BASE_INTENSITY,
                range: LANTERN_RANGE,
                color: Rgb::from_hex(LANTERN_COLOR),
            }),
            PropKind::Windmill => self.windmill = Some(self.props.len()),
            _ => {}
        }

        debug!(
            name = %placement.name,
            x = placement.position.x,
            z = placement.position.z,
            scale = placement.scale,
            "Placed prop"
        );

        self.props.push(PlacedProp {
            name: placement.name.clone(),
            kind,
            handle: loaded.handle,
            position: placement.position,
            scale: placement.scale,
            rotation: Vec3::ZERO,
            fallback_material: (!loaded.has_materials).then(|| fallback_material(&placement.name)),
        });
    }

    /// Spin the windmill and flicker the lanterns.
    ///
    /// `elapsed_seconds` is total session time; lantern `i` runs on a sine of
    /// `(elapsed_ms + i * 500) * 0.003` with up to 1.0 of random jitter.
    pub fn update(&mut self, delta: f32, elapsed_seconds: f64) {
        if let Some(index) = self.windmill {
            self.props[index].rotation.x += delta * WINDMILL_SPIN_RATE;
        }

        let elapsed_ms = elapsed_seconds * 1000.0;
        for (i, light) in self.lanterns.iter_mut().enumerate() {
            let wave = ((elapsed_ms + i as f64 * LANTERN_PHASE_MS) * 0.003).sin() as f32;
            light.intensity = LANTERN_BASE_INTENSITY + wave * 2.0 + self.rng.random::<f32>();
        }
    }

    pub fn ground_size(&self) -> f32 {
        self.ground_size
    }

    pub fn collisions(&self) -> &CollisionIndex {
        &self.collisions
    }

    pub fn props(&self) -> &[PlacedProp] {
        &self.props
    }

    pub fn lantern_lights(&self) -> &[LanternLight] {
        &self.lanterns
    }

    pub fn windmill(&self) -> Option<&PlacedProp> {
        self.windmill.map(|index| &self.props[index])
    }

    pub fn collision_debug_info(&self) -> CollisionDebugInfo {
        self.collisions.debug_info()
    }
}

impl CollisionQuery for World {
    fn colliding_box(&self, x: f32, z: f32, radius: f32) -> Option<&CollisionBox> {
        self.collisions.colliding_box(x, z, radius)
    }
}
