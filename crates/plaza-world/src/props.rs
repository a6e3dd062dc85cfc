//! Prop kinds, their collision footprints, and the default plaza layout.

use glam::Vec3;
use plaza_math::Rgb;

/// What a prop is, decided by substring match on its asset name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PropKind {
    Fountain,
    Lantern,
    Tree,
    Windmill,
    Stall,
    Other,
}

impl PropKind {
    /// Name fragments checked in order; the first contained fragment wins.
    const MATCHERS: [(&'static str, PropKind); 5] = [
        ("fountain-round", PropKind::Fountain),
        ("lantern", PropKind::Lantern),
        ("tree-high", PropKind::Tree),
        ("windmill", PropKind::Windmill),
        ("stall-red", PropKind::Stall),
    ];

    pub fn from_name(name: &str) -> Self {
        Self::MATCHERS
            .iter()
            .find(|(fragment, _)| name.contains(fragment))
            .map_or(PropKind::Other, |&(_, kind)| kind)
    }

    /// Unscaled (width, height, depth) of the collision box.
    pub fn collision_size(self) -> Vec3 {
        match self {
            PropKind::Fountain => Vec3::new(4.0, 2.0, 4.0),
            PropKind::Lantern => Vec3::new(1.5, 4.0, 1.5),
            PropKind::Tree => Vec3::new(3.0, 8.0, 3.0),
            PropKind::Windmill => Vec3::new(4.0, 10.0, 4.0),
            PropKind::Stall => Vec3::new(3.0, 3.0, 2.0),
            PropKind::Other => Vec3::new(2.0, 2.0, 2.0),
        }
    }
}

/// One entry of a layout: which asset goes where, at what uniform scale.
#[derive(Clone, Debug, PartialEq)]
pub struct PropPlacement {
    pub name: String,
    pub position: Vec3,
    pub scale: f32,
}

impl PropPlacement {
    pub fn new(name: &str, position: Vec3, scale: f32) -> Self {
        Self {
            name: name.to_string(),
            position,
            scale,
        }
    }
}

/// The shipped plaza: a fountain, a row of five lanterns, a tree, a windmill
/// and a market stall.
pub fn default_layout() -> Vec<PropPlacement> {
    let mut layout = vec![PropPlacement::new("fountain-round", Vec3::new(10.0, 0.0, 10.0), 2.0)];
    layout.extend(
        [-20.0, -12.0, -4.0, 4.0, 12.0]
            .into_iter()
            .map(|x| PropPlacement::new("lantern", Vec3::new(x, 0.0, 0.0), 3.0)),
    );
    layout.extend([
        PropPlacement::new("tree-high", Vec3::new(15.0, 0.0, -8.0), 1.8),
        PropPlacement::new("windmill", Vec3::new(-12.0, 5.0, -15.0), 2.5),
        PropPlacement::new("stall-red", Vec3::new(5.0, 0.0, -5.0), 1.2),
    ]);
    layout
}

/// Plain surface parameters for props whose material library failed to load.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FallbackMaterial {
    pub color: Rgb,
    pub roughness: f32,
    pub metalness: f32,
}

const MATERIAL_TABLE: [(&str, u32, f32, f32); 9] = [
    ("fountain", 0x87CEEB, 0.1, 0.8),
    ("lantern", 0xFFD700, 0.3, 0.9),
    ("tree", 0x228B22, 0.9, 0.0),
    ("windmill", 0x8B4513, 0.7, 0.1),
    ("stall", 0xDC143C, 0.6, 0.2),
    ("wall", 0x696969, 0.8, 0.0),
    ("roof", 0x8B0000, 0.7, 0.0),
    ("wood", 0x8B4513, 0.8, 0.0),
    ("stone", 0x708090, 0.9, 0.0),
];

/// Fallback material by case-insensitive substring match, grey if nothing matches.
pub fn fallback_material(name: &str) -> FallbackMaterial {
    let lower = name.to_lowercase();
    let (color, roughness, metalness) = MATERIAL_TABLE
        .iter()
        .find(|(fragment, ..)| lower.contains(fragment))
        .map_or((0x888888, 0.7, 0.1), |&(_, color, roughness, metalness)| {
            (color, roughness, metalness)
        });
    FallbackMaterial {
        color: Rgb::from_hex(color),
        roughness,
        metalness,
    }
}
