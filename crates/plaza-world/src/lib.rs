//! The plaza world: placed props, their collision boxes, lantern lights and music.
//!
//! Asset decoding stays outside this crate. A [`PropLoader`] hands back a
//! ready handle (or an error) for each prop name, and the world records
//! where it went and what it collides with.

pub mod audio;
pub mod collision;
pub mod error;
pub mod props;
pub mod world;

pub use audio::MusicPlaylist;
pub use collision::{CollisionBox, CollisionDebugInfo, CollisionIndex, CollisionQuery};
pub use error::AssetError;
pub use props::{FallbackMaterial, PropKind, PropPlacement, default_layout, fallback_material};
pub use world::{HeadlessLoader, LanternLight, LoadedProp, PlacedProp, PropHandle, PropLoader, World};
