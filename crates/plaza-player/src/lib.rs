//! First-person walking: damped horizontal motion, box sliding, collision
//! escape and a gravity jump arc.

pub mod movement;

pub use movement::{MovementController, PlayerKinematics};
