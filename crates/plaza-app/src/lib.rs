//! Plaza application framework.
//!
//! Wires the sky, world, input and movement crates into one per-frame
//! simulation and drives it at a fixed rate.

pub mod game_loop;
pub mod simulation;

pub use game_loop::{FIXED_DT, GameLoop, MAX_FRAME_TIME};
pub use simulation::{FrameSnapshot, Simulation};
