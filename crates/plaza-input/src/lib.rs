//! Keyboard state and the key bindings that drive the walker.

pub mod action;
pub mod keyboard;

pub use action::{Action, FrameInput, InputMap, MoveIntent};
pub use keyboard::{KeyboardState, RawKeyEvent};
pub use winit::keyboard::KeyCode;
