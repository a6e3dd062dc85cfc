//! Frame-coherent keyboard state tracker.
//!
//! [`KeyboardState`] accumulates key events during a frame and answers, for
//! any key code, whether it is held, was just pressed, or was just released.
//! Physical key codes are used so WASD sits under the same fingers on every
//! layout; keys the platform cannot identify are dropped.

use std::collections::HashSet;

use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Platform-independent key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawKeyEvent {
    pub code: KeyCode,
    pub pressed: bool,
    /// Auto-repeat events are ignored.
    pub repeat: bool,
}

impl RawKeyEvent {
    pub fn press(code: KeyCode) -> Self {
        Self {
            code,
            pressed: true,
            repeat: false,
        }
    }

    pub fn release(code: KeyCode) -> Self {
        Self {
            code,
            pressed: false,
            repeat: false,
        }
    }
}

/// Held keys plus this frame's press/release edges.
///
/// Feed events with [`process_event`](Self::process_event) or
/// [`process_raw`](Self::process_raw), read state, then call
/// [`end_frame`](Self::end_frame).
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    held: HashSet<KeyCode>,
    pressed_this_frame: HashSet<KeyCode>,
    released_this_frame: HashSet<KeyCode>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a winit key event.
    pub fn process_event(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(code) = event.physical_key {
            self.process_raw(RawKeyEvent {
                code,
                pressed: event.state == ElementState::Pressed,
                repeat: event.repeat,
            });
        }
    }

    pub fn process_raw(&mut self, event: RawKeyEvent) {
        if event.repeat {
            return;
        }
        if event.pressed {
            // A press for a key already held (focus loss, missed release) is not a new edge.
            if self.held.insert(event.code) {
                self.pressed_this_frame.insert(event.code);
            }
        } else if self.held.remove(&event.code) {
            self.released_this_frame.insert(event.code);
        }
    }

    #[must_use]
    pub fn is_held(&self, code: KeyCode) -> bool {
        self.held.contains(&code)
    }

    #[must_use]
    pub fn just_pressed(&self, code: KeyCode) -> bool {
        self.pressed_this_frame.contains(&code)
    }

    #[must_use]
    pub fn just_released(&self, code: KeyCode) -> bool {
        self.released_this_frame.contains(&code)
    }

    /// True if any key went down this frame.
    #[must_use]
    pub fn any_just_pressed(&self) -> bool {
        !self.pressed_this_frame.is_empty()
    }

    /// Release everything, e.g. when the window loses focus.
    pub fn release_all(&mut self) {
        self.released_this_frame.extend(self.held.drain());
    }

    /// Clear this frame's edges. Call once at the end of every frame.
    pub fn end_frame(&mut self) {
        self.pressed_this_frame.clear();
        self.released_this_frame.clear();
    }
}
