//! Key bindings for the walker and per-frame resolution into intent.

use std::collections::HashMap;

use winit::keyboard::KeyCode;

use crate::keyboard::KeyboardState;

/// Everything the player can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveForward,
    MoveBack,
    MoveLeft,
    MoveRight,
    Jump,
    NextTrack,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::MoveForward,
        Action::MoveBack,
        Action::MoveLeft,
        Action::MoveRight,
        Action::Jump,
        Action::NextTrack,
    ];
}

/// Held-key movement flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveIntent {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
}

impl MoveIntent {
    pub fn any(&self) -> bool {
        self.forward || self.back || self.left || self.right
    }
}

/// One frame's worth of resolved input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub intent: MoveIntent,
    /// Jump went down this frame.
    pub jump: bool,
    /// Next-track went down this frame.
    pub next_track: bool,
    /// Any key at all went down this frame.
    pub interacted: bool,
}

/// Maps each action to the keys that trigger it.
#[derive(Debug, Clone, PartialEq)]
pub struct InputMap {
    bindings: HashMap<Action, Vec<KeyCode>>,
}

impl Default for InputMap {
    fn default() -> Self {
        let mut map = Self::empty();
        map.bind(Action::MoveForward, KeyCode::KeyW);
        map.bind(Action::MoveBack, KeyCode::KeyS);
        map.bind(Action::MoveLeft, KeyCode::KeyA);
        map.bind(Action::MoveRight, KeyCode::KeyD);
        map.bind(Action::Jump, KeyCode::Space);
        map.bind(Action::NextTrack, KeyCode::Digit1);
        map
    }
}

impl InputMap {
    /// A map with nothing bound.
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Add `key` as a trigger for `action`. Binding the same key twice is a no-op.
    pub fn bind(&mut self, action: Action, key: KeyCode) {
        let keys = self.bindings.entry(action).or_default();
        if !keys.contains(&key) {
            keys.push(key);
        }
    }

    /// Replace every binding of `action`.
    pub fn set_bindings(&mut self, action: Action, keys: Vec<KeyCode>) {
        self.bindings.insert(action, keys);
    }

    pub fn bindings(&self, action: Action) -> &[KeyCode] {
        self.bindings.get(&action).map_or(&[], Vec::as_slice)
    }

    /// True while any key bound to `action` is held.
    pub fn is_active(&self, action: Action, keyboard: &KeyboardState) -> bool {
        self.bindings(action).iter().any(|&key| keyboard.is_held(key))
    }

    /// True on the frame any key bound to `action` went down.
    pub fn just_activated(&self, action: Action, keyboard: &KeyboardState) -> bool {
        self.bindings(action).iter().any(|&key| keyboard.just_pressed(key))
    }

    /// Resolve the current keyboard into this frame's input.
    pub fn resolve(&self, keyboard: &KeyboardState) -> FrameInput {
        FrameInput {
            intent: MoveIntent {
                forward: self.is_active(Action::MoveForward, keyboard),
                back: self.is_active(Action::MoveBack, keyboard),
                left: self.is_active(Action::MoveLeft, keyboard),
                right: self.is_active(Action::MoveRight, keyboard),
            },
            jump: self.just_activated(Action::Jump, keyboard),
            next_track: self.just_activated(Action::NextTrack, keyboard),
            interacted: keyboard.any_just_pressed(),
        }
    }
}
