//! Keyboard input handling
//!
//! Keys are matched on `KeyboardEvent.code`, so layouts don't move them.

use std::collections::HashSet;

use fight_core::FighterIntent;
use web_sys::KeyboardEvent;

/// Key that restarts a finished match
pub const RESTART_CODE: &str = "Space";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Left,
    Right,
    Up,
    Attack,
    Special,
}

/// One fighter's control mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    pub left: String,
    pub right: String,
    pub up: String,
    pub attack: String,
    pub special: String,
}

impl KeyBindings {
    pub fn player_one() -> Self {
        Self {
            left: "KeyA".to_string(),
            right: "KeyD".to_string(),
            up: "KeyW".to_string(),
            attack: "KeyF".to_string(),
            special: "KeyR".to_string(),
        }
    }

    pub fn player_two() -> Self {
        Self {
            left: "ArrowLeft".to_string(),
            right: "ArrowRight".to_string(),
            up: "ArrowUp".to_string(),
            attack: "Slash".to_string(),
            special: "Period".to_string(),
        }
    }

    /// Default mapping for a fighter slot
    pub fn for_slot(slot: u8) -> Self {
        if slot == 0 {
            Self::player_one()
        } else {
            Self::player_two()
        }
    }

    pub fn action_for(&self, code: &str) -> Option<Action> {
        [
            (&self.left, Action::Left),
            (&self.right, Action::Right),
            (&self.up, Action::Up),
            (&self.attack, Action::Attack),
            (&self.special, Action::Special),
        ]
        .into_iter()
        .find(|(key, _)| key.as_str() == code)
        .map(|(_, action)| action)
    }
}

/// Currently held keys
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    pressed: HashSet<String>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, code: &str) {
        self.pressed.insert(code.to_string());
    }

    pub fn key_up(&mut self, code: &str) {
        self.pressed.remove(code);
    }

    /// Forget everything held (window lost focus)
    pub fn release_all(&mut self) {
        self.pressed.clear();
    }

    pub fn is_pressed(&self, code: &str) -> bool {
        self.pressed.contains(code)
    }

    pub fn intent_for(&self, bindings: &KeyBindings) -> FighterIntent {
        FighterIntent {
            left: self.is_pressed(&bindings.left),
            right: self.is_pressed(&bindings.right),
            up: self.is_pressed(&bindings.up),
            attack: self.is_pressed(&bindings.attack),
            special: self.is_pressed(&bindings.special),
        }
    }

    pub fn restart_requested(&self) -> bool {
        self.is_pressed(RESTART_CODE)
    }
}

/// Extract the physical key code from a keyboard event
pub fn get_code_from_event(event: &KeyboardEvent) -> String {
    event.code()
}
