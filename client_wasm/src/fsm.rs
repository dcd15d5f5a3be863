//! Screen State Machine
//!
//! Title screen, the running match and the end screen.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Screen states
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsmState {
    Idle,
    Playing,
    GameOver,
}

/// Actions that trigger state transitions
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Start,
    KnockOut,
    Restart,
    Quit,
}

/// Result of a state transition
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
#[derive(Debug, Clone)]
pub struct TransitionResult {
    success: bool,
    from_state: FsmState,
    to_state: FsmState,
    action: GameAction,
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
impl TransitionResult {
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn success(&self) -> bool {
        self.success
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    #[allow(clippy::wrong_self_convention)]
    pub fn from_state(&self) -> FsmState {
        self.from_state
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn to_state(&self) -> FsmState {
        self.to_state
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn action(&self) -> GameAction {
        self.action
    }
}

/// Screen Finite State Machine
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub struct GameFsm {
    state: FsmState,
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
impl GameFsm {
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(constructor))]
    pub fn new() -> Self {
        Self {
            state: FsmState::Idle,
        }
    }

    /// Get current state
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn state(&self) -> FsmState {
        self.state
    }

    /// Get current state as string (for JS interop)
    pub fn state_string(&self) -> String {
        format!("{:?}", self.state)
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: GameAction) -> bool {
        self.get_next_state(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: GameAction) -> TransitionResult {
        let from_state = self.state;

        if let Some(next_state) = self.get_next_state(action) {
            self.state = next_state;
            TransitionResult {
                success: true,
                from_state,
                to_state: next_state,
                action,
            }
        } else {
            TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            }
        }
    }

    /// Transition using action string (for easier JS interop)
    pub fn transition_str(&mut self, action: &str) -> TransitionResult {
        let action = match action {
            "START" => GameAction::Start,
            "KNOCK_OUT" => GameAction::KnockOut,
            "RESTART" => GameAction::Restart,
            "QUIT" => GameAction::Quit,
            _ => {
                return TransitionResult {
                    success: false,
                    from_state: self.state,
                    to_state: self.state,
                    action: GameAction::Quit, // Default, won't be used
                };
            }
        };
        self.transition(action)
    }

    /// Get next state for a given action (if valid)
    fn get_next_state(&self, action: GameAction) -> Option<FsmState> {
        match (self.state, action) {
            (FsmState::Idle, GameAction::Start) => Some(FsmState::Playing),
            (FsmState::Playing, GameAction::KnockOut) => Some(FsmState::GameOver),
            (FsmState::GameOver, GameAction::Restart) => Some(FsmState::Playing),

            // Quit always lands on the title screen
            (_, GameAction::Quit) => Some(FsmState::Idle),

            // Invalid transition
            _ => None,
        }
    }

    /// Reset to Idle state
    pub fn reset(&mut self) {
        self.state = FsmState::Idle;
    }

    /// Check if the match is running
    pub fn is_playing(&self) -> bool {
        self.state == FsmState::Playing
    }

    /// Check if in game over state
    pub fn is_game_over(&self) -> bool {
        self.state == FsmState::GameOver
    }
}

impl Default for GameFsm {
    fn default() -> Self {
        Self::new()
    }
}
