//! Browser client for the fighting game
//!
//! The page owns the canvas and the animation-frame loop. This crate turns
//! keyboard events into held controls, runs the fixed-step match and hands
//! back a snapshot per frame for drawing.

pub mod fsm;
pub mod input;
pub mod simulation;

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::prelude::*;
    use web_sys::KeyboardEvent;

    use crate::fsm::{FsmState, GameAction, GameFsm};
    use crate::input::{get_code_from_event, RESTART_CODE};
    use crate::simulation::LocalGame;

    fn log(message: &str) {
        web_sys::console::log_1(&JsValue::from_str(message));
    }

    fn to_js_error(context: &str, err: impl std::fmt::Display) -> JsValue {
        let message = format!("{context}: {err}");
        web_sys::console::error_1(&JsValue::from_str(&message));
        js_sys::Error::new(&message).into()
    }

    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();
    }

    /// Current page time in milliseconds
    #[wasm_bindgen]
    pub fn now_ms() -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or_else(js_sys::Date::now)
    }

    /// Main client state
    #[wasm_bindgen]
    pub struct Client {
        game: LocalGame,
        fsm: GameFsm,
    }

    #[wasm_bindgen]
    impl Client {
        #[wasm_bindgen(constructor)]
        pub fn new(seed: u32) -> Result<Client, JsValue> {
            let game = LocalGame::new(u64::from(seed))
                .map_err(|e| to_js_error("Failed to create match", e))?;
            log("fight client ready");
            Ok(Client {
                game,
                fsm: GameFsm::new(),
            })
        }

        #[wasm_bindgen(getter)]
        pub fn state(&self) -> FsmState {
            self.fsm.state()
        }

        /// Leave the title screen with a fresh match
        pub fn start_match(&mut self) -> bool {
            self.apply(GameAction::Start, true)
        }

        pub fn quit(&mut self) -> bool {
            self.apply(GameAction::Quit, false)
        }

        /// Returns true when the page should suppress the browser default
        pub fn key_down(&mut self, event: &KeyboardEvent) -> bool {
            let code = get_code_from_event(event);
            self.game.keys.key_down(&code);
            let handled = self.is_bound(&code);
            if handled {
                event.prevent_default();
            }
            handled
        }

        pub fn key_up(&mut self, event: &KeyboardEvent) -> bool {
            let code = get_code_from_event(event);
            self.game.keys.key_up(&code);
            self.is_bound(&code)
        }

        /// Window lost focus: nothing stays held
        pub fn release_keys(&mut self) {
            self.game.keys.release_all();
        }

        /// Advance to `now_ms` and return the postcard-encoded frame snapshot
        pub fn frame(&mut self, now_ms: f64) -> Result<Vec<u8>, JsValue> {
            if self.fsm.state() != FsmState::Idle {
                let report = self.game.frame(now_ms);
                if report.restarted {
                    self.apply(GameAction::Restart, false);
                }
                if report.knocked_out {
                    self.apply(GameAction::KnockOut, false);
                    if let Some(name) = self.game.controller.winner_name() {
                        log(&format!("{name} wins"));
                    }
                }
            }

            self.game
                .snapshot()
                .to_bytes()
                .map_err(|e| to_js_error("Failed to serialize snapshot", e))
        }
    }

    impl Client {
        fn apply(&mut self, action: GameAction, reset: bool) -> bool {
            let result = self.fsm.transition(action);
            if result.success() {
                if reset {
                    self.game.restart();
                }
                log(&format!(
                    "screen {:?} -> {:?}",
                    result.from_state(),
                    result.to_state()
                ));
            }
            result.success()
        }

        fn is_bound(&self, code: &str) -> bool {
            code == RESTART_CODE
                || self
                    .game
                    .bindings
                    .iter()
                    .any(|bindings| bindings.action_for(code).is_some())
        }
    }
}
