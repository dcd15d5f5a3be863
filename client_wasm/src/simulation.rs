use fight_core::{Config, ConfigError, FighterIntent, MatchController, Params};
use proto::FrameSnapshot;

use crate::input::{KeyBindings, KeyboardState};

/// What one display frame did to the match
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub ticks: u32,
    pub knocked_out: bool,
    pub restarted: bool,
}

/// Hot-seat match driven by display frames
pub struct LocalGame {
    pub controller: MatchController,
    pub keys: KeyboardState,
    pub bindings: [KeyBindings; 2],
    accumulator: f32,
    last_ms: Option<f64>,
}

impl LocalGame {
    pub fn new(seed: u64) -> Result<Self, ConfigError> {
        Ok(Self {
            controller: MatchController::with_seed(Config::new(), seed)?,
            keys: KeyboardState::new(),
            bindings: [KeyBindings::for_slot(0), KeyBindings::for_slot(1)],
            accumulator: 0.0,
            last_ms: None,
        })
    }

    /// Current held controls for both fighters
    pub fn inputs(&self) -> [FighterIntent; 2] {
        [
            self.keys.intent_for(&self.bindings[0]),
            self.keys.intent_for(&self.bindings[1]),
        ]
    }

    /// Run as many fixed ticks as the elapsed time since the last frame covers
    pub fn frame(&mut self, now_ms: f64) -> FrameReport {
        let mut report = FrameReport::default();
        if self.controller.is_game_over() && self.keys.restart_requested() {
            self.restart();
            report.restarted = true;
        }

        let elapsed = match self.last_ms.replace(now_ms) {
            Some(last) => ((now_ms - last) / 1000.0) as f32,
            None => 0.0,
        };

        // A stalled tab resumes without a burst of catch-up ticks
        self.accumulator = (self.accumulator + elapsed.max(0.0)).min(Params::MAX_DT);

        let inputs = self.inputs();
        while self.accumulator >= Params::FIXED_DT {
            self.accumulator -= Params::FIXED_DT;

            let was_over = self.controller.is_game_over();
            self.controller.tick(inputs, Params::FIXED_DT);
            report.ticks += 1;

            if !was_over && self.controller.is_game_over() {
                report.knocked_out = true;
            }
        }

        report
    }

    pub fn restart(&mut self) {
        self.controller.reset();
        self.accumulator = 0.0;
        self.last_ms = None;
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot::capture(&self.controller)
    }
}
