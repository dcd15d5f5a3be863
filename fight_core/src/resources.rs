use crate::components::FighterIntent;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: crate::params::Params::FIXED_DT,
            now: 0.0,
        }
    }
}

/// Game-over state of the current match
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchOutcome {
    pub game_over: bool,
    pub winner: Option<u8>,
}

impl MatchOutcome {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare(&mut self, winner: u8) {
        self.game_over = true;
        self.winner = Some(winner);
    }

    pub fn has_winner(&self) -> Option<u8> {
        self.winner
    }
}

/// Random number generator (super burst placement)
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Uniform sample in [0, 1)
    pub fn unit(&mut self) -> f32 {
        use rand::Rng;
        self.0.gen::<f32>()
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitEvent {
    pub attacker: u8,
    pub defender: u8,
    pub damage: f32,
    pub empowered: bool,
    pub defender_health: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    AttackStarted { slot: u8 },
    HitWindowOpened { slot: u8 },
    Hit(HitEvent),
    SuperActivated { slot: u8 },
    SuperExpired { slot: u8 },
    Jumped { slot: u8 },
    Landed { slot: u8 },
    KnockOut { loser: u8, winner: u8 },
}

/// Events that occurred during the last `step`
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub list: Vec<GameEvent>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.list.clear();
    }

    pub fn push(&mut self, event: GameEvent) {
        self.list.push(event);
    }

    pub fn hits(&self) -> impl Iterator<Item = &HitEvent> {
        self.list.iter().filter_map(|event| match event {
            GameEvent::Hit(hit) => Some(hit),
            _ => None,
        })
    }

    pub fn contains(&self, event: &GameEvent) -> bool {
        self.list.contains(event)
    }
}

/// Pending per-fighter inputs, drained once per step
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pub inputs: Vec<(u8, FighterIntent)>, // (slot, held controls)
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.inputs.clear();
    }

    pub fn push_input(&mut self, slot: u8, intent: FighterIntent) {
        self.inputs.push((slot, intent));
    }

    pub fn pop_inputs(&mut self) -> Vec<(u8, FighterIntent)> {
        std::mem::take(&mut self.inputs)
    }
}
