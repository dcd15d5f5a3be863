use std::fmt;

/// Held controls for one fighter this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FighterIntent {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub attack: bool,
    pub special: bool, // super
}

impl FighterIntent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_idle(&self) -> bool {
        *self == Self::default()
    }
}

/// Sprite strip currently shown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AnimationState {
    #[default]
    Walk,
    Jump,
    Attack,
}

impl AnimationState {
    pub const ALL: [AnimationState; 3] = [
        AnimationState::Walk,
        AnimationState::Jump,
        AnimationState::Attack,
    ];
}

impl fmt::Display for AnimationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnimationState::Walk => write!(f, "walk"),
            AnimationState::Jump => write!(f, "jump"),
            AnimationState::Attack => write!(f, "attack"),
        }
    }
}

/// Presentation clock; the attack strip is driven by [`AttackCycle::frame`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Animation {
    pub state: AnimationState,
    pub frame: f32,
}

impl Animation {
    /// Whole frame index for the sprite sheet
    pub fn frame_index(&self) -> u8 {
        self.frame.max(0.0).floor() as u8
    }
}

/// One melee attempt from trigger to the end of the attack strip
#[derive(Debug, Clone, Copy, Default)]
pub struct AttackCycle {
    pub attacking: bool,
    pub hit_active: bool,
    pub frame: f32,
    pub last_started_at: Option<f32>,
    landed: u8, // bit per defender slot already struck this cycle
}

impl AttackCycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Idle and at least `cooldown` seconds since the last start
    pub fn can_start(&self, now: f32, cooldown: f32) -> bool {
        !self.attacking
            && self
                .last_started_at
                .map_or(true, |started| now - started >= cooldown)
    }

    pub fn start(&mut self, now: f32) {
        self.attacking = true;
        self.hit_active = false;
        self.frame = 0.0;
        self.last_started_at = Some(now);
        self.landed = 0;
    }

    pub fn finish(&mut self) {
        self.attacking = false;
        self.hit_active = false;
        self.frame = 0.0;
    }

    pub fn has_struck(&self, slot: u8) -> bool {
        self.landed & (1 << slot) != 0
    }

    pub fn mark_struck(&mut self, slot: u8) {
        self.landed |= 1 << slot;
    }
}

/// Temporary damage multiplier plus the spark bursts spawned on activation
#[derive(Debug, Clone, Copy, Default)]
pub struct SuperMode {
    pub active: bool,
    pub remaining: f32,
    pub bursts_left: u8,
    pub next_burst_in: f32,
}

impl SuperMode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn activate(&mut self, duration: f32, bursts: u8) {
        self.active = true;
        self.remaining = duration;
        self.bursts_left = bursts;
        self.next_burst_in = 0.0;
    }
}
