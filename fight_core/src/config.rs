use glam::Vec2;

use crate::components::AnimationState;
use crate::error::ConfigError;
use crate::params::Params;

/// Frame count and draw scale of one sprite strip
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    pub frames: u8,
    pub scale: Vec2,
}

impl AnimationSpec {
    pub fn new(frames: u8, scale_x: f32) -> Self {
        Self {
            frames,
            scale: Vec2::new(scale_x, 1.0),
        }
    }
}

/// Per-fighter profile: identity, spawn and sprite strips
#[derive(Debug, Clone, PartialEq)]
pub struct FighterConfig {
    pub name: String,
    pub spawn_x: f32,
    pub facing_right: bool,
    pub walk: AnimationSpec,
    pub attack: AnimationSpec,
    pub jump: AnimationSpec,
}

impl FighterConfig {
    /// Left-side fighter: 8/9/8 frame strips at full scale
    pub fn player_one() -> Self {
        Self {
            name: "Player One".to_string(),
            spawn_x: 100.0,
            facing_right: true,
            walk: AnimationSpec::new(8, 1.0),
            attack: AnimationSpec::new(9, 1.0),
            jump: AnimationSpec::new(8, 1.0),
        }
    }

    /// Right-side fighter: 7 frame strips, narrower sprites
    pub fn player_two() -> Self {
        Self {
            name: "Player Two".to_string(),
            spawn_x: 650.0,
            facing_right: false,
            walk: AnimationSpec::new(7, 0.6),
            attack: AnimationSpec::new(7, 0.8),
            jump: AnimationSpec::new(7, 0.8),
        }
    }

    pub fn spec(&self, state: AnimationState) -> AnimationSpec {
        match state {
            AnimationState::Walk => self.walk,
            AnimationState::Jump => self.jump,
            AnimationState::Attack => self.attack,
        }
    }
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub arena_width: f32,
    pub ground_y: f32,
    pub fighter_size: Vec2,
    pub move_speed: f32,
    pub jump_velocity: f32,
    pub gravity: f32,
    pub health_max: f32,
    pub energy_max: f32,
    pub energy_regen: f32,
    pub energy_on_hit: f32,
    pub attack_damage: f32,
    pub super_multiplier: f32,
    pub attack_cooldown: f32,
    pub super_duration: f32,
    pub attack_box_size: Vec2,
    pub attack_box_offset: Vec2,
    pub hit_window_open: u8,
    pub hit_window_close: u8,
    pub fighters: Vec<FighterConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            ground_y: Params::GROUND_Y,
            fighter_size: Vec2::new(Params::FIGHTER_WIDTH, Params::FIGHTER_HEIGHT),
            move_speed: Params::MOVE_SPEED,
            jump_velocity: Params::JUMP_VELOCITY,
            gravity: Params::GRAVITY,
            health_max: Params::HEALTH_MAX,
            energy_max: Params::ENERGY_MAX,
            energy_regen: Params::ENERGY_REGEN,
            energy_on_hit: Params::ENERGY_ON_HIT,
            attack_damage: Params::ATTACK_DAMAGE,
            super_multiplier: Params::SUPER_MULTIPLIER,
            attack_cooldown: Params::ATTACK_COOLDOWN,
            super_duration: Params::SUPER_DURATION,
            attack_box_size: Vec2::new(Params::ATTACK_BOX_WIDTH, Params::ATTACK_BOX_HEIGHT),
            attack_box_offset: Vec2::new(Params::ATTACK_BOX_OFFSET_X, Params::ATTACK_BOX_OFFSET_Y),
            hit_window_open: Params::HIT_WINDOW_OPEN,
            hit_window_close: Params::HIT_WINDOW_CLOSE,
            fighters: vec![FighterConfig::player_one(), FighterConfig::player_two()],
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rightmost x a fighter's top-left corner may reach
    pub fn max_x(&self) -> f32 {
        self.arena_width - self.fighter_size.x
    }

    /// Clamp fighter X to arena bounds
    pub fn clamp_x(&self, x: f32) -> f32 {
        x.clamp(0.0, self.max_x())
    }

    /// Spawn position (top-left) for a fighter slot
    pub fn spawn_pos(&self, slot: u8) -> Result<Vec2, ConfigError> {
        let profile = self.fighter(slot)?;
        Ok(Vec2::new(profile.spawn_x, self.ground_y))
    }

    pub fn fighter(&self, slot: u8) -> Result<&FighterConfig, ConfigError> {
        self.fighters
            .get(slot as usize)
            .ok_or(ConfigError::MissingFighter { slot })
    }

    /// Reject tables that cannot produce a playable match
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("arena_width", self.arena_width),
            ("fighter width", self.fighter_size.x),
            ("fighter height", self.fighter_size.y),
            ("attack box width", self.attack_box_size.x),
            ("attack box height", self.attack_box_size.y),
            ("energy_max", self.energy_max),
            ("health_max", self.health_max),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NonPositiveDimension { name, value });
            }
        }
        if self.max_x() <= 0.0 {
            return Err(ConfigError::NonPositiveDimension {
                name: "arena width minus fighter width",
                value: self.max_x(),
            });
        }
        if self.hit_window_open >= self.hit_window_close {
            return Err(ConfigError::HitWindowInverted {
                open: self.hit_window_open,
                close: self.hit_window_close,
            });
        }

        match self.fighters.len() {
            0 | 1 => {
                return Err(ConfigError::MissingFighter {
                    slot: self.fighters.len() as u8,
                })
            }
            2 => {}
            count => return Err(ConfigError::TooManyFighters { count }),
        }

        for (slot, profile) in self.fighters.iter().enumerate() {
            let slot = slot as u8;
            if profile.name.trim().is_empty() {
                return Err(ConfigError::EmptyName { slot });
            }
            if !(0.0..=self.max_x()).contains(&profile.spawn_x) {
                return Err(ConfigError::SpawnOutOfBounds {
                    slot,
                    x: profile.spawn_x,
                    max_x: self.max_x(),
                });
            }
            for action in AnimationState::ALL {
                let spec = profile.spec(action);
                if spec.frames == 0 {
                    return Err(ConfigError::ZeroFrames { slot, action });
                }
                if spec.scale.x <= 0.0 || spec.scale.y <= 0.0 {
                    return Err(ConfigError::NonPositiveScale { slot, action });
                }
            }
            if profile.attack.frames < self.hit_window_close {
                return Err(ConfigError::AttackTooShort {
                    slot,
                    frames: profile.attack.frames,
                    close: self.hit_window_close,
                });
            }
        }

        Ok(())
    }
}
