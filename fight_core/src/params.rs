/// Game tuning parameters for the fighting game
///
/// Rates are per second, calibrated so one `FIXED_DT` step matches one
/// frame of the 60 Hz canvas build.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const GROUND_Y: f32 = 250.0;

    // Fighter body
    pub const FIGHTER_WIDTH: f32 = 50.0;
    pub const FIGHTER_HEIGHT: f32 = 100.0;
    pub const MOVE_SPEED: f32 = 300.0; // 5 px per frame
    pub const JUMP_VELOCITY: f32 = -900.0; // -15 px per frame
    pub const GRAVITY: f32 = 2880.0; // 0.8 px per frame^2

    // Resources
    pub const HEALTH_MAX: f32 = 100.0;
    pub const ENERGY_MAX: f32 = 100.0;
    pub const ENERGY_REGEN: f32 = 6.0; // 0.1 per frame
    pub const ENERGY_ON_HIT: f32 = 15.0;

    // Attack
    pub const ATTACK_DAMAGE: f32 = 10.0;
    pub const SUPER_MULTIPLIER: f32 = 2.0;
    pub const ATTACK_COOLDOWN: f32 = 0.5;
    pub const SUPER_DURATION: f32 = 3.0;
    pub const ATTACK_BOX_WIDTH: f32 = 60.0;
    pub const ATTACK_BOX_HEIGHT: f32 = 50.0;
    pub const ATTACK_BOX_OFFSET_X: f32 = 30.0;
    pub const ATTACK_BOX_OFFSET_Y: f32 = 20.0;
    pub const HIT_WINDOW_OPEN: u8 = 3;
    pub const HIT_WINDOW_CLOSE: u8 = 5;

    // Animation clocks (frames per second)
    pub const WALK_FPS: f32 = 9.0;
    pub const JUMP_FPS: f32 = 12.0;
    pub const ATTACK_FPS: f32 = 15.0;

    // Effects
    pub const ATTACK_FLASH_SIZE: f32 = 40.0;
    pub const ATTACK_FLASH_GAP: f32 = 10.0; // in front of the body when facing right
    pub const ATTACK_FLASH_OFFSET_Y: f32 = 30.0;
    pub const ATTACK_FLASH_FADE: f32 = 0.2;
    pub const HIT_MARKER_FADE: f32 = 0.5;
    pub const SUPER_BURST_COUNT: u8 = 10;
    pub const SUPER_BURST_INTERVAL: f32 = 0.1;
    pub const SUPER_BURST_SIZE: f32 = 50.0;
    pub const SUPER_BURST_FADE: f32 = 0.5;
    pub const EFFECT_CAPACITY: usize = 16;

    // Physics
    pub const FIXED_DT: f32 = 1.0 / 60.0;
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps
}
