use glam::Vec2;

use crate::components::*;
use crate::config::{Config, FighterConfig};
use crate::effects::{Effect, EffectKind, EffectQueue};
use crate::error::ConfigError;
use crate::geometry::Aabb;
use crate::params::Params;
use crate::resources::GameRng;

/// What `move_step` changed about the jump
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Motion {
    pub jumped: bool,
    pub landed: bool,
}

/// Result of advancing the attack cycle by one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackTick {
    Idle,
    Running,
    WindowOpened,
    Finished,
}

/// Fighter component - one of the two combatants
#[derive(Debug, Clone)]
pub struct Fighter {
    pub slot: u8, // 0 = left, 1 = right
    pub profile: FighterConfig,
    pub pos: Vec2, // top-left of the body box
    pub size: Vec2,
    pub vel_y: f32,
    pub jumping: bool,
    pub walking: bool,
    pub facing_right: bool,
    pub health: f32,
    pub max_health: f32,
    pub energy: f32,
    pub max_energy: f32,
    pub attack: AttackCycle,
    pub super_mode: SuperMode,
    pub anim: Animation,
    pub dead: bool,
    pub effects: EffectQueue,
}

impl Fighter {
    /// Fresh fighter at its spawn point with full health and no energy
    pub fn spawn(slot: u8, config: &Config) -> Result<Self, ConfigError> {
        let profile = config.fighter(slot)?.clone();
        let pos = config.spawn_pos(slot)?;
        Ok(Self {
            slot,
            facing_right: profile.facing_right,
            profile,
            pos,
            size: config.fighter_size,
            vel_y: 0.0,
            jumping: false,
            walking: false,
            health: config.health_max,
            max_health: config.health_max,
            energy: 0.0,
            max_energy: config.energy_max,
            attack: AttackCycle::new(),
            super_mode: SuperMode::new(),
            anim: Animation::default(),
            dead: false,
            effects: EffectQueue::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.profile.name
    }

    pub fn is_attacking(&self) -> bool {
        self.attack.attacking
    }

    pub fn is_attack_active(&self) -> bool {
        self.attack.hit_active
    }

    pub fn is_super(&self) -> bool {
        self.super_mode.active
    }

    /// Walk, start a jump, integrate gravity and land
    pub fn move_step(&mut self, intent: &FighterIntent, dt: f32, config: &Config) -> Motion {
        if intent.left {
            self.pos.x -= config.move_speed * dt;
            self.facing_right = false;
            self.walking = true;
        } else if intent.right {
            self.pos.x += config.move_speed * dt;
            self.facing_right = true;
            self.walking = true;
        } else {
            self.walking = false;
        }

        let mut motion = Motion::default();

        if intent.up && !self.jumping {
            self.jumping = true;
            self.vel_y = config.jump_velocity;
            self.anim.frame = 0.0;
            motion.jumped = true;
        }

        if self.jumping {
            self.pos.y += self.vel_y * dt;
            self.vel_y += config.gravity * dt;

            if self.pos.y >= config.ground_y {
                self.pos.y = config.ground_y;
                self.vel_y = 0.0;
                self.jumping = false;
                self.anim.frame = 0.0;
                motion.landed = true;
            }
        }

        self.pos.x = config.clamp_x(self.pos.x);
        motion
    }

    /// Spend a full energy bar on super mode
    pub fn try_activate_super(
        &mut self,
        intent: &FighterIntent,
        now: f32,
        config: &Config,
        rng: &mut GameRng,
    ) -> bool {
        if !intent.special || self.energy < self.max_energy {
            return false;
        }

        self.super_mode
            .activate(config.super_duration, Params::SUPER_BURST_COUNT);
        self.energy = 0.0;
        self.spawn_due_bursts(now, rng);
        true
    }

    /// Count super mode down and emit pending sparks. Returns true on expiry.
    pub fn update_super(&mut self, dt: f32, now: f32, rng: &mut GameRng) -> bool {
        if self.super_mode.bursts_left > 0 {
            self.super_mode.next_burst_in -= dt;
            self.spawn_due_bursts(now, rng);
        }

        if !self.super_mode.active {
            return false;
        }

        self.super_mode.remaining -= dt;
        if self.super_mode.remaining <= 0.0 {
            self.super_mode.active = false;
            self.super_mode.remaining = 0.0;
            return true;
        }
        false
    }

    fn spawn_due_bursts(&mut self, now: f32, rng: &mut GameRng) {
        while self.super_mode.bursts_left > 0 && self.super_mode.next_burst_in <= 0.0 {
            let offset = Vec2::new(rng.unit() * self.size.x, rng.unit() * self.size.y);
            self.effects.push(Effect::new(
                EffectKind::SuperBurst,
                self.pos + offset,
                Vec2::splat(Params::SUPER_BURST_SIZE),
                now,
                self.super_mode.active,
            ));
            self.super_mode.bursts_left -= 1;
            self.super_mode.next_burst_in += Params::SUPER_BURST_INTERVAL;
        }
    }

    /// Passive regeneration, paused while attacking or powered up
    pub fn regen_energy(&mut self, dt: f32, config: &Config) {
        if !self.attack.attacking && !self.super_mode.active {
            self.gain_energy(config.energy_regen * dt);
        }
    }

    /// Start an attack cycle if the control is held and the cooldown allows it
    pub fn try_attack(&mut self, intent: &FighterIntent, now: f32, config: &Config) -> bool {
        if !intent.attack || !self.attack.can_start(now, config.attack_cooldown) {
            return false;
        }

        self.attack.start(now);
        self.anim.frame = 0.0;
        true
    }

    /// Advance the attack strip and open/close the hit window
    pub fn advance_attack(&mut self, dt: f32, now: f32, config: &Config) -> AttackTick {
        if !self.attack.attacking {
            return AttackTick::Idle;
        }

        self.attack.frame += Params::ATTACK_FPS * dt;
        if self.attack.frame >= self.profile.attack.frames as f32 {
            self.attack.finish();
            return AttackTick::Finished;
        }

        let index = self.attack.frame.floor() as u8;
        let in_window = (config.hit_window_open..config.hit_window_close).contains(&index);
        let opened = in_window && !self.attack.hit_active;
        self.attack.hit_active = in_window;

        if opened {
            self.spawn_attack_flash(now);
            return AttackTick::WindowOpened;
        }
        AttackTick::Running
    }

    fn spawn_attack_flash(&mut self, now: f32) {
        let x = if self.facing_right {
            self.pos.x + self.size.x + Params::ATTACK_FLASH_GAP
        } else {
            self.pos.x - Params::ATTACK_FLASH_SIZE
        };
        self.effects.push(Effect::new(
            EffectKind::AttackFlash,
            Vec2::new(x, self.pos.y + Params::ATTACK_FLASH_OFFSET_Y),
            Vec2::splat(Params::ATTACK_FLASH_SIZE),
            now,
            self.super_mode.active,
        ));
    }

    /// Damage-dealing rectangle, present only while the hit window is open
    pub fn attack_box(&self, config: &Config) -> Option<Aabb> {
        self.attack.hit_active.then(|| self.reach_box(config))
    }

    /// Where the attack box would be right now, open or not
    pub fn reach_box(&self, config: &Config) -> Aabb {
        let scale = self.profile.attack.scale.x;
        let width = config.attack_box_size.x * scale;
        let offset_x = config.attack_box_offset.x * scale;

        let x = if self.facing_right {
            self.pos.x + self.size.x + offset_x
        } else {
            self.pos.x - width - offset_x
        };

        Aabb::from_pos_size(
            Vec2::new(x, self.pos.y + config.attack_box_offset.y),
            Vec2::new(width, config.attack_box_size.y),
        )
    }

    pub fn body_box(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    /// Lose health (never below zero) and record the hit reaction
    pub fn apply_damage(&mut self, amount: f32, now: f32) {
        let amount = amount.max(0.0);
        self.health = (self.health - amount).clamp(0.0, self.max_health);
        self.on_hit(amount, now);
    }

    /// Hit reaction: a floating damage number the renderer fades out
    pub fn on_hit(&mut self, amount: f32, now: f32) {
        self.effects.push(Effect::new(
            EffectKind::HitMarker { amount },
            Vec2::new(self.pos.x + self.size.x / 2.0, self.pos.y),
            Vec2::ZERO,
            now,
            false,
        ));
    }

    pub fn gain_energy(&mut self, amount: f32) {
        self.energy = (self.energy + amount).clamp(0.0, self.max_energy);
    }

    /// Presentation clock for the sprite strip
    pub fn advance_animation(&mut self, dt: f32) {
        let state = if self.attack.attacking {
            AnimationState::Attack
        } else if self.jumping {
            AnimationState::Jump
        } else {
            AnimationState::Walk
        };
        let frames = self.profile.spec(state).frames as f32;

        self.anim.frame = match state {
            AnimationState::Attack => self.attack.frame,
            AnimationState::Jump => (self.anim.frame + Params::JUMP_FPS * dt) % frames,
            AnimationState::Walk if self.walking => {
                (self.anim.frame + Params::WALK_FPS * dt) % frames
            }
            AnimationState::Walk => 0.0,
        };
        self.anim.state = state;
    }

    /// Draw scale of the strip currently shown
    pub fn action_scale(&self) -> Vec2 {
        self.profile.spec(self.anim.state).scale
    }

    pub fn prune_effects(&mut self, now: f32) {
        self.effects.prune(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = Params::FIXED_DT;

    fn setup(slot: u8) -> (Fighter, Config) {
        let config = Config::new();
        let fighter = Fighter::spawn(slot, &config).expect("default config has both fighters");
        (fighter, config)
    }

    fn held(f: impl FnOnce(&mut FighterIntent)) -> FighterIntent {
        let mut intent = FighterIntent::new();
        f(&mut intent);
        intent
    }

    /// Trigger + advance, the way the movement system drives a fighter
    fn attack_tick(fighter: &mut Fighter, intent: &FighterIntent, now: f32, config: &Config) {
        fighter.try_attack(intent, now, config);
        fighter.advance_attack(DT, now, config);
    }

    #[test]
    fn test_spawn_state() {
        let (left, _) = setup(0);
        let (right, _) = setup(1);

        assert_eq!(left.pos, Vec2::new(100.0, 250.0));
        assert!(left.facing_right);
        assert_eq!(left.health, 100.0);
        assert_eq!(left.energy, 0.0);
        assert_eq!(left.name(), "Player One");

        assert_eq!(right.pos, Vec2::new(650.0, 250.0));
        assert!(!right.facing_right);
        assert_eq!(right.name(), "Player Two");
    }

    #[test]
    fn test_walk_moves_fixed_step_and_sets_facing() {
        let (mut fighter, config) = setup(0);

        fighter.move_step(&held(|i| i.left = true), DT, &config);
        assert!((fighter.pos.x - 95.0).abs() < 1e-3);
        assert!(!fighter.facing_right);
        assert!(fighter.walking);

        fighter.move_step(&held(|i| i.right = true), DT, &config);
        assert!((fighter.pos.x - 100.0).abs() < 1e-3);
        assert!(fighter.facing_right);
    }

    #[test]
    fn test_left_wins_over_right() {
        let (mut fighter, config) = setup(0);
        let both = held(|i| {
            i.left = true;
            i.right = true;
        });
        fighter.move_step(&both, DT, &config);
        assert!(fighter.pos.x < 100.0);
        assert!(!fighter.facing_right);
    }

    #[test]
    fn test_idle_move_only_clears_walking() {
        let (mut fighter, config) = setup(1);
        fighter.walking = true;
        let before = (fighter.pos, fighter.vel_y, fighter.jumping, fighter.facing_right);

        let motion = fighter.move_step(&FighterIntent::new(), DT, &config);

        assert_eq!(motion, Motion::default());
        assert!(!fighter.walking);
        assert_eq!(
            (fighter.pos, fighter.vel_y, fighter.jumping, fighter.facing_right),
            before
        );
    }

    #[test]
    fn test_horizontal_clamp() {
        let (mut fighter, config) = setup(0);
        fighter.pos.x = 2.0;
        fighter.move_step(&held(|i| i.left = true), DT, &config);
        assert_eq!(fighter.pos.x, 0.0);

        fighter.pos.x = 748.0;
        fighter.move_step(&held(|i| i.right = true), DT, &config);
        assert_eq!(fighter.pos.x, 750.0);
    }

    #[test]
    fn test_jump_rises_and_lands() {
        let (mut fighter, config) = setup(0);
        let up = held(|i| i.up = true);

        let motion = fighter.move_step(&up, DT, &config);
        assert!(motion.jumped);
        assert!(fighter.jumping);
        assert!((fighter.pos.y - 235.0).abs() < 1e-2, "First frame rises 15px");

        let mut peak = fighter.pos.y;
        let mut landed_after = None;
        for tick in 1..120 {
            // Holding up mid-air must not re-launch
            let motion = fighter.move_step(&up, DT, &config);
            assert!(!motion.jumped);
            peak = peak.min(fighter.pos.y);
            if motion.landed {
                landed_after = Some(tick);
                break;
            }
        }

        assert!(landed_after.is_some(), "Fighter must land");
        assert_eq!(fighter.pos.y, config.ground_y);
        assert!(!fighter.jumping);
        assert_eq!(fighter.vel_y, 0.0);
        assert!(peak < 150.0 && peak > 90.0, "Peak around 100px, got {peak}");
    }

    #[test]
    fn test_no_relaunch_while_airborne() {
        let (mut fighter, config) = setup(0);
        let up = held(|i| i.up = true);
        fighter.move_step(&up, DT, &config);
        let vel_after_first = fighter.vel_y;

        let motion = fighter.move_step(&up, DT, &config);
        assert!(!motion.jumped);
        assert!(fighter.vel_y > vel_after_first, "Gravity keeps acting");
    }

    #[test]
    fn test_attack_cycle_window() {
        let (mut fighter, config) = setup(0);
        let attack = held(|i| i.attack = true);
        let idle = FighterIntent::new();

        assert!(fighter.try_attack(&attack, 0.0, &config));
        assert!(fighter.is_attacking());
        assert!(!fighter.try_attack(&attack, 0.0, &config), "One cycle at a time");

        let mut now = 0.0;
        let mut active_ticks = 0;
        let mut opened = 0;
        let mut finished = false;
        for _ in 0..120 {
            match fighter.advance_attack(DT, now, &config) {
                AttackTick::WindowOpened => opened += 1,
                AttackTick::Finished => {
                    finished = true;
                    break;
                }
                _ => {}
            }
            if fighter.is_attack_active() {
                active_ticks += 1;
                let index = fighter.attack.frame.floor() as u8;
                assert!((3..5).contains(&index), "Active outside window at {index}");
                assert!(fighter.is_attacking());
            }
            now += DT;
            fighter.try_attack(&idle, now, &config);
        }

        assert!(finished);
        assert_eq!(opened, 1, "Window opens once per cycle");
        assert!(
            (7..=9).contains(&active_ticks),
            "Two frames at 15fps is about 8 ticks, got {active_ticks}"
        );
        assert!(!fighter.is_attacking());
        assert!(!fighter.is_attack_active());
    }

    #[test]
    fn test_attack_cooldown_gates_restarts() {
        // Player two's 7-frame strip ends before the 0.5s cooldown
        let (mut fighter, config) = setup(1);
        let attack = held(|i| i.attack = true);

        let mut now = 0.0;
        let mut starts = Vec::new();
        for _ in 0..240 {
            if fighter.try_attack(&attack, now, &config) {
                starts.push(now);
            }
            fighter.advance_attack(DT, now, &config);
            now += DT;
        }

        assert!(starts.len() >= 6, "Held attack keeps cycling: {starts:?}");
        for pair in starts.windows(2) {
            assert!(
                pair[1] - pair[0] >= config.attack_cooldown - 1e-3,
                "Restarted after {}s",
                pair[1] - pair[0]
            );
        }
    }

    #[test]
    fn test_attack_cooldown_holds_under_short_ticks() {
        // One full tick starts the cycle, then many tiny ticks follow
        let (mut fighter, config) = setup(1);
        let attack = held(|i| i.attack = true);

        let mut now = DT;
        assert!(fighter.try_attack(&attack, now, &config));
        fighter.advance_attack(DT, now, &config);

        let short = 0.0005;
        let mut restarted_at = None;
        for _ in 0..2000 {
            now += short;
            if fighter.try_attack(&attack, now, &config) {
                restarted_at = Some(now);
                break;
            }
            fighter.advance_attack(short, now, &config);
        }

        let restarted_at = restarted_at.expect("Held attack restarts");
        let gap = restarted_at - DT;
        assert!(
            gap >= config.attack_cooldown - 1e-4,
            "Restarted after {gap}s"
        );
        assert!(gap < config.attack_cooldown + 0.01);
    }

    #[test]
    fn test_attack_box_geometry() {
        let (mut left, config) = setup(0);
        left.attack.hit_active = true;
        let hit_box = left.attack_box(&config).expect("window open");
        assert_eq!(hit_box.min, Vec2::new(180.0, 270.0));
        assert_eq!(hit_box.size(), Vec2::new(60.0, 50.0));

        left.facing_right = false;
        let hit_box = left.reach_box(&config);
        assert_eq!(hit_box.min.x, 100.0 - 60.0 - 30.0);

        // Player two's attack strip is drawn at 0.8 width
        let (right, _) = setup(1);
        let reach = right.reach_box(&config);
        assert!((reach.size().x - 48.0).abs() < 1e-4);
        assert!((reach.min.x - (650.0 - 48.0 - 24.0)).abs() < 1e-4);
    }

    #[test]
    fn test_attack_box_absent_outside_window() {
        let (mut fighter, config) = setup(0);
        assert!(fighter.attack_box(&config).is_none());
        fighter.try_attack(&held(|i| i.attack = true), 0.0, &config);
        fighter.advance_attack(DT, 0.0, &config);
        assert!(fighter.attack_box(&config).is_none(), "Window opens at frame 3");
    }

    #[test]
    fn test_attack_flash_spawned_in_front() {
        let (mut fighter, config) = setup(0);
        fighter.try_attack(&held(|i| i.attack = true), 0.0, &config);
        while fighter.advance_attack(DT, 0.0, &config) != AttackTick::WindowOpened {}

        let flash = fighter
            .effects
            .iter()
            .find(|e| e.kind == EffectKind::AttackFlash)
            .expect("flash recorded");
        assert_eq!(flash.area.min, Vec2::new(160.0, 280.0));
    }

    #[test]
    fn test_apply_damage_clamps_and_marks() {
        let (mut fighter, _) = setup(1);
        fighter.apply_damage(10.0, 1.0);
        assert_eq!(fighter.health, 90.0);

        fighter.apply_damage(500.0, 1.1);
        assert_eq!(fighter.health, 0.0);

        fighter.apply_damage(-5.0, 1.2);
        assert_eq!(fighter.health, 0.0, "Negative damage does not heal");

        let markers: Vec<_> = fighter
            .effects
            .iter()
            .filter(|e| matches!(e.kind, EffectKind::HitMarker { .. }))
            .collect();
        assert_eq!(markers.len(), 3);
        assert_eq!(markers[0].area.min, Vec2::new(675.0, 250.0));
        assert_eq!(markers[0].kind, EffectKind::HitMarker { amount: 10.0 });
    }

    #[test]
    fn test_gain_energy_clamps() {
        let (mut fighter, _) = setup(0);
        fighter.gain_energy(15.0);
        assert_eq!(fighter.energy, 15.0);
        fighter.gain_energy(1000.0);
        assert_eq!(fighter.energy, 100.0);
    }

    #[test]
    fn test_regen_paused_while_attacking_or_super() {
        let (mut fighter, config) = setup(0);
        fighter.regen_energy(1.0, &config);
        assert!((fighter.energy - 6.0).abs() < 1e-4);

        fighter.attack.attacking = true;
        fighter.regen_energy(1.0, &config);
        assert!((fighter.energy - 6.0).abs() < 1e-4);

        fighter.attack.attacking = false;
        fighter.super_mode.active = true;
        fighter.regen_energy(1.0, &config);
        assert!((fighter.energy - 6.0).abs() < 1e-4);

        fighter.super_mode.active = false;
        fighter.energy = 99.99;
        fighter.regen_energy(1.0, &config);
        assert_eq!(fighter.energy, 100.0);
    }

    #[test]
    fn test_super_requires_full_energy() {
        let (mut fighter, config) = setup(0);
        let mut rng = GameRng::default();
        let special = held(|i| i.special = true);

        fighter.energy = 99.0;
        assert!(!fighter.try_activate_super(&special, 0.0, &config, &mut rng));
        assert!(!fighter.is_super());

        fighter.energy = 100.0;
        assert!(!fighter.try_activate_super(&FighterIntent::new(), 0.0, &config, &mut rng));

        assert!(fighter.try_activate_super(&special, 0.0, &config, &mut rng));
        assert!(fighter.is_super());
        assert_eq!(fighter.energy, 0.0);
    }

    #[test]
    fn test_super_expires_and_bursts() {
        let (mut fighter, config) = setup(0);
        let mut rng = GameRng::default();
        fighter.energy = 100.0;
        fighter.try_activate_super(&held(|i| i.special = true), 0.0, &config, &mut rng);

        let mut now = 0.0;
        let mut expired_at = None;
        for _ in 0..240 {
            now += DT;
            if fighter.update_super(DT, now, &mut rng) {
                expired_at = Some(now);
                break;
            }
        }

        let expired_at = expired_at.expect("super must expire");
        assert!((expired_at - 3.0).abs() < 0.05, "Expired at {expired_at}");
        assert!(!fighter.is_super());

        let bursts: Vec<_> = fighter
            .effects
            .iter()
            .filter(|e| e.kind == EffectKind::SuperBurst)
            .collect();
        assert_eq!(bursts.len(), 10);
        for burst in bursts {
            assert!(fighter.body_box().contains(burst.area.min));
        }
    }

    #[test]
    fn test_animation_states() {
        let (mut fighter, config) = setup(0);

        fighter.advance_animation(DT);
        assert_eq!(fighter.anim.state, AnimationState::Walk);
        assert_eq!(fighter.anim.frame, 0.0, "Idle holds frame 0");

        fighter.move_step(&held(|i| i.right = true), DT, &config);
        fighter.advance_animation(DT);
        assert!(fighter.anim.frame > 0.0);

        fighter.move_step(&held(|i| i.up = true), DT, &config);
        fighter.advance_animation(DT);
        assert_eq!(fighter.anim.state, AnimationState::Jump);

        fighter.try_attack(&held(|i| i.attack = true), 0.0, &config);
        fighter.advance_attack(DT, 0.0, &config);
        fighter.advance_animation(DT);
        assert_eq!(fighter.anim.state, AnimationState::Attack, "Attack shows over jump");
        assert_eq!(fighter.anim.frame, fighter.attack.frame);
        assert_eq!(fighter.action_scale(), Vec2::ONE);
    }

    #[test]
    fn test_attack_tick_helper_respects_cooldown() {
        let (mut fighter, config) = setup(0);
        let attack = held(|i| i.attack = true);
        attack_tick(&mut fighter, &attack, 0.0, &config);
        let first = fighter.attack.last_started_at;
        attack_tick(&mut fighter, &attack, DT, &config);
        assert_eq!(fighter.attack.last_started_at, first);
    }
}
