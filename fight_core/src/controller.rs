//! Match lifecycle around the ECS world.
//!
//! Owns the world and every resource `step` needs, so front ends only
//! feed held controls and a frame delta.

use hecs::{Entity, World};

use crate::components::FighterIntent;
use crate::config::Config;
use crate::error::ConfigError;
use crate::fighter::Fighter;
use crate::resources::{Events, GameRng, InputQueue, MatchOutcome, Time};
use crate::{create_fighter, step};

const DEFAULT_SEED: u64 = 12345;

pub struct MatchController {
    world: World,
    time: Time,
    config: Config,
    outcome: MatchOutcome,
    events: Events,
    input_queue: InputQueue,
    rng: GameRng,
    seed: u64,
    ticks: u64,
    roster: [Fighter; 2],
    entities: [Entity; 2],
}

impl MatchController {
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        Self::with_seed(config, DEFAULT_SEED)
    }

    /// Same as [`MatchController::new`] with an explicit spark RNG seed
    pub fn with_seed(config: Config, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let roster = [Fighter::spawn(0, &config)?, Fighter::spawn(1, &config)?];

        let mut world = World::new();
        let entities = roster
            .clone()
            .map(|fighter| create_fighter(&mut world, fighter));

        tracing::info!(
            left = roster[0].name(),
            right = roster[1].name(),
            seed,
            "match created"
        );

        Ok(Self {
            world,
            time: Time::new(0.0, 0.0),
            config,
            outcome: MatchOutcome::new(),
            events: Events::new(),
            input_queue: InputQueue::new(),
            rng: GameRng::new(seed),
            seed,
            ticks: 0,
            roster,
            entities,
        })
    }

    /// Advance the match by one frame of `dt` seconds with both fighters' held controls
    pub fn tick(&mut self, inputs: [FighterIntent; 2], dt: f32) -> MatchOutcome {
        for (slot, intent) in (0u8..).zip(inputs) {
            self.input_queue.push_input(slot, intent);
        }

        self.time.dt = dt.max(0.0);
        step(
            &mut self.world,
            &mut self.time,
            &self.config,
            &mut self.outcome,
            &mut self.events,
            &mut self.input_queue,
            &mut self.rng,
        );
        self.ticks += 1;

        self.outcome
    }

    /// Back to spawn: full health, no energy, no winner, clock at zero
    pub fn reset(&mut self) {
        self.world.clear();
        self.entities = self
            .roster
            .clone()
            .map(|fighter| create_fighter(&mut self.world, fighter));

        self.time = Time::new(0.0, 0.0);
        self.outcome = MatchOutcome::new();
        self.events.clear();
        self.input_queue.clear();
        self.rng = GameRng::new(self.seed);
        self.ticks = 0;

        tracing::info!("match reset");
    }

    pub fn fighter(&self, slot: u8) -> Option<hecs::Ref<'_, Fighter>> {
        let entity = *self.entities.get(slot as usize)?;
        self.world.get::<&Fighter>(entity).ok()
    }

    /// Direct access for scripted setups (positions, health, energy)
    pub fn fighter_mut(&mut self, slot: u8) -> Option<hecs::RefMut<'_, Fighter>> {
        let entity = *self.entities.get(slot as usize)?;
        self.world.get::<&mut Fighter>(entity).ok()
    }

    /// Both fighters in slot order
    pub fn fighters(&self) -> impl Iterator<Item = hecs::Ref<'_, Fighter>> {
        (0u8..2).filter_map(move |slot| self.fighter(slot))
    }

    pub fn is_game_over(&self) -> bool {
        self.outcome.game_over
    }

    pub fn winner(&self) -> Option<u8> {
        self.outcome.winner
    }

    pub fn winner_name(&self) -> Option<String> {
        let slot = self.outcome.winner?;
        self.fighter(slot).map(|fighter| fighter.name().to_string())
    }

    pub fn outcome(&self) -> MatchOutcome {
        self.outcome
    }

    /// Events raised during the last `tick`
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn now(&self) -> f32 {
        self.time.now
    }

    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}
