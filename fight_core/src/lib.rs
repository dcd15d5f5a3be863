pub mod components;
pub mod config;
pub mod controller;
pub mod effects;
pub mod error;
pub mod fighter;
pub mod geometry;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use controller::*;
pub use effects::*;
pub use error::*;
pub use fighter::*;
pub use geometry::*;
pub use params::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Run the deterministic fight simulation
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    config: &Config,
    outcome: &mut MatchOutcome,
    events: &mut Events,
    input_queue: &mut InputQueue,
    rng: &mut GameRng,
) {
    // Clamp dt to prevent large jumps
    let clamped_dt = time.dt.min(Params::MAX_DT);

    // Events cover the whole call, not just the last micro-step
    events.clear();

    // Fixed micro-steps for stable physics
    let mut remaining_dt = clamped_dt;
    while remaining_dt > 0.0 {
        let step_dt = remaining_dt.min(Params::FIXED_DT);
        remaining_dt -= step_dt;

        let step_time = Time {
            dt: step_dt,
            now: time.now + (clamped_dt - remaining_dt),
        };

        if !outcome.game_over {
            // 1. Ingest inputs (held controls per fighter)
            ingest_inputs(world, input_queue);

            // 2. Walk, jump, gravity
            move_fighters(world, &step_time, config, events);

            // 3. Super mode and energy regen
            update_energy(world, &step_time, config, events, rng);

            // 4. Attack triggers and hit windows
            update_attacks(world, &step_time, config, events);

            // 5. Hit resolution, fighter 1 first
            resolve_combat(world, &step_time, config, events);

            // 6. Knockout check
            check_winner(world, outcome, events);
        }

        // 7. Fade out effects (keeps running after the match ends)
        prune_effects(world, &step_time);
    }

    // Inputs never carry over to the next call
    input_queue.clear();

    // Update time
    time.now += clamped_dt;
}

/// Helper to create a fighter entity
pub fn create_fighter(world: &mut World, fighter: Fighter) -> hecs::Entity {
    world.spawn((fighter, FighterIntent::new()))
}
