use hecs::World;

use crate::components::FighterIntent;
use crate::fighter::Fighter;
use crate::resources::{Events, GameEvent, GameRng, Time};
use crate::Config;

/// Super mode expiry and activation, then passive energy regeneration
pub fn update_energy(
    world: &mut World,
    time: &Time,
    config: &Config,
    events: &mut Events,
    rng: &mut GameRng,
) {
    let mut fighters: Vec<_> = world
        .query_mut::<(&mut Fighter, &FighterIntent)>()
        .into_iter()
        .map(|(_entity, components)| components)
        .collect();
    fighters.sort_by_key(|(fighter, _)| fighter.slot);

    for (fighter, intent) in fighters {
        if fighter.update_super(time.dt, time.now, rng) {
            tracing::debug!(slot = fighter.slot, "super mode expired");
            events.push(GameEvent::SuperExpired { slot: fighter.slot });
        }

        if fighter.try_activate_super(intent, time.now, config, rng) {
            tracing::debug!(slot = fighter.slot, "super mode activated");
            events.push(GameEvent::SuperActivated { slot: fighter.slot });
        }

        fighter.regen_energy(time.dt, config);
    }
}
