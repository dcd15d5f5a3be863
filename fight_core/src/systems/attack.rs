use hecs::World;

use crate::components::FighterIntent;
use crate::fighter::{AttackTick, Fighter};
use crate::resources::{Events, GameEvent, Time};
use crate::Config;

/// Trigger and advance attack cycles, then the presentation clock
pub fn update_attacks(world: &mut World, time: &Time, config: &Config, events: &mut Events) {
    let mut fighters: Vec<_> = world
        .query_mut::<(&mut Fighter, &FighterIntent)>()
        .into_iter()
        .map(|(_entity, components)| components)
        .collect();
    fighters.sort_by_key(|(fighter, _)| fighter.slot);

    for (fighter, intent) in fighters {
        if fighter.try_attack(intent, time.now, config) {
            tracing::debug!(slot = fighter.slot, "attack started");
            events.push(GameEvent::AttackStarted { slot: fighter.slot });
        }

        if fighter.advance_attack(time.dt, time.now, config) == AttackTick::WindowOpened {
            tracing::debug!(slot = fighter.slot, super_mode = fighter.is_super(), "hit window open");
            events.push(GameEvent::HitWindowOpened { slot: fighter.slot });
        }

        fighter.advance_animation(time.dt);
    }
}
