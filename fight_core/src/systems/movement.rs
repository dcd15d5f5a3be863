use hecs::World;

use crate::components::FighterIntent;
use crate::fighter::Fighter;
use crate::resources::{Events, GameEvent, Time};
use crate::Config;

/// Walk, jump and land every fighter, fighter 1 first
pub fn move_fighters(world: &mut World, time: &Time, config: &Config, events: &mut Events) {
    let mut fighters: Vec<_> = world
        .query_mut::<(&mut Fighter, &FighterIntent)>()
        .into_iter()
        .map(|(_entity, components)| components)
        .collect();
    fighters.sort_by_key(|(fighter, _)| fighter.slot);

    for (fighter, intent) in fighters {
        let motion = fighter.move_step(intent, time.dt, config);

        if motion.jumped {
            tracing::debug!(slot = fighter.slot, "jump");
            events.push(GameEvent::Jumped { slot: fighter.slot });
        }
        if motion.landed {
            tracing::debug!(slot = fighter.slot, "landed");
            events.push(GameEvent::Landed { slot: fighter.slot });
        }
    }
}
