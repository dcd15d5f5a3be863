use hecs::World;

use crate::components::FighterIntent;
use crate::fighter::Fighter;
use crate::resources::InputQueue;

/// Ingest queued inputs into each fighter's held-controls component
pub fn ingest_inputs(world: &mut World, input_queue: &mut InputQueue) {
    for (slot, held) in input_queue.pop_inputs() {
        for (_entity, (fighter, intent)) in world.query_mut::<(&Fighter, &mut FighterIntent)>() {
            if fighter.slot == slot {
                *intent = held;
                break;
            }
        }
    }
}
