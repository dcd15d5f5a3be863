use hecs::World;

use crate::fighter::Fighter;
use crate::resources::Time;

/// Garbage collection: drop faded effects
pub fn prune_effects(world: &mut World, time: &Time) {
    for (_entity, fighter) in world.query_mut::<&mut Fighter>() {
        fighter.prune_effects(time.now);
    }
}
