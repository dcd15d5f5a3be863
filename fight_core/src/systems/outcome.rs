use hecs::World;

use crate::fighter::Fighter;
use crate::resources::{Events, GameEvent, MatchOutcome};

/// Declare a winner once a fighter's health reaches zero.
/// Fighter 1 is checked first, so a double knockout goes to fighter 2.
pub fn check_winner(world: &mut World, outcome: &mut MatchOutcome, events: &mut Events) {
    if outcome.game_over {
        return;
    }

    let mut fighters: Vec<&mut Fighter> = world
        .query_mut::<&mut Fighter>()
        .into_iter()
        .map(|(_entity, fighter)| fighter)
        .collect();
    fighters.sort_by_key(|fighter| fighter.slot);

    let [first, second] = fighters.as_mut_slice() else {
        return;
    };

    let (loser, winner) = if first.health <= 0.0 {
        (&mut **first, &**second)
    } else if second.health <= 0.0 {
        (&mut **second, &**first)
    } else {
        return;
    };

    loser.dead = true;
    outcome.declare(winner.slot);
    tracing::info!(winner = winner.name(), loser = loser.name(), "knockout");
    events.push(GameEvent::KnockOut {
        loser: loser.slot,
        winner: winner.slot,
    });
}
