use hecs::World;

use crate::fighter::Fighter;
use crate::resources::{Events, GameEvent, HitEvent, Time};
use crate::Config;

/// One attacker against one defender. Lands at most once per attack cycle.
pub fn resolve(
    attacker: &mut Fighter,
    defender: &mut Fighter,
    config: &Config,
    now: f32,
) -> Option<HitEvent> {
    let hit_box = attacker.attack_box(config)?;
    if attacker.attack.has_struck(defender.slot) || !hit_box.overlaps(&defender.body_box()) {
        return None;
    }

    let empowered = attacker.is_super();
    let damage = if empowered {
        config.attack_damage * config.super_multiplier
    } else {
        config.attack_damage
    };

    defender.apply_damage(damage, now);
    attacker.gain_energy(config.energy_on_hit);
    attacker.attack.mark_struck(defender.slot);

    Some(HitEvent {
        attacker: attacker.slot,
        defender: defender.slot,
        damage,
        empowered,
        defender_health: defender.health,
    })
}

/// Fighter 1 strikes first, then fighter 2 against the updated state
pub fn resolve_combat(world: &mut World, time: &Time, config: &Config, events: &mut Events) {
    let mut fighters: Vec<&mut Fighter> = world
        .query_mut::<&mut Fighter>()
        .into_iter()
        .map(|(_entity, fighter)| fighter)
        .collect();
    fighters.sort_by_key(|fighter| fighter.slot);

    let [first, second] = fighters.as_mut_slice() else {
        return;
    };

    for strikes_first in [true, false] {
        let (attacker, defender) = if strikes_first {
            (&mut **first, &mut **second)
        } else {
            (&mut **second, &mut **first)
        };

        if let Some(hit) = resolve(attacker, defender, config, time.now) {
            tracing::info!(
                attacker = hit.attacker,
                defender = hit.defender,
                damage = hit.damage,
                empowered = hit.empowered,
                health = hit.defender_health,
                "hit"
            );
            events.push(GameEvent::Hit(hit));
        }
    }
}
