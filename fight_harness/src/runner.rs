use anyhow::{Context, Result};
use fight_core::{Config, GameEvent, MatchController, Params};
use proto::FrameSnapshot;

use crate::script::{FighterSetup, Script};

/// Outcome of replaying a script
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub seed: u64,
    pub ticks: u64,
    pub hits: [u32; 2], // landed by each fighter
    pub winner: Option<String>,
    pub snapshot: FrameSnapshot,
}

fn apply_setup(game: &mut MatchController, slot: u8, setup: &FighterSetup) -> Result<()> {
    let max_x = game.config().max_x();
    let mut fighter = game
        .fighter_mut(slot)
        .with_context(|| format!("no fighter in slot {slot}"))?;

    if let Some(x) = setup.x {
        fighter.pos.x = x.clamp(0.0, max_x);
    }
    if let Some(health) = setup.health {
        fighter.health = health.clamp(0.0, fighter.max_health);
    }
    if let Some(energy) = setup.energy {
        fighter.energy = energy.clamp(0.0, fighter.max_energy);
    }
    Ok(())
}

/// Replay `script` at the fixed step until it ends, the match ends or `max_ticks` is reached
pub fn run_script(script: &Script, max_ticks: Option<u64>, seed: u64) -> Result<RunSummary> {
    let mut game =
        MatchController::with_seed(Config::new(), seed).context("default config rejected")?;
    apply_setup(&mut game, 0, &script.setup.p1)?;
    apply_setup(&mut game, 1, &script.setup.p2)?;

    let limit = max_ticks.unwrap_or(u64::MAX);
    let mut hits = [0u32; 2];

    'segments: for (index, segment) in script.segments.iter().enumerate() {
        tracing::debug!(index, ticks = segment.ticks, "segment");
        let inputs = segment.intents();

        for _ in 0..segment.ticks {
            if game.is_game_over() || game.tick_count() >= limit {
                break 'segments;
            }
            game.tick(inputs, Params::FIXED_DT);

            for event in &game.events().list {
                if let GameEvent::Hit(hit) = event {
                    hits[usize::from(hit.attacker.min(1))] += 1;
                }
            }
        }
    }

    let summary = RunSummary {
        seed: game.seed(),
        ticks: game.tick_count(),
        hits,
        winner: game.winner_name(),
        snapshot: FrameSnapshot::capture(&game),
    };
    tracing::info!(
        ticks = summary.ticks,
        winner = summary.winner.as_deref().unwrap_or("none"),
        "script finished"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::{Action, Segment, Setup};

    fn script(setup: Setup, segments: Vec<Segment>) -> Script {
        Script { setup, segments }
    }

    fn close_quarters(p2_health: Option<f32>) -> Setup {
        Setup {
            p1: FighterSetup {
                x: Some(100.0),
                ..Default::default()
            },
            p2: FighterSetup {
                x: Some(160.0),
                health: p2_health,
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_idle_script_runs_every_tick() {
        let summary = run_script(
            &script(Setup::default(), vec![Segment::new(30, &[], &[])]),
            None,
            7,
        )
        .unwrap();

        assert_eq!(summary.seed, 7);
        assert_eq!(summary.ticks, 30);
        assert_eq!(summary.hits, [0, 0]);
        assert!(summary.winner.is_none());
        assert_eq!(summary.snapshot.fighters[0].health, 100.0);
    }

    #[test]
    fn test_max_ticks_cuts_run_short() {
        let summary = run_script(
            &script(Setup::default(), vec![Segment::new(100, &[Action::Right], &[])]),
            Some(10),
            1,
        )
        .unwrap();
        assert_eq!(summary.ticks, 10);
    }

    #[test]
    fn test_scripted_hit() {
        let summary = run_script(
            &script(
                close_quarters(None),
                vec![Segment::new(20, &[Action::Attack], &[])],
            ),
            None,
            1,
        )
        .unwrap();

        assert_eq!(summary.hits, [1, 0]);
        assert_eq!(summary.snapshot.fighters[1].health, 90.0);
    }

    #[test]
    fn test_stops_on_knockout() {
        let summary = run_script(
            &script(
                close_quarters(Some(10.0)),
                vec![Segment::new(200, &[Action::Attack], &[])],
            ),
            None,
            1,
        )
        .unwrap();

        assert!(summary.ticks < 200);
        assert_eq!(summary.winner.as_deref(), Some("Player One"));
        assert!(summary.snapshot.game_over);
    }

    #[test]
    fn test_setup_is_clamped() {
        let setup = Setup {
            p1: FighterSetup {
                x: Some(5000.0),
                health: Some(250.0),
                energy: Some(-3.0),
            },
            ..Default::default()
        };
        let summary = run_script(&script(setup, vec![Segment::new(1, &[], &[])]), None, 1).unwrap();

        let left = &summary.snapshot.fighters[0];
        assert_eq!(left.body.x, 750.0);
        assert_eq!(left.health, 100.0);
        assert!(left.energy < 1.0);
    }

    #[test]
    fn test_demo_lands_hits() {
        let summary = run_script(&Script::demo(), None, 12345).unwrap();
        assert!(summary.hits[0] > 0);
        assert!(summary.hits[1] > 0);
    }
}
