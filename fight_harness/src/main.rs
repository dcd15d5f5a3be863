//! Headless fight runner: replays a JSON input script through the
//! simulation and prints the result.
//!
//! Usage:
//!   cargo run -p fight_harness -- run --script duel.json
//!   RUST_LOG=fight_core=debug cargo run -p fight_harness -- demo

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fight_harness::runner::{run_script, RunSummary};
use fight_harness::script::Script;

#[derive(Parser, Debug)]
#[command(name = "fight-harness")]
#[command(about = "Replay scripted inputs against the deterministic fight simulation")]
struct Cli {
    /// Seed for super-mode spark placement
    #[arg(long, default_value_t = 12345)]
    seed: u64,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Replay a script file
    Run {
        #[arg(long)]
        script: PathBuf,
        #[arg(long)]
        max_ticks: Option<u64>,
        /// Print the final frame snapshot as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Replay the built-in scripted duel
    Demo {
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn print_summary(summary: &RunSummary, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&summary.snapshot)?);
        return Ok(());
    }

    println!("seed={}", summary.seed);
    println!("ticks={}", summary.ticks);
    println!("winner={}", summary.winner.as_deref().unwrap_or("none"));
    for (fighter, hits) in summary.snapshot.fighters.iter().zip(summary.hits) {
        println!(
            "p{}={} health={:.0}/{:.0} energy={:.1}/{:.0} hits={}",
            fighter.slot + 1,
            fighter.name,
            fighter.health,
            fighter.max_health,
            fighter.energy,
            fighter.max_energy,
            hits
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .init();

    let Cli { seed, command } = Cli::parse();

    match command {
        Commands::Run {
            script,
            max_ticks,
            json,
        } => {
            let script = Script::from_path(&script)?;
            let summary = run_script(&script, max_ticks, seed)?;
            print_summary(&summary, json)?;
        }
        Commands::Demo { json } => {
            let summary = run_script(&Script::demo(), None, seed)?;
            print_summary(&summary, json)?;
        }
    }

    Ok(())
}
