//! Headless batch runner
//!
//! Drives the engine for a fixed number of turns and prints a JSON summary.
//! The interactive menu layer lives outside this crate; this binary exists
//! for tuning and reproducibility checks.

use ahash::AHashMap;
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use ecosim::core::types::Species;
use ecosim::ecosystem::events::TurnEvent;
use ecosim::ecosystem::resources::ResourceLevels;
use ecosim::simulation::SimulationEngine;

#[derive(Parser, Debug)]
#[command(name = "ecosim-run", about = "Run the ecosystem simulation headless")]
struct Args {
    /// RNG seed for a reproducible run
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of turns to simulate
    #[arg(long, default_value_t = 50)]
    turns: u64,

    /// Write the JSON summary to this file instead of stdout
    #[arg(long)]
    output: Option<std::path::PathBuf>,
}

#[derive(Serialize)]
struct RunSummary {
    seed: u64,
    turns: u64,
    healthy_turns: u64,
    final_counts: AHashMap<Species, usize>,
    final_resources: ResourceLevels,
    healthy: bool,
    hunts: usize,
    births: usize,
    deaths: usize,
    environmental_events: usize,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let mut engine = SimulationEngine::default_scenario(args.seed);

    let mut healthy_turns = 0u64;
    let mut hunts = 0usize;
    let mut births = 0usize;
    let mut deaths = 0usize;
    let mut environmental_events = 0usize;

    for _ in 0..args.turns {
        for event in engine.advance_turn() {
            match event {
                TurnEvent::Hunted { .. } => hunts += 1,
                TurnEvent::Born { .. } => births += 1,
                TurnEvent::Died { .. } => deaths += 1,
                TurnEvent::Environment(env) => {
                    tracing::info!(turn = engine.turn(), event = ?env, "environmental event");
                    environmental_events += 1;
                }
            }
        }
        if engine.is_healthy() {
            healthy_turns += 1;
        }
        if engine.total_population() == 0 {
            tracing::warn!(turn = engine.turn(), "ecosystem collapsed, continuing");
        }
    }

    let summary = RunSummary {
        seed: args.seed,
        turns: engine.turn(),
        healthy_turns,
        final_counts: engine.counts_by_species(),
        final_resources: engine.resource_levels(),
        healthy: engine.is_healthy(),
        hunts,
        births,
        deaths,
        environmental_events,
    };

    let json = serde_json::to_string_pretty(&summary).expect("summary serializes");
    match args.output {
        Some(path) => {
            std::fs::write(&path, &json).expect("failed to write summary");
            println!("Summary written to {}", path.display());
        }
        None => println!("{}", json),
    }
}
