//! example-a: the four-intersection sample city.
//!
//! Scores a hand-written signal plan, shows where cars wait, then lets the
//! multi-start local search reorder phases and scores the result again.
//!
//! Set `RUST_LOG=ts_sim=debug` to follow every optimizer pass.

mod network;

use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ts_core::SimConfig;
use ts_network::RoadNetwork;
use ts_schedule::SignalSchedule;
use ts_sim::{BlockedTrafficReport, LocalSearch, LocalSearchConfig, RunStats, Sim};

use network::{BONUS, DURATION, build_network, hand_written_schedule};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:          u64      = 42;
const RESTARTS:      usize    = 4;
const TIME_BUDGET:   Duration = Duration::from_secs(5);

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let (mut network, cars) = build_network()?;
    let pruned = network.prune_unused_incoming();
    info!(
        intersections = network.intersection_count(),
        streets = network.street_count(),
        cars = cars.len(),
        pruned,
        "network built"
    );

    let sim = Sim::new(SimConfig::new(DURATION, BONUS), &network, &cars)?;
    let bound = sim.upper_bound();
    println!(
        "upper bound: {} ({} of {} cars can finish in time)",
        bound.score,
        bound.reachable_cars,
        cars.len()
    );

    // ── Hand-written plan ─────────────────────────────────────────────────────

    let mut schedule = hand_written_schedule(&network)?;
    println!("\nhand-written plan:");
    print_schedule(&network, &schedule);
    report(&sim, &network, &schedule)?;

    // ── Local search ──────────────────────────────────────────────────────────

    let config = LocalSearchConfig {
        restarts:    RESTARTS,
        seed:        SEED,
        time_budget: Some(TIME_BUDGET),
        ..LocalSearchConfig::default()
    };
    let t0 = Instant::now();
    let outcome = LocalSearch::new(&sim, config)?.run_multi_start(&mut schedule)?;
    println!(
        "\nlocal search: {} → {} in {} passes ({:.2?}), {} short of the bound",
        outcome.initial_score,
        outcome.best_score,
        outcome.iterations,
        t0.elapsed(),
        bound.gap(outcome.best_score)
    );

    println!("\noptimized plan:");
    print_schedule(&network, &schedule);
    report(&sim, &network, &schedule)?;
    Ok(())
}

fn report(sim: &Sim<'_>, network: &RoadNetwork, schedule: &SignalSchedule) -> Result<()> {
    let mut observers = (RunStats::new(&sim.config), BlockedTrafficReport::new(network.intersection_count()));
    let score = sim.evaluate(schedule, &mut observers)?;
    let (stats, blocked) = observers;

    println!(
        "score {score}: {} on time, {} late, {} crossings, {} blocked car-ticks",
        stats.finished, stats.late, stats.crossings, stats.blocked
    );
    for row in blocked.by_name(network) {
        let streets: Vec<String> = row.streets.iter().map(|(name, n)| format!("{name}×{n}")).collect();
        println!("  {}: {}", row.intersection, streets.join(", "));
    }
    Ok(())
}

fn print_schedule(network: &RoadNetwork, schedule: &SignalSchedule) {
    for (intersection, plan) in schedule.iter().filter(|(_, p)| !p.is_empty()) {
        let phases: Vec<String> = plan
            .phases()
            .iter()
            .map(|p| format!("{}:{}", network.street(p.street).name, p.duration))
            .collect();
        println!("  {intersection} (cycle {}): {}", plan.cycle_ticks(), phases.join(" → "));
    }
}
