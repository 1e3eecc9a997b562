//! grid — optimal single-stop pit lap for a three-car field.
//!
//! ```bash
//! # Built-in field, 50 laps
//! grid
//!
//! # Custom entry list, only the first two drivers
//! grid --entries field.csv --laps 30 --driver 0 --driver 1
//! ```

use std::io::Cursor;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pit_core::{DriverId, TrackId, TrackProfile};
use pit_scenario::{ScenarioBuilder, load_entries_csv, load_entries_reader};
use pit_strategy::{SearchConfig, StrategyAnalyzer};

// ── Built-in field ────────────────────────────────────────────────────────────

const GRID_CSV: &str = "\
driver,aggression,consistency,tire_management,risk_tolerance,car,engine_power,aero_efficiency,cooling_efficiency,reliability\n\
Max Verstappen,0.85,0.90,0.80,0.90,Red Bull,0.95,0.98,0.88,0.92\n\
Lewis Hamilton,0.65,0.95,0.95,0.60,Mercedes,0.90,0.95,0.95,0.98\n\
Charles Leclerc,0.90,0.75,0.70,0.85,Ferrari,0.98,0.92,0.80,0.85\n";

fn default_track() -> TrackProfile {
    TrackProfile {
        track_id:               TrackId(1),
        sectors:                3,
        lap_length_km:          10.0,
        tire_wear_factor:       10.0,
        overtaking_difficulty:  0.1,
        safety_car_probability: 0.01,
    }
}

// ── CLI ───────────────────────────────────────────────────────────────────────

/// Find the fastest single-stop pit lap for each driver.
///
/// Every candidate lap is scored by a full deterministic race simulation.
#[derive(Parser, Debug)]
#[command(name = "grid")]
#[command(version, about, long_about = None)]
struct Args {
    /// Entry list CSV.  Uses the built-in three-car field when omitted.
    #[arg(short = 'e', long)]
    entries: Option<PathBuf>,

    /// Race distance in laps
    #[arg(short = 'l', long, default_value = "50")]
    laps: u32,

    /// Driver ids to analyse (repeatable).  Defaults to the whole field.
    #[arg(short = 'd', long = "driver")]
    drivers: Vec<u32>,

    /// Search worker threads.  Defaults to Rayon's global pool.
    #[arg(short = 't', long)]
    threads: Option<usize>,
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,pit_strategy=info")),
        )
        .init();

    let args = Args::parse();

    let entries = match &args.entries {
        Some(path) => load_entries_csv(path)
            .with_context(|| format!("loading entries from {}", path.display()))?,
        None => load_entries_reader(Cursor::new(GRID_CSV))?,
    };
    let scenario = ScenarioBuilder::new(default_track(), args.laps)
        .entries(entries)
        .build()
        .context("building scenario")?;

    let drivers: Vec<DriverId> = if args.drivers.is_empty() {
        scenario.driver_ids().collect()
    } else {
        args.drivers.iter().copied().map(DriverId).collect()
    };

    println!("=== grid — pit strategy search ===");
    println!(
        "Entries: {}  |  Laps: {}  |  Track: {}",
        scenario.entry_count(),
        scenario.total_laps(),
        scenario.track().track_id.0,
    );
    println!();

    let config = SearchConfig { num_threads: args.threads };
    let analyzer = StrategyAnalyzer::with_config(&scenario, &config)?;

    let start = Instant::now();
    let results = analyzer.analyze_strategies(&drivers)?;
    let elapsed = start.elapsed();
    info!(drivers = drivers.len(), elapsed_ms = elapsed.as_millis() as u64, "search complete");

    println!(
        "{:<20} {:>8} {:>12} {:>12} {:>9}",
        "Driver", "Pit lap", "Time (s)", "No stop (s)", "Gain (s)"
    );
    println!("{}", "-".repeat(65));
    for result in &results {
        let name = &scenario.entry(result.driver)?.driver.name;
        let no_stop = analyzer.no_stop_time(result.driver)?;
        println!(
            "{:<20} {:>8} {:>12.3} {:>12.3} {:>9.3}",
            name,
            result.pit_lap,
            result.total_time_secs,
            no_stop,
            no_stop - result.total_time_secs,
        );
    }
    println!();
    println!("Search complete in {:.3} s", elapsed.as_secs_f64());

    Ok(())
}
