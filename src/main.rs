mod card;
mod game;
mod rng;
mod simulation;

use chrono::Local;
use clap::{Parser, Subcommand};
use indicatif::ProgressBar;
use rayon::prelude::*;
use simulation::engine::{
    run_duel, DuelResult, DEFAULT_MAX_TURNS, FIRST_PLAYER_NAME, SECOND_PLAYER_NAME,
};
use std::collections::HashMap;

#[derive(Parser)]
#[command(name = "mtg-duel")]
#[command(about = "Two-player MTG-style duel simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for random number generator (for reproducibility)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Replay the first duel action by action
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a batch of duels (default)
    Run {
        /// Number of duels to simulate
        #[arg(short, long, default_value = "1000")]
        num_duels: usize,

        /// Seed for reproducibility
        #[arg(short, long)]
        seed: Option<u64>,

        /// Replay the first duel action by action
        #[arg(short, long)]
        verbose: bool,

        /// Turn cap before a duel is scored as a draw
        #[arg(short, long, default_value = "50")]
        max_turns: u32,

        /// Print every duel result as JSON instead of the summary
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run {
            num_duels,
            seed,
            verbose,
            max_turns,
            json,
        }) => {
            run_duels(num_duels, seed, verbose, max_turns, json);
        }
        None => {
            let num_duels = if cli.verbose { 1 } else { 1000 };
            run_duels(num_duels, cli.seed, cli.verbose, DEFAULT_MAX_TURNS, false);
        }
    }
}

fn run_one(seed: u64, max_turns: u32, verbose: bool) -> DuelResult {
    match run_duel(seed, max_turns, verbose) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("✗ Failed to set up duel: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_duels(num_duels: usize, seed: Option<u64>, verbose: bool, max_turns: u32, json: bool) {
    if !json {
        println!("\n=== MTG Duel Simulator ===\n");
        println!("Started: {}", Local::now().format("%Y-%m-%d %H:%M:%S"));
        println!("Duels: {}", num_duels);
        if let Some(s) = seed {
            println!("Seed: {}", s);
        }
        println!();
    }

    let start = std::time::Instant::now();
    let results: Vec<DuelResult> = if let Some(base_seed) = seed {
        // Sequential with fixed seed
        (0..num_duels)
            .map(|i| run_one(base_seed + i as u64, max_turns, verbose && i == 0))
            .collect()
    } else if verbose {
        // Sequential for verbose mode (verbose only makes sense for the first duel)
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos() as u64;
        println!("Seed: {}", seed);
        (0..num_duels)
            .map(|i| run_one(seed.wrapping_add(i as u64), max_turns, i == 0))
            .collect()
    } else {
        // Parallel with random seeds
        let bar = ProgressBar::new(num_duels as u64);
        let results = (0..num_duels)
            .into_par_iter()
            .map(|i| {
                let seed = (std::time::SystemTime::now()
                    .duration_since(std::time::UNIX_EPOCH)
                    .unwrap()
                    .as_nanos() as u64)
                    .wrapping_add(i as u64);
                let result = run_one(seed, max_turns, false);
                bar.inc(1);
                result
            })
            .collect();
        bar.finish_and_clear();
        results
    };
    let elapsed = start.elapsed();

    if json {
        match serde_json::to_string_pretty(&results) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                eprintln!("✗ Failed to serialize results: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    print_summary(&results, num_duels, elapsed);
}

fn print_summary(results: &[DuelResult], num_duels: usize, elapsed: std::time::Duration) {
    let first_wins = results
        .iter()
        .filter(|r| r.winner.as_deref() == Some(FIRST_PLAYER_NAME))
        .count();
    let second_wins = results
        .iter()
        .filter(|r| r.winner.as_deref() == Some(SECOND_PLAYER_NAME))
        .count();
    let draws = results.iter().filter(|r| r.winner.is_none()).count();

    let decided: Vec<_> = results.iter().filter(|r| r.winner.is_some()).collect();
    let avg_turns = if !decided.is_empty() {
        decided.iter().map(|r| r.turns as f64).sum::<f64>() / decided.len() as f64
    } else {
        0.0
    };

    println!("=== Results ===\n");
    println!(
        "{} wins: {:.1}% ({}/{})",
        FIRST_PLAYER_NAME,
        first_wins as f64 / num_duels as f64 * 100.0,
        first_wins,
        num_duels
    );
    println!(
        "{} wins: {:.1}% ({}/{})",
        SECOND_PLAYER_NAME,
        second_wins as f64 / num_duels as f64 * 100.0,
        second_wins,
        num_duels
    );
    println!(
        "Draws: {:.1}% ({}/{})",
        draws as f64 / num_duels as f64 * 100.0,
        draws,
        num_duels
    );
    println!("Average duel length: {:.2} turns", avg_turns);
    println!();

    // Turn distribution of the decided duels
    let mut turn_dist: HashMap<u32, usize> = HashMap::new();
    for r in &decided {
        *turn_dist.entry(r.turns).or_insert(0) += 1;
    }
    println!("Turn distribution:");
    let mut turns: Vec<_> = turn_dist.iter().collect();
    turns.sort_by_key(|(t, _)| *t);
    for (turn, count) in turns {
        let pct = *count as f64 / num_duels as f64 * 100.0;
        let bar = "█".repeat((pct / 2.0) as usize);
        println!("  Turn {:2}: {:5.1}% {} ({})", turn, pct, bar, count);
    }
    if draws > 0 {
        let pct = draws as f64 / num_duels as f64 * 100.0;
        println!("  No win: {:5.1}% ({})", pct, draws);
    }

    println!();
    println!(
        "Simulation completed in {:.2?} ({:.0} duels/sec)",
        elapsed,
        num_duels as f64 / elapsed.as_secs_f64()
    );
}
