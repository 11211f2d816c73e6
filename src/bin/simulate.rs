//! Fight balance simulator CLI.
//!
//! Runs scripted fishing attempts to analyze fight balance.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                      # Default: 1000 easy runs
//!   cargo run --bin simulate -- -d hard -b 3      # Hard fights, best bait
//!   cargo run --bin simulate -- --seed 42         # Reproducible run

use hookline::core::rods::all_rods;
use hookline::fishing::types::Difficulty;
use hookline::simulator::{run_simulation, SimConfig};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              HOOKLINE BALANCE SIMULATOR                       ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Difficulty:     {}", config.difficulty);
    println!("  Bait strength:  {}", config.bait_strength);
    println!("  Rod:            {}", config.rod.name);
    println!(
        "  Bot:            flick every {:.1}s, crank {:.0} deg/s",
        config.flick_interval_secs, config.crank_speed_deg_per_sec
    );
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);

    println!("{}", report.to_text());
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(1000);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-d" | "--difficulty" => {
                if i + 1 < args.len() {
                    config.difficulty = match args[i + 1].as_str() {
                        "medium" => Difficulty::Medium,
                        "hard" => Difficulty::Hard,
                        _ => Difficulty::Easy,
                    };
                    i += 1;
                }
            }
            "-b" | "--bait" => {
                if i + 1 < args.len() {
                    config.bait_strength = args[i + 1].parse::<u8>().unwrap_or(0).min(3);
                    i += 1;
                }
            }
            "-r" | "--rod" => {
                if i + 1 < args.len() {
                    let index: usize = args[i + 1].parse().unwrap_or(0);
                    let rods = all_rods();
                    config.rod = rods[index.min(rods.len() - 1)];
                    i += 1;
                }
            }
            "--flick" => {
                if i + 1 < args.len() {
                    config.flick_interval_secs = args[i + 1].parse().unwrap_or(1.1);
                    i += 1;
                }
            }
            "--crank" => {
                if i + 1 < args.len() {
                    config.crank_speed_deg_per_sec = args[i + 1].parse().unwrap_or(240.0);
                    i += 1;
                }
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn print_help() {
    println!("Hookline Balance Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>        Number of simulated attempts (default: 1000)");
    println!("    -s, --seed <S>        Random seed for reproducibility");
    println!("    -d, --difficulty <D>  easy | medium | hard (default: easy)");
    println!("    -b, --bait <0-3>      Bait strength (default: 0)");
    println!("    -r, --rod <0-2>       Rod index, basic to master (default: 0)");
    println!("    --flick <SECS>        Bot flick interval (default: 1.1)");
    println!("    --crank <DEG/S>       Bot crank speed (default: 240)");
    println!("    -h, --help            Show this help");
    println!();
    println!("EXAMPLES:");
    println!("    cargo run --bin simulate                      # Default run");
    println!("    cargo run --bin simulate -- -d hard -b 3      # Hard with best bait");
    println!("    cargo run --bin simulate -- --flick 3.0       # A sluggish player");
    println!("    cargo run --bin simulate -- --seed 42         # Reproducible");
}
