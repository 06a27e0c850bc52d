//! Automated match CLI.
//!
//! Pits one strategy, standing in for the human, against the engine's
//! opponent and writes every match as JSONL.
//!
//! Usage:
//!   cargo run --release --bin selfplay -- [OPTIONS]
//!
//! Options:
//!   --games N        Number of matches to play (default: 100)
//!   --human D        Stand-in human strategy: easy|medium|hard (default: easy)
//!   --opponent D     Opponent difficulty: easy|medium|hard (default: hard)
//!   --threads N      Number of parallel threads (default: 4)
//!   --seed N         Random seed, 0 for entropy (default: 0)
//!   --map FILE       Play on a JSON map instead of the built-in one
//!   --output FILE    Output file path (default: stdout)
//!   --quiet          Suppress summary output

use std::env;
use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::sync::Arc;
use std::time::Instant;

use borderchain::board::AdjacencyGraph;
use borderchain::init_logging;
use borderchain::selfplay::{self, SelfPlayConfig};
use tracing::{error, info, warn};

fn main() {
    init_logging("info");

    let args: Vec<String> = env::args().collect();
    let mut config = SelfPlayConfig::default();
    let mut map_path: Option<String> = None;
    let mut output_path: Option<String> = None;
    let mut quiet = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--games" => {
                i += 1;
                config.num_games = value(&args, i).parse().expect("invalid --games value");
            }
            "--human" => {
                i += 1;
                config.human = value(&args, i).parse().expect("invalid --human value");
            }
            "--opponent" => {
                i += 1;
                config.opponent = value(&args, i).parse().expect("invalid --opponent value");
            }
            "--threads" => {
                i += 1;
                config.threads = value(&args, i).parse().expect("invalid --threads value");
            }
            "--seed" => {
                i += 1;
                config.seed = value(&args, i).parse().expect("invalid --seed value");
            }
            "--map" => {
                i += 1;
                map_path = Some(value(&args, i).to_string());
            }
            "--output" => {
                i += 1;
                output_path = Some(value(&args, i).to_string());
            }
            "--quiet" => {
                quiet = true;
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let graph = match map_path {
        Some(path) => {
            let json = fs::read_to_string(&path).expect("failed to read map file");
            let graph = AdjacencyGraph::from_json(&json).expect("failed to parse map file");
            for (a, b) in graph.asymmetric_pairs() {
                warn!(%a, %b, "one-way border in map");
            }
            Arc::new(graph)
        }
        None => AdjacencyGraph::world(),
    };

    if !quiet {
        info!(
            games = config.num_games,
            human = %config.human,
            opponent = %config.opponent,
            threads = config.threads,
            seed = config.seed,
            countries = graph.len(),
            "starting self-play"
        );
    }

    let start = Instant::now();
    let games = match selfplay::run_self_play(&graph, &config) {
        Ok(games) => games,
        Err(e) => {
            error!("self-play failed: {}", e);
            std::process::exit(1);
        }
    };
    let elapsed = start.elapsed();

    let written = match output_path {
        Some(ref path) => {
            let file = File::create(path).expect("failed to create output file");
            let mut writer = BufWriter::new(file);
            selfplay::write_jsonl(&games, &mut writer)
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            selfplay::write_jsonl(&games, &mut writer)
        }
    };
    if let Err(e) = written {
        error!("failed to write games: {}", e);
        std::process::exit(1);
    }

    if !quiet {
        let summary = selfplay::summarize(&games);
        eprintln!("=== Self-Play Summary ===");
        eprintln!("Games:         {}", summary.games);
        eprintln!(
            "Matchup:       {} (human) vs {} (opponent)",
            config.human, config.opponent
        );
        if summary.games > 0 {
            let pct = |n: usize| 100.0 * n as f64 / summary.games as f64;
            eprintln!(
                "Human wins:    {} ({:.1}%)",
                summary.human_wins,
                pct(summary.human_wins)
            );
            eprintln!(
                "Opponent wins: {} ({:.1}%)",
                summary.opponent_wins,
                pct(summary.opponent_wins)
            );
            eprintln!("Mean length:   {:.1} moves", summary.mean_length);
            eprintln!("Longest:       {} moves", summary.longest);
        }
        eprintln!("Time:          {:.2}s", elapsed.as_secs_f64());
    }
}

fn value(args: &[String], i: usize) -> &str {
    match args.get(i) {
        Some(v) => v,
        None => {
            eprintln!("Missing value for {}", args[i - 1]);
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!("Usage: selfplay [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --games N        Number of matches to play (default: 100)");
    eprintln!("  --human D        Stand-in human strategy: easy|medium|hard (default: easy)");
    eprintln!("  --opponent D     Opponent difficulty: easy|medium|hard (default: hard)");
    eprintln!("  --threads N      Number of parallel threads (default: 4)");
    eprintln!("  --seed N         Random seed, 0 for entropy (default: 0)");
    eprintln!("  --map FILE       Play on a JSON map instead of the built-in one");
    eprintln!("  --output FILE    Output file path (default: stdout)");
    eprintln!("  --quiet          Suppress summary output");
}
