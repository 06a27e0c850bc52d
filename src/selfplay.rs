//! Automated matches between strategies.
//!
//! One difficulty stands in for the human and plays through the same
//! validated path a real player uses; the engine's own opponent answers at
//! another difficulty. Useful for comparing the heuristics against each
//! other and for checking that long games keep the state invariants.

use std::io::Write;
use std::sync::Arc;

use rand::rngs::SmallRng;
use rand::seq::IteratorRandom;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::board::{AdjacencyGraph, Difficulty, Side};
use crate::engine::{Engine, TurnError};
use crate::search::search;

/// Configuration for automated match generation.
#[derive(Debug, Clone)]
pub struct SelfPlayConfig {
    /// Number of matches to play.
    pub num_games: usize,
    /// Strategy playing the human side.
    pub human: Difficulty,
    /// Strategy playing the opponent side.
    pub opponent: Difficulty,
    /// Number of worker threads; 1 plays sequentially.
    pub threads: usize,
    /// Random seed (0 = use entropy). Game `i` uses `seed + i`.
    pub seed: u64,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        SelfPlayConfig {
            num_games: 100,
            human: Difficulty::Easy,
            opponent: Difficulty::Hard,
            threads: 4,
            seed: 0,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SelfPlayError {
    #[error("failed to build thread pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),

    #[error("stand-in player made an illegal move: {0}")]
    Turn(#[from] TurnError),
}

/// One move in a recorded match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveRecord {
    pub side: Side,
    pub country: String,
}

/// A complete match record.
#[derive(Debug, Clone, Serialize)]
pub struct GameRecord {
    pub game_id: usize,
    pub human: Difficulty,
    pub opponent: Difficulty,
    /// The stand-in human's first country.
    pub opening: Option<String>,
    pub moves: Vec<MoveRecord>,
    pub human_won: bool,
}

/// Aggregate results over a batch of matches.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub games: usize,
    pub human_wins: usize,
    pub opponent_wins: usize,
    pub mean_length: f64,
    pub longest: usize,
}

fn game_rng(seed: u64, game_id: usize) -> SmallRng {
    if seed != 0 {
        SmallRng::seed_from_u64(seed.wrapping_add(game_id as u64))
    } else {
        SmallRng::from_entropy()
    }
}

/// Plays one match to completion.
///
/// The stand-in human opens with a uniformly random country, then picks
/// moves with `config.human`'s strategy.
pub fn play_game(
    graph: &Arc<AdjacencyGraph>,
    config: &SelfPlayConfig,
    game_id: usize,
) -> Result<GameRecord, TurnError> {
    let mut rng = game_rng(config.seed, game_id);
    // Mixes the game seed into an odd engine seed, distinct from the
    // stand-in's own seed.
    let engine_seed = if config.seed != 0 {
        let game_seed = config.seed.wrapping_add(game_id as u64);
        game_seed.wrapping_mul(0x9E37_79B9_7F4A_7C15) | 1
    } else {
        rand::random()
    };
    let mut engine = Engine::with_seed(Arc::clone(graph), engine_seed);
    engine.start(config.opponent);

    while let Some(side) = engine.state().to_move() {
        match side {
            Side::Human => {
                let state = engine.state();
                let choice = if state.current.is_none() {
                    graph.countries().choose(&mut rng).map(str::to_string)
                } else {
                    search(graph, state, config.human, &mut rng).choice
                };
                match choice {
                    Some(country) => {
                        engine.submit_human_move(&country)?;
                    }
                    // The engine ends the match before the human runs out
                    // of moves, so this only happens on an empty map.
                    None => break,
                }
            }
            Side::Opponent => {
                engine.compute_and_apply_opponent_move();
            }
        }
    }

    let state = engine.state();
    let record = GameRecord {
        game_id,
        human: config.human,
        opponent: config.opponent,
        opening: state.human_history.first().cloned(),
        moves: state
            .move_sequence()
            .into_iter()
            .map(|(side, country)| MoveRecord {
                side,
                country: country.to_string(),
            })
            .collect(),
        human_won: state.human_won.unwrap_or(false),
    };
    debug!(
        game_id,
        opening = record.opening.as_deref().unwrap_or("-"),
        length = record.moves.len(),
        human_won = record.human_won,
        "match finished"
    );
    Ok(record)
}

/// Plays `config.num_games` matches and returns them ordered by game id.
///
/// When `config.threads > 1`, matches run concurrently using rayon.
pub fn run_self_play(
    graph: &Arc<AdjacencyGraph>,
    config: &SelfPlayConfig,
) -> Result<Vec<GameRecord>, SelfPlayError> {
    if config.threads <= 1 {
        let games = (0..config.num_games)
            .map(|i| play_game(graph, config, i))
            .collect::<Result<Vec<_>, _>>()?;
        return Ok(games);
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()?;
    let mut games = pool.install(|| {
        (0..config.num_games)
            .into_par_iter()
            .map(|i| play_game(graph, config, i))
            .collect::<Result<Vec<_>, _>>()
    })?;
    games.sort_by_key(|g| g.game_id);
    Ok(games)
}

/// Writes game records as JSONL (one JSON object per game, one per line).
pub fn write_jsonl<W: Write>(games: &[GameRecord], out: &mut W) -> std::io::Result<()> {
    for game in games {
        serde_json::to_writer(&mut *out, game)?;
        writeln!(out)?;
    }
    out.flush()
}

/// Summarizes a batch of matches.
pub fn summarize(games: &[GameRecord]) -> Summary {
    let human_wins = games.iter().filter(|g| g.human_won).count();
    let total_moves: usize = games.iter().map(|g| g.moves.len()).sum();
    Summary {
        games: games.len(),
        human_wins,
        opponent_wins: games.len() - human_wins,
        mean_length: if games.is_empty() {
            0.0
        } else {
            total_moves as f64 / games.len() as f64
        },
        longest: games.iter().map(|g| g.moves.len()).max().unwrap_or(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::ALL_DIFFICULTIES;
    use std::collections::HashSet;

    fn config(games: usize, threads: usize) -> SelfPlayConfig {
        SelfPlayConfig {
            num_games: games,
            threads,
            seed: 12345,
            ..SelfPlayConfig::default()
        }
    }

    fn assert_consistent(game: &GameRecord, graph: &AdjacencyGraph) {
        let mut seen = HashSet::new();
        for (i, m) in game.moves.iter().enumerate() {
            let expected = if i % 2 == 0 {
                Side::Human
            } else {
                Side::Opponent
            };
            assert_eq!(
                m.side, expected,
                "game {} move {} out of turn",
                game.game_id, i
            );
            assert!(seen.insert(m.country.clone()), "{} played twice", m.country);
            if i > 0 {
                assert!(graph.is_adjacent(&game.moves[i - 1].country, &m.country));
            }
        }
        // Whoever moved last won.
        let last = game.moves.last().unwrap();
        assert_eq!(game.human_won, last.side == Side::Human);
    }

    #[test]
    fn play_single_game_completes() {
        let graph = AdjacencyGraph::world();
        let game = play_game(&graph, &config(1, 1), 0).unwrap();
        assert!(!game.moves.is_empty());
        assert_eq!(game.opening.as_ref(), Some(&game.moves[0].country));
        assert_consistent(&game, &graph);
    }

    #[test]
    fn every_pairing_produces_legal_games() {
        let graph = AdjacencyGraph::world();
        for human in ALL_DIFFICULTIES {
            for opponent in ALL_DIFFICULTIES {
                let cfg = SelfPlayConfig {
                    human,
                    opponent,
                    ..config(20, 1)
                };
                for game in run_self_play(&graph, &cfg).unwrap() {
                    assert_eq!(game.human, human);
                    assert_eq!(game.opponent, opponent);
                    assert_consistent(&game, &graph);
                }
            }
        }
    }

    #[test]
    fn sequential_run_produces_correct_count() {
        let graph = AdjacencyGraph::world();
        let games = run_self_play(&graph, &config(5, 1)).unwrap();
        assert_eq!(games.len(), 5);
        let ids: Vec<usize> = games.iter().map(|g| g.game_id).collect();
        assert_eq!(ids, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn parallel_run_matches_sequential() {
        let graph = AdjacencyGraph::world();
        let sequential = run_self_play(&graph, &config(8, 1)).unwrap();
        let parallel = run_self_play(&graph, &config(8, 3)).unwrap();
        assert_eq!(parallel.len(), 8);
        for (a, b) in sequential.iter().zip(&parallel) {
            assert_eq!(a.game_id, b.game_id);
            assert_eq!(a.moves, b.moves);
            assert_eq!(a.human_won, b.human_won);
        }
    }

    #[test]
    fn jsonl_output_is_valid() {
        let graph = AdjacencyGraph::world();
        let games = run_self_play(&graph, &config(3, 1)).unwrap();
        let mut out = Vec::new();
        write_jsonl(&games, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        for (line, game) in lines.iter().zip(&games) {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert_eq!(value["game_id"], game.game_id);
            assert_eq!(value["human"], "easy");
            assert_eq!(value["opponent"], "hard");
            assert_eq!(value["moves"][0]["side"], "human");
            assert_eq!(value["opening"], value["moves"][0]["country"]);
            assert_eq!(value["human_won"], game.human_won);
        }
    }

    #[test]
    fn summary_counts() {
        let make = |id, len: usize, human_won| GameRecord {
            game_id: id,
            human: Difficulty::Easy,
            opponent: Difficulty::Hard,
            opening: Some("C0".to_string()),
            moves: (0..len)
                .map(|i| MoveRecord {
                    side: if i % 2 == 0 {
                        Side::Human
                    } else {
                        Side::Opponent
                    },
                    country: format!("C{}", i),
                })
                .collect(),
            human_won,
        };
        let games = vec![make(0, 3, true), make(1, 4, false), make(2, 2, false)];
        let summary = summarize(&games);
        assert_eq!(summary.games, 3);
        assert_eq!(summary.human_wins, 1);
        assert_eq!(summary.opponent_wins, 2);
        assert_eq!(summary.mean_length, 3.0);
        assert_eq!(summary.longest, 4);

        assert_eq!(summarize(&[]).mean_length, 0.0);
    }
}
