//! Opponent move selection.
//!
//! Three strengths: uniform random (easy), take an immediate win when one
//! exists (medium), and a one-reply lookahead that starves the other side
//! of options (hard). None of them searches the full game tree.

pub mod greedy;
pub mod lookahead;

use rand::Rng;
use tracing::debug;

use crate::board::{AdjacencyGraph, Difficulty, GameState};
use crate::movegen::random_move;

/// What settled the choice of move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// No legal move exists.
    NoMove,
    /// Uniform random pick from the legal moves.
    Random,
    /// The move leaves the other side with no reply.
    DeadEnd,
    /// Fewest replies among moves with no winning reply.
    FewestReplies,
    /// Every move allows a winning reply; fewest borders overall.
    FewestBorders,
    /// Uniform random pick among moves tied on every criterion.
    TieBreak,
}

/// Result of a search: the chosen country, if any, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub choice: Option<String>,
    pub decided_by: Decision,
}

impl SearchResult {
    pub(crate) fn none() -> Self {
        SearchResult {
            choice: None,
            decided_by: Decision::NoMove,
        }
    }

    pub(crate) fn new(choice: &str, decided_by: Decision) -> Self {
        SearchResult {
            choice: Some(choice.to_string()),
            decided_by,
        }
    }
}

/// Picks a move at `difficulty` for whoever plays next in `state`.
pub fn search(
    graph: &AdjacencyGraph,
    state: &GameState,
    difficulty: Difficulty,
    rng: &mut impl Rng,
) -> SearchResult {
    let result = match difficulty {
        Difficulty::Easy => match random_move(graph, state, rng) {
            Some(c) => SearchResult::new(&c, Decision::Random),
            None => SearchResult::none(),
        },
        Difficulty::Medium => greedy::search(graph, state, rng),
        Difficulty::Hard => lookahead::search(graph, state, rng),
    };

    debug!(
        %difficulty,
        current = state.current.as_deref().unwrap_or("-"),
        choice = result.choice.as_deref().unwrap_or("-"),
        decided_by = ?result.decided_by,
        "move selected"
    );
    result
}

/// Picks the opponent's move using the match's own difficulty.
pub fn choose_move(
    graph: &AdjacencyGraph,
    state: &GameState,
    rng: &mut impl Rng,
) -> Option<String> {
    search(graph, state, state.difficulty, rng).choice
}
