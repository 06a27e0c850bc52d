//! Legal move generation.
//!
//! Answers which countries may be played next, validates proposed moves,
//! and offers prefix completion for move entry.

pub mod suggest;
pub mod validate;

pub use suggest::suggest;
pub use validate::{validate, MoveRejection};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{AdjacencyGraph, GameState};

/// Returns the borders of `country` that are not in `used`, in table order.
/// Unknown countries have no legal moves, and a border naming a country the
/// graph has no entry for is never a legal target.
pub fn legal_moves_from(graph: &AdjacencyGraph, country: &str, used: &[String]) -> Vec<String> {
    graph
        .neighbors_of(country)
        .iter()
        .filter(|n| graph.contains(n) && !used.contains(*n))
        .cloned()
        .collect()
}

/// Returns the moves available to whoever plays next.
///
/// Before the first move every unused country in the graph is legal;
/// afterwards only unused borders of the current country.
pub fn legal_moves(graph: &AdjacencyGraph, state: &GameState) -> Vec<String> {
    match &state.current {
        Some(current) => legal_moves_from(graph, current, &state.used_countries),
        None => graph
            .countries()
            .filter(|c| !state.is_used(c))
            .map(str::to_string)
            .collect(),
    }
}

/// Picks a uniformly random legal move, or `None` if there is none.
pub fn random_move(
    graph: &AdjacencyGraph,
    state: &GameState,
    rng: &mut impl Rng,
) -> Option<String> {
    legal_moves(graph, state).choose(rng).cloned()
}
