//! Medium strength: take an immediate win, otherwise play randomly.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{AdjacencyGraph, GameState};
use crate::eval::is_dead_end;
use crate::movegen::legal_moves;

use super::{Decision, SearchResult};

/// Returns the first legal move, in table order, that leaves no reply.
/// Falls back to a uniform random legal move.
pub fn search(graph: &AdjacencyGraph, state: &GameState, rng: &mut impl Rng) -> SearchResult {
    let legal = legal_moves(graph, state);

    if let Some(win) = legal
        .iter()
        .find(|c| is_dead_end(graph, &state.used_countries, c))
    {
        return SearchResult::new(win, Decision::DeadEnd);
    }

    match legal.choose(rng) {
        Some(c) => SearchResult::new(c, Decision::Random),
        None => SearchResult::none(),
    }
}
