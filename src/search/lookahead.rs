//! Hard strength: one-reply lookahead.
//!
//! 1. Play a dead end if one exists (first in table order).
//! 2. Otherwise prefer moves that leave no winning reply, ranked by fewest
//!    replies then fewest borders.
//! 3. If every move leaves a winning reply, rank all of them by fewest
//!    borders.
//!
//! Moves still tied after ranking are picked uniformly at random. The check
//! in step 2 looks exactly one reply deep and can misjudge longer forced
//! sequences.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{AdjacencyGraph, GameState};
use crate::eval::{features, MoveFeatures};
use crate::movegen::legal_moves;

use super::{Decision, SearchResult};

pub fn search(graph: &AdjacencyGraph, state: &GameState, rng: &mut impl Rng) -> SearchResult {
    let candidates: Vec<MoveFeatures> = legal_moves(graph, state)
        .iter()
        .map(|c| features(graph, &state.used_countries, c))
        .collect();

    if candidates.is_empty() {
        return SearchResult::none();
    }

    if let Some(win) = candidates.iter().find(|f| f.is_dead_end()) {
        return SearchResult::new(&win.country, Decision::DeadEnd);
    }

    let safe: Vec<&MoveFeatures> = candidates.iter().filter(|f| !f.reply_can_win).collect();
    let (best, decided_by) = if safe.is_empty() {
        let all: Vec<&MoveFeatures> = candidates.iter().collect();
        (
            minimal_by_key(&all, |f| (f.branching, 0)),
            Decision::FewestBorders,
        )
    } else {
        (
            minimal_by_key(&safe, |f| (f.reply_count, f.branching)),
            Decision::FewestReplies,
        )
    };

    match best.as_slice() {
        [only] => SearchResult::new(&only.country, decided_by),
        tied => match tied.choose(rng) {
            Some(f) => SearchResult::new(&f.country, Decision::TieBreak),
            None => SearchResult::none(),
        },
    }
}

/// Returns every candidate sharing the smallest key, in input order.
fn minimal_by_key<'a>(
    candidates: &[&'a MoveFeatures],
    key: impl Fn(&MoveFeatures) -> (usize, usize),
) -> Vec<&'a MoveFeatures> {
    let Some(min) = candidates.iter().map(|f| key(*f)).min() else {
        return Vec::new();
    };
    candidates
        .iter()
        .filter(|f| key(**f) == min)
        .copied()
        .collect()
}
